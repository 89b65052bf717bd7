use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Lap, Phase};

/// Every timer state change produces an Event.
/// The CLI prints them; drivers use them to decide when to persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    PomodoroStarted {
        phase: Phase,
        time_left_secs: u64,
        at: DateTime<Utc>,
    },
    PomodoroPaused {
        phase: Phase,
        time_left_secs: u64,
        at: DateTime<Utc>,
    },
    PomodoroReset {
        time_left_secs: u64,
        at: DateTime<Utc>,
    },
    /// A phase ran out; the timer stopped and is parked on the next phase.
    PhaseCompleted {
        from: Phase,
        to: Phase,
        completed_sessions: u32,
        at: DateTime<Utc>,
    },
    PomodoroSnapshot {
        phase: Phase,
        time_left_secs: u64,
        is_active: bool,
        completed_sessions: u32,
        total_sessions: u32,
        display: String,
        at: DateTime<Utc>,
    },
    StopwatchStarted {
        elapsed_ms: u64,
        at: DateTime<Utc>,
    },
    StopwatchPaused {
        elapsed_ms: u64,
        at: DateTime<Utc>,
    },
    StopwatchStopped {
        final_ms: u64,
        at: DateTime<Utc>,
    },
    StopwatchReset {
        at: DateTime<Utc>,
    },
    LapRecorded {
        lap: Lap,
        at: DateTime<Utc>,
    },
    StopwatchSnapshot {
        elapsed_ms: u64,
        is_running: bool,
        laps: Vec<Lap>,
        best_lap: Option<u32>,
        worst_lap: Option<u32>,
        last_saved_ms: u64,
        display: String,
        at: DateTime<Utc>,
    },
}
