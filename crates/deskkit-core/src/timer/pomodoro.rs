//! Pomodoro countdown engine.
//!
//! A tick-driven state machine. It does not own a clock: the caller (or a
//! [`TickSlot`](super::TickSlot)) calls `tick()` once per second while the
//! timer is active.
//!
//! ## Phase Transitions
//!
//! ```text
//! work --(n % interval != 0)--> shortBreak --> work
//! work --(n % interval == 0)--> longBreak  --> work
//! ```
//!
//! Every expiry parks the timer (`is_active = false`) on the next phase.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::settings::{format_clock, Phase, TimerSettings};
use crate::events::Event;

/// Persisted countdown state (`pomodoroState`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// Seconds left in the current phase.
    pub time_left: u64,
    pub is_active: bool,
    pub mode: Phase,
    #[serde(default)]
    pub completed_sessions: u32,
    #[serde(default)]
    pub total_sessions: u32,
}

impl TimerState {
    pub fn initial(settings: &TimerSettings) -> Self {
        Self {
            time_left: settings.duration_secs(Phase::Work),
            is_active: false,
            mode: Phase::Work,
            completed_sessions: 0,
            total_sessions: 0,
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::initial(&TimerSettings::default())
    }
}

/// Pure Pomodoro state machine.
///
/// Holds the settings and the current [`TimerState`]; every transition is a
/// method that mutates in place and returns the [`Event`] it produced, if
/// any. Persistence and ticking live in [`PomodoroTimer`](super::PomodoroTimer).
#[derive(Debug, Clone)]
pub struct PomodoroEngine {
    settings: TimerSettings,
    state: TimerState,
}

impl PomodoroEngine {
    /// Fresh engine parked at the start of a work phase.
    pub fn new(settings: TimerSettings) -> Self {
        let settings = settings.sanitized();
        Self {
            state: TimerState::initial(&settings),
            settings,
        }
    }

    /// Rehydrate from persisted parts.
    pub fn from_parts(settings: TimerSettings, state: TimerState) -> Self {
        Self {
            settings: settings.sanitized(),
            state,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.state.mode
    }

    pub fn time_left_secs(&self) -> u64 {
        self.state.time_left
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    pub fn display(&self) -> String {
        format_clock(self.state.time_left)
    }

    pub fn snapshot(&self) -> Event {
        Event::PomodoroSnapshot {
            phase: self.state.mode,
            time_left_secs: self.state.time_left,
            is_active: self.state.is_active,
            completed_sessions: self.state.completed_sessions,
            total_sessions: self.state.total_sessions,
            display: self.display(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.state.is_active {
            return None;
        }
        self.state.is_active = true;
        Some(Event::PomodoroStarted {
            phase: self.state.mode,
            time_left_secs: self.state.time_left,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.state.is_active {
            return None;
        }
        self.state.is_active = false;
        Some(Event::PomodoroPaused {
            phase: self.state.mode,
            time_left_secs: self.state.time_left,
            at: Utc::now(),
        })
    }

    pub fn toggle(&mut self) -> Option<Event> {
        if self.state.is_active {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Back to a stopped work phase. Session counters are kept.
    pub fn reset(&mut self) -> Option<Event> {
        self.state.mode = Phase::Work;
        self.state.time_left = self.settings.duration_secs(Phase::Work);
        self.state.is_active = false;
        Some(Event::PomodoroReset {
            time_left_secs: self.state.time_left,
            at: Utc::now(),
        })
    }

    /// Replace settings. The running countdown is left alone; new lengths
    /// apply from the next phase change or reset.
    pub fn set_settings(&mut self, settings: TimerSettings) {
        self.settings = settings.sanitized();
    }

    /// One second elapsed. Returns `Some(Event::PhaseCompleted)` on expiry.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.state.is_active {
            return None;
        }
        if self.state.time_left > 1 {
            self.state.time_left -= 1;
            return None;
        }
        Some(self.expire())
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn expire(&mut self) -> Event {
        let from = self.state.mode;
        let next = match from {
            Phase::Work => {
                self.state.completed_sessions = self.state.completed_sessions.saturating_add(1);
                self.state.total_sessions = self.state.total_sessions.saturating_add(1);
                if self.state.completed_sessions % self.settings.interval() == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Work,
        };
        self.state.mode = next;
        self.state.time_left = self.settings.duration_secs(next);
        self.state.is_active = false;
        tracing::debug!(?from, to = ?next, completed = self.state.completed_sessions, "phase completed");
        Event::PhaseCompleted {
            from,
            to: next,
            completed_sessions: self.state.completed_sessions,
            at: Utc::now(),
        }
    }
}

impl Default for PomodoroEngine {
    fn default() -> Self {
        Self::new(TimerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(time_left: u64, mode: Phase, completed: u32) -> PomodoroEngine {
        PomodoroEngine::from_parts(
            TimerSettings::default(),
            TimerState {
                time_left,
                is_active: true,
                mode,
                completed_sessions: completed,
                total_sessions: completed,
            },
        )
    }

    #[test]
    fn start_pause_toggle() {
        let mut engine = PomodoroEngine::default();
        assert!(!engine.is_active());

        assert!(engine.start().is_some());
        assert!(engine.is_active());
        assert!(engine.start().is_none());

        assert!(engine.pause().is_some());
        assert!(!engine.is_active());
        assert!(engine.pause().is_none());

        engine.toggle();
        assert!(engine.is_active());
        assert_eq!(engine.phase(), Phase::Work);
        assert_eq!(engine.time_left_secs(), 25 * 60);
    }

    #[test]
    fn tick_is_noop_while_inactive() {
        let mut engine = PomodoroEngine::default();
        assert!(engine.tick().is_none());
        assert_eq!(engine.time_left_secs(), 25 * 60);
    }

    #[test]
    fn tick_decrements_while_active() {
        let mut engine = PomodoroEngine::default();
        engine.start();
        engine.tick();
        engine.tick();
        assert_eq!(engine.time_left_secs(), 25 * 60 - 2);
        assert_eq!(engine.display(), "24:58");
    }

    #[test]
    fn last_second_of_work_moves_to_short_break() {
        let mut engine = engine_with(1, Phase::Work, 0);
        let event = engine.tick().unwrap();
        assert!(matches!(
            event,
            Event::PhaseCompleted {
                from: Phase::Work,
                to: Phase::ShortBreak,
                completed_sessions: 1,
                ..
            }
        ));
        assert_eq!(engine.phase(), Phase::ShortBreak);
        assert_eq!(engine.time_left_secs(), 5 * 60);
        assert_eq!(engine.state().completed_sessions, 1);
        assert_eq!(engine.state().total_sessions, 1);
        assert!(!engine.is_active());
    }

    #[test]
    fn fourth_completion_earns_long_break() {
        let mut engine = engine_with(1, Phase::Work, 3);
        engine.tick();
        assert_eq!(engine.phase(), Phase::LongBreak);
        assert_eq!(engine.time_left_secs(), 15 * 60);
    }

    #[test]
    fn break_expiry_returns_to_work_without_counting() {
        let mut engine = engine_with(1, Phase::LongBreak, 4);
        engine.tick();
        assert_eq!(engine.phase(), Phase::Work);
        assert_eq!(engine.time_left_secs(), 25 * 60);
        assert_eq!(engine.state().completed_sessions, 4);
        assert!(!engine.is_active());
    }

    #[test]
    fn reset_keeps_counters() {
        let mut engine = engine_with(30, Phase::ShortBreak, 2);
        engine.reset();
        assert_eq!(engine.phase(), Phase::Work);
        assert_eq!(engine.time_left_secs(), 25 * 60);
        assert!(!engine.is_active());
        assert_eq!(engine.state().completed_sessions, 2);
    }

    #[test]
    fn settings_change_does_not_rescale_running_countdown() {
        let mut engine = PomodoroEngine::default();
        engine.start();
        engine.tick();
        engine.set_settings(TimerSettings {
            work_time: 50,
            ..TimerSettings::default()
        });
        assert_eq!(engine.time_left_secs(), 25 * 60 - 1);
        engine.reset();
        assert_eq!(engine.time_left_secs(), 50 * 60);
    }

    #[test]
    fn zero_minute_settings_are_clamped() {
        let mut engine = PomodoroEngine::new(TimerSettings {
            work_time: 0,
            short_break: 0,
            long_break: 0,
            long_break_interval: 0,
        });
        assert_eq!(engine.time_left_secs(), 60);
        engine.start();
        assert!(engine.tick().is_none());
        assert!(engine.is_active());
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let engine = PomodoroEngine::default();
        match engine.snapshot() {
            Event::PomodoroSnapshot {
                phase,
                time_left_secs,
                is_active,
                display,
                ..
            } => {
                assert_eq!(phase, Phase::Work);
                assert_eq!(time_left_secs, 25 * 60);
                assert!(!is_active);
                assert_eq!(display, "25:00");
            }
            _ => panic!("Expected PomodoroSnapshot"),
        }
    }

    #[test]
    fn state_serializes_with_persisted_field_names() {
        let json = serde_json::to_value(TimerState::default()).unwrap();
        assert_eq!(json["timeLeft"], 1500);
        assert_eq!(json["isActive"], false);
        assert_eq!(json["mode"], "work");
        assert_eq!(json["completedSessions"], 0);
        assert_eq!(json["totalSessions"], 0);
    }
}
