use serde::{Deserialize, Serialize};

/// One Pomodoro phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Focus Time",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    pub fn is_break(self) -> bool {
        !matches!(self, Phase::Work)
    }
}

/// Pomodoro durations, persisted under `pomodoroSettings`.
///
/// Minutes are stored as signed integers so that hand-edited or legacy
/// values survive decoding; [`sanitized`](Self::sanitized) clamps them
/// before the engine uses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSettings {
    #[serde(default = "default_work_time")]
    pub work_time: i64,
    #[serde(default = "default_short_break")]
    pub short_break: i64,
    #[serde(default = "default_long_break")]
    pub long_break: i64,
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: i64,
}

fn default_work_time() -> i64 {
    25
}
fn default_short_break() -> i64 {
    5
}
fn default_long_break() -> i64 {
    15
}
fn default_long_break_interval() -> i64 {
    4
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_time: default_work_time(),
            short_break: default_short_break(),
            long_break: default_long_break(),
            long_break_interval: default_long_break_interval(),
        }
    }
}

impl TimerSettings {
    /// Every field clamped to at least 1.
    pub fn sanitized(self) -> Self {
        Self {
            work_time: self.work_time.max(1),
            short_break: self.short_break.max(1),
            long_break: self.long_break.max(1),
            long_break_interval: self.long_break_interval.max(1),
        }
    }

    pub fn minutes_for(&self, phase: Phase) -> u64 {
        let minutes = match phase {
            Phase::Work => self.work_time,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        };
        minutes.max(1) as u64
    }

    /// Phase length in seconds.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn duration_secs(&self, phase: Phase) -> u64 {
        self.minutes_for(phase).saturating_mul(60)
    }

    pub fn interval(&self) -> u32 {
        self.long_break_interval.clamp(1, i64::from(u32::MAX)) as u32
    }

    /// Update one field by its persisted camelCase name.
    pub fn set_field(&mut self, field: &str, value: i64) -> Option<()> {
        match field {
            "workTime" => self.work_time = value,
            "shortBreak" => self.short_break = value,
            "longBreak" => self.long_break = value,
            "longBreakInterval" => self.long_break_interval = value,
            _ => return None,
        }
        Some(())
    }
}

/// `MM:SS`, minutes unbounded.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// `MM:SS.cc`, centiseconds.
pub fn format_stopwatch(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let centis = (ms % 1000) / 10;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}
