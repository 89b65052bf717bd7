//! Count-up stopwatch with laps.
//!
//! `pause` freezes and keeps laps; `stop` freezes then clears the lap
//! session; `reset` additionally forgets the last saved time. Leaving the
//! running state with time on the clock records that time in
//! `last_saved_ms`, the only part of the stopwatch that is persisted.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::settings::format_stopwatch;
use crate::events::Event;

/// Default tick granularity.
pub const TICK_MS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lap {
    /// 1-based sequence number.
    pub id: u32,
    /// Cumulative elapsed time at the lap, ms.
    pub time: u64,
    /// Time since the previous lap, ms.
    pub lap_time: u64,
}

/// Everything the stopwatch knows, last saved time included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopwatchState {
    pub elapsed_ms: u64,
    pub is_running: bool,
    pub laps: Vec<Lap>,
    pub last_saved_ms: u64,
}

/// Pure lap stopwatch. Time advances only through `tick`, one `tick_ms`
/// step per call; the engine never reads a clock.
#[derive(Debug, Clone)]
pub struct StopwatchEngine {
    state: StopwatchState,
    tick_ms: u64,
}

impl StopwatchEngine {
    pub fn new(last_saved_ms: u64) -> Self {
        Self::with_tick(last_saved_ms, TICK_MS)
    }

    pub fn with_tick(last_saved_ms: u64, tick_ms: u64) -> Self {
        Self {
            state: StopwatchState {
                elapsed_ms: 0,
                is_running: false,
                laps: Vec::new(),
                last_saved_ms,
            },
            tick_ms: tick_ms.max(1),
        }
    }

    pub fn state(&self) -> &StopwatchState {
        &self.state
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.state.elapsed_ms
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn laps(&self) -> &[Lap] {
        &self.state.laps
    }

    pub fn last_saved_ms(&self) -> u64 {
        self.state.last_saved_ms
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    /// Shortest lap; the earliest wins ties.
    pub fn best_lap(&self) -> Option<&Lap> {
        self.state
            .laps
            .iter()
            .reduce(|best, lap| if lap.lap_time < best.lap_time { lap } else { best })
    }

    /// Longest lap; the earliest wins ties.
    pub fn worst_lap(&self) -> Option<&Lap> {
        self.state
            .laps
            .iter()
            .reduce(|worst, lap| if lap.lap_time > worst.lap_time { lap } else { worst })
    }

    pub fn snapshot(&self) -> Event {
        Event::StopwatchSnapshot {
            elapsed_ms: self.state.elapsed_ms,
            is_running: self.state.is_running,
            laps: self.state.laps.clone(),
            best_lap: self.best_lap().map(|l| l.id),
            worst_lap: self.worst_lap().map(|l| l.id),
            last_saved_ms: self.state.last_saved_ms,
            display: format_stopwatch(self.state.elapsed_ms),
            at: Utc::now(),
        }
    }

    pub fn start(&mut self) -> Option<Event> {
        if self.state.is_running {
            return None;
        }
        self.state.is_running = true;
        Some(Event::StopwatchStarted {
            elapsed_ms: self.state.elapsed_ms,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.state.is_running {
            return None;
        }
        self.halt();
        Some(Event::StopwatchPaused {
            elapsed_ms: self.state.elapsed_ms,
            at: Utc::now(),
        })
    }

    pub fn stop(&mut self) -> Option<Event> {
        let final_ms = self.state.elapsed_ms;
        self.halt();
        self.state.elapsed_ms = 0;
        self.state.laps.clear();
        Some(Event::StopwatchStopped {
            final_ms,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.state.is_running = false;
        self.state.elapsed_ms = 0;
        self.state.laps.clear();
        self.state.last_saved_ms = 0;
        Some(Event::StopwatchReset { at: Utc::now() })
    }

    /// Record a lap at the current elapsed time. Ignored at zero.
    pub fn lap(&mut self) -> Option<Event> {
        let time = self.state.elapsed_ms;
        if time == 0 {
            return None;
        }
        let previous = self.state.laps.last().map_or(0, |l| l.time);
        let lap = Lap {
            id: self.state.laps.len() as u32 + 1,
            time,
            lap_time: time - previous,
        };
        self.state.laps.push(lap);
        Some(Event::LapRecorded {
            lap,
            at: Utc::now(),
        })
    }

    /// One tick of `tick_ms` elapsed.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state.is_running {
            self.state.elapsed_ms = self.state.elapsed_ms.saturating_add(self.tick_ms);
        }
        None
    }

    fn halt(&mut self) {
        if self.state.is_running && self.state.elapsed_ms > 0 {
            self.state.last_saved_ms = self.state.elapsed_ms;
        }
        self.state.is_running = false;
    }
}

impl Default for StopwatchEngine {
    fn default() -> Self {
        Self::new(0)
    }
}
