//! Store-backed timer drivers.
//!
//! A driver owns one engine, persists it through the [`Store`] after every
//! mutation and, optionally, a [`TickSlot`] that is armed exactly while the
//! engine is running. Dropping the driver tears the slot down.

use std::time::Duration;

use super::pomodoro::{PomodoroEngine, TimerState};
use super::settings::TimerSettings;
use super::stopwatch::StopwatchEngine;
use super::ticker::TickSlot;
use crate::events::Event;
use crate::storage::{keys, Store};

pub struct PomodoroTimer<'s> {
    store: &'s Store,
    engine: PomodoroEngine,
    ticks: Option<TickSlot>,
}

impl<'s> PomodoroTimer<'s> {
    /// Rehydrate from `pomodoroSettings` / `pomodoroState`, seeding missing
    /// settings with `defaults`.
    pub fn load(store: &'s Store, defaults: TimerSettings) -> Self {
        let settings = store.get(keys::POMODORO_SETTINGS, defaults).sanitized();
        let state = store.get(keys::POMODORO_STATE, TimerState::initial(&settings));
        Self {
            store,
            engine: PomodoroEngine::from_parts(settings, state),
            ticks: None,
        }
    }

    /// Drive ticks from a one-second [`TickSlot`]. Requires a tokio runtime.
    pub fn with_ticks(mut self) -> Self {
        self.ticks = Some(TickSlot::new(Duration::from_secs(1)));
        self.sync_ticks();
        self
    }

    pub fn engine(&self) -> &PomodoroEngine {
        &self.engine
    }

    pub fn is_ticking(&self) -> bool {
        self.ticks.as_ref().is_some_and(TickSlot::is_armed)
    }

    pub fn start(&mut self) -> Option<Event> {
        self.apply(PomodoroEngine::start)
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.apply(PomodoroEngine::pause)
    }

    pub fn toggle(&mut self) -> Option<Event> {
        self.apply(PomodoroEngine::toggle)
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.apply(PomodoroEngine::reset)
    }

    pub fn tick(&mut self) -> Option<Event> {
        self.apply(PomodoroEngine::tick)
    }

    /// Persist new settings; they take effect from the next phase or reset.
    pub fn update_settings(&mut self, settings: TimerSettings) {
        self.engine.set_settings(settings);
        self.store.set(keys::POMODORO_SETTINGS, self.engine.settings());
    }

    /// Wait for the next scheduled tick and apply it.
    /// Pends forever when no ticks are attached or the timer is idle.
    pub async fn next_tick(&mut self) -> Option<Event> {
        match self.ticks.as_mut() {
            Some(slot) => slot.next().await,
            None => std::future::pending::<()>().await,
        }
        self.tick()
    }

    fn apply(&mut self, op: impl FnOnce(&mut PomodoroEngine) -> Option<Event>) -> Option<Event> {
        let before = self.engine.state().clone();
        let event = op(&mut self.engine);
        if *self.engine.state() != before {
            self.store.set(keys::POMODORO_STATE, self.engine.state());
        }
        self.sync_ticks();
        event
    }

    fn sync_ticks(&mut self) {
        let running = self.engine.is_active();
        if let Some(slot) = self.ticks.as_mut() {
            slot.sync(running);
        }
    }
}

pub struct StopwatchTimer<'s> {
    store: &'s Store,
    engine: StopwatchEngine,
    ticks: Option<TickSlot>,
}

impl<'s> StopwatchTimer<'s> {
    pub fn load(store: &'s Store, tick_ms: u64) -> Self {
        let last_saved = store.get(keys::STOPWATCH_LAST_TIME, 0_u64);
        Self {
            store,
            engine: StopwatchEngine::with_tick(last_saved, tick_ms),
            ticks: None,
        }
    }

    /// Drive ticks from a [`TickSlot`] at the engine's granularity.
    /// Requires a tokio runtime.
    pub fn with_ticks(mut self) -> Self {
        let period = Duration::from_millis(self.engine.tick_ms());
        self.ticks = Some(TickSlot::new(period));
        self.sync_ticks();
        self
    }

    pub fn engine(&self) -> &StopwatchEngine {
        &self.engine
    }

    pub fn is_ticking(&self) -> bool {
        self.ticks.as_ref().is_some_and(TickSlot::is_armed)
    }

    pub fn start(&mut self) -> Option<Event> {
        self.apply(StopwatchEngine::start)
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.apply(StopwatchEngine::pause)
    }

    pub fn stop(&mut self) -> Option<Event> {
        self.apply(StopwatchEngine::stop)
    }

    /// Like `stop`, and the persisted last time is cleared too.
    pub fn reset(&mut self) -> Option<Event> {
        let event = self.apply(StopwatchEngine::reset);
        self.store.set(keys::STOPWATCH_LAST_TIME, &0_u64);
        event
    }

    pub fn lap(&mut self) -> Option<Event> {
        self.apply(StopwatchEngine::lap)
    }

    pub fn tick(&mut self) -> Option<Event> {
        self.apply(StopwatchEngine::tick)
    }

    pub async fn next_tick(&mut self) -> Option<Event> {
        match self.ticks.as_mut() {
            Some(slot) => slot.next().await,
            None => std::future::pending::<()>().await,
        }
        self.tick()
    }

    fn apply(&mut self, op: impl FnOnce(&mut StopwatchEngine) -> Option<Event>) -> Option<Event> {
        let before = self.engine.last_saved_ms();
        let event = op(&mut self.engine);
        let after = self.engine.last_saved_ms();
        if after != before && after > 0 {
            self.store.set(keys::STOPWATCH_LAST_TIME, &after);
        }
        self.sync_ticks();
        event
    }

    fn sync_ticks(&mut self) {
        let running = self.engine.is_running();
        if let Some(slot) = self.ticks.as_mut() {
            slot.sync(running);
        }
    }
}
