//! # deskkit Core Library
//!
//! Core logic for the deskkit productivity toolbox: a Pomodoro timer, a lap
//! stopwatch and a handful of list widgets, all persisted through one
//! fail-soft key-value store. The `deskkit` CLI is a thin layer over this
//! crate.
//!
//! ## Architecture
//!
//! - **Storage**: string-keyed JSON values behind a [`KvBackend`](storage::KvBackend)
//!   (SQLite on disk, or in memory). [`Store`] never fails on read or write;
//!   problems are logged and reads fall back to the caller's default.
//! - **Timers**: pure engines ([`PomodoroEngine`], [`StopwatchEngine`])
//!   driven by store-backed wrappers that persist after every transition and
//!   keep at most one tokio ticker alive.
//! - **Records**: typed widget collections validated before any write.
//! - **Tools**: case conversion, text statistics, unit conversion, a
//!   calculator and a catalogue of writing ideas.
//!
//! ## Key Components
//!
//! - [`PomodoroTimer`] / [`StopwatchTimer`]: persisted timer drivers
//! - [`Store`]: fail-soft JSON persistence
//! - [`Config`]: TOML configuration
//! - [`Collection`](records::Collection): list widgets over the store

pub mod error;
pub mod events;
pub mod logging;
pub mod overview;
pub mod records;
pub mod storage;
pub mod timer;
pub mod tools;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use logging::init_logging;
pub use overview::{ActivityItem, ActivityKind, Overview};
pub use storage::{Config, Store};
pub use timer::{
    Phase, PomodoroEngine, PomodoroTimer, StopwatchEngine, StopwatchTimer, TimerSettings, TimerState,
};
