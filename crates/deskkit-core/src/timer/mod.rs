mod driver;
mod pomodoro;
mod settings;
mod stopwatch;
mod ticker;

pub use driver::{PomodoroTimer, StopwatchTimer};
pub use pomodoro::{PomodoroEngine, TimerState};
pub use settings::{format_clock, format_stopwatch, Phase, TimerSettings};
pub use stopwatch::{Lap, StopwatchEngine, StopwatchState, TICK_MS};
pub use ticker::{TickSlot, Ticker};
