use std::io::Write;

use clap::Subcommand;
use deskkit_core::storage::keys;
use deskkit_core::timer::format_clock;
use deskkit_core::{Config, Event, PomodoroTimer, TimerSettings};

use super::{open_store, print_json, CmdResult};

#[derive(Subcommand)]
pub enum PomodoroAction {
    /// Print current timer state as JSON
    Status,
    /// Start the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Start if paused, pause if running
    Toggle,
    /// Back to a fresh work phase, session counters kept
    Reset,
    /// Advance the countdown by whole seconds
    Tick {
        #[arg(long, default_value = "1")]
        count: u64,
    },
    /// Run the countdown in the foreground until the phase ends
    Run,
    /// Show or change phase lengths
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print current settings as JSON
    Show,
    /// Set one field (workTime, shortBreak, longBreak, longBreakInterval)
    Set {
        field: String,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
}

fn emit(event: Option<Event>, timer: &PomodoroTimer<'_>) -> CmdResult {
    match event {
        Some(event) => print_json(&event),
        None => print_json(&timer.engine().snapshot()),
    }
}

pub fn run(action: PomodoroAction, config: &Config) -> CmdResult {
    let store = open_store(config)?;
    let mut timer = PomodoroTimer::load(&store, config.pomodoro);

    match action {
        PomodoroAction::Status => print_json(&timer.engine().snapshot())?,
        PomodoroAction::Start => {
            let event = timer.start();
            emit(event, &timer)?;
        }
        PomodoroAction::Pause => {
            let event = timer.pause();
            emit(event, &timer)?;
        }
        PomodoroAction::Toggle => {
            let event = timer.toggle();
            emit(event, &timer)?;
        }
        PomodoroAction::Reset => {
            let event = timer.reset();
            emit(event, &timer)?;
        }
        PomodoroAction::Tick { count } => {
            let mut last = None;
            for _ in 0..count {
                if let Some(event) = timer.tick() {
                    last = Some(event);
                    break;
                }
            }
            emit(last, &timer)?;
        }
        PomodoroAction::Run => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            let event = runtime.block_on(run_foreground(timer))?;
            print_json(&event)?;
        }
        PomodoroAction::Settings { action } => match action {
            SettingsAction::Show => print_json(timer.engine().settings())?,
            SettingsAction::Set { field, value } => {
                let mut settings: TimerSettings = *timer.engine().settings();
                settings
                    .set_field(&field, value)
                    .ok_or_else(|| format!("unknown settings field: {field}"))?;
                timer.update_settings(settings);
                print_json(&store.get(keys::POMODORO_SETTINGS, TimerSettings::default()))?;
            }
        },
    }
    Ok(())
}

/// Tick once a second until the phase completes, redrawing the clock on
/// stderr.
async fn run_foreground(timer: PomodoroTimer<'_>) -> Result<Event, Box<dyn std::error::Error>> {
    let mut timer = timer.with_ticks();
    if !timer.engine().is_active() {
        timer.start();
    }
    let label = timer.engine().phase().label();
    tracing::info!(phase = label, left = timer.engine().time_left_secs(), "pomodoro running");

    loop {
        let event = timer.next_tick().await;
        let mut err = std::io::stderr();
        write!(err, "\r{label} {}  ", format_clock(timer.engine().time_left_secs()))?;
        err.flush()?;
        if let Some(event) = event {
            writeln!(err)?;
            return Ok(event);
        }
    }
}
