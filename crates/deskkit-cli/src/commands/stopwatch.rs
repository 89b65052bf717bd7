use clap::Subcommand;
use deskkit_core::storage::keys;
use deskkit_core::timer::format_stopwatch;
use deskkit_core::{Config, StopwatchTimer};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{open_store, print_json, CmdResult};

#[derive(Subcommand)]
pub enum StopwatchAction {
    /// Interactive stopwatch driven by commands on stdin
    /// (start, pause, stop, reset, lap, status, quit)
    Run,
    /// Print the last saved time
    Last,
}

pub fn run(action: StopwatchAction, config: &Config) -> CmdResult {
    let store = open_store(config)?;
    match action {
        StopwatchAction::Last => {
            let ms: u64 = store.get(keys::STOPWATCH_LAST_TIME, 0);
            print_json(&json!({ "lastTimeMs": ms, "display": format_stopwatch(ms) }))
        }
        StopwatchAction::Run => {
            let timer = StopwatchTimer::load(&store, config.stopwatch.tick_ms);
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            let result = runtime.block_on(interactive(timer));
            // stdin is read on a blocking thread that may still be parked.
            runtime.shutdown_background();
            result
        }
    }
}

async fn interactive(timer: StopwatchTimer<'_>) -> CmdResult {
    let mut timer = timer.with_ticks();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = timer.next_tick() => {}
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let event = match line.trim() {
                    "" => continue,
                    "start" => timer.start(),
                    "pause" => timer.pause(),
                    "stop" => timer.stop(),
                    "reset" => timer.reset(),
                    "lap" => timer.lap(),
                    "status" => Some(timer.engine().snapshot()),
                    "quit" | "exit" => break,
                    other => {
                        eprintln!("unknown command: {other}");
                        continue;
                    }
                };
                if let Some(event) = event {
                    print_json(&event)?;
                }
            }
        }
    }

    // Leaving mid-run keeps the time like a pause would.
    timer.pause();
    tracing::debug!(last = timer.engine().last_saved_ms(), "stopwatch closed");
    Ok(())
}
