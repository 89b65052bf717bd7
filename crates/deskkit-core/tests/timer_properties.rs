//! Pomodoro cadence and stopwatch behaviour through the public API.

use deskkit_core::storage::keys;
use deskkit_core::timer::{Lap, TickSlot};
use deskkit_core::tools::CaseStyle;
use deskkit_core::{Event, Phase, PomodoroEngine, StopwatchEngine, StopwatchTimer, Store, TimerSettings};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Run the current phase to expiry and return the phase it moved to.
fn finish_phase(engine: &mut PomodoroEngine) -> Phase {
    engine.start();
    loop {
        if let Some(Event::PhaseCompleted { to, .. }) = engine.tick() {
            return to;
        }
    }
}

fn short_settings(interval: i64) -> TimerSettings {
    TimerSettings {
        work_time: 1,
        short_break: 1,
        long_break: 1,
        long_break_interval: interval,
    }
}

#[test]
fn long_break_every_fourth_work_session() {
    let mut engine = PomodoroEngine::new(short_settings(4));
    let mut long_breaks = Vec::new();
    for _ in 0..12 {
        let to = finish_phase(&mut engine);
        if to == Phase::LongBreak {
            long_breaks.push(engine.state().completed_sessions);
        }
        assert_eq!(finish_phase(&mut engine), Phase::Work);
    }
    assert_eq!(long_breaks, vec![4, 8, 12]);
}

#[test]
fn expiry_stops_the_clock_and_loads_the_next_phase() {
    let mut engine = PomodoroEngine::new(TimerSettings::default());
    let to = finish_phase(&mut engine);
    assert_eq!(to, Phase::ShortBreak);
    assert!(!engine.is_active());
    assert_eq!(engine.time_left_secs(), 5 * 60);
    assert_eq!(engine.state().total_sessions, 1);
}

#[test]
fn stopwatch_lap_example() {
    let mut sw = StopwatchEngine::new(0);
    sw.start();
    for _ in 0..500 {
        sw.tick();
    }
    sw.lap();
    for _ in 0..400 {
        sw.tick();
    }
    sw.lap();

    assert_eq!(sw.laps()[0], Lap { id: 1, time: 5000, lap_time: 5000 });
    assert_eq!(sw.laps()[1], Lap { id: 2, time: 9000, lap_time: 4000 });
    assert_eq!(sw.best_lap().map(|l| l.id), Some(2));
    assert_eq!(sw.worst_lap().map(|l| l.id), Some(1));

    sw.pause();
    assert_eq!(sw.laps().len(), 2);
    sw.stop();
    assert!(sw.laps().is_empty());
    assert_eq!(sw.elapsed_ms(), 0);
}

#[test]
fn stopwatch_last_time_survives_restart() {
    let store = Store::in_memory();
    {
        let mut sw = StopwatchTimer::load(&store, 10);
        sw.start();
        for _ in 0..42 {
            sw.tick();
        }
        sw.stop();
    }
    assert_eq!(store.get(keys::STOPWATCH_LAST_TIME, 0_u64), 420);
    assert_eq!(StopwatchTimer::load(&store, 10).engine().last_saved_ms(), 420);
}

#[tokio::test(start_paused = true)]
async fn tick_slot_replaces_rather_than_stacks() {
    let mut slot = TickSlot::new(std::time::Duration::from_millis(10));
    slot.arm();
    slot.arm();
    assert!(slot.is_armed());
    slot.next().await;
    slot.disarm();
    assert!(!slot.is_armed());
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn long_break_lands_on_multiples_of_the_interval(interval in 1_i64..6, sessions in 1_u32..20) {
        let mut engine = PomodoroEngine::new(short_settings(interval));
        for _ in 0..sessions {
            let to = finish_phase(&mut engine);
            let completed = engine.state().completed_sessions;
            prop_assert_eq!(to == Phase::LongBreak, completed % interval as u32 == 0);
            finish_phase(&mut engine);
        }
    }

    #[test]
    fn settings_are_clamped_to_one(work in -100_i64..3, brk in -100_i64..3) {
        let s = TimerSettings { work_time: work, short_break: brk, long_break: brk, long_break_interval: work }
            .sanitized();
        prop_assert!(s.work_time >= 1 && s.short_break >= 1 && s.long_break >= 1 && s.long_break_interval >= 1);
    }

    #[test]
    fn per_char_styles_preserve_letters(text in "[a-zA-Z .!?]{0,40}", seed in any::<u64>()) {
        for style in [CaseStyle::Alternating, CaseStyle::Random, CaseStyle::Reverse] {
            let out = style.apply_with(&text, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(out.chars().count(), text.chars().count());
            prop_assert_eq!(out.to_lowercase(), text.to_lowercase());
        }
    }

    #[test]
    fn pure_styles_are_deterministic(text in "[a-zA-Z ]{0,40}") {
        for style in CaseStyle::ALL.into_iter().filter(|s| *s != CaseStyle::Random) {
            prop_assert_eq!(style.apply(&text), style.apply(&text));
        }
    }
}
