//! Headless прогон Dune Bot
//!
//! Гоняет бота по seeded снапшотам с ручными 120Hz часами, без игрового клиента.

use dune_bot::{init_logger, Bot, BotConfig, BotMode, DeterministicRng, LogRenderer, ManualClock, TICK_RATE_HZ};

const SEED: u64 = 42;
const TICKS: usize = 1200;
const CAR_COUNT: usize = 2;

fn main() {
    init_logger();
    println!("Starting Dune Bot headless run (seed: {})", SEED);

    let clock = ManualClock::new(0.0);
    let mut bot = Bot::new(0, BotConfig::default())
        .with_clock(clock.clone())
        .with_renderer(LogRenderer::default());
    let mut rng = DeterministicRng::new(SEED);

    let mut ticks_in_mode = [0usize; 3];
    for tick in 0..TICKS {
        let snapshot = rng.snapshot(CAR_COUNT);
        let output = bot.tick(&snapshot);
        clock.advance(1.0 / TICK_RATE_HZ);

        ticks_in_mode[mode_slot(bot.mode())] += 1;

        if tick % 120 == 0 {
            println!(
                "Tick {}: mode {}, steer {:+.0}, jump {}, boost {}",
                tick,
                bot.mode(),
                output.steer,
                output.jump,
                output.boost
            );
        }
    }

    println!(
        "Run complete! Chase {} / Recovery {} / Dodging {} ticks",
        ticks_in_mode[0], ticks_in_mode[1], ticks_in_mode[2]
    );
}

fn mode_slot(mode: BotMode) -> usize {
    match mode {
        BotMode::Chase => 0,
        BotMode::Recovery => 1,
        BotMode::Dodging => 2,
    }
}
