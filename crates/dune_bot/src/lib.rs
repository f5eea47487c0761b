//! Dune Bot: реактивный агент управления машиной
//!
//! Каждый тик: WorldSnapshot → perception → FSM (Chase / Recovery / Dodging)
//! → ControlOutput. Хост (симуляция, транспорт, overlay): внешний.
//!
//! Два способа встроить:
//! - напрямую: `Bot::tick(&snapshot)` раз в тик
//! - ECS: `DuneBotPlugin` + entity с `Bot`, snapshot как Resource

use bevy::prelude::*;

pub mod ai;
pub mod bot;
pub mod clock;
pub mod components;
pub mod debug_render;
pub mod geometry;
pub mod logger;
pub mod maneuvers;
pub mod output;
pub mod perception;
pub mod scenario;

pub use ai::{decide, BotAIPlugin};
pub use bot::Bot;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use components::*;
pub use debug_render::{DebugRenderer, LogRenderer, NullRenderer, RenderError};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter,
};
pub use perception::{perceive, DerivedState, PerceptionError};
pub use scenario::DeterministicRng;

/// Частота тиков хоста (Hz)
pub const TICK_RATE_HZ: f64 = 120.0;

/// Главный plugin бота
pub struct DuneBotPlugin;

impl Plugin for DuneBotPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .add_plugins(BotAIPlugin);
    }
}

/// Создаёт minimal Bevy App для headless прогона ботов
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .add_plugins(DuneBotPlugin);

    app
}
