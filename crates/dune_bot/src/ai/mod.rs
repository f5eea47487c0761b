//! Decision-making бота
//!
//! FSM Chase / Recovery / Dodging (`controller`) + ECS система (`systems`).

use bevy::prelude::*;

pub mod controller;
pub mod systems;


pub use controller::decide;
pub use systems::bot_tick;

/// AI Plugin
///
/// Регистрирует `bot_tick` в FixedUpdate: один вызов FSM на тик симуляции.
pub struct BotAIPlugin;

impl Plugin for BotAIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, systems::bot_tick);
    }
}
