//! Типы данных бота
//!
//! Организация:
//! - snapshot: вход от хоста (WorldSnapshot, CarInfo, BallInfo)
//! - controls: ControlIntent (внутренний) и ControlOutput (выход)
//! - agent: BotMode, AgentState (живёт между тиками)
//! - config: BotConfig, ArenaBounds

pub mod agent;
pub mod config;
pub mod controls;
pub mod snapshot;

#[cfg(test)]
mod components_tests;

pub use agent::*;
pub use config::*;
pub use controls::*;
pub use snapshot::*;
