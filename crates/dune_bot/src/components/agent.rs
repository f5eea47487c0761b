//! Agent state: поведенческий режим, dodge deadline, текущий intent

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::controls::ControlIntent;

/// Deadline, который никогда не наступит (dodge разоружён)
pub const DISARMED_DEADLINE: f64 = f64::INFINITY;

/// Поведенческие режимы FSM
///
/// Терминального состояния нет: бот крутится в Chase/Recovery/Dodging до конца матча.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum BotMode {
    /// Chase: едем к мячу, при случае прыгаем в него
    #[default]
    Chase,
    /// Recovery: в воздухе, выравниваем roll/pitch
    Recovery,
    /// Dodging: первый прыжок сделан, ждём deadline для второго (flip)
    Dodging,
}

impl BotMode {
    /// Label для debug overlay
    pub fn label(&self) -> &'static str {
        match self {
            BotMode::Chase => "Chase",
            BotMode::Recovery => "Recovery",
            BotMode::Dodging => "Dodging",
        }
    }
}

impl fmt::Display for BotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Состояние агента между тиками
///
/// Инвариант: `dodge_deadline` имеет смысл только в `BotMode::Dodging`.
/// Время в секундах монотонных часов (см. `crate::clock`).
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct AgentState {
    pub mode: BotMode,
    pub dodge_deadline: f64,
    pub intent: ControlIntent,
}

impl AgentState {
    pub fn new() -> Self {
        Self {
            mode: BotMode::Chase,
            dodge_deadline: 0.0,
            intent: ControlIntent::NEUTRAL,
        }
    }

    pub fn is_dodge_armed(&self) -> bool {
        self.dodge_deadline.is_finite()
    }
}

impl Default for AgentState {
    fn default() -> Self {
        Self::new()
    }
}
