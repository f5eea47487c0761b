//! Control intent (внутренний) и ControlOutput (контракт с хостом)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Намерения управления, которые собирают маневры за один тик
///
/// Аналоговые оси всегда в {-1, 0, 1}: примитивы пишут только эти значения,
/// clamping в output не делается.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct ControlIntent {
    pub jump: bool,
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub turn: f32,
    pub boost: bool,
    pub powerslide: bool,
}

impl ControlIntent {
    /// Базовая линия в начале каждого тика: буст включён, остальное нейтрально
    pub const NEUTRAL: Self = Self {
        jump: false,
        roll: 0.0,
        pitch: 0.0,
        yaw: 0.0,
        turn: 0.0,
        boost: true,
        powerslide: false,
    };
}

impl Default for ControlIntent {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Выход бота за тик
///
/// steer/pitch/yaw/roll/throttle ∈ [-1, 1].
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct ControlOutput {
    pub throttle: f32,
    pub steer: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub jump: bool,
    pub boost: bool,
    pub handbrake: bool,
}
