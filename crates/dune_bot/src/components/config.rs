//! Параметры бота (пороги высот, дистанций, углов)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Прямоугольник внутренней части арены (без стен и потолка)
///
/// Проверка строгая: точка на границе считается снаружи.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub half_x: f32,
    pub half_y: f32,
}

impl ArenaBounds {
    pub fn contains(&self, point: Vec2) -> bool {
        -self.half_x < point.x && point.x < self.half_x && -self.half_y < point.y && point.y < self.half_y
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            half_x: 4000.0,
            half_y: 2000.0,
        }
    }
}

/// Параметры бота
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Выше этой высоты машина считается оторвавшейся от земли (uu)
    pub airborne_height: f32,
    /// Выше этой высоты включается Recovery (uu)
    pub recovery_height: f32,
    /// Мяч ниже этой высоты: "низкий", в него можно прыгнуть (uu)
    pub low_ball_height: f32,
    /// Front-flip в мяч ближе этой дистанции (uu)
    pub close_dodge_distance: f32,
    /// Speed-dodge к мячу дальше этой дистанции (uu)
    pub speed_dodge_distance: f32,
    /// Пауза между первым и вторым прыжком (секунды)
    pub dodge_delay: f64,
    /// |correction| меньше: смотрим на мяч (rad)
    pub facing_tolerance: f32,
    /// |correction| меньше: руль прямо (rad)
    pub steer_deadzone: f32,
    /// |correction| больше: powerslide без буста (rad)
    pub powerslide_angle: f32,
    /// Допуск по roll до коррекции в Recovery (rad)
    pub roll_tolerance: f32,
    /// Допуск по pitch до коррекции в Recovery (rad)
    pub pitch_tolerance: f32,
    pub arena: ArenaBounds,
    /// true: intent не сбрасывается в начале тика (поведение старого бота,
    /// см. DESIGN.md про powerslide carry-over)
    pub sticky_intents: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            airborne_height: 20.0,
            recovery_height: 200.0,
            low_ball_height: 200.0,
            close_dodge_distance: 300.0,
            speed_dodge_distance: 500.0,
            dodge_delay: crate::maneuvers::DEFAULT_DODGE_DELAY,
            facing_tolerance: 0.1,
            steer_deadzone: 0.1,
            powerslide_angle: 1.5,
            roll_tolerance: 0.3,
            pitch_tolerance: 0.1,
            arena: ArenaBounds::default(),
            sticky_intents: false,
        }
    }
}
