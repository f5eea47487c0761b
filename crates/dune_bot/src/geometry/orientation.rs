//! Куда смотрит машина

use bevy::prelude::*;

/// Проекция направления машины на плоскость арены
///
/// Не нормализуется: при наклоне по pitch длина падает как cos(pitch).
/// На steer это не влияет (угол тот же), но форма результата сохранена как есть.
pub fn facing_vector(pitch: f32, yaw: f32) -> Vec2 {
    Vec2::new(pitch.cos() * yaw.cos(), pitch.cos() * yaw.sin())
}
