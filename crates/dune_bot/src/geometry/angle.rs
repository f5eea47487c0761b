//! Угловая коррекция на плоскости арены

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;

/// Направление вектора в радианах
///
/// Оси в игре левосторонние, поэтому берём -x: atan2(y, -x).
/// Для нулевого вектора получается atan2(0, -0) = π (стабильно).
pub fn bearing(v: Vec2) -> f32 {
    v.y.atan2(-v.x)
}

/// Знаковая разница направлений `ideal - current` по кратчайшей дуге
///
/// Результат в [-π, π]; положительный угол = поворот налево.
pub fn correction_to(current: Vec2, ideal: Vec2) -> f32 {
    let correction = bearing(ideal) - bearing(current);

    if correction.abs() > PI {
        if correction < 0.0 {
            correction + TAU
        } else {
            correction - TAU
        }
    } else {
        correction
    }
}

/// Длина проекции на плоскость: sqrt(|dx|² + |dy|²)
pub fn planar_distance(v: Vec2) -> f32 {
    (v.x.abs().powi(2) + v.y.abs().powi(2)).sqrt()
}
