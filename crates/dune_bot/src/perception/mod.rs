//! Perception: WorldSnapshot → DerivedState
//!
//! Пересчитывается с нуля каждый тик, между тиками ничего не переносится.
//! AgentState здесь не трогается.

use bevy::prelude::*;
use thiserror::Error;

use crate::components::{ArenaBounds, BotConfig, Rotation, WorldSnapshot};
use crate::geometry::{correction_to, facing_vector, planar_distance};

#[cfg(test)]
mod perception_tests;

/// Нарушение контракта хостом (битый snapshot)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PerceptionError {
    #[error("car index {index} out of range (snapshot has {cars} cars)")]
    CarIndexOutOfRange { index: usize, cars: usize },
}

/// Производное состояние за один тик
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedState {
    pub ball_location: Vec2,
    pub ball_height: f32,
    pub car_location: Vec2,
    pub car_height: f32,
    pub car_rotation: Rotation,
    pub car_facing: Vec2,
    pub car_to_ball: Vec2,
    pub distance_to_ball: f32,
    /// Знаковый угол от направления машины до мяча (rad, положительный = налево)
    pub steer_correction: f32,
    pub within_boundaries: bool,
    pub facing_ball: bool,
    pub jumped: bool,
    pub double_jumped: bool,
}

impl DerivedState {
    /// Машина на земле в центре, мяч далеко впереди
    #[cfg(test)]
    pub(crate) fn fixture() -> Self {
        Self {
            ball_location: Vec2::new(1000.0, 0.0),
            ball_height: 93.0,
            car_location: Vec2::ZERO,
            car_height: 17.0,
            car_rotation: Rotation::default(),
            car_facing: Vec2::X,
            car_to_ball: Vec2::new(1000.0, 0.0),
            distance_to_ball: 1000.0,
            steer_correction: 0.0,
            within_boundaries: true,
            facing_ball: true,
            jumped: false,
            double_jumped: false,
        }
    }
}

pub fn perceive(
    snapshot: &WorldSnapshot,
    car_index: usize,
    config: &BotConfig,
) -> Result<DerivedState, PerceptionError> {
    let car = snapshot
        .car(car_index)
        .ok_or(PerceptionError::CarIndexOutOfRange {
            index: car_index,
            cars: snapshot.cars.len(),
        })?;

    let ball_location = snapshot.ball.physics.location.truncate();
    let car_location = car.physics.location.truncate();
    let rotation = car.physics.rotation;

    let car_facing = facing_vector(rotation.pitch, rotation.yaw);
    let car_to_ball = ball_location - car_location;
    let steer_correction = correction_to(car_facing, car_to_ball);

    Ok(DerivedState {
        ball_location,
        ball_height: snapshot.ball.physics.location.z,
        car_location,
        car_height: car.physics.location.z,
        car_rotation: rotation,
        car_facing,
        car_to_ball,
        distance_to_ball: planar_distance(car_to_ball),
        steer_correction,
        within_boundaries: within_boundaries(car_location, &config.arena),
        facing_ball: is_facing(steer_correction, config.facing_tolerance),
        jumped: car.jumped,
        double_jumped: car.double_jumped,
    })
}

/// Машина внутри арены (не на стене/потолке)
pub fn within_boundaries(car_location: Vec2, arena: &ArenaBounds) -> bool {
    arena.contains(car_location)
}

pub fn is_facing(steer_correction: f32, tolerance: f32) -> bool {
    -tolerance < steer_correction && steer_correction < tolerance
}
