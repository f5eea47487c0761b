//! WorldSnapshot: состояние мира, которое хост присылает каждый тик
//!
//! Read-only для core. Координаты в единицах симуляции (uu), ось Z вверх,
//! оси левосторонние (см. `geometry::bearing`).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Ориентация в радианах
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
pub struct Rotation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotation {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
pub struct Physics {
    pub location: Vec3,
    #[serde(default)]
    pub rotation: Rotation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
pub struct BallInfo {
    pub physics: Physics,
}

impl BallInfo {
    pub fn at(location: Vec3) -> Self {
        Self {
            physics: Physics {
                location,
                rotation: Rotation::default(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
pub struct CarInfo {
    pub physics: Physics,
    #[serde(default)]
    pub jumped: bool,
    #[serde(default)]
    pub double_jumped: bool,
}

impl CarInfo {
    pub fn new(location: Vec3, rotation: Rotation) -> Self {
        Self {
            physics: Physics { location, rotation },
            jumped: false,
            double_jumped: false,
        }
    }

    pub fn with_jump_flags(mut self, jumped: bool, double_jumped: bool) -> Self {
        self.jumped = jumped;
        self.double_jumped = double_jumped;
        self
    }
}

/// Снимок мира на один тик
///
/// В ECS-режиме хост вставляет его как Resource перед `FixedUpdate`.
#[derive(Resource, Debug, Clone, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
pub struct WorldSnapshot {
    pub ball: BallInfo,
    pub cars: Vec<CarInfo>,
}

impl WorldSnapshot {
    pub fn new(ball: BallInfo, cars: Vec<CarInfo>) -> Self {
        Self { ball, cars }
    }

    pub fn car(&self, index: usize) -> Option<&CarInfo> {
        self.cars.get(index)
    }
}
