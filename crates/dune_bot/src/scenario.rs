//! Seeded генератор снапшотов для headless прогонов
//!
//! Не симуляция: каждый snapshot независим. Нужен, чтобы гонять FSM через
//! все ветки (земля/воздух/стены, флаги прыжков) детерминированно.

use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::components::{BallInfo, CarInfo, Rotation, WorldSnapshot};

/// Высота машины, стоящей на колёсах (uu)
const RESTING_CAR_HEIGHT: f32 = 17.0;
/// Высота лежащего мяча (uu)
const RESTING_BALL_HEIGHT: f32 = 93.0;

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Snapshot с `car_count` машинами; размах координат чуть шире арены,
    /// чтобы попадать и на стены
    pub fn snapshot(&mut self, car_count: usize) -> WorldSnapshot {
        let ball_height = if self.rng.gen_bool(0.7) {
            RESTING_BALL_HEIGHT
        } else {
            self.rng.gen_range(RESTING_BALL_HEIGHT..1500.0)
        };
        let ball = BallInfo::at(Vec3::new(
            self.rng.gen_range(-4096.0..4096.0),
            self.rng.gen_range(-5120.0..5120.0),
            ball_height,
        ));

        let cars = (0..car_count).map(|_| self.car()).collect();
        WorldSnapshot::new(ball, cars)
    }

    fn car(&mut self) -> CarInfo {
        let airborne = self.rng.gen_bool(0.3);
        let height = if airborne {
            self.rng.gen_range(30.0..1200.0)
        } else {
            RESTING_CAR_HEIGHT
        };
        let rotation = if airborne {
            Rotation::new(
                self.rng.gen_range(-1.5..1.5),
                self.rng.gen_range(-std::f32::consts::PI..std::f32::consts::PI),
                self.rng.gen_range(-std::f32::consts::PI..std::f32::consts::PI),
            )
        } else {
            Rotation::new(0.0, self.rng.gen_range(-std::f32::consts::PI..std::f32::consts::PI), 0.0)
        };

        let jumped = airborne && self.rng.gen_bool(0.8);
        let double_jumped = jumped && self.rng.gen_bool(0.3);

        CarInfo::new(
            Vec3::new(
                self.rng.gen_range(-4500.0..4500.0),
                self.rng.gen_range(-2500.0..2500.0),
                height,
            ),
            rotation,
        )
        .with_jump_flags(jumped, double_jumped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_snapshots() {
        let mut a = DeterministicRng::new(7);
        let mut b = DeterministicRng::new(7);
        for _ in 0..20 {
            assert_eq!(a.snapshot(2), b.snapshot(2));
        }
    }

    #[test]
    fn test_snapshot_flags_consistent() {
        let mut rng = DeterministicRng::new(99);
        for _ in 0..200 {
            let snapshot = rng.snapshot(3);
            assert_eq!(snapshot.cars.len(), 3);
            for car in &snapshot.cars {
                // double jump без первого прыжка не бывает
                assert!(!car.double_jumped || car.jumped);
            }
        }
    }
}
