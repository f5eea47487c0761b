//! Руление к мячу

use crate::components::{BotConfig, ControlIntent};
use crate::perception::DerivedState;

/// Один тик руления по `steer_correction`
///
/// Положительная коррекция = мяч слева → turn/yaw = -1.
/// На резком повороте (|correction| > powerslide_angle): powerslide и без буста.
/// Это единственное место, где буст выключается.
pub fn steer_to_ball(intent: ControlIntent, derived: &DerivedState, config: &BotConfig) -> ControlIntent {
    let correction = derived.steer_correction;
    let mut next = intent;

    if correction > config.steer_deadzone {
        next.turn = -1.0;
        next.yaw = -1.0;
        if correction > config.powerslide_angle {
            next.powerslide = true;
            next.boost = false;
        }
    } else if correction < -config.steer_deadzone {
        next.turn = 1.0;
        next.yaw = 1.0;
        if correction < -config.powerslide_angle {
            next.powerslide = true;
            next.boost = false;
        }
    } else {
        next.turn = 0.0;
        next.powerslide = false;
    }

    next
}
