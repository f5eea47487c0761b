//! Recovery: выравнивание машины в воздухе

use crate::components::{BotConfig, ControlIntent};
use crate::perception::DerivedState;

/// Один тик коррекции ориентации
///
/// Работает только в воздухе (height > airborne_height). За тик правится одна
/// ось: сначала roll, pitch только когда roll уже в допуске.
/// throttle/steer/jump не трогаются.
pub fn recover(intent: ControlIntent, derived: &DerivedState, config: &BotConfig) -> ControlIntent {
    if derived.car_height <= config.airborne_height {
        return intent;
    }

    let rotation = derived.car_rotation;
    let mut next = intent;

    if rotation.roll > config.roll_tolerance {
        next.roll = -1.0;
    } else if rotation.roll < -config.roll_tolerance {
        next.roll = 1.0;
    } else if rotation.pitch > config.pitch_tolerance {
        next.pitch = 1.0;
    } else if rotation.pitch < -config.pitch_tolerance {
        next.pitch = -1.0;
    }

    next
}
