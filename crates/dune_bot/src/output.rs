//! Intent → ControlOutput

use crate::components::{ControlIntent, ControlOutput};

/// Бот всегда жмёт газ в пол
pub const FULL_THROTTLE: f32 = 1.0;

/// Прямое отображение intent в контракт хоста, без clamping
pub fn assemble(intent: &ControlIntent) -> ControlOutput {
    ControlOutput {
        throttle: FULL_THROTTLE,
        steer: intent.turn,
        pitch: intent.pitch,
        yaw: intent.yaw,
        roll: intent.roll,
        jump: intent.jump,
        boost: intent.boost,
        handbrake: intent.powerslide,
    }
}
