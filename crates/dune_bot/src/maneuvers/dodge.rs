//! Dodge: первая половина (прыжок + взвод таймера)
//!
//! Вторая половина (прыжок + pitch = -1 после deadline) живёт в FSM,
//! в ветке `BotMode::Dodging`.

use crate::components::ControlIntent;

/// Задержка между прыжками по умолчанию (секунды)
pub const DEFAULT_DODGE_DELAY: f64 = 0.1;

/// Результат взвода: intent с прыжком и момент второго прыжка
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DodgeTrigger {
    pub intent: ControlIntent,
    pub deadline: f64,
}

pub fn trigger_dodge(intent: ControlIntent, now: f64, delay: f64) -> DodgeTrigger {
    DodgeTrigger {
        intent: ControlIntent { jump: true, ..intent },
        deadline: now + delay,
    }
}
