//! Maneuver primitives
//!
//! Каждый примитив получает intent, собранный к этому моменту тика, и
//! возвращает новый. Состояния у примитивов нет; решение, какой из них
//! вызывать, принимает FSM (`crate::ai::controller`).

pub mod dodge;
pub mod recover;
pub mod steer;


pub use dodge::{trigger_dodge, DodgeTrigger, DEFAULT_DODGE_DELAY};
pub use recover::recover;
pub use steer::steer_to_ball;
