//! FSM бота: Chase / Recovery / Dodging
//!
//! Один вызов `decide` = один тик. Порядок ветвей фиксированный, за тик
//! выполняется ровно один путь (действие или переход).
//!
//! Архитектура:
//! - входной AgentState не мутируется, `decide` возвращает новый
//! - intent собирается с нейтральной базы через maneuver primitives
//! - время: секунды монотонных часов, читаются хостом/Bot перед вызовом

use crate::components::{AgentState, BotConfig, BotMode, ControlIntent, DISARMED_DEADLINE};
use crate::maneuvers::{recover, steer_to_ball, trigger_dodge};
use crate::perception::DerivedState;

/// Следующее состояние агента по текущему состоянию и восприятию
pub fn decide(state: &AgentState, derived: &DerivedState, config: &BotConfig, now: f64) -> AgentState {
    let mut next = AgentState {
        intent: tick_baseline(state, config),
        ..*state
    };

    match state.mode {
        BotMode::Recovery => {
            if derived.car_height > config.recovery_height && derived.within_boundaries {
                next.intent = recover(next.intent, derived, config);
            } else {
                next.mode = BotMode::Chase;
            }
        }

        BotMode::Dodging => {
            if now > state.dodge_deadline {
                // Второй прыжок только если первый засчитан и флип ещё не сделан.
                // Иначе остаёмся в Dodging без действий (см. DESIGN.md, stall)
                if derived.jumped && !derived.double_jumped {
                    next.intent.jump = true;
                    next.intent.pitch = -1.0;
                    next.dodge_deadline = DISARMED_DEADLINE;
                    next.mode = BotMode::Chase;
                }
            } else {
                // До deadline держим jump отпущенным
                next.intent.jump = false;
            }
        }

        BotMode::Chase => {
            next.intent = steer_to_ball(next.intent, derived, config);

            if !derived.jumped {
                if should_front_flip(derived, config) || should_speed_dodge(derived, config) {
                    let trigger = trigger_dodge(next.intent, now, config.dodge_delay);
                    next.intent = trigger.intent;
                    next.dodge_deadline = trigger.deadline;
                    next.mode = BotMode::Dodging;
                }
            } else if derived.car_height > config.recovery_height && derived.within_boundaries {
                next.mode = BotMode::Recovery;
            }
        }
    }

    next
}

/// Intent в начале тика
///
/// По умолчанию нейтральный; со `sticky_intents` тянется с прошлого тика.
fn tick_baseline(state: &AgentState, config: &BotConfig) -> ControlIntent {
    if config.sticky_intents {
        state.intent
    } else {
        ControlIntent::NEUTRAL
    }
}

/// Близкий низкий мяч: front-flip в него
fn should_front_flip(derived: &DerivedState, config: &BotConfig) -> bool {
    derived.distance_to_ball < config.close_dodge_distance && derived.ball_height < config.low_ball_height
}

/// Далеко, на земле и смотрим на мяч: speed-dodge к нему
fn should_speed_dodge(derived: &DerivedState, config: &BotConfig) -> bool {
    derived.distance_to_ball > config.speed_dodge_distance
        && derived.car_height < config.airborne_height
        && derived.facing_ball
}
