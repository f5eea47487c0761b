//! Bot: обвязка вокруг FSM для одного управляемого автомобиля
//!
//! Жизненный цикл:
//! - `Bot::new` → `initialize` (Chase, нейтральный intent, deadline 0)
//! - каждый тик хост зовёт `tick(&snapshot)` и получает полный ControlOutput
//!
//! Тик никогда не паникует: битый snapshot даёт нейтральный output,
//! ошибки debug sink логируются и игнорируются.

use bevy::prelude::*;

use crate::ai::decide;
use crate::clock::{Clock, MonotonicClock};
use crate::components::{AgentState, BotConfig, BotMode, ControlOutput, WorldSnapshot};
use crate::debug_render::{draw_debug, DebugRenderer};
use crate::output::assemble;
use crate::perception::perceive;

#[derive(Component)]
#[require(ControlOutput)]
pub struct Bot {
    /// Индекс нашей машины в `WorldSnapshot::cars`
    pub car_index: usize,
    pub config: BotConfig,
    state: AgentState,
    clock: Box<dyn Clock>,
    renderer: Option<Box<dyn DebugRenderer>>,
    /// Ошибку sink'а пишем в лог один раз, а не каждый тик
    render_failure_logged: bool,
}

impl Bot {
    pub fn new(car_index: usize, config: BotConfig) -> Self {
        let mut bot = Self {
            car_index,
            config,
            state: AgentState::new(),
            clock: Box::new(MonotonicClock::new()),
            renderer: None,
            render_failure_logged: false,
        };
        bot.initialize();
        bot
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_renderer(mut self, renderer: impl DebugRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Lifecycle hook хоста: вызывается до первого тика
    pub fn initialize(&mut self) {
        self.state = AgentState::new();
        self.render_failure_logged = false;
        crate::log_info(&format!(
            "🚗 Bot initialized: car #{}, mode {}",
            self.car_index, self.state.mode
        ));
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn mode(&self) -> BotMode {
        self.state.mode
    }

    /// Тик по собственным часам бота
    pub fn tick(&mut self, snapshot: &WorldSnapshot) -> ControlOutput {
        let now = self.clock.now();
        self.tick_at(snapshot, now)
    }

    /// Тик с явным временем (секунды монотонных часов хоста)
    pub fn tick_at(&mut self, snapshot: &WorldSnapshot, now: f64) -> ControlOutput {
        let derived = match perceive(snapshot, self.car_index, &self.config) {
            Ok(derived) => derived,
            Err(err) => {
                crate::log_error(&format!("❌ Bot car #{}: bad snapshot: {}", self.car_index, err));
                return ControlOutput::default();
            }
        };

        let next = decide(&self.state, &derived, &self.config, now);
        if next.mode != self.state.mode {
            crate::log(&format!(
                "🔄 Bot car #{}: {} → {} (distance {:.0}, correction {:.2} rad, height {:.0})",
                self.car_index,
                self.state.mode,
                next.mode,
                derived.distance_to_ball,
                derived.steer_correction,
                derived.car_height,
            ));
        }
        self.state = next;

        if let Some(car) = snapshot.car(self.car_index) {
            self.render(car.physics.location, snapshot.ball.physics.location);
        }

        assemble(&self.state.intent)
    }

    fn render(&mut self, car: Vec3, ball: Vec3) {
        let Some(renderer) = self.renderer.as_deref_mut() else {
            return;
        };

        if let Err(err) = draw_debug(renderer, car, ball, self.state.mode.label()) {
            if !self.render_failure_logged {
                crate::log_warning(&format!("⚠️ Debug renderer failed (further failures muted): {}", err));
                self.render_failure_logged = true;
            }
        }
    }
}
