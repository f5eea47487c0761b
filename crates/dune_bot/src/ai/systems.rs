//! ECS адаптер: боты как компоненты, тик в FixedUpdate

use bevy::prelude::*;

use crate::bot::Bot;
use crate::components::{ControlOutput, WorldSnapshot};

/// Система: один тик для каждого бота
///
/// Хост кладёт свежий `WorldSnapshot` в ресурсы перед `FixedUpdate` и
/// забирает `ControlOutput` с entity после. Пока snapshot нет: ничего не делаем.
/// Время берём из `Time<Real>` (монотонное, не масштабируется паузой).
pub fn bot_tick(
    snapshot: Option<Res<WorldSnapshot>>,
    time: Res<Time<Real>>,
    mut bots: Query<(&mut Bot, &mut ControlOutput)>,
) {
    let Some(snapshot) = snapshot else {
        return;
    };
    let now = time.elapsed_secs_f64();

    for (mut bot, mut output) in bots.iter_mut() {
        *output = bot.tick_at(&snapshot, now);
    }
}
