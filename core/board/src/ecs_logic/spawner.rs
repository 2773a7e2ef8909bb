//! 單位生成與移除

use crate::ecs_types::components::{Stats, StatusEffects, Unit, UnitBundle};
use bevy_ecs::prelude::{Entity, World};

/// 生成單位 Entity
pub fn spawn_unit(world: &mut World, stats: Stats) -> Entity {
    let unit = world
        .spawn(UnitBundle {
            unit: Unit,
            stats,
            status_effects: StatusEffects::default(),
        })
        .id();
    tracing::debug!(?unit, "unit spawned");
    unit
}

/// 將單位移出棋盤
///
/// 狀態效果的訂閱由 `StatusEffects` 的移除 hook 取消；實體不存在時回傳 `false`。
pub fn despawn_unit(world: &mut World, unit: Entity) -> bool {
    let despawned = world.despawn(unit);
    tracing::debug!(?unit, despawned, "unit despawned");
    despawned
}
