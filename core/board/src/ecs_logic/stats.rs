//! 屬性讀寫

use crate::domain::alias::StatValue;
use crate::domain::core_types::StatKind;
use crate::ecs_logic::notification::publish;
use crate::ecs_types::components::Stats;
use crate::ecs_types::resources::{NotificationArgs, NotificationKind};
use crate::error::{Result, UnitError};
use crate::logic::debug::short_type_name;
use bevy_ecs::prelude::{Entity, World};

fn missing_stats(unit: Entity) -> UnitError {
    UnitError::MissingComponent {
        entity: format!("{unit:?}"),
        component_name: short_type_name::<Stats>(),
    }
}

/// 讀取單位屬性
pub fn get_stat(world: &World, unit: Entity, kind: StatKind) -> Result<StatValue> {
    let stats = world.get::<Stats>(unit).ok_or_else(|| missing_stats(unit))?;
    Ok(stats[kind])
}

/// 寫入單位屬性
///
/// `notify` 為 true 且數值確實改變時，發送 `StatChanged(kind)` 給該單位的訂閱者。
/// 在通知處理函式內改寫屬性時應傳 false，避免重入同一輪通知。
pub fn set_stat(
    world: &mut World,
    unit: Entity,
    kind: StatKind,
    value: StatValue,
    notify: bool,
) -> Result<()> {
    let old = {
        let mut stats = world
            .get_mut::<Stats>(unit)
            .ok_or_else(|| missing_stats(unit))?;
        if stats[kind] == value {
            return Ok(());
        }
        stats.set(kind, value)
    };

    tracing::trace!(?unit, %kind, old, new = value, notify, "stat changed");
    if notify {
        publish(
            world,
            NotificationKind::StatChanged(kind),
            unit,
            None,
            NotificationArgs::StatChanged { old, new: value },
        )?;
    }
    Ok(())
}
