//! 回合通知

use crate::ecs_logic::notification::publish;
use crate::ecs_types::resources::{NotificationArgs, NotificationKind};
use crate::error::Result;
use bevy_ecs::prelude::{Entity, World};

/// 發送「回合開始」給行動中的單位，回傳收到通知的處理函式數量
pub fn begin_turn(world: &mut World, unit: Entity) -> Result<usize> {
    tracing::debug!(?unit, "turn began");
    publish(
        world,
        NotificationKind::TurnBegan,
        unit,
        None,
        NotificationArgs::None,
    )
}

/// 發送「回合結束」
pub fn complete_turn(world: &mut World, unit: Entity) -> Result<usize> {
    tracing::debug!(?unit, "turn completed");
    publish(
        world,
        NotificationKind::TurnCompleted,
        unit,
        None,
        NotificationArgs::None,
    )
}
