//! 狀態效果：掛上 / 移除 / 回合開始時的作用
//!
//! 效果掛在單位上時恰好持有一個 `TurnBegan` 訂閱，移除時恰好取消一次。

use crate::domain::alias::StatValue;
use crate::domain::constants::BURN_HP_DIVISOR;
use crate::domain::core_types::{StatKind, StatusEffectKind};
use crate::ecs_logic::notification::{subscribe, unsubscribe};
use crate::ecs_logic::stats::{get_stat, set_stat};
use crate::ecs_types::components::{ActiveStatusEffect, StatusEffects, Unit};
use crate::ecs_types::resources::{NotificationKind, SubscriptionId};
use crate::error::{Context, Result};
use bevy_ecs::prelude::{Entity, World};

/// 已掛上的狀態效果，移除時使用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEffectHandle {
    pub owner: Entity,
    pub kind: StatusEffectKind,
    pub subscription: SubscriptionId,
}

/// 將狀態效果掛到單位上
///
/// 實體不存在或不是單位時不做任何事，回傳 `None`（不會產生訂閱）。
pub fn attach_status_effect(
    world: &mut World,
    unit: Entity,
    kind: StatusEffectKind,
) -> Option<StatusEffectHandle> {
    if world.get::<Unit>(unit).is_none() {
        tracing::warn!(?unit, %kind, "attach ignored: owner is not a unit on the board");
        return None;
    }

    let subscription = subscribe(
        world,
        NotificationKind::TurnBegan,
        unit,
        move |world: &mut World, _| {
            on_turn_began(world, unit, kind).context(format!("{kind} 回合開始效果"))
        },
    );

    let entry = ActiveStatusEffect { kind, subscription };
    if world.get::<StatusEffects>(unit).is_none() {
        world.entity_mut(unit).insert(StatusEffects::default());
    }
    if let Some(mut effects) = world.get_mut::<StatusEffects>(unit) {
        effects.0.push(entry);
    }

    tracing::debug!(?unit, %kind, ?subscription, "status effect attached");
    Some(StatusEffectHandle {
        owner: unit,
        kind,
        subscription,
    })
}

/// 移除狀態效果
///
/// 可重複呼叫；已移除過的 handle 回傳 `false`。
pub fn detach_status_effect(world: &mut World, handle: StatusEffectHandle) -> bool {
    let unregistered = world
        .get_mut::<StatusEffects>(handle.owner)
        .is_some_and(|mut effects| {
            let before = effects.0.len();
            effects
                .0
                .retain(|effect| effect.subscription != handle.subscription);
            effects.0.len() != before
        });
    let unsubscribed = unsubscribe(world, handle.subscription);

    if unregistered || unsubscribed {
        tracing::debug!(owner = ?handle.owner, kind = %handle.kind, "status effect detached");
    }
    unregistered || unsubscribed
}

/// 移除單位身上所有狀態效果，回傳移除數量
pub fn clear_status_effects(world: &mut World, unit: Entity) -> usize {
    let effects = match world.get_mut::<StatusEffects>(unit) {
        Some(mut effects) => std::mem::take(&mut effects.0),
        None => return 0,
    };
    for effect in &effects {
        unsubscribe(world, effect.subscription);
    }
    tracing::debug!(?unit, count = effects.len(), "status effects cleared");
    effects.len()
}

/// 燃燒扣血量：最大 HP 的 1/15，不超過目前 HP，且不小於 0
pub fn burn_damage(current_hp: StatValue, max_hp: StatValue) -> StatValue {
    current_hp.min(max_hp / BURN_HP_DIVISOR).max(0)
}

fn on_turn_began(world: &mut World, owner: Entity, kind: StatusEffectKind) -> Result<()> {
    match kind {
        StatusEffectKind::Burn => {
            let current_hp = get_stat(world, owner, StatKind::Hp)?;
            let max_hp = get_stat(world, owner, StatKind::MaxHp)?;
            let reduce = burn_damage(current_hp, max_hp);
            // 在通知處理中寫入，不再發出屬性通知
            set_stat(world, owner, StatKind::Hp, current_hp.saturating_sub(reduce), false)
        }
    }
}
