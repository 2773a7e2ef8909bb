//! ECS Component 定義

use crate::domain::alias::StatValue;
use crate::domain::core_types::{StatKind, StatusEffectKind};
use crate::ecs_types::resources::{NotificationCenter, SubscriptionId};
use bevy_ecs::bundle::Bundle;
use bevy_ecs::component::{Component, HookContext};
use bevy_ecs::world::DeferredWorld;
use std::ops::Index;
use strum::EnumCount;

/// 標記為單位的 Component
#[derive(Debug, Clone, Copy, Component)]
pub struct Unit;

// ============================================================================
// 屬性
// ============================================================================

/// 單位屬性表，以 `StatKind` 索引
///
/// 直接寫入不會發出通知；需要通知時使用 `ecs_logic::stats::set_stat`。
#[derive(Debug, Clone, PartialEq, Eq, Component)]
pub struct Stats {
    values: [StatValue; StatKind::COUNT],
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            values: [0; StatKind::COUNT],
        }
    }
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// builder 形式設定初始值
    pub fn with(mut self, kind: StatKind, value: StatValue) -> Self {
        self.set(kind, value);
        self
    }

    pub fn get(&self, kind: StatKind) -> StatValue {
        self.values[kind as usize]
    }

    /// 寫入並回傳舊值
    pub fn set(&mut self, kind: StatKind, value: StatValue) -> StatValue {
        std::mem::replace(&mut self.values[kind as usize], value)
    }
}

impl Index<StatKind> for Stats {
    type Output = StatValue;

    fn index(&self, kind: StatKind) -> &StatValue {
        &self.values[kind as usize]
    }
}

// ============================================================================
// 狀態效果
// ============================================================================

/// 掛在單位上、仍在訂閱中的狀態效果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveStatusEffect {
    pub kind: StatusEffectKind,
    pub subscription: SubscriptionId,
}

/// 單位的狀態效果登記表
///
/// 每筆紀錄對應通知中心內恰好一個訂閱；移除紀錄時必須同時取消訂閱。
/// Component 被移除或覆寫（包含 despawn）時，剩下的訂閱會一併取消。
#[derive(Debug, Clone, Default, Component)]
#[component(on_replace = release_subscriptions)]
pub struct StatusEffects(pub Vec<ActiveStatusEffect>);

fn release_subscriptions(mut world: DeferredWorld, context: HookContext) {
    let Some(effects) = world.get::<StatusEffects>(context.entity) else {
        return;
    };
    let subscriptions: Vec<SubscriptionId> =
        effects.0.iter().map(|effect| effect.subscription).collect();
    if subscriptions.is_empty() {
        return;
    }
    let Some(mut center) = world.get_resource_mut::<NotificationCenter>() else {
        return;
    };
    let released = subscriptions
        .into_iter()
        .filter(|&id| center.remove(id))
        .count();
    tracing::debug!(entity = ?context.entity, released, "status effect subscriptions released");
}

impl StatusEffects {
    pub fn kinds(&self) -> impl Iterator<Item = StatusEffectKind> + '_ {
        self.0.iter().map(|effect| effect.kind)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Bundles
// ============================================================================

/// 單位 Entity 的完整 Bundle
#[derive(Debug, Bundle)]
pub struct UnitBundle {
    pub unit: Unit,
    pub stats: Stats,
    pub status_effects: StatusEffects,
}
