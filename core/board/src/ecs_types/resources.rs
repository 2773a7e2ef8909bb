//! ECS World Resource 定義

use crate::domain::alias::StatValue;
use crate::domain::core_types::StatKind;
use crate::error::Result;
use bevy_ecs::prelude::{Entity, Resource, World};
use std::collections::HashMap;
use std::sync::Arc;

/// 通知種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// 單位回合開始
    TurnBegan,
    /// 單位回合結束
    TurnCompleted,
    /// 單位屬性改變
    StatChanged(StatKind),
}

/// 通知附帶的資料
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationArgs {
    None,
    StatChanged { old: StatValue, new: StatValue },
}

/// 一次發送的通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    /// 通知對象（例如回合開始的單位）
    pub subject: Entity,
    /// 發送者，`None` 表示由系統發出
    pub sender: Option<Entity>,
    pub args: NotificationArgs,
}

/// 訂閱代號，取消訂閱時使用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// 通知處理函式
pub type Handler = Arc<dyn Fn(&mut World, &Notification) -> Result<()> + Send + Sync>;

#[derive(Clone)]
pub(crate) struct Observer {
    pub id: SubscriptionId,
    pub handler: Handler,
}

/// 通知中心（以 `(種類, 對象)` 為 key 的訂閱表）
#[derive(Default, Resource)]
pub struct NotificationCenter {
    next_id: u64,
    observers: HashMap<(NotificationKind, Entity), Vec<Observer>>,
    keys: HashMap<SubscriptionId, (NotificationKind, Entity)>,
}

impl NotificationCenter {
    pub(crate) fn add(
        &mut self,
        kind: NotificationKind,
        subject: Entity,
        handler: Handler,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers
            .entry((kind, subject))
            .or_default()
            .push(Observer { id, handler });
        self.keys.insert(id, (kind, subject));
        id
    }

    /// 移除訂閱，不存在時回傳 `false`
    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let Some(key) = self.keys.remove(&id) else {
            return false;
        };
        if let Some(list) = self.observers.get_mut(&key) {
            list.retain(|observer| observer.id != id);
            if list.is_empty() {
                self.observers.remove(&key);
            }
        }
        true
    }

    /// 依訂閱順序複製出處理函式，讓派送期間不持有 resource 借用
    pub(crate) fn snapshot(&self, kind: NotificationKind, subject: Entity) -> Vec<Observer> {
        self.observers
            .get(&(kind, subject))
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.keys.contains_key(&id)
    }

    /// 目前的訂閱總數（測試用於檢查洩漏）
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("next_id", &self.next_id)
            .field("subscriptions", &self.keys)
            .finish()
    }
}
