//! 通知派送（訂閱 / 取消訂閱 / 發送）
//!
//! 派送是同步的，在呼叫 `publish` 的流程內依訂閱順序執行。
//! 派送前先複製處理函式清單，處理函式可以再 `publish` 或改動訂閱而不會卡住。

use crate::ecs_types::resources::{
    Handler, Notification, NotificationArgs, NotificationCenter, NotificationKind, SubscriptionId,
};
use crate::error::{Context, Result};
use bevy_ecs::prelude::{Entity, World};
use std::sync::Arc;

/// 訂閱 `(kind, subject)` 的通知
pub fn subscribe<F>(
    world: &mut World,
    kind: NotificationKind,
    subject: Entity,
    handler: F,
) -> SubscriptionId
where
    F: Fn(&mut World, &Notification) -> Result<()> + Send + Sync + 'static,
{
    let handler: Handler = Arc::new(handler);
    let id = world
        .get_resource_or_insert_with(NotificationCenter::default)
        .add(kind, subject, handler);
    tracing::debug!(?kind, ?subject, ?id, "subscribed");
    id
}

/// 取消訂閱；訂閱不存在時不做任何事並回傳 `false`
pub fn unsubscribe(world: &mut World, id: SubscriptionId) -> bool {
    let removed = world
        .get_resource_mut::<NotificationCenter>()
        .is_some_and(|mut center| center.remove(id));
    if removed {
        tracing::debug!(?id, "unsubscribed");
    } else {
        tracing::trace!(?id, "unsubscribe ignored: no such subscription");
    }
    removed
}

/// 發送通知，回傳被呼叫的處理函式數量
///
/// 所有處理函式都會被呼叫；若有失敗，回傳第一個錯誤。
/// 派送途中被取消的訂閱不會再收到這次通知。
pub fn publish(
    world: &mut World,
    kind: NotificationKind,
    subject: Entity,
    sender: Option<Entity>,
    args: NotificationArgs,
) -> Result<usize> {
    let observers = match world.get_resource::<NotificationCenter>() {
        Some(center) => center.snapshot(kind, subject),
        None => Vec::new(),
    };

    let notification = Notification {
        kind,
        subject,
        sender,
        args,
    };

    let mut delivered = 0;
    let mut first_error = None;
    for observer in observers {
        let still_subscribed = world
            .get_resource::<NotificationCenter>()
            .is_some_and(|center| center.is_subscribed(observer.id));
        if !still_subscribed {
            continue;
        }

        delivered += 1;
        if let Err(e) = (observer.handler)(world, &notification) {
            tracing::warn!(?kind, ?subject, id = ?observer.id, "notification handler failed: {e}");
            if first_error.is_none() {
                first_error = Some(e);
            }
        }
    }

    tracing::trace!(?kind, ?subject, delivered, "published");
    match first_error {
        Some(e) => Err::<usize, _>(e).context(format!("派送通知 {kind:?} 給 {subject:?}")),
        None => Ok(delivered),
    }
}

/// 目前的訂閱總數
pub fn subscription_count(world: &World) -> usize {
    world
        .get_resource::<NotificationCenter>()
        .map_or(0, |center| center.len())
}
