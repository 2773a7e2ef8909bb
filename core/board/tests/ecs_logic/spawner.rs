//! 單位生命週期與回合通知測試

use super::setup_world_with_unit;
use bevy_ecs::prelude::{Entity, World};
use board::domain::core_types::{StatKind, StatusEffectKind};
use board::ecs_logic::notification::{subscribe, subscription_count};
use board::ecs_logic::spawner::{despawn_unit, spawn_unit};
use board::ecs_logic::status_effect::attach_status_effect;
use board::ecs_logic::turn::{begin_turn, complete_turn};
use board::ecs_types::components::{Stats, StatusEffects, Unit};
use board::ecs_types::resources::NotificationKind;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_spawn_unit() {
    let (world, unit) = setup_world_with_unit(40, 60);

    assert!(world.get::<Unit>(unit).is_some());
    let stats = world.get::<Stats>(unit).unwrap();
    assert_eq!(stats[StatKind::Hp], 40);
    assert_eq!(stats[StatKind::MaxHp], 60);
    assert!(world.get::<StatusEffects>(unit).unwrap().is_empty());
}

#[test]
fn test_despawn_unit_releases_subscriptions() {
    let (mut world, unit) = setup_world_with_unit(100, 150);
    attach_status_effect(&mut world, unit, StatusEffectKind::Burn).unwrap();
    attach_status_effect(&mut world, unit, StatusEffectKind::Burn).unwrap();
    assert_eq!(subscription_count(&world), 2);

    assert!(despawn_unit(&mut world, unit));
    assert_eq!(subscription_count(&world), 0);
    assert_eq!(begin_turn(&mut world, unit).unwrap(), 0);

    // 已移除的單位
    assert!(!despawn_unit(&mut world, unit));
}

#[test]
fn test_removing_status_effects_releases_subscriptions() {
    // (說明, 移除方式)
    let test_data: [(&str, fn(&mut World, Entity)); 3] = [
        ("world.despawn", |world, unit| {
            assert!(world.despawn(unit));
        }),
        ("移除 component", |world, unit| {
            world.entity_mut(unit).remove::<StatusEffects>();
        }),
        ("覆寫 component", |world, unit| {
            world.entity_mut(unit).insert(StatusEffects::default());
        }),
    ];

    for (name, remove) in test_data {
        let (mut world, unit) = setup_world_with_unit(100, 150);
        let other = spawn_unit(&mut world, Stats::new().with(StatKind::Hp, 30));
        attach_status_effect(&mut world, unit, StatusEffectKind::Burn).unwrap();
        attach_status_effect(&mut world, other, StatusEffectKind::Burn).unwrap();
        assert_eq!(subscription_count(&world), 2, "{name}");

        remove(&mut world, unit);

        // 只有被移除的單位的訂閱被取消
        assert_eq!(subscription_count(&world), 1, "{name}");
        assert_eq!(begin_turn(&mut world, unit).unwrap(), 0, "{name}");
        assert_eq!(begin_turn(&mut world, other).unwrap(), 1, "{name}");
    }
}

#[test]
fn test_turn_notifications() {
    let (mut world, unit) = setup_world_with_unit(100, 150);
    let began = Arc::new(AtomicUsize::new(0));
    let completed = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&began);
    subscribe(&mut world, NotificationKind::TurnBegan, unit, move |_, n| {
        assert_eq!(n.sender, None);
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    let counter = Arc::clone(&completed);
    subscribe(&mut world, NotificationKind::TurnCompleted, unit, move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    begin_turn(&mut world, unit).unwrap();
    complete_turn(&mut world, unit).unwrap();
    begin_turn(&mut world, unit).unwrap();

    assert_eq!(began.load(Ordering::SeqCst), 2);
    assert_eq!(completed.load(Ordering::SeqCst), 1);
}
