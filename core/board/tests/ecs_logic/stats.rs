//! 屬性讀寫與通知測試

use super::setup_world_with_unit;
use board::domain::core_types::StatKind;
use board::ecs_logic::notification::subscribe;
use board::ecs_logic::stats::{get_stat, set_stat};
use board::ecs_types::components::Stats;
use board::ecs_types::resources::{NotificationArgs, NotificationKind};
use board::error::{ErrorKind, UnitError};
use std::sync::{Arc, Mutex};
use strum::IntoEnumIterator;

#[test]
fn test_stats_table() {
    let stats = Stats::new().with(StatKind::Hp, 30).with(StatKind::Speed, 7);

    for kind in StatKind::iter() {
        let expected = match kind {
            StatKind::Hp => 30,
            StatKind::Speed => 7,
            _ => 0,
        };
        assert_eq!(stats[kind], expected, "{kind}");
        assert_eq!(stats.get(kind), expected, "{kind}");
    }

    let mut stats = stats;
    assert_eq!(stats.set(StatKind::Hp, 12), 30);
    assert_eq!(stats[StatKind::Hp], 12);
}

#[test]
fn test_set_stat_notifies_on_change() {
    let (mut world, unit) = setup_world_with_unit(100, 150);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_handler = Arc::clone(&seen);
    subscribe(
        &mut world,
        NotificationKind::StatChanged(StatKind::Hp),
        unit,
        move |_, n| {
            seen_in_handler.lock().unwrap().push(n.args);
            Ok(())
        },
    );

    set_stat(&mut world, unit, StatKind::Hp, 80, true).unwrap();
    // 數值未變不發通知
    set_stat(&mut world, unit, StatKind::Hp, 80, true).unwrap();
    // 不通知的寫入
    set_stat(&mut world, unit, StatKind::Hp, 70, false).unwrap();
    // 其他屬性不影響 Hp 的訂閱者
    set_stat(&mut world, unit, StatKind::Attack, 5, true).unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![NotificationArgs::StatChanged { old: 100, new: 80 }]
    );
    assert_eq!(get_stat(&world, unit, StatKind::Hp).unwrap(), 70);
    assert_eq!(get_stat(&world, unit, StatKind::Attack).unwrap(), 5);
}

#[test]
fn test_stat_access_without_stats_component() {
    let (mut world, _) = setup_world_with_unit(1, 1);
    let bare = world.spawn_empty().id();

    let err = get_stat(&world, bare, StatKind::Hp).unwrap_err();
    assert!(
        matches!(
            err.kind(),
            ErrorKind::Unit(UnitError::MissingComponent { component_name, .. }) if component_name == "Stats"
        ),
        "{err}"
    );
    assert!(set_stat(&mut world, bare, StatKind::Hp, 3, false).is_err());
}
