use std::time::Duration;

use horde_core::{
    palette, BulletBehavior, BulletSpawn, Command, Cue, Difficulty, Event, Vec2, ZombieId,
    ZombieKind,
};
use horde_system_combat::Combat;
use horde_world::{self as world, query, World};

fn started() -> World {
    let mut world = World::default();
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::StartRun {
            difficulty: Difficulty::Normal,
            started_at: Duration::ZERO,
        },
        &mut events,
    );
    world
}

fn spawn(world: &mut World, kind: ZombieKind, position: Vec2, max_hp: f32) -> ZombieId {
    let mut events = Vec::new();
    world::apply(
        world,
        Command::SpawnZombie {
            kind,
            position,
            max_hp,
            speed: 0.0,
        },
        &mut events,
    );
    match events.as_slice() {
        [Event::ZombieSpawned { zombie, .. }] => *zombie,
        other => panic!("unexpected events {other:?}"),
    }
}

fn fire(world: &mut World, position: Vec2, damage: f32, piercing: u32, behavior: BulletBehavior) {
    let mut events = Vec::new();
    world::apply(
        world,
        Command::SpawnBullet {
            bullet: BulletSpawn {
                position,
                velocity: Vec2::ZERO,
                radius: 4.0,
                damage,
                color: palette::BULLET,
                piercing: Some(piercing),
                lifetime: None,
                knockback: None,
                behavior,
            },
        },
        &mut events,
    );
}

fn resolve(world: &mut World) -> Vec<Event> {
    let mut events = Vec::new();
    Combat::new().resolve(&mut world.parts_mut(), &mut events);
    events
}

fn kills(events: &[Event]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, Event::ZombieKilled { .. }))
        .count()
}

#[test]
fn normal_zombie_dies_on_the_second_gun_hit() {
    let mut world = started();
    let target = Vec2::new(600.0, 600.0);
    let zombie = spawn(&mut world, ZombieKind::Normal, target, 35.0);
    for _ in 0..5 {
        fire(&mut world, target, 25.0, 0, BulletBehavior::Ballistic);
    }

    let events = resolve(&mut world);

    assert!(events.iter().any(|event| matches!(
        event,
        Event::ZombieKilled { zombie: id, kind: ZombieKind::Normal, score: 10, .. } if *id == zombie
    )));
    assert_eq!(kills(&events), 1);
    assert_eq!(query::bullets(&world).len(), 3);
    assert!(query::zombies(&world).is_empty());
    let stats = query::stats(&world);
    assert_eq!(stats.score, 10);
    assert_eq!(stats.kills, 1);
    let orbs = query::xp_orbs(&world);
    assert_eq!(orbs.len(), 1);
    assert_eq!(orbs[0].value, 5);
    assert!(!orbs[0].rare);
}

#[test]
fn piercing_bullet_survives_one_more_contact_than_its_charges() {
    let mut world = started();
    let origin = Vec2::new(600.0, 600.0);
    for _ in 0..4 {
        let _ = spawn(&mut world, ZombieKind::Tank, origin, 1_000.0);
    }
    fire(&mut world, origin, 10.0, 2, BulletBehavior::Ballistic);

    let _ = resolve(&mut world);

    let hp: Vec<f32> = query::zombies(&world).iter().map(|z| z.hp).collect();
    assert_eq!(hp, vec![990.0, 990.0, 990.0, 1_000.0]);
    assert!(query::bullets(&world).is_empty());
}

#[test]
fn mine_detonates_on_contact_and_damages_the_area() {
    let mut world = started();
    let mine = Vec2::new(600.0, 600.0);
    let _ = spawn(&mut world, ZombieKind::Tank, mine + Vec2::new(10.0, 0.0), 500.0);
    let _ = spawn(&mut world, ZombieKind::Tank, mine + Vec2::new(0.0, 110.0), 500.0);
    let _ = spawn(&mut world, ZombieKind::Tank, mine + Vec2::new(0.0, -125.0), 500.0);
    fire(&mut world, mine, 100.0, 1, BulletBehavior::Mine);

    let events = resolve(&mut world);

    let hp: Vec<f32> = query::zombies(&world).iter().map(|z| z.hp).collect();
    assert_eq!(hp, vec![400.0, 400.0, 500.0]);
    assert!(query::bullets(&world).is_empty());
    assert_eq!(
        events
            .iter()
            .filter(|event| **event == Event::Cue { cue: Cue::Explosion })
            .count(),
        1
    );
}

#[test]
fn parasite_splits_into_three_unscaled_children() {
    let mut world = started();
    let position = Vec2::new(800.0, 800.0);
    let _ = spawn(&mut world, ZombieKind::Parasite, position, 5.0);
    fire(&mut world, position, 25.0, 0, BulletBehavior::Ballistic);

    let events = resolve(&mut world);

    let children = query::zombies(&world);
    assert_eq!(children.len(), 3);
    let small = ZombieKind::ParasiteSmall.stats();
    for child in children {
        assert_eq!(child.kind, ZombieKind::ParasiteSmall);
        assert_eq!(child.hp, small.hp);
        assert!(child.position.distance(position) <= 20.0);
    }
    let spawned = events
        .iter()
        .filter(|event| matches!(event, Event::ZombieSpawned { .. }))
        .count();
    assert_eq!(spawned, 3);
}

#[test]
fn death_is_processed_exactly_once() {
    let mut world = started();
    let zombie = spawn(&mut world, ZombieKind::Fast, Vec2::new(700.0, 700.0), 20.0);
    let mut events = Vec::new();
    world::apply(&mut world, Command::StrikeZombie { zombie, damage: 150.0 }, &mut events);

    let mut combat = Combat::new();
    let mut first = Vec::new();
    combat.resolve(&mut world.parts_mut(), &mut first);
    let mut second = Vec::new();
    combat.resolve(&mut world.parts_mut(), &mut second);

    assert_eq!(kills(&first), 1);
    assert_eq!(kills(&second), 0);
    assert_eq!(query::run(&world).kills(), 1);
    assert_eq!(query::xp_orbs(&world).len(), 1);
}

#[test]
fn giant_drops_a_rare_orb() {
    let mut world = started();
    let zombie = spawn(&mut world, ZombieKind::Giant, Vec2::new(700.0, 700.0), 10.0);
    let mut events = Vec::new();
    world::apply(&mut world, Command::StrikeZombie { zombie, damage: 10.0 }, &mut events);

    let _ = resolve(&mut world);

    let orbs = query::xp_orbs(&world);
    assert_eq!(orbs.len(), 1);
    assert!(orbs[0].rare);
    assert_eq!(orbs[0].value, ZombieKind::Giant.stats().xp);
}

#[test]
fn twentieth_kill_advances_the_wave() {
    let mut world = started();
    for index in 0..20 {
        let position = Vec2::new(100.0 + index as f32 * 100.0, 200.0);
        let _ = spawn(&mut world, ZombieKind::Normal, position, 1.0);
        fire(&mut world, position, 25.0, 0, BulletBehavior::Ballistic);
    }

    let events = resolve(&mut world);

    assert_eq!(kills(&events), 20);
    assert!(events.contains(&Event::WaveAdvanced { wave: 2 }));
    assert_eq!(query::run(&world).wave(), 2);
}
