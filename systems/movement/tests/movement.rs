use std::time::Duration;

use horde_core::{
    palette, Aim, BulletBehavior, BulletSpawn, Command, Difficulty, FrameInput, UpgradeId, Vec2,
    ZombieKind, MAX_LEVEL,
};
use horde_system_movement::Movement;
use horde_world::{self as world, query, World, XpOrb};

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

fn input(keyboard: Vec2) -> FrameInput {
    FrameInput {
        keyboard,
        joystick: Vec2::ZERO,
        aim: Aim::Stick(Vec2::X),
        fire: false,
    }
}

#[test]
fn player_never_leaves_the_inset_world() {
    let mut world = started();
    let mut movement = Movement::new();
    for _ in 0..1_000 {
        movement.steer(&input(Vec2::new(-1.0, 1.0)), &mut world.parts_mut());
    }
    let player = query::player(&world);
    assert_eq!(
        player.position,
        Vec2::new(player.radius, 3_000.0 - player.radius)
    );
}

#[test]
fn diagonal_input_moves_at_base_speed() {
    let mut world = started();
    let before = query::player(&world).position;
    Movement::new().steer(&input(Vec2::new(1.0, 1.0)), &mut world.parts_mut());
    let travelled = query::player(&world).position.distance(before);
    assert!((travelled - 4.0).abs() < 1e-4);
}

#[test]
fn magnet_pulls_orbs_inside_its_radius_only() {
    let mut world = started();
    let player = query::player(&world).position;
    {
        let parts = world.parts_mut();
        for offset in [50.0, 150.0] {
            parts.store.xp_orbs.push(XpOrb {
                position: player + Vec2::new(offset, 0.0),
                velocity: Vec2::ZERO,
                radius: 4.0,
                value: 5,
                rare: false,
            });
        }
    }
    Movement::new().integrate(&mut world.parts_mut());

    let orbs = query::xp_orbs(&world);
    assert!((orbs[0].position.x - (player.x + 48.5)).abs() < 1e-3);
    assert!((orbs[0].velocity.x + 1.35).abs() < 1e-4);
    assert_eq!(orbs[1].position, player + Vec2::new(150.0, 0.0));
}

#[test]
fn magnet_upgrade_widens_the_pull() {
    let mut world = started();
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::ApplyUpgrade {
            upgrade: UpgradeId::Magnet,
        },
        &mut events,
    );
    let player = query::player(&world).position;
    world.parts_mut().store.xp_orbs.push(XpOrb {
        position: player + Vec2::new(120.0, 0.0),
        velocity: Vec2::ZERO,
        radius: 4.0,
        value: 5,
        rare: false,
    });
    Movement::new().integrate(&mut world.parts_mut());
    assert!(query::xp_orbs(&world)[0].velocity.x < 0.0);
}

#[test]
fn evolved_magnet_reaches_orbs_far_away() {
    let mut world = started();
    let mut events = Vec::new();
    for _ in 0..MAX_LEVEL {
        world::apply(
            &mut world,
            Command::ApplyUpgrade {
                upgrade: UpgradeId::Magnet,
            },
            &mut events,
        );
    }
    assert!((query::magnet_radius(&world) - 675.0).abs() < 1e-3);
    let player = query::player(&world).position;
    world.parts_mut().store.xp_orbs.push(XpOrb {
        position: player + Vec2::new(250.0, 0.0),
        velocity: Vec2::ZERO,
        radius: 4.0,
        value: 5,
        rare: false,
    });

    Movement::new().integrate(&mut world.parts_mut());

    let orb = &query::xp_orbs(&world)[0];
    assert!((orb.velocity.x + 1.35).abs() < 1e-4);
    assert!(orb.velocity.y.abs() < 1e-6);
    assert!(orb.position.distance(player) < 250.0);
}

#[test]
fn bullets_leaving_the_world_or_expiring_are_dropped() {
    let mut world = started();
    let mut events = Vec::new();
    let shot = |position: Vec2, velocity: Vec2, lifetime: Option<u32>| BulletSpawn {
        position,
        velocity,
        radius: 4.0,
        damage: 10.0,
        color: palette::BULLET,
        piercing: Some(0),
        lifetime,
        knockback: None,
        behavior: BulletBehavior::Ballistic,
    };
    for bullet in [
        shot(Vec2::new(2_995.0, 100.0), Vec2::new(12.0, 0.0), None),
        shot(Vec2::new(500.0, 500.0), Vec2::new(1.0, 0.0), Some(1)),
        shot(Vec2::new(500.0, 500.0), Vec2::new(1.0, 0.0), Some(2)),
    ] {
        world::apply(&mut world, Command::SpawnBullet { bullet }, &mut events);
    }
    Movement::new().integrate(&mut world.parts_mut());

    let bullets = query::bullets(&world);
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].lifetime, Some(1));
    assert_eq!(bullets[0].position, Vec2::new(501.0, 500.0));
}

#[test]
fn zombies_close_in_on_the_player() {
    let mut world = started();
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::SpawnZombie {
            kind: ZombieKind::Normal,
            position: Vec2::new(1_000.0, 1_500.0),
            max_hp: 35.0,
            speed: 1.5,
        },
        &mut events,
    );
    Movement::new().integrate(&mut world.parts_mut());
    assert_eq!(
        query::zombies(&world)[0].position,
        Vec2::new(1_001.5, 1_500.0)
    );
}

#[test]
fn crawler_speed_never_exceeds_twice_its_base() {
    let mut world = started();
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::SpawnZombie {
            kind: ZombieKind::Crawler,
            position: Vec2::ZERO,
            max_hp: 30.0,
            speed: 1.0,
        },
        &mut events,
    );
    let mut movement = Movement::new();
    for _ in 0..500 {
        movement.integrate(&mut world.parts_mut());
        let crawler = &query::zombies(&world)[0];
        assert!(crawler.speed <= crawler.base_speed * 2.0);
    }
}

#[test]
fn particles_fade_out() {
    let mut world = started();
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::SpawnBurst {
            burst: horde_core::Burst::new(Vec2::new(100.0, 100.0), palette::BLOOD, 4, 1.0),
        },
        &mut events,
    );
    let mut movement = Movement::new();
    for _ in 0..18 {
        movement.integrate(&mut world.parts_mut());
    }
    assert_eq!(query::particles(&world).len(), 4);
    for _ in 0..3 {
        movement.integrate(&mut world.parts_mut());
    }
    assert!(query::particles(&world).is_empty());
}
