use std::time::Duration;

use horde_core::{
    BulletBehavior, BulletSpawn, Command, Cue, Difficulty, Event, FrameInput, UpgradeId, Vec2,
    ZombieKind, MAX_LEVEL,
};
use horde_system_weapons::{Arsenal, Config};
use horde_world::{self as world, query, World};

const VIEWPORT: Vec2 = Vec2::new(1_280.0, 720.0);

fn start(upgrades: &[(UpgradeId, u8)]) -> (World, Vec<Event>) {
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
    for &(upgrade, level) in upgrades {
        for _ in 0..level {
            world::apply(&mut world, Command::ApplyUpgrade { upgrade }, &mut events);
        }
    }
    (world, events)
}

fn spawn_near_player(world: &mut World, offset: Vec2) {
    let position = query::player(world).position + offset;
    let mut events = Vec::new();
    world::apply(
        world,
        Command::SpawnZombie {
            kind: ZombieKind::Tank,
            position,
            max_hp: 1_000.0,
            speed: 0.0,
        },
        &mut events,
    );
}

fn fire(
    arsenal: &mut Arsenal,
    world: &mut World,
    events: &[Event],
    now: u64,
    input: &FrameInput,
) -> Vec<Command> {
    world.parts_mut().run.begin_frame(Duration::from_millis(now));
    let mut commands = Vec::new();
    arsenal.handle(events, input, world, &mut commands);
    commands
}

fn trigger() -> FrameInput {
    FrameInput {
        fire: true,
        ..FrameInput::default()
    }
}

fn bullets(commands: &[Command]) -> Vec<&BulletSpawn> {
    commands
        .iter()
        .filter_map(|command| match command {
            Command::SpawnBullet { bullet } => Some(bullet),
            _ => None,
        })
        .collect()
}

#[test]
fn gun_waits_for_the_trigger_and_its_cooldown() {
    let (mut world, events) = start(&[]);
    let mut arsenal = Arsenal::new(Config::new(VIEWPORT, 3));

    assert!(fire(&mut arsenal, &mut world, &events, 16, &FrameInput::default()).is_empty());

    let first = fire(&mut arsenal, &mut world, &[], 32, &trigger());
    assert_eq!(bullets(&first).len(), 1);
    assert!(first.contains(&Command::EmitCue { cue: Cue::Shoot }));

    assert!(fire(&mut arsenal, &mut world, &[], 532, &trigger()).is_empty());
    assert_eq!(
        bullets(&fire(&mut arsenal, &mut world, &[], 533, &trigger())).len(),
        1
    );
}

#[test]
fn bullets_leave_from_the_muzzle() {
    let (mut world, events) = start(&[]);
    let mut arsenal = Arsenal::new(Config::new(VIEWPORT, 3));
    let player = query::player(&world).position;

    let commands = fire(&mut arsenal, &mut world, &events, 16, &trigger());

    let shot = bullets(&commands)[0];
    assert!((shot.position.distance(player) - 30.0).abs() < 1e-3);
    assert!((shot.velocity.length() - 16.0).abs() < 1e-3);
    assert_eq!(shot.damage, 25.0);
    assert_eq!(shot.piercing, Some(0));
}

#[test]
fn multishot_adds_symmetric_pairs() {
    let (mut world, events) = start(&[(UpgradeId::Multishot, 2)]);
    let mut arsenal = Arsenal::new(Config::new(VIEWPORT, 3));

    let commands = fire(&mut arsenal, &mut world, &events, 16, &trigger());

    let shots = bullets(&commands);
    assert_eq!(shots.len(), 5);
    let lateral: f32 = shots.iter().map(|shot| shot.velocity.y).sum();
    assert!(lateral.abs() < 1e-3);
}

#[test]
fn evolved_damage_pierces_three_zombies() {
    let (mut world, events) = start(&[(UpgradeId::Damage, MAX_LEVEL)]);
    let mut arsenal = Arsenal::new(Config::new(VIEWPORT, 3));

    let commands = fire(&mut arsenal, &mut world, &events, 16, &trigger());

    let shot = bullets(&commands)[0];
    assert_eq!(shot.piercing, Some(3));
    assert_eq!(shot.knockback, Some(8.0));
    assert!((shot.damage - 75.0).abs() < 1e-3);
}

#[test]
fn orbital_ring_rotates_each_frame() {
    let (mut world, events) = start(&[(UpgradeId::Orbitals, 3)]);
    let mut arsenal = Arsenal::new(Config::new(VIEWPORT, 3));

    let ring = |commands: Vec<Command>| {
        commands
            .into_iter()
            .find_map(|command| match command {
                Command::ReplaceOrbitals { orbitals } => Some(orbitals),
                _ => None,
            })
            .expect("orbitals rebuilt every frame")
    };
    let first = ring(fire(&mut arsenal, &mut world, &events, 16, &FrameInput::default()));
    let second = ring(fire(&mut arsenal, &mut world, &[], 32, &FrameInput::default()));

    assert_eq!(first.len(), 3);
    assert!(first
        .iter()
        .all(|body| matches!(body.behavior, BulletBehavior::Orbital)));
    assert_ne!(first[0].position, second[0].position);
    let centre = query::player(&world).position;
    let drift = second[0].position.distance(centre) - first[0].position.distance(centre);
    assert!(drift.abs() < 1e-3);
}

#[test]
fn lightning_strikes_distinct_visible_zombies() {
    let (mut world, events) = start(&[(UpgradeId::Lightning, 1)]);
    for i in 0..5 {
        spawn_near_player(&mut world, Vec2::new(40.0 * i as f32 - 80.0, 50.0));
    }
    spawn_near_player(&mut world, Vec2::new(1_000.0, 0.0));
    let mut arsenal = Arsenal::new(Config::new(VIEWPORT, 3));

    let commands = fire(&mut arsenal, &mut world, &events, 16, &FrameInput::default());

    let mut struck: Vec<_> = commands
        .iter()
        .filter_map(|command| match command {
            Command::StrikeZombie { zombie, damage } => {
                assert_eq!(*damage, 150.0);
                Some(*zombie)
            }
            _ => None,
        })
        .collect();
    assert_eq!(struck.len(), 3);
    struck.sort_by_key(|id| id.get());
    struck.dedup();
    assert_eq!(struck.len(), 3);
    let far = query::zombies(&world)[5].id;
    assert!(!struck.contains(&far));
}

#[test]
fn drone_locks_on_and_fires() {
    let (mut world, events) = start(&[(UpgradeId::Drone, 1)]);
    spawn_near_player(&mut world, Vec2::new(200.0, 0.0));
    let target = query::zombies(&world)[0].id;
    let minion = query::minions(&world)[0].id;
    let mut arsenal = Arsenal::new(Config::new(VIEWPORT, 3));

    let commands = fire(&mut arsenal, &mut world, &events, 16, &FrameInput::default());

    assert!(commands.contains(&Command::RetargetMinion {
        minion,
        target: Some(target),
    }));
    let shots = bullets(&commands);
    assert_eq!(shots.len(), 1);
    assert_eq!(shots[0].damage, 45.0);
    assert!(shots[0].velocity.x > 0.0);
}

#[test]
fn drone_idles_without_targets() {
    let (mut world, events) = start(&[(UpgradeId::Drone, 1)]);
    let minion = query::minions(&world)[0].id;
    let mut arsenal = Arsenal::new(Config::new(VIEWPORT, 3));

    let commands = fire(&mut arsenal, &mut world, &events, 16, &FrameInput::default());

    assert_eq!(commands, vec![Command::IdleMinion { minion }]);
}

#[test]
fn lost_target_leaves_the_drone_idle() {
    let (mut world, events) = start(&[(UpgradeId::Drone, 1)]);
    spawn_near_player(&mut world, Vec2::new(200.0, 0.0));
    let target = query::zombies(&world)[0].id;
    let minion = query::minions(&world)[0].id;
    let mut applied = Vec::new();
    world::apply(
        &mut world,
        Command::RetargetMinion {
            minion,
            target: Some(target),
        },
        &mut applied,
    );
    world.parts_mut().store.zombies.clear();
    let mut arsenal = Arsenal::new(Config::new(VIEWPORT, 3));

    let commands = fire(&mut arsenal, &mut world, &events, 16, &FrameInput::default());

    assert_eq!(commands, vec![Command::IdleMinion { minion }]);
    for command in commands {
        world::apply(&mut world, command, &mut applied);
    }
    assert_eq!(query::minions(&world)[0].target, None);
}

#[test]
fn dragon_breathes_a_cone_of_flames() {
    for (level, flames, radius) in [(1, 3, 3.0), (MAX_LEVEL, 5, 6.0)] {
        let (mut world, events) = start(&[(UpgradeId::Dragon, level)]);
        spawn_near_player(&mut world, Vec2::new(150.0, 0.0));
        let mut arsenal = Arsenal::new(Config::new(VIEWPORT, 3));

        let commands = fire(&mut arsenal, &mut world, &events, 16, &FrameInput::default());

        let shots = bullets(&commands);
        assert_eq!(shots.len(), flames);
        for shot in shots {
            assert_eq!(shot.lifetime, Some(35));
            assert_eq!(shot.piercing, Some(5));
            assert_eq!(shot.radius, radius);
            assert_eq!(shot.damage, 6.0);
            assert!(shot.velocity.x > 0.0);
        }
    }
}

#[test]
fn dragon_ignores_zombies_beyond_its_reach() {
    let (mut world, events) = start(&[(UpgradeId::Dragon, 1)]);
    spawn_near_player(&mut world, Vec2::new(250.0, 0.0));
    let minion = query::minions(&world)[0].id;
    let mut arsenal = Arsenal::new(Config::new(VIEWPORT, 3));

    let commands = fire(&mut arsenal, &mut world, &events, 16, &FrameInput::default());

    assert_eq!(commands, vec![Command::IdleMinion { minion }]);
}

#[test]
fn evolved_missile_launches_three_homing_rounds() {
    let (mut world, events) = start(&[(UpgradeId::Missile, MAX_LEVEL)]);
    let mut arsenal = Arsenal::new(Config::new(VIEWPORT, 3));

    let commands = fire(&mut arsenal, &mut world, &events, 16, &FrameInput::default());

    let shots = bullets(&commands);
    assert_eq!(shots.len(), 3);
    assert!(shots
        .iter()
        .all(|shot| matches!(shot.behavior, BulletBehavior::Homing { target: None })));
}

#[test]
fn axe_is_thrown_along_the_facing() {
    let (mut world, events) = start(&[(UpgradeId::Axe, 1)]);
    world.parts_mut().store.player.angle = std::f32::consts::FRAC_PI_2;
    let mut arsenal = Arsenal::new(Config::new(VIEWPORT, 3));

    let commands = fire(&mut arsenal, &mut world, &events, 16, &FrameInput::default());

    let shots = bullets(&commands);
    assert_eq!(shots.len(), 1);
    assert!((shots[0].velocity.y - 12.0).abs() < 1e-3);
    assert_eq!(shots[0].lifetime, Some(100));
    assert!(matches!(
        shots[0].behavior,
        BulletBehavior::Boomerang { returning: false }
    ));
}
