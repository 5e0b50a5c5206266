//! Waypoint Tests - Placement, Deletion and the Game Loop
//!
//! Level geometry is stubbed with closures so each test controls where the
//! cursor ray lands.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec3;
use wayfinder_engine::input::{InputAction, InputEvent};
use wayfinder_engine::player::PlayerController;
use wayfinder_engine::waypoint::UPPER_SPIN_DEGREES;
use wayfinder_engine::world::{GroundPlane, World};
use wayfinder_engine::{Character, CharacterConfig, CharacterEvent, Game, KeyCode, MouseButton};

fn map_open() -> Character {
    let mut character = Character::new(CharacterConfig::default());
    character.possess(PlayerController::new());
    character.begin_play();
    character.handle_input(&mut World::default(), InputEvent::pressed(InputAction::Map));
    character.drain_events();
    character
}

/// World whose traces land wherever `target` currently points.
fn steerable_world() -> (World, Rc<Cell<Vec3>>) {
    let target = Rc::new(Cell::new(Vec3::ZERO));
    let hit = target.clone();
    let world = World::new(move |_start: Vec3, _end: Vec3| Some(hit.get()));
    (world, target)
}

fn click(character: &mut Character, world: &mut World, action: InputAction) {
    character.handle_input(world, InputEvent::pressed(action));
    character.handle_input(world, InputEvent::released(action));
}

// ============================================================================
// Placement and Deletion
// ============================================================================

#[test]
fn test_place_then_delete_nearby() {
    let mut character = map_open();
    let (mut world, target) = steerable_world();
    assert!(character.pointer().is_hidden());

    target.set(Vec3::new(100.0, 200.0, 0.0));
    click(&mut character, &mut world, InputAction::SetWaypoint);

    let id = character.waypoint().expect("placed");
    assert_eq!(
        world.waypoint(id).expect("spawned").location(),
        Vec3::new(100.0, 200.0, 0.0)
    );
    assert!(!character.pointer().is_hidden());

    target.set(Vec3::new(150.0, 210.0, 0.0));
    click(&mut character, &mut world, InputAction::DeleteWaypoint);

    assert!(!world.is_valid(id));
    assert_eq!(world.waypoint_count(), 0);
    assert!(character.waypoint().is_none());
    assert!(character.pointer().is_hidden());

    assert_eq!(
        character.drain_events(),
        vec![
            CharacterEvent::WaypointPlaced {
                id,
                location: Vec3::new(100.0, 200.0, 0.0),
            },
            CharacterEvent::WaypointRemoved { id },
        ]
    );
}

#[test]
fn test_placing_again_replaces_marker() {
    let mut character = map_open();
    let (mut world, target) = steerable_world();

    target.set(Vec3::new(100.0, 200.0, 0.0));
    click(&mut character, &mut world, InputAction::SetWaypoint);
    let first = character.waypoint().expect("placed");

    target.set(Vec3::new(-400.0, 900.0, 20.0));
    click(&mut character, &mut world, InputAction::SetWaypoint);
    let second = character.waypoint().expect("placed");

    assert_ne!(first, second);
    assert!(!world.is_valid(first));
    assert_eq!(world.waypoint_count(), 1);
    assert_eq!(
        world.waypoint(second).expect("spawned").location(),
        Vec3::new(-400.0, 900.0, 20.0)
    );
}

#[test]
fn test_delete_outside_tolerance_keeps_marker() {
    let mut character = map_open();
    let (mut world, target) = steerable_world();
    target.set(Vec3::new(100.0, 200.0, 0.0));
    click(&mut character, &mut world, InputAction::SetWaypoint);
    let id = character.waypoint().expect("placed");

    for miss in [
        Vec3::new(300.0, 200.0, 0.0),
        Vec3::new(100.0, 400.0, 0.0),
        Vec3::new(-100.0, 0.0, 0.0),
        Vec3::new(500.0, 250.0, 0.0),
    ] {
        target.set(miss);
        click(&mut character, &mut world, InputAction::DeleteWaypoint);
        assert!(world.is_valid(id), "deleted by a click at {:?}", miss);
        assert_eq!(
            world.waypoint(id).expect("kept").location(),
            Vec3::new(100.0, 200.0, 0.0)
        );
        assert!(!character.pointer().is_hidden());
    }
}

#[test]
fn test_clicks_attack_while_map_closed() {
    let mut character = map_open();
    let (mut world, target) = steerable_world();
    target.set(Vec3::new(10.0, 10.0, 0.0));
    click(&mut character, &mut world, InputAction::SetWaypoint);
    click(&mut character, &mut world, InputAction::Map);
    character.drain_events();

    click(&mut character, &mut world, InputAction::SetWaypoint);
    click(&mut character, &mut world, InputAction::DeleteWaypoint);

    assert_eq!(
        character.drain_events(),
        vec![CharacterEvent::LightAttack, CharacterEvent::HeavyAttack]
    );
    assert_eq!(world.waypoint_count(), 1);
}

#[test]
fn test_externally_destroyed_marker() {
    let mut character = map_open();
    let (mut world, target) = steerable_world();
    target.set(Vec3::new(100.0, 200.0, 0.0));
    click(&mut character, &mut world, InputAction::SetWaypoint);
    let id = character.waypoint().expect("placed");

    assert!(world.destroy(id));
    click(&mut character, &mut world, InputAction::DeleteWaypoint);
    assert!(character.waypoint().is_none());
    assert!(character.pointer().is_hidden());
}

// ============================================================================
// Game Loop
// ============================================================================

#[test]
fn test_game_map_click_places_on_ground() {
    let mut game = Game::new(CharacterConfig::default(), GroundPlane::default());
    game.start();

    game.key(KeyCode::Tab, true);
    game.key(KeyCode::Tab, false);
    game.cursor_moved(640.0, 400.0, 1280, 800);
    game.mouse_button(MouseButton::Left, true);
    game.mouse_button(MouseButton::Left, false);
    game.frame(1.0 / 60.0);

    let id = game.character.waypoint().expect("placed");
    let location = game.world.waypoint(id).expect("spawned").location();
    // Screen center under the overhead camera
    assert!((location - Vec3::new(6000.0, 10000.0, 0.0)).length() < 1.0);

    let placed = game
        .drain_events()
        .into_iter()
        .any(|event| matches!(event, CharacterEvent::WaypointPlaced { .. }));
    assert!(placed);
}

#[test]
fn test_game_ticks_marker_and_pointer() {
    let mut game = Game::new(CharacterConfig::default(), GroundPlane::default());
    game.start();
    game.key(KeyCode::M, true);
    game.cursor_moved(640.0, 400.0, 1280, 800);
    game.mouse_button(MouseButton::Left, true);

    for _ in 0..10 {
        game.frame(1.0 / 60.0);
    }

    let id = game.character.waypoint().expect("placed");
    let marker = game.world.waypoint(id).expect("spawned");
    assert_eq!(marker.frames(), 10);
    assert!((marker.upper_inner.relative_rotation.yaw - 10.0 * UPPER_SPIN_DEGREES).abs() < 1e-4);

    // Pointer yaw aims from the character at the origin toward the marker
    let expected_yaw = 10000.0_f32.atan2(6000.0).to_degrees();
    assert!((game.character.pointer().rotation().yaw - expected_yaw).abs() < 0.1);
}

#[test]
fn test_game_map_freezes_character() {
    let mut game = Game::new(CharacterConfig::default(), GroundPlane::default());
    game.start();
    game.key(KeyCode::M, true);
    game.key(KeyCode::W, true);

    for _ in 0..30 {
        game.frame(1.0 / 60.0);
    }
    let location = game.character.location();
    assert_eq!(location.x, 0.0);
    assert_eq!(location.y, 0.0);
}
