//! Point-and-click waypoint placement on the overhead map.
//!
//! Both mouse actions double as attacks outside the map. On the map the
//! cursor is deprojected through the map camera and traced into the level;
//! the hit decides where a marker is spawned or which marker is removed.

use glam::Vec3;

use super::{Character, CharacterEvent};
use crate::math::Rotator;
use crate::world::{HitResult, World};

/// Screen center, used when the cursor position is unknown.
const SCREEN_CENTER: (f32, f32) = (0.5, 0.5);

impl Character {
    /// Place a waypoint under the cursor, or light attack outside the map.
    pub fn set_waypoint(&mut self, world: &mut World) {
        if !self.is_map_open() {
            self.push_event(CharacterEvent::LightAttack);
            return;
        }

        if let Some(previous) = self.waypoint.take() {
            if world.destroy(previous) {
                self.push_event(CharacterEvent::WaypointRemoved { id: previous });
            }
        }

        let hit = self.trace_cursor(world);
        if !hit.blocking_hit {
            log::warn!("Waypoint trace hit nothing, placing marker at the origin");
        }

        let id = world.spawn_waypoint(hit.location, Rotator::ZERO);
        self.waypoint = Some(id);
        self.pointer.set_hidden(false);
        log::info!("Placed waypoint {} at {:?}", id, hit.location);
        self.push_event(CharacterEvent::WaypointPlaced {
            id,
            location: hit.location,
        });
    }

    /// Remove the waypoint if the cursor is near it, or heavy attack outside the map.
    pub fn delete_waypoint(&mut self, world: &mut World) {
        if !self.is_map_open() {
            self.push_event(CharacterEvent::HeavyAttack);
            return;
        }

        let hit = self.trace_cursor(world);

        let Some(id) = self.waypoint else {
            log::debug!("No waypoint to delete");
            return;
        };
        let Some(marker_location) = world.waypoint(id).map(|marker| marker.location()) else {
            log::debug!("Waypoint {} no longer exists", id);
            self.waypoint = None;
            self.pointer.set_hidden(true);
            return;
        };

        if !self.within_delete_tolerance(hit.location, marker_location) {
            log::debug!(
                "Delete click at {:?} too far from waypoint at {:?}",
                hit.location,
                marker_location
            );
            return;
        }

        world.destroy(id);
        self.waypoint = None;
        self.pointer.set_hidden(true);
        log::info!("Removed waypoint {}", id);
        self.push_event(CharacterEvent::WaypointRemoved { id });
    }

    /// Strictly inside the tolerance on both horizontal axes; height is ignored.
    fn within_delete_tolerance(&self, hit: Vec3, marker: Vec3) -> bool {
        let tolerance = self.config.delete_tolerance;
        (hit.x - marker.x).abs() < tolerance && (hit.y - marker.y).abs() < tolerance
    }

    /// Trace from the map camera through the cursor.
    fn trace_cursor(&self, world: &World) -> HitResult {
        let uv = match self.controller.as_ref().and_then(|c| c.cursor_position()) {
            Some(uv) => uv,
            None => {
                log::debug!("Cursor position unknown, tracing through the screen center");
                SCREEN_CENTER
            }
        };

        let control = self.control_rotation();
        let map = &self.cameras.map;
        let camera_location = map.socket_location(self.location, control);
        let ray = self
            .config
            .map_projection
            .deproject(camera_location, map.view_rotation(control), uv);

        let start = self.config.map_camera_location;
        let end = ray.at(self.config.trace_length);
        world.line_trace_single(start, end)
    }

    /// Turn the pointer toward the live waypoint.
    pub(super) fn update_pointer(&mut self, world: &World) {
        let Some(target) = self
            .waypoint
            .and_then(|id| world.waypoint(id))
            .map(|marker| marker.location())
        else {
            return;
        };
        self.pointer.aim_at(self.location, target);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::character::{Character, CharacterConfig, CharacterEvent};
    use crate::player::PlayerController;
    use crate::world::{EmptyLevel, World};

    fn map_open_character() -> Character {
        let mut character = Character::new(CharacterConfig::default());
        character.possess(PlayerController::new());
        character.begin_play();
        character.toggle_map();
        character.drain_events();
        character
    }

    fn fixed_hit(hit: Vec3) -> World {
        World::new(move |_start: Vec3, _end: Vec3| Some(hit))
    }

    #[test]
    fn test_attacks_outside_map() {
        let mut character = Character::new(CharacterConfig::default());
        character.possess(PlayerController::new());
        character.begin_play();
        let mut world = World::default();

        character.set_waypoint(&mut world);
        character.delete_waypoint(&mut world);
        assert_eq!(
            character.drain_events(),
            vec![CharacterEvent::LightAttack, CharacterEvent::HeavyAttack]
        );
        assert_eq!(world.waypoint_count(), 0);
    }

    #[test]
    fn test_trace_starts_at_map_camera() {
        let mut character = map_open_character();
        character
            .controller_mut()
            .unwrap()
            .set_cursor_position(Some((0.5, 0.5)));

        let traced = std::rc::Rc::new(std::cell::Cell::new((Vec3::ZERO, Vec3::ZERO)));
        let record = traced.clone();
        let mut world = World::new(move |start: Vec3, end: Vec3| {
            record.set((start, end));
            Some(Vec3::ZERO)
        });

        character.set_waypoint(&mut world);
        let (start, end) = traced.get();
        assert_eq!(start, Vec3::new(6000.0, 10000.0, 30000.0));
        // Straight down through the screen center
        assert!((end - Vec3::new(6000.0, 10000.0, -70000.0)).length() < 1.0);
    }

    #[test]
    fn test_trace_miss_places_at_origin() {
        let mut character = map_open_character();
        let mut world = World::new(EmptyLevel);
        character.set_waypoint(&mut world);

        let id = character.waypoint().unwrap();
        assert_eq!(world.waypoint(id).unwrap().location(), Vec3::ZERO);
        assert!(!character.pointer().is_hidden());
    }

    #[test]
    fn test_delete_requires_both_axes_within_tolerance() {
        let mut character = map_open_character();
        let mut world = fixed_hit(Vec3::new(100.0, 200.0, 0.0));
        character.set_waypoint(&mut world);
        let id = character.waypoint().unwrap();

        // 200 on X is not strictly inside the tolerance
        world.set_geometry(|_: Vec3, _: Vec3| Some(Vec3::new(300.0, 200.0, 0.0)));
        character.delete_waypoint(&mut world);
        assert!(world.is_valid(id));

        world.set_geometry(|_: Vec3, _: Vec3| Some(Vec3::new(100.0, -150.0, 0.0)));
        character.delete_waypoint(&mut world);
        assert!(world.is_valid(id));

        world.set_geometry(|_: Vec3, _: Vec3| Some(Vec3::new(299.0, 399.0, 5000.0)));
        character.delete_waypoint(&mut world);
        assert!(!world.is_valid(id));
        assert!(character.waypoint().is_none());
        assert!(character.pointer().is_hidden());
    }

    #[test]
    fn test_delete_without_waypoint_is_noop() {
        let mut character = map_open_character();
        let mut world = fixed_hit(Vec3::ZERO);
        character.delete_waypoint(&mut world);
        assert!(character.drain_events().is_empty());
        assert!(character.pointer().is_hidden());
    }

    #[test]
    fn test_pointer_yaw_faces_waypoint() {
        let mut character = map_open_character();
        let mut world = fixed_hit(Vec3::new(0.0, 500.0, 80.0));
        character.set_waypoint(&mut world);

        character.tick(&world);
        let rotation = character.pointer().rotation();
        assert!((rotation.yaw - 90.0).abs() < 1e-3);
        assert_eq!(rotation.pitch, 0.0);
        assert_eq!(rotation.roll, 0.0);
    }
}
