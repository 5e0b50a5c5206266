//! World Module
//!
//! The level the character lives in: spawned waypoint actors, the current
//! frame's delta time, and the geometry used for line traces.
//!
//! ## Actor lifetime
//! Actors are addressed by [`ActorId`]. Ids are never reused, so a stale id
//! held after `destroy` simply stops resolving.

pub mod trace;

use std::collections::BTreeMap;
use std::fmt;

use glam::Vec3;

use crate::math::Rotator;
use crate::waypoint::WaypointMarker;

pub use trace::{
    BoxObstacle, EmptyLevel, GroundPlane, HitResult, LineTrace, StaticLevel, trace_single,
};

/// Handle to a spawned actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// The level: actors, frame timing and trace geometry.
pub struct World {
    geometry: Box<dyn LineTrace>,
    waypoints: BTreeMap<ActorId, WaypointMarker>,
    next_id: u64,
    delta_seconds: f32,
    time_seconds: f64,
    frame_count: u64,
}

impl World {
    /// Create an empty level tracing against `geometry`.
    pub fn new(geometry: impl LineTrace + 'static) -> Self {
        Self {
            geometry: Box::new(geometry),
            waypoints: BTreeMap::new(),
            next_id: 1,
            delta_seconds: 0.0,
            time_seconds: 0.0,
            frame_count: 0,
        }
    }

    /// Replace the trace geometry.
    pub fn set_geometry(&mut self, geometry: impl LineTrace + 'static) {
        self.geometry = Box::new(geometry);
    }

    /// Record the new frame's delta time. Call once at the start of a frame.
    pub fn begin_frame(&mut self, delta_seconds: f32) {
        self.delta_seconds = delta_seconds.max(0.0);
        self.time_seconds += self.delta_seconds as f64;
        self.frame_count += 1;
    }

    /// Delta time of the current frame in seconds.
    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta_seconds
    }

    /// Total simulated time in seconds.
    pub fn time_seconds(&self) -> f64 {
        self.time_seconds
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Trace a segment and return the first blocking hit.
    ///
    /// A miss comes back with `blocking_hit == false` and a zero location.
    pub fn line_trace_single(&self, start: Vec3, end: Vec3) -> HitResult {
        trace_single(self.geometry.as_ref(), start, end)
    }

    /// Spawn a waypoint marker and return its id.
    pub fn spawn_waypoint(&mut self, location: Vec3, rotation: Rotator) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        self.waypoints.insert(id, WaypointMarker::new(location, rotation));
        log::debug!("Spawned waypoint {} at {:?}", id, location);
        id
    }

    /// Remove an actor. Returns `false` if it no longer exists.
    pub fn destroy(&mut self, id: ActorId) -> bool {
        let removed = self.waypoints.remove(&id).is_some();
        if removed {
            log::debug!("Destroyed waypoint {}", id);
        }
        removed
    }

    /// Whether `id` still refers to a live actor.
    #[inline]
    pub fn is_valid(&self, id: ActorId) -> bool {
        self.waypoints.contains_key(&id)
    }

    pub fn waypoint(&self, id: ActorId) -> Option<&WaypointMarker> {
        self.waypoints.get(&id)
    }

    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    pub fn waypoints(&self) -> impl Iterator<Item = (ActorId, &WaypointMarker)> + '_ {
        self.waypoints.iter().map(|(&id, marker)| (id, marker))
    }

    /// Advance every live actor by one frame.
    pub fn tick(&mut self) {
        let dt = self.delta_seconds;
        for marker in self.waypoints.values_mut() {
            marker.tick(dt);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(GroundPlane::default())
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("waypoints", &self.waypoints.len())
            .field("delta_seconds", &self.delta_seconds)
            .field("frame_count", &self.frame_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_destroy() {
        let mut world = World::default();
        let id = world.spawn_waypoint(Vec3::new(1.0, 2.0, 0.0), Rotator::ZERO);
        assert!(world.is_valid(id));
        assert_eq!(world.waypoint_count(), 1);
        assert_eq!(world.waypoint(id).map(|m| m.location()), Some(Vec3::new(1.0, 2.0, 0.0)));

        assert!(world.destroy(id));
        assert!(!world.is_valid(id));
        assert!(!world.destroy(id));
        assert_eq!(world.waypoint_count(), 0);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut world = World::default();
        let first = world.spawn_waypoint(Vec3::ZERO, Rotator::ZERO);
        world.destroy(first);
        let second = world.spawn_waypoint(Vec3::ZERO, Rotator::ZERO);
        assert_ne!(first, second);
        assert!(!world.is_valid(first));
    }

    #[test]
    fn test_begin_frame_tracks_time() {
        let mut world = World::default();
        world.begin_frame(0.5);
        world.begin_frame(0.25);
        assert_eq!(world.delta_seconds(), 0.25);
        assert_eq!(world.frame_count(), 2);
        assert!((world.time_seconds() - 0.75).abs() < 1e-9);

        world.begin_frame(-1.0);
        assert_eq!(world.delta_seconds(), 0.0);
    }

    #[test]
    fn test_tick_animates_markers() {
        let mut world = World::default();
        let id = world.spawn_waypoint(Vec3::ZERO, Rotator::ZERO);
        world.begin_frame(0.016);
        world.tick();
        world.tick();
        assert_eq!(world.waypoint(id).map(|m| m.frames()), Some(2));
    }

    #[test]
    fn test_default_world_traces_ground() {
        let world = World::default();
        let hit = world.line_trace_single(Vec3::new(5.0, 6.0, 100.0), Vec3::new(5.0, 6.0, -100.0));
        assert!(hit.blocking_hit);
        assert_eq!(hit.location, Vec3::new(5.0, 6.0, 0.0));
    }

    #[test]
    fn test_set_geometry() {
        let mut world = World::default();
        world.set_geometry(EmptyLevel);
        let hit = world.line_trace_single(Vec3::new(0.0, 0.0, 100.0), Vec3::new(0.0, 0.0, -100.0));
        assert!(!hit.blocking_hit);
    }
}
