//! Waypoint Marker
//!
//! The placed navigation target. Three stacked meshes with an idle
//! animation: the upper part bobs and spins, the lower part bobs slowly.
//! Animation advances a fixed amount per frame, independent of delta time.

use glam::Vec3;

use crate::math::Rotator;

/// Vertical bob amplitude of the upper part per frame (world units)
pub const UPPER_BOB_AMPLITUDE: f32 = 0.5;
/// Phase advance of the upper bob per frame (radians)
pub const UPPER_PHASE_STEP: f32 = 0.02;
/// Vertical bob amplitude of the lower part per frame (world units)
pub const LOWER_BOB_AMPLITUDE: f32 = 0.05;
/// Phase advance of the lower bob per frame (radians)
pub const LOWER_PHASE_STEP: f32 = 0.01;
/// Spin of the upper part about its vertical axis per frame (degrees)
pub const UPPER_SPIN_DEGREES: f32 = 0.5;

/// Opaque reference to a mesh asset, resolved by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub &'static str);

/// One mesh of the marker with its transform relative to its parent.
#[derive(Clone, Debug)]
pub struct MarkerPart {
    pub mesh: MeshHandle,
    pub material: MeshHandle,
    pub relative_location: Vec3,
    pub relative_rotation: Rotator,
    pub relative_scale: Vec3,
}

impl MarkerPart {
    fn new(mesh: &'static str, material: &'static str, location: Vec3, scale: f32) -> Self {
        Self {
            mesh: MeshHandle(mesh),
            material: MeshHandle(material),
            relative_location: location,
            relative_rotation: Rotator::ZERO,
            relative_scale: Vec3::splat(scale),
        }
    }
}

/// Which part of the marker hierarchy to query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerPartKind {
    /// Attached to the actor root
    Lower,
    /// Attached to the lower part
    UpperInner,
    /// Attached to the upper inner part
    UpperOuter,
}

/// A placed waypoint actor.
#[derive(Clone, Debug)]
pub struct WaypointMarker {
    location: Vec3,
    rotation: Rotator,
    pub lower: MarkerPart,
    pub upper_inner: MarkerPart,
    pub upper_outer: MarkerPart,
    upper_phase: f32,
    lower_phase: f32,
    frames: u64,
}

impl WaypointMarker {
    /// Marker with its root at `location`.
    pub fn new(location: Vec3, rotation: Rotator) -> Self {
        Self {
            location,
            rotation,
            lower: MarkerPart::new(
                "WaypointBot",
                "WaypointBotMaterialInstance",
                Vec3::new(0.0, 0.0, 150.0),
                0.5,
            ),
            upper_inner: MarkerPart::new(
                "WaypointInside",
                "WaypointTopMaterialInstance",
                Vec3::new(0.0, 0.0, 850.0),
                2.0,
            ),
            upper_outer: MarkerPart::new(
                "WaypointOutside",
                "WaypointBotMaterialInstance",
                Vec3::ZERO,
                1.0,
            ),
            upper_phase: 0.0,
            lower_phase: 0.0,
            frames: 0,
        }
    }

    #[inline]
    pub fn location(&self) -> Vec3 {
        self.location
    }

    #[inline]
    pub fn rotation(&self) -> Rotator {
        self.rotation
    }

    /// Current (upper, lower) bob phases.
    pub fn phases(&self) -> (f32, f32) {
        (self.upper_phase, self.lower_phase)
    }

    /// Number of animation frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance the idle animation by one frame.
    ///
    /// `_delta_seconds` is accepted for the frame-tick signature; the
    /// animation steps by fixed per-frame increments.
    pub fn tick(&mut self, _delta_seconds: f32) {
        let upper_bob = UPPER_BOB_AMPLITUDE * self.upper_phase.sin();
        self.upper_inner.relative_location.z += upper_bob;
        self.upper_inner.relative_rotation.yaw += UPPER_SPIN_DEGREES;

        let lower_bob = LOWER_BOB_AMPLITUDE * self.lower_phase.sin();
        self.lower.relative_location.z += lower_bob;

        self.upper_phase += UPPER_PHASE_STEP;
        self.lower_phase += LOWER_PHASE_STEP;
        self.frames += 1;
    }

    /// World-space location of a part, composing the attachment chain.
    ///
    /// A child's relative offset is scaled and rotated by its parent.
    pub fn part_world_location(&self, kind: MarkerPartKind) -> Vec3 {
        let root_rotation = self.rotation.to_quat();
        let lower = self.location + root_rotation * self.lower.relative_location;
        if kind == MarkerPartKind::Lower {
            return lower;
        }

        let lower_rotation = root_rotation * self.lower.relative_rotation.to_quat();
        let upper_inner = lower
            + lower_rotation * (self.lower.relative_scale * self.upper_inner.relative_location);
        if kind == MarkerPartKind::UpperInner {
            return upper_inner;
        }

        let inner_rotation = lower_rotation * self.upper_inner.relative_rotation.to_quat();
        let inner_scale = self.lower.relative_scale * self.upper_inner.relative_scale;
        upper_inner + inner_rotation * (inner_scale * self.upper_outer.relative_location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_marker_layout() {
        let marker = WaypointMarker::new(Vec3::new(100.0, 200.0, 0.0), Rotator::ZERO);
        assert_eq!(marker.location(), Vec3::new(100.0, 200.0, 0.0));
        assert_eq!(marker.lower.relative_location, Vec3::new(0.0, 0.0, 150.0));
        assert_eq!(marker.upper_inner.relative_location, Vec3::new(0.0, 0.0, 850.0));
        assert_eq!(marker.phases(), (0.0, 0.0));
    }

    #[test]
    fn test_first_tick_has_zero_bob() {
        let mut marker = WaypointMarker::new(Vec3::ZERO, Rotator::ZERO);
        marker.tick(0.016);

        // sin(0) = 0 so nothing moves on the first frame, but the spin applies
        assert_eq!(marker.upper_inner.relative_location.z, 850.0);
        assert_eq!(marker.lower.relative_location.z, 150.0);
        assert_eq!(marker.upper_inner.relative_rotation.yaw, UPPER_SPIN_DEGREES);
        assert!((marker.phases().0 - UPPER_PHASE_STEP).abs() < 1e-6);
        assert!((marker.phases().1 - LOWER_PHASE_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_bob_accumulates_sine_of_phase() {
        let mut marker = WaypointMarker::new(Vec3::ZERO, Rotator::ZERO);
        let frames = 10;
        for _ in 0..frames {
            marker.tick(0.016);
        }

        let expected_upper: f32 = (0..frames)
            .map(|i| UPPER_BOB_AMPLITUDE * (i as f32 * UPPER_PHASE_STEP).sin())
            .sum();
        let expected_lower: f32 = (0..frames)
            .map(|i| LOWER_BOB_AMPLITUDE * (i as f32 * LOWER_PHASE_STEP).sin())
            .sum();

        assert!((marker.upper_inner.relative_location.z - (850.0 + expected_upper)).abs() < 1e-3);
        assert!((marker.lower.relative_location.z - (150.0 + expected_lower)).abs() < 1e-4);
        assert_eq!(marker.frames(), frames as u64);
    }

    #[test]
    fn test_tick_ignores_delta_time() {
        let mut fast = WaypointMarker::new(Vec3::ZERO, Rotator::ZERO);
        let mut slow = WaypointMarker::new(Vec3::ZERO, Rotator::ZERO);
        for _ in 0..5 {
            fast.tick(0.001);
            slow.tick(1.0);
        }
        assert_eq!(fast.phases(), slow.phases());
        assert_eq!(
            fast.upper_inner.relative_location,
            slow.upper_inner.relative_location
        );
    }

    #[test]
    fn test_spin_is_constant_per_frame() {
        let mut marker = WaypointMarker::new(Vec3::ZERO, Rotator::ZERO);
        for _ in 0..360 {
            marker.tick(0.016);
        }
        assert!((marker.upper_inner.relative_rotation.yaw - 180.0).abs() < 1e-2);
        // Lower part never spins
        assert_eq!(marker.lower.relative_rotation, Rotator::ZERO);
    }

    #[test]
    fn test_part_world_locations_compose_scale() {
        let marker = WaypointMarker::new(Vec3::new(10.0, 20.0, 0.0), Rotator::ZERO);
        let lower = marker.part_world_location(MarkerPartKind::Lower);
        let inner = marker.part_world_location(MarkerPartKind::UpperInner);
        let outer = marker.part_world_location(MarkerPartKind::UpperOuter);

        assert!((lower - Vec3::new(10.0, 20.0, 150.0)).length() < 1e-3);
        // 850 scaled by the lower part's 0.5
        assert!((inner - Vec3::new(10.0, 20.0, 575.0)).length() < 1e-3);
        assert!((outer - inner).length() < 1e-3);
    }
}
