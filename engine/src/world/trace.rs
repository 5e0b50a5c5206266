//! Line Trace Module
//!
//! The world query used for point-and-click placement: trace a segment
//! against level geometry and report the first blocking hit.
//!
//! Level geometry belongs to the host. It plugs in through [`LineTrace`],
//! which is implemented for plain closures so tests and hosts can pass
//! `|start, end| Some(hit)` directly.

use glam::Vec3;

/// Segment query against level geometry.
pub trait LineTrace {
    /// First blocking hit on the segment from `start` to `end`, if any.
    fn line_trace(&self, start: Vec3, end: Vec3) -> Option<Vec3>;
}

impl<F> LineTrace for F
where
    F: Fn(Vec3, Vec3) -> Option<Vec3>,
{
    fn line_trace(&self, start: Vec3, end: Vec3) -> Option<Vec3> {
        self(start, end)
    }
}

/// Result of a single line trace.
///
/// A miss leaves `location` at its default of zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitResult {
    pub blocking_hit: bool,
    pub location: Vec3,
}

impl HitResult {
    pub fn hit(location: Vec3) -> Self {
        Self {
            blocking_hit: true,
            location,
        }
    }
}

/// Run a trace and fold the answer into a [`HitResult`].
pub fn trace_single(geometry: &dyn LineTrace, start: Vec3, end: Vec3) -> HitResult {
    geometry
        .line_trace(start, end)
        .map(HitResult::hit)
        .unwrap_or_default()
}

/// Geometry with nothing to hit.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyLevel;

impl LineTrace for EmptyLevel {
    fn line_trace(&self, _start: Vec3, _end: Vec3) -> Option<Vec3> {
        None
    }
}

/// Infinite horizontal plane at `z = height`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroundPlane {
    pub height: f32,
}

impl GroundPlane {
    pub fn new(height: f32) -> Self {
        Self { height }
    }

    /// Segment parameter (0..=1) where the segment crosses the plane.
    fn crossing(&self, start: Vec3, end: Vec3) -> Option<f32> {
        let dz = end.z - start.z;
        if dz.abs() < 0.0001 {
            // Segment is parallel to the plane
            return None;
        }
        let t = (self.height - start.z) / dz;
        (0.0..=1.0).contains(&t).then_some(t)
    }
}

impl LineTrace for GroundPlane {
    fn line_trace(&self, start: Vec3, end: Vec3) -> Option<Vec3> {
        self.crossing(start, end).map(|t| start.lerp(end, t))
    }
}

/// Axis-aligned box obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxObstacle {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoxObstacle {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Segment parameter (0..=1) of the first contact, slab method.
    fn crossing(&self, start: Vec3, end: Vec3) -> Option<f32> {
        let dir = end - start;
        let inv_dir = Vec3::new(
            if dir.x.abs() > 1e-10 { 1.0 / dir.x } else { f32::MAX },
            if dir.y.abs() > 1e-10 { 1.0 / dir.y } else { f32::MAX },
            if dir.z.abs() > 1e-10 { 1.0 / dir.z } else { f32::MAX },
        );

        let t1 = (self.min - start) * inv_dir;
        let t2 = (self.max - start) * inv_dir;
        let t_min = t1.min(t2).max_element();
        let t_max = t1.max(t2).min_element();

        if t_max < t_min || t_max < 0.0 || t_min > 1.0 {
            return None;
        }
        // Starting inside the box counts as an immediate hit
        Some(t_min.max(0.0))
    }
}

/// A ground plane plus box obstacles; the nearest hit wins.
#[derive(Clone, Debug, Default)]
pub struct StaticLevel {
    pub ground: Option<GroundPlane>,
    pub obstacles: Vec<BoxObstacle>,
}

impl StaticLevel {
    pub fn with_ground(height: f32) -> Self {
        Self {
            ground: Some(GroundPlane::new(height)),
            obstacles: Vec::new(),
        }
    }

    pub fn add_obstacle(&mut self, obstacle: BoxObstacle) {
        self.obstacles.push(obstacle);
    }
}

impl LineTrace for StaticLevel {
    fn line_trace(&self, start: Vec3, end: Vec3) -> Option<Vec3> {
        self.ground
            .iter()
            .filter_map(|ground| ground.crossing(start, end))
            .chain(self.obstacles.iter().filter_map(|b| b.crossing(start, end)))
            .min_by(f32::total_cmp)
            .map(|t| start.lerp(end, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Vec3 = Vec3::new(100.0, 200.0, 1000.0);
    const END: Vec3 = Vec3::new(100.0, 200.0, -1000.0);

    #[test]
    fn test_closure_is_line_trace() {
        let fixed = |_start: Vec3, _end: Vec3| Some(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(fixed.line_trace(START, END), Some(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_miss_defaults_to_origin() {
        let hit = trace_single(&EmptyLevel, START, END);
        assert!(!hit.blocking_hit);
        assert_eq!(hit.location, Vec3::ZERO);
    }

    #[test]
    fn test_ground_plane_hit() {
        let hit = GroundPlane::new(0.0).line_trace(START, END);
        assert_eq!(hit, Some(Vec3::new(100.0, 200.0, 0.0)));
    }

    #[test]
    fn test_ground_plane_out_of_reach() {
        let short_end = Vec3::new(100.0, 200.0, 500.0);
        assert_eq!(GroundPlane::new(0.0).line_trace(START, short_end), None);
    }

    #[test]
    fn test_ground_plane_parallel_segment() {
        let a = Vec3::new(0.0, 0.0, 10.0);
        let b = Vec3::new(100.0, 0.0, 10.0);
        assert_eq!(GroundPlane::new(0.0).line_trace(a, b), None);
    }

    #[test]
    fn test_box_blocks_before_ground() {
        let mut level = StaticLevel::with_ground(0.0);
        level.add_obstacle(BoxObstacle::new(
            Vec3::new(50.0, 150.0, 0.0),
            Vec3::new(150.0, 250.0, 300.0),
        ));
        let hit = level.line_trace(START, END).unwrap();
        assert!((hit - Vec3::new(100.0, 200.0, 300.0)).length() < 1e-3);
    }

    #[test]
    fn test_box_missed_falls_through_to_ground() {
        let mut level = StaticLevel::with_ground(0.0);
        level.add_obstacle(BoxObstacle::new(
            Vec3::new(500.0, 500.0, 0.0),
            Vec3::new(600.0, 600.0, 300.0),
        ));
        let hit = level.line_trace(START, END).unwrap();
        assert!((hit - Vec3::new(100.0, 200.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_empty_static_level_misses() {
        assert_eq!(StaticLevel::default().line_trace(START, END), None);
    }
}
