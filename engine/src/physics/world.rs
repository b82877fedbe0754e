//! Static plane world
//!
//! A handful of infinite static planes, each on a collision layer. The solid
//! side of a plane is the half-space behind its normal, so overlapping planes
//! form a union: a flat floor plus a tilted plane gives a floor that turns into
//! a ramp.
//!
//! After every body integration, [`PlaneWorld::resolve`] pushes the body out of
//! any plane it penetrates, removes the velocity component going into the
//! plane, and reports contact-stay events for planes still touched plus
//! contact-exit events for planes that were touched last step but no longer
//! are. That is the callback stream a real engine would deliver.

use glam::Vec3;

use super::ContactEvent;
use super::body::SimpleBody;

/// Distance (meters) within which a body counts as touching a plane.
pub const CONTACT_SKIN: f32 = 0.01;

/// An infinite static plane `normal · p = offset` on one collision layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticPlane {
    /// Unit normal pointing out of the solid side
    pub normal: Vec3,
    /// Signed distance of the plane from the origin along `normal`
    pub offset: f32,
    /// Collision layer reported in contact events
    pub layer: u32,
}

impl StaticPlane {
    /// Create a plane through `point` with the given normal.
    ///
    /// The normal is normalized; a zero normal falls back to world up.
    pub fn through_point(point: Vec3, normal: Vec3, layer: u32) -> Self {
        let normal = normal.try_normalize().unwrap_or(Vec3::Y);
        Self {
            normal,
            offset: normal.dot(point),
            layer,
        }
    }

    /// Horizontal floor at height `y`.
    pub fn floor(y: f32, layer: u32) -> Self {
        Self::through_point(Vec3::new(0.0, y, 0.0), Vec3::Y, layer)
    }

    /// Signed distance from `point` to the plane (positive on the open side).
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.offset
    }
}

/// Contact callbacks produced by one [`PlaneWorld::resolve`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactReport {
    /// Contact-persist events, one per touched plane
    pub stays: Vec<ContactEvent>,
    /// Layers of planes whose contact ended this step
    pub exits: Vec<u32>,
}

impl ContactReport {
    /// Check if the report holds no events at all.
    pub fn is_empty(&self) -> bool {
        self.stays.is_empty() && self.exits.is_empty()
    }
}

/// A collection of static planes and the contact state of one body against them.
#[derive(Debug, Clone, Default)]
pub struct PlaneWorld {
    planes: Vec<StaticPlane>,
    touching: Vec<bool>,
}

impl PlaneWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plane and return its index.
    pub fn add_plane(&mut self, plane: StaticPlane) -> usize {
        self.planes.push(plane);
        self.touching.push(false);
        self.planes.len() - 1
    }

    /// All planes in insertion order.
    pub fn planes(&self) -> &[StaticPlane] {
        &self.planes
    }

    /// Check whether the body touched plane `index` during the last resolve.
    pub fn is_touching(&self, index: usize) -> bool {
        self.touching.get(index).copied().unwrap_or(false)
    }

    /// Resolve the body against every plane and report contact changes.
    ///
    /// Call once per simulation step, after [`SimpleBody::integrate`].
    pub fn resolve(&mut self, body: &mut SimpleBody) -> ContactReport {
        let mut report = ContactReport::default();
        let extent = body.extent();

        for (plane, was_touching) in self.planes.iter().zip(self.touching.iter_mut()) {
            let gap = plane.signed_distance(body.position) - extent;

            if gap <= CONTACT_SKIN {
                if gap < 0.0 {
                    body.position += plane.normal * -gap;
                }
                let into_plane = body.velocity.dot(plane.normal);
                if into_plane < 0.0 {
                    body.velocity -= plane.normal * into_plane;
                }
                report.stays.push(ContactEvent::single(plane.layer, plane.normal));
                *was_touching = true;
            } else if *was_touching {
                report.exits.push(plane.layer);
                *was_touching = false;
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_through_point() {
        let plane = StaticPlane::through_point(Vec3::new(0.0, 2.0, 0.0), Vec3::Y * 3.0, 0);
        assert_eq!(plane.normal, Vec3::Y);
        assert!((plane.offset - 2.0).abs() < 1e-6);
        assert!((plane.signed_distance(Vec3::new(5.0, 3.0, -1.0)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_resting_body_reports_stay() {
        let mut world = PlaneWorld::new();
        world.add_plane(StaticPlane::floor(0.0, 0));

        let mut body = SimpleBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        body.integrate(0.02);
        let report = world.resolve(&mut body);

        assert_eq!(report.stays, vec![ContactEvent::single(0, Vec3::Y)]);
        assert!(report.exits.is_empty());
        assert!((body.position.y - 1.0).abs() < 1e-5);
        assert_eq!(body.velocity.y, 0.0);
        assert!(world.is_touching(0));
    }

    #[test]
    fn test_leaving_plane_reports_exit_once() {
        let mut world = PlaneWorld::new();
        world.add_plane(StaticPlane::floor(0.0, 3));

        let mut body = SimpleBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        world.resolve(&mut body);

        body.velocity = Vec3::new(0.0, 5.0, 0.0);
        body.integrate(0.1);
        let report = world.resolve(&mut body);
        assert_eq!(report.exits, vec![3]);
        assert!(report.stays.is_empty());

        body.integrate(0.01);
        assert!(world.resolve(&mut body).is_empty());
    }

    #[test]
    fn test_ramp_union_with_floor() {
        let mut world = PlaneWorld::new();
        world.add_plane(StaticPlane::floor(0.0, 0));
        let ramp_normal = Vec3::new(-(30f32.to_radians().sin()), 30f32.to_radians().cos(), 0.0);
        world.add_plane(StaticPlane::through_point(Vec3::new(10.0, 0.0, 0.0), ramp_normal, 0));

        // Well before the ramp only the floor is touched
        let mut body = SimpleBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        let report = world.resolve(&mut body);
        assert_eq!(report.stays.len(), 1);

        // Past the ramp foot the body is pushed up onto the ramp
        let mut body = SimpleBody::new(Vec3::new(20.0, 1.0, 0.0), 1.0);
        let report = world.resolve(&mut body);
        assert!(report.stays.iter().any(|e| e.normals[0] == world.planes()[1].normal));
        assert!(body.position.y > 1.0);
    }
}
