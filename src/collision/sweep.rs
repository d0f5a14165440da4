/// GLIDE Project
/// `File` collision/sweep.rs
/// `Description` Ray against plane and cylinder sweep tests
/// `Author` TioT2
/// `Last changed` 18.10.2026

use crate::level::Face;
use crate::math::*;

use super::Edge;

/// Denominators below this are treated as parallel motion
pub const PARALLEL_EPSILON: f32 = 1e-9;

/// Blocking contact found by a sweep
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// Segment parameter of the hit
    pub t: f32,
    /// Hit point, already offset by epsilon along the normal
    pub point: Vec3,
    /// Unit contact normal
    pub normal: Vec3,
} // struct Contact

/// Ray to plane intersection function
/// * `origin` - segment start
/// * `delta` - segment vector
/// * `plane_point` - any point on the plane
/// * `normal` - plane normal
/// * Returns parameter in [0, 1) or None for parallel, non-finite or out-of-segment hits
pub fn ray_plane(origin: Vec3, delta: Vec3, plane_point: Vec3, normal: Vec3) -> Option<f32> {
    let denominator = normal.dot(delta);

    if denominator.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = normal.dot(plane_point - origin) / denominator;

    (t.is_finite() && (0.0..1.0).contains(&t)).then_some(t)
} // fn ray_plane

/// Face sweep function. The face plane is pushed `radius` towards open space.
/// * `origin` - agent position
/// * `delta` - desired displacement
/// * `face` - face to test
/// * `radius` - agent radius
/// * `epsilon` - contact offset
/// * Returns contact if the segment enters the face from its open side
pub fn sweep_face(origin: Vec3, delta: Vec3, face: &Face, radius: f32, epsilon: f32) -> Option<Contact> {
    // Moving along or away from the face never blocks
    if face.normal.dot(delta) >= 0.0 {
        return None;
    }

    let t = ray_plane(origin, delta, face.vertices[0] + face.normal * radius, face.normal)?;
    let point = origin + delta * t + face.normal * epsilon;

    within_two_axes(point, face.min, face.max).then_some(Contact { t, point, normal: face.normal })
} // fn sweep_face

/// Edge sweep function. The edge is a cylinder of `radius` around its segment, without caps.
/// * `origin` - agent position
/// * `delta` - desired displacement
/// * `edge` - edge to test
/// * Returns contact if the segment enters the cylinder between edge endpoints
pub fn sweep_edge(origin: Vec3, delta: Vec3, edge: &Edge, radius: f32, epsilon: f32) -> Option<Contact> {
    let axis = edge.end - edge.start;
    let length = axis.length();
    if length < PARALLEL_EPSILON {
        return None;
    }
    let axis = axis / length;

    // Project axis component out of both motion and relative position
    let relative = origin - edge.start;
    let delta_perp = delta - axis * delta.dot(axis);
    let relative_perp = relative - axis * relative.dot(axis);

    // a t^2 + 2 b t + c = 0
    let a = delta_perp.dot(delta_perp);
    let b = delta_perp.dot(relative_perp);
    let c = relative_perp.dot(relative_perp) - radius * radius;

    if a < PARALLEL_EPSILON {
        return None;
    }

    let discriminant = b * b - a * c;
    if !(discriminant > 0.0) {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / a;
    if !(t.is_finite() && t > 0.0 && t < 1.0) {
        return None;
    }

    let hit = origin + delta * t;
    let along = (hit - edge.start).dot(axis);
    if !(along > 0.0 && along < length) {
        return None;
    }

    let normal = ((hit - edge.start) - axis * along).try_normalize()?;

    Some(Contact { t, point: hit + normal * epsilon, normal })
} // fn sweep_edge


// file sweep.rs
