/// GLIDE Project
/// `File` collision/resolver.rs
/// `Description` Recursive sweep and slide resolver
/// `Author` TioT2
/// `Last changed` 18.10.2026

use crate::math::*;

use super::sweep::{sweep_edge, sweep_face, Contact};
use super::CollisionWorld;

/// Resolution result
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Corrected end position
    pub position: Vec3,
    /// Number of blocking contacts met, nested slides included
    pub contacts: usize,
} // struct Resolution

/// Slide continuation function
/// * `contact` - blocking contact
/// * `end` - endpoint the blocked segment was heading to
/// * `depth` - remaining slide passes
/// * Returns continued resolution from the contact point
fn slide(contact: Contact, end: Vec3, world: &CollisionWorld, depth: u32) -> Resolution {
    if depth == 0 {
        return Resolution { position: contact.point, contacts: 0 };
    }

    let remaining = end - contact.point;
    let tangent = remaining - contact.normal * remaining.dot(contact.normal);

    resolve_detailed(contact.point, tangent, world, depth - 1)
} // fn slide

/// Swept collision resolution function
/// * `position` - agent position
/// * `delta` - desired displacement
/// * `world` - collision geometry
/// * `depth` - number of nested slide passes allowed
/// * Returns corrected position and contact count
pub fn resolve_detailed(position: Vec3, delta: Vec3, world: &CollisionWorld, depth: u32) -> Resolution {
    if delta == Vec3::ZERO || !delta.is_finite() {
        return Resolution { position, contacts: 0 };
    }

    let mut end = position + delta;
    let mut contacts = 0;

    // Faces, sequentially against the current candidate segment
    for face in &world.faces {
        if let Some(contact) = sweep_face(position, end - position, face, world.radius, world.epsilon) {
            let resolution = slide(contact, end, world, depth);

            end = resolution.position;
            contacts += resolution.contacts + 1;
        }
    }

    // Edges only matter when no face got in the way
    if contacts == 0 {
        for edge in &world.edges {
            if let Some(contact) = sweep_edge(position, end - position, edge, world.radius, world.epsilon) {
                let resolution = slide(contact, end, world, depth);

                end = resolution.position;
                contacts += resolution.contacts + 1;
            }
        }
    }

    // Corner spheres at edge endpoints are not tested

    if !end.is_finite() {
        tracing::warn!("non-finite resolution from {position} by {delta}, motion dropped");
        return Resolution { position, contacts };
    }

    Resolution { position: end, contacts }
} // fn resolve_detailed

/// Swept collision resolution function
/// * Returns corrected position, see `resolve_detailed`
pub fn resolve(position: Vec3, delta: Vec3, world: &CollisionWorld, depth: u32) -> Vec3 {
    resolve_detailed(position, delta, world, depth).position
} // fn resolve

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::edges::tests::box_faces;
    use crate::collision::Edge;
    use crate::level::Face;

    const RADIUS: f32 = 0.1;
    const EPSILON: f32 = 0.001;

    fn quad(a: Vec3, b: Vec3, c: Vec3, d: Vec3, normal: Vec3) -> Face {
        Face::new([a, b, c, d], normal)
    }

    /// z = 0 wall facing -Z
    fn front_wall() -> Face {
        quad(
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            -Vec3::Z,
        )
    }

    /// x = 1 wall facing -X
    fn side_wall() -> Face {
        quad(
            Vec3::new(1.0, -1.0, -5.0),
            Vec3::new(1.0, 1.0, -5.0),
            Vec3::new(1.0, 1.0, 5.0),
            Vec3::new(1.0, -1.0, 5.0),
            -Vec3::X,
        )
    }

    /// z = 1 wall facing -Z
    fn back_wall() -> Face {
        quad(
            Vec3::new(-5.0, -1.0, 1.0),
            Vec3::new(-5.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            -Vec3::Z,
        )
    }

    fn world(faces: Vec<Face>) -> CollisionWorld {
        CollisionWorld::new(faces, RADIUS, EPSILON)
    }

    #[test]
    fn zero_motion_is_noop() {
        let world = world(vec![front_wall()]);
        let position = Vec3::new(0.0, 0.0, -0.5);

        assert_eq!(resolve(position, Vec3::ZERO, &world, 4), position);
        assert_eq!(resolve(position, Vec3::NAN, &world, 4), position);
    }

    #[test]
    fn free_motion_is_unchanged() {
        let world = world(vec![front_wall()]);
        let resolution = resolve_detailed(Vec3::new(0.0, 0.0, -0.5), Vec3::new(0.0, 0.0, 0.3), &world, 4);

        assert_eq!(resolution.contacts, 0);
        assert!((resolution.position - Vec3::new(0.0, 0.0, -0.2)).length() < 1e-6);
    }

    #[test]
    fn head_on_stops_short_of_wall() {
        let world = world(vec![front_wall()]);
        let resolution = resolve_detailed(Vec3::new(0.0, 0.0, -0.5), Vec3::Z, &world, 4);

        assert_eq!(resolution.contacts, 1);
        assert!((resolution.position.z + 0.1).abs() < 0.01, "z = {}", resolution.position.z);
        assert!(resolution.position.x.abs() < 1e-6 && resolution.position.y.abs() < 1e-6);
    }

    #[test]
    fn distance_never_below_radius() {
        let world = world(vec![front_wall()]);

        for step in 1..=20 {
            let delta = Vec3::new(0.0, 0.0, step as f32 * 0.1);
            let position = resolve(Vec3::new(0.2, -0.3, -0.5), delta, &world, 4);

            assert!(-position.z >= RADIUS - EPSILON, "step {step}: z = {}", position.z);
        }
    }

    #[test]
    fn grazing_motion_slides_along_wall() {
        let world = world(vec![side_wall()]);
        let start = Vec3::new(1.0 - RADIUS - EPSILON, 0.0, 0.0);
        let end = resolve(start, Vec3::new(0.2, 0.0, 2.0), &world, 4);
        let moved = end - start;

        assert!(moved.dot(-Vec3::X).abs() < 1e-4, "moved = {moved}");
        assert!((moved.z - 2.0).abs() < 1e-4);
    }

    #[test]
    fn corner_slide_composes() {
        let world = world(vec![side_wall(), back_wall()]);
        let delta = Vec3::new(2.0, 0.0, 1.5);

        let single = resolve(Vec3::ZERO, delta, &world, 0);
        let nested = resolve(Vec3::ZERO, delta, &world, 4);

        assert!(nested.z > single.z + 0.1, "single = {single}, nested = {nested}");
        assert!(nested.x <= 1.0 - RADIUS && nested.z <= 1.0 - RADIUS);
        assert!(nested.x > 0.85 && nested.z > 0.85);
    }

    #[test]
    fn edge_deflects_passing_agent() {
        let world = CollisionWorld {
            faces: Vec::new(),
            edges: vec![Edge { start: Vec3::new(0.0, -1.0, 0.0), end: Vec3::new(0.0, 1.0, 0.0), face: 0 }],
            radius: RADIUS,
            epsilon: EPSILON,
        };
        let resolution = resolve_detailed(Vec3::new(-1.0, 0.0, 0.05), Vec3::new(2.0, 0.0, 0.0), &world, 4);
        let radial = Vec3::new(resolution.position.x, 0.0, resolution.position.z);

        assert_eq!(resolution.contacts, 1);
        assert!(radial.length() >= RADIUS, "position = {}", resolution.position);
        assert!(resolution.position.z > 0.05);
    }

    #[test]
    fn faces_shadow_edges() {
        // Solid box corner: the face blocks first, edges are not consulted
        let world = world(box_faces(Vec3::splat(-1.0), Vec3::splat(1.0), true));
        let resolution = resolve_detailed(Vec3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, 1.5), &world, 4);

        assert_eq!(resolution.contacts, 1);
        assert!((resolution.position.z + 1.0 + RADIUS).abs() < 0.01);
    }

    #[test]
    fn grounded_walk_clears_pillar_corner() {
        // Floor at y = -1 and a pillar standing on it, sides only
        let floor = quad(
            Vec3::new(-5.0, -1.0, -5.0),
            Vec3::new(-5.0, -1.0, 5.0),
            Vec3::new(5.0, -1.0, 5.0),
            Vec3::new(5.0, -1.0, -5.0),
            Vec3::Y,
        );
        let mut faces = vec![floor];
        faces.extend(
            box_faces(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.6, 1.0, 0.6), true)
                .into_iter()
                .filter(|face| face.normal.y == 0.0),
        );
        let world = world(faces);

        // Footprint distance in xz
        let pillar_distance = |p: Vec3| {
            let dx = (0.0 - p.x).max(0.0).max(p.x - 0.6);
            let dz = (0.0 - p.z).max(0.0).max(p.z - 0.6);
            Vec3::new(dx, 0.0, dz).length()
        };

        let mut position = Vec3::new(-0.5, -1.0 + RADIUS + EPSILON, -0.05);
        for step in 0..40 {
            let resolution = resolve_detailed(position, Vec3::new(0.05, -0.03, 0.0), &world, 4);
            position = resolution.position;

            // Floor blocks every step, so edges are only met by the nested slide
            assert!(resolution.contacts >= 1);
            assert!(pillar_distance(position) >= RADIUS - EPSILON, "step {step}: {position}");
            assert!((position.y - (-1.0 + RADIUS)).abs() < 0.01, "step {step}: {position}");
        }

        assert!(position.x > 0.8, "stuck at {position}");
    }

    #[test]
    fn box_corner_is_not_tunneled() {
        // Passing by a solid box corner just outside both face quads
        let world = world(box_faces(Vec3::splat(-1.0), Vec3::splat(1.0), true));
        let resolution = resolve_detailed(Vec3::new(1.5, 0.0, -1.05), Vec3::new(-1.0, 0.0, 0.0), &world, 4);
        let end = resolution.position;
        let radial = Vec3::new(end.x - 1.0, 0.0, end.z + 1.0);

        assert_eq!(world.edges.len(), 12);
        assert_eq!(resolution.contacts, 1);
        assert!(radial.length() >= RADIUS, "end = {end}");
        assert!(end.z < -1.0 - RADIUS, "end = {end}");
    }
}

// file resolver.rs
