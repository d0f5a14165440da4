/// GLIDE Project
/// `File` collision/edges.rs
/// `Description` Collision edge extraction module
/// `Author` TioT2
/// `Last changed` 18.10.2026

use std::collections::{hash_map::Entry, HashMap};

use crate::level::Face;
use crate::math::*;
use crate::util::unordered_pair::UnorderedPair;

/// Joins with normal-to-perpendicular dot product below this are flat or concave
pub const CONVEXITY_EPSILON: f32 = 1e-6;

/// Collision edge representation structure
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub start: Vec3,
    pub end: Vec3,
    /// First face owning the edge
    pub face: usize,
} // struct Edge

/// Bit-exact point key. Shared edges are detected by identical vertex values only.
type PointKey = [u32; 3];

fn point_key(point: Vec3) -> PointKey {
    // + 0.0 maps -0.0 to 0.0
    [(point.x + 0.0).to_bits(), (point.y + 0.0).to_bits(), (point.z + 0.0).to_bits()]
} // fn point_key

/// Convex join checking function
/// * `owner` - face the edge direction is taken from
/// * `other` - second face sharing the edge
/// * `edge` - shared edge
/// * Returns true if the faces form an outward corner seen from open space
pub fn is_convex(owner: &Face, other: &Face, edge: &Edge) -> bool {
    let mut perpendicular = owner.normal.cross(edge.end - edge.start);

    // Orient away from owner interior, independent of winding
    if perpendicular.dot((edge.start + edge.end) * 0.5 - owner.centroid()) < 0.0 {
        perpendicular = -perpendicular;
    }

    perpendicular.normalize_or_zero().dot(other.normal) > CONVEXITY_EPSILON
} // fn is_convex

/// Collision edge set extraction function
/// * `faces` - level faces
/// * Returns boundary and convex edges in order of first appearance
pub fn extract_edges(faces: &[Face]) -> Vec<Edge> {
    let mut group_indices = HashMap::<UnorderedPair<PointKey>, usize>::new();
    let mut groups = Vec::<(Edge, Vec<usize>)>::new();

    // Group perimeter edges by their endpoints
    for (face_index, face) in faces.iter().enumerate() {
        for (start, end) in face.edges() {
            let (start_key, end_key) = (point_key(start), point_key(end));
            if start_key == end_key {
                continue;
            }

            match group_indices.entry(UnorderedPair::new(start_key, end_key)) {
                Entry::Occupied(entry) => groups[*entry.get()].1.push(face_index),
                Entry::Vacant(entry) => {
                    entry.insert(groups.len());
                    groups.push((Edge { start, end, face: face_index }, vec![face_index]));
                }
            }
        }
    }

    // Classify groups
    groups
        .into_iter()
        .filter(|(edge, owners)| match owners.as_slice() {
            [_] => true,
            [first, second] => is_convex(&faces[*first], &faces[*second], edge),
            // Non-manifold, keep to stay on the blocking side
            _ => true,
        })
        .map(|(edge, _)| edge)
        .collect()
} // fn extract_edges

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Axis-aligned box faces
    /// * `outward` - true for solid box, false for room normals
    pub fn box_faces(min: Vec3, max: Vec3, outward: bool) -> Vec<Face> {
        let corner = |x: bool, y: bool, z: bool| Vec3::new(
            if x { max.x } else { min.x },
            if y { max.y } else { min.y },
            if z { max.z } else { min.z },
        );
        let sign = if outward { 1.0 } else { -1.0 };

        vec![
            Face::new([corner(false, false, false), corner(false, true, false), corner(true, true, false), corner(true, false, false)], -Vec3::Z * sign),
            Face::new([corner(false, false, true), corner(true, false, true), corner(true, true, true), corner(false, true, true)], Vec3::Z * sign),
            Face::new([corner(false, false, false), corner(false, false, true), corner(false, true, true), corner(false, true, false)], -Vec3::X * sign),
            Face::new([corner(true, false, false), corner(true, true, false), corner(true, true, true), corner(true, false, true)], Vec3::X * sign),
            Face::new([corner(false, false, false), corner(true, false, false), corner(true, false, true), corner(false, false, true)], -Vec3::Y * sign),
            Face::new([corner(false, true, false), corner(false, true, true), corner(true, true, true), corner(true, true, false)], Vec3::Y * sign),
        ]
    }

    fn as_set(edges: &[Edge]) -> std::collections::HashSet<UnorderedPair<PointKey>> {
        edges.iter().map(|edge| UnorderedPair::new(point_key(edge.start), point_key(edge.end))).collect()
    }

    #[test]
    fn solid_box_keeps_all_twelve() {
        let edges = extract_edges(&box_faces(Vec3::splat(-1.0), Vec3::splat(1.0), true));

        assert_eq!(edges.len(), 12);
        assert_eq!(as_set(&edges).len(), 12);
        assert!(edges.iter().all(|edge| (edge.end - edge.start).length() == 2.0));
    }

    #[test]
    fn room_keeps_nothing() {
        assert!(extract_edges(&box_faces(Vec3::splat(-1.0), Vec3::splat(1.0), false)).is_empty());
    }

    #[test]
    fn coplanar_split_is_dropped() {
        let left = Face::new(
            [Vec3::new(-1.0, 0.0, -1.0), Vec3::new(-1.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0)],
            Vec3::Y,
        );
        let right = Face::new(
            [Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 1.0), Vec3::new(1.0, 0.0, -1.0)],
            Vec3::Y,
        );
        let edges = extract_edges(&[left, right]);

        assert_eq!(edges.len(), 6);
        assert!(!as_set(&edges).contains(&UnorderedPair::new(
            point_key(Vec3::new(0.0, 0.0, -1.0)),
            point_key(Vec3::new(0.0, 0.0, 1.0)),
        )));
    }

    #[test]
    fn extraction_is_idempotent() {
        let level = crate::level::Level::load_default().unwrap();

        assert_eq!(as_set(&extract_edges(&level.faces)), as_set(&extract_edges(&level.faces)));
    }

    #[test]
    fn default_level_edges() {
        let level = crate::level::Level::load_default().unwrap();
        let edges = as_set(&extract_edges(&level.faces));
        let key = |a: Vec3, b: Vec3| UnorderedPair::new(point_key(a), point_key(b));

        // Doorway corner
        assert!(edges.contains(&key(Vec3::new(-1.0, -1.0, 10.0), Vec3::new(-1.0, 1.0, 10.0))));
        // Pillar corner
        assert!(edges.contains(&key(Vec3::new(2.6, -1.0, 11.5), Vec3::new(2.6, 1.0, 11.5))));
        // Corridor floor to wall joint
        assert!(!edges.contains(&key(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(-1.0, -1.0, 10.0))));
        // Doorway floor and ceiling meet the hall at whole edges
        assert!(!edges.contains(&key(Vec3::new(-1.0, -1.0, 10.0), Vec3::new(1.0, -1.0, 10.0))));
        assert!(!edges.contains(&key(Vec3::new(-1.0, 1.0, 10.0), Vec3::new(1.0, 1.0, 10.0))));
        // Floor split lines are coplanar
        assert!(!edges.contains(&key(Vec3::new(-1.0, -1.0, 10.0), Vec3::new(-1.0, -1.0, 14.0))));
        // Pillar base
        assert!(edges.contains(&key(Vec3::new(2.0, -1.0, 11.5), Vec3::new(2.6, -1.0, 11.5))));
    }

    #[test]
    fn negative_zero_matches_zero() {
        assert_eq!(point_key(Vec3::new(-0.0, 0.0, -0.0)), point_key(Vec3::ZERO));
    }
}

// file edges.rs
