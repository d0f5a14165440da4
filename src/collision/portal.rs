/// GLIDE Project
/// `File` collision/portal.rs
/// `Description` Portal crossing check module
/// `Author` TioT2
/// `Last changed` 18.10.2026

use crate::level::Portal;
use crate::math::*;

use super::sweep::ray_plane;

/// Hit point offset along the portal normal. Moves the point off the thin quad axis.
const PLANE_OFFSET: f32 = 1e-3;

/// Portal crossing checking function. Both crossing directions count.
/// * `position` - segment start
/// * `delta` - segment vector
/// * `portal` - portal to check
/// * Returns true if segment crosses portal plane inside its quad
pub fn crosses_portal(position: Vec3, delta: Vec3, portal: &Portal) -> bool {
    let quad = &portal.quad;

    ray_plane(position, delta, quad.vertices[0], quad.normal)
        .map(|t| within_two_axes(position + delta * t + quad.normal * PLANE_OFFSET, quad.min, quad.max))
        .unwrap_or(false)
} // fn crosses_portal

/// First crossed portal finding function
/// * `portals` - portals, in priority order
/// * Returns index and reference of the first crossed portal
pub fn first_crossed_portal(position: Vec3, delta: Vec3, portals: &[Portal]) -> Option<(usize, &Portal)> {
    portals
        .iter()
        .enumerate()
        .find(|(_, portal)| crosses_portal(position, delta, portal))
} // fn first_crossed_portal


// file portal.rs
