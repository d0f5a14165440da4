/// GLIDE Project
/// `File` math.rs
/// `Description` Math utilities implementation module
/// `Author` TioT2
/// `Last changed` 18.10.2026

pub use glam::{Mat4, Vec2, Vec3, Vec4};

/// Two-dimensional extent representation structure
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ext2<T> {
    pub width: T,
    pub height: T,
} // struct Ext2

pub type Ext2su = Ext2<usize>;

/// Axis-aligned bounds of a point set
/// * `points` - points to enclose
/// * Returns (min, max) pair, or zero bounds for empty set
pub fn bounds(points: &[Vec3]) -> (Vec3, Vec3) {
    let mut iter = points.iter();
    let first = match iter.next() {
        Some(first) => *first,
        None => return (Vec3::ZERO, Vec3::ZERO),
    };

    iter.fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)))
} // fn bounds

/// Check that point lies inside bounds in at least two of the three axes.
/// Thin quads have a degenerate extent along their normal, so the third axis is tolerated.
/// * `point` - point to check
/// * `min` - bounds minimum
/// * `max` - bounds maximum
/// * Returns true if at least two coordinates are inside
pub fn within_two_axes(point: Vec3, min: Vec3, max: Vec3) -> bool {
    let inside = |v: f32, lo: f32, hi: f32| (v >= lo && v <= hi) as u32;

    inside(point.x, min.x, max.x) + inside(point.y, min.y, max.y) + inside(point.z, min.z, max.z) >= 2
} // fn within_two_axes

/// Horizontal forward direction for yaw given in degrees. Yaw 0 looks along +Z.
pub fn yaw_forward(yaw: f32) -> Vec3 {
    let yaw = yaw.to_radians();
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
} // fn yaw_forward

/// Look direction from yaw and pitch in degrees
/// * Returns unit direction vector
pub fn look_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(yaw.sin() * pitch.cos(), pitch.sin(), yaw.cos() * pitch.cos())
} // fn look_direction


// file math.rs
