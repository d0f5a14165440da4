/// GLIDE Project
/// `File` camera.rs
/// `Description` First person camera module
/// `Author` TioT2
/// `Last changed` 18.10.2026

use crate::math::*;

/// Pitch limit for view matrix building, straight up/down view has no defined right vector
const VIEW_PITCH_LIMIT: f32 = 89.9;

#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub location: Vec3,
    pub direction: Vec3,
    /// Vertical field of view, degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    view: Mat4,
} // struct Camera

impl Camera {
    /// Camera creation function
    /// * `fov` - vertical field of view, degrees
    /// * `near`, `far` - clip plane distances
    pub fn new(fov: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            location: Vec3::ZERO,
            direction: Vec3::Z,
            fov,
            near,
            far,
            view: Mat4::IDENTITY,
        };
        camera.set_location(Vec3::ZERO, 0.0, 0.0);
        camera
    } // fn new

    /// Camera pose setting function
    /// * `location` - eye position
    /// * `yaw`, `pitch` - view angles, degrees
    pub fn set_location(&mut self, location: Vec3, yaw: f32, pitch: f32) {
        self.location = location;
        self.direction = look_direction(yaw, pitch.clamp(-VIEW_PITCH_LIMIT, VIEW_PITCH_LIMIT));
        self.view = Mat4::look_to_rh(location, self.direction, Vec3::Y);
    } // fn set_location

    /// View (model-view for static level) matrix getting function
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    } // fn view_matrix

    /// Projection matrix getting function
    /// * `extent` - viewport extent
    pub fn projection_matrix(&self, extent: Ext2su) -> Mat4 {
        let aspect = extent.width.max(1) as f32 / extent.height.max(1) as f32;

        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect, self.near, self.far)
    } // fn projection_matrix
} // impl Camera

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_space_looks_down_negative_z() {
        let mut camera = Camera::new(90.0, 0.01, 100.0);
        camera.set_location(Vec3::new(0.0, 1.0, 0.0), 0.0, 0.0);

        let view = camera.view_matrix();

        let ahead = view.transform_point3(Vec3::new(0.0, 1.0, 5.0));
        assert!((ahead - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-5);

        // Right of a +Z looking camera is -X
        assert!(view.transform_point3(Vec3::new(-1.0, 1.0, 5.0)).x > 0.0);
        assert!(view.transform_point3(Vec3::new(0.0, 2.0, 5.0)).y > 0.0);
    }

    #[test]
    fn vertical_pitch_stays_finite() {
        let mut camera = Camera::new(90.0, 0.01, 100.0);
        camera.set_location(Vec3::ZERO, 45.0, 90.0);

        assert!(camera.view_matrix().is_finite());
        assert!(camera.direction.y > 0.99);
    }
}

// file camera.rs
