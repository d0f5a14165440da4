/// GLIDE Project
/// `File` render.rs
/// `Description` Software wireframe renderer module
/// `Author` TioT2
/// `Last changed` 18.10.2026

use crate::level::{Light, Mesh};
use crate::math::*;
use crate::surface::Surface;

/// Indexed triangle list renderer
pub trait Renderer {
    /// Mesh drawing function
    /// * `mesh` - triangle list with per-vertex normals
    /// * `model_view` - world to view transform
    /// * `projection` - view to clip transform
    /// * `lights` - lights, terminated by the first zero-color one
    fn draw(&mut self, mesh: &Mesh, model_view: &Mat4, projection: &Mat4, lights: &[Light]);
} // trait Renderer

/// Base brightness of unlit faces
const AMBIENT: f32 = 0.15;

/// Base wire color, before lighting
const WIRE_COLOR: Vec3 = Vec3::new(0.75, 0.9, 0.75);

/// Spot lighting of a surface point
/// * `point` - lit point
/// * `normal` - surface normal
/// * `lights` - light list
/// * Returns light color reaching the point, ambient included
pub fn shade(point: Vec3, normal: Vec3, lights: &[Light]) -> Vec3 {
    let mut color = Vec3::splat(AMBIENT);

    for light in lights.iter().take_while(|light| !light.is_none()) {
        let to_light = light.position - point;
        let distance = to_light.length();
        if distance <= f32::EPSILON {
            continue;
        }
        let to_light = to_light / distance;

        let diffuse = normal.dot(to_light).max(0.0);
        let theta = to_light.dot(-light.direction);
        let spot = ((theta - light.outer_cut_off) / (light.cut_off - light.outer_cut_off).max(f32::EPSILON)).clamp(0.0, 1.0);
        let attenuation = 1.0 / (light.constant + light.linear * distance + light.quadratic * distance * distance).max(f32::EPSILON);

        color += light.color * diffuse * spot * attenuation;
    }

    color
} // fn shade

/// Linear color to 0x00RRGGBB conversion function
pub fn to_pixel(color: Vec3) -> u32 {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0) as u32;

    (channel(color.x) << 16) | (channel(color.y) << 8) | channel(color.z)
} // fn to_pixel

/// Wireframe renderer, draws to a borrowed surface
pub struct WireRender<'a> {
    surface: &'a mut Surface,
} // struct WireRender

impl<'a> WireRender<'a> {
    /// Renderer creation function
    /// * `surface` - surface to render frame to
    pub fn new(surface: &'a mut Surface) -> Self {
        Self { surface }
    } // fn new

    /// Clip space to pixel coordinates
    fn to_screen(&self, clip: Vec4) -> (isize, isize) {
        let ext = self.surface.get_extent();
        let ndc = clip.truncate() / clip.w;

        (
            ((ndc.x * 0.5 + 0.5) * ext.width as f32) as isize,
            ((0.5 - ndc.y * 0.5) * ext.height as f32) as isize,
        )
    } // fn to_screen

    /// Clip space segment drawing function. Segment is clipped by the near plane.
    fn draw_clip_segment(&mut self, mut a: Vec4, mut b: Vec4, color: u32) {
        // Signed distances to near plane, z + w >= 0 is visible
        let (da, db) = (a.z + a.w, b.z + b.w);

        if da < 0.0 && db < 0.0 {
            return;
        }
        if da < 0.0 {
            a = a + (b - a) * (da / (da - db));
        } else if db < 0.0 {
            b = a + (b - a) * (da / (da - db));
        }
        if a.w <= 0.0 || b.w <= 0.0 {
            return;
        }

        let (x0, y0) = self.to_screen(a);
        let (x1, y1) = self.to_screen(b);

        // Keep Bresenham bounded on near-degenerate projections
        let limit = 16 * (self.surface.get_extent().width + self.surface.get_extent().height) as isize;
        if [x0, y0, x1, y1].iter().any(|v| v.abs() > limit) {
            return;
        }

        self.surface.draw_line(x0, y0, x1, y1, color);
    } // fn draw_clip_segment

    /// World space segments drawing function
    /// * `segments` - segment endpoints
    /// * `view_projection` - world to clip transform
    /// * `color` - line color
    pub fn draw_segments(&mut self, segments: impl IntoIterator<Item = (Vec3, Vec3)>, view_projection: &Mat4, color: u32) {
        for (a, b) in segments {
            self.draw_clip_segment(*view_projection * a.extend(1.0), *view_projection * b.extend(1.0), color);
        }
    } // fn draw_segments
} // impl WireRender

impl Renderer for WireRender<'_> {
    fn draw(&mut self, mesh: &Mesh, model_view: &Mat4, projection: &Mat4, lights: &[Light]) {
        let transform = *projection * *model_view;

        for triangle in mesh.indices.chunks_exact(3) {
            let fetch = |index: u32| mesh.vertices.get(index as usize).copied();
            let (Some(a), Some(b), Some(c)) = (fetch(triangle[0]), fetch(triangle[1]), fetch(triangle[2])) else {
                continue;
            };
            let normal = mesh.normals.get(triangle[0] as usize).copied().unwrap_or(Vec3::ZERO);

            let color = to_pixel(WIRE_COLOR * shade((a + b + c) / 3.0, normal, lights));
            let (ca, cb, cc) = (transform * a.extend(1.0), transform * b.extend(1.0), transform * c.extend(1.0));

            self.draw_clip_segment(ca, cb, color);
            self.draw_clip_segment(cb, cc, color);
            self.draw_clip_segment(cc, ca, color);
        }
    } // fn draw
} // impl Renderer for WireRender


// file render.rs
