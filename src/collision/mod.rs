/// GLIDE Project
/// `File` collision/mod.rs
/// `Description` Swept collision implementation module
/// `Author` TioT2
/// `Last changed` 18.10.2026

pub mod edges;
pub mod portal;
pub mod resolver;
pub mod sweep;

pub use edges::{extract_edges, Edge};
pub use portal::{crosses_portal, first_crossed_portal};
pub use resolver::{resolve, resolve_detailed, Resolution};

use crate::level::{Face, Level};

/// Static collision geometry together with the agent shape it is resolved for.
/// Built once per level, read-only afterwards.
#[derive(Clone, Debug)]
pub struct CollisionWorld {
    /// Blocking faces, in level order
    pub faces: Vec<Face>,
    /// Convex and boundary edges
    pub edges: Vec<Edge>,
    /// Agent radius
    pub radius: f32,
    /// Contact offset along the contact normal
    pub epsilon: f32,
} // struct CollisionWorld

impl CollisionWorld {
    /// Collision world construction function
    /// * `faces` - level faces
    /// * `radius` - agent radius
    /// * `epsilon` - contact offset
    pub fn new(faces: Vec<Face>, radius: f32, epsilon: f32) -> Self {
        let edges = extract_edges(&faces);

        Self { faces, edges, radius, epsilon }
    } // fn new

    /// Level collision world construction function
    pub fn from_level(level: &Level, radius: f32, epsilon: f32) -> Self {
        let world = Self::new(level.faces.clone(), radius, epsilon);

        tracing::info!(
            "collision world: {} faces, {} edges kept of {} perimeter edges",
            world.faces.len(), world.edges.len(), world.faces.len() * 4,
        );

        world
    } // fn from_level
} // impl CollisionWorld

// file mod.rs
