/// GLIDE Project
/// `File` level/mod.rs
/// `Description` Level geometry implementation module
/// `Author` TioT2
/// `Last changed` 18.10.2026

pub mod loader;

use crate::math::*;

/// Planar convex quad. Normal points to open space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Face {
    /// Quad vertices in winding order
    pub vertices: [Vec3; 4],
    /// Unit normal, shared by all vertices
    pub normal: Vec3,
    /// Bounds minimum
    pub min: Vec3,
    /// Bounds maximum
    pub max: Vec3,
} // struct Face

impl Face {
    /// Face construction function
    /// * `vertices` - quad vertices
    /// * `normal` - face normal, expected to be unit
    /// * Returns face with cached bounds
    pub fn new(vertices: [Vec3; 4], normal: Vec3) -> Self {
        let (min, max) = bounds(&vertices);

        Self { vertices, normal, min, max }
    } // fn new

    /// Face center getting function
    pub fn centroid(&self) -> Vec3 {
        self.vertices.iter().copied().sum::<Vec3>() * 0.25
    } // fn centroid

    /// Perimeter edges iterator getting function
    /// * Returns iterator of (v[i], v[i + 1 mod 4]) pairs
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        (0..4).map(|index| (self.vertices[index], self.vertices[(index + 1) % 4]))
    } // fn edges
} // impl Face

/// Planar teleport trigger
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Portal {
    /// Trigger quad
    pub quad: Face,
    /// Portal own anchor
    pub position: Vec3,
    /// Destination anchor
    pub to: Vec3,
} // struct Portal

impl Portal {
    /// Translation applied to anything crossing the portal
    pub fn offset(&self) -> Vec3 {
        self.to - self.position
    } // fn offset
} // impl Portal

/// Spot light descriptor. Consumed by renderer only.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub direction: Vec3,
    /// Inner cone cosine
    pub cut_off: f32,
    /// Outer cone cosine
    pub outer_cut_off: f32,
    pub color: Vec3,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
} // struct Light

impl Light {
    /// "No light" sentinel. Light iteration stops at it.
    pub const NONE: Light = Light {
        position: Vec3::ZERO,
        direction: Vec3::ZERO,
        cut_off: 0.0,
        outer_cut_off: 0.0,
        color: Vec3::ZERO,
        constant: 0.0,
        linear: 0.0,
        quadratic: 0.0,
    };

    /// Sentinel checking function
    pub fn is_none(&self) -> bool {
        self.color == Vec3::ZERO
    } // fn is_none
} // impl Light

/// Agent initial pose
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spawn {
    pub position: Vec3,
    /// Yaw, degrees
    pub yaw: f32,
    /// Pitch, degrees
    pub pitch: f32,
} // struct Spawn

impl Default for Spawn {
    fn default() -> Self {
        Self { position: Vec3::ZERO, yaw: 0.0, pitch: 0.0 }
    }
}

/// Renderable triangle list
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
} // struct Mesh

/// Flat level record, as produced by external loaders.
/// `vertices` and `normals` hold 12 floats (4 xyz vertices) per face.
#[derive(Clone, Debug, Default)]
pub struct LevelBuffers {
    pub vertices: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
    pub lights: Vec<Light>,
    pub portals: Vec<Portal>,
} // struct LevelBuffers

/// Level loading error
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LevelLoadingError {
    #[error("line {line}: number parsing error")]
    NumberParsingError { line: usize },
    #[error("line {line}: unknown line type '{line_type}'")]
    UnknownLineType { line: usize, line_type: String },
    #[error("line {line}: invalid vertex index {index}")]
    InvalidVertexIndex { line: usize, index: u32 },
    #[error("line {line}: not enough components ({required} required)")]
    NotEnoughComponents { line: usize, required: usize },
    #[error("face {face}: degenerate normal")]
    DegenerateNormal { face: usize },
    #[error("line {line}: degenerate portal normal")]
    DegeneratePortalNormal { line: usize },
    #[error("buffer of {len} floats is not a whole number of faces")]
    InvalidBufferLength { len: usize },
    #[error("normal buffer has {normals} floats, vertex buffer has {vertices}")]
    NormalCountMismatch { vertices: usize, normals: usize },
    #[error("index {index} is out of {count} vertices")]
    IndexOutOfRange { index: u32, count: usize },
    #[error("index buffer of {len} indices is not a whole number of triangles")]
    InvalidIndexCount { len: usize },
    #[error("level contains no faces")]
    NoFaces,
} // enum LevelLoadingError

/// Level representation structure
#[derive(Clone, Debug)]
pub struct Level {
    pub faces: Vec<Face>,
    /// Render triangle indices into face vertices, two triangles per face if empty
    pub indices: Vec<u32>,
    pub portals: Vec<Portal>,
    pub lights: Vec<Light>,
    pub spawn: Spawn,
} // struct Level

/// Normal normalization function
/// * Returns unit normal or error on zero-length normal
fn unit_normal(normal: Vec3, face: usize) -> Result<Vec3, LevelLoadingError> {
    normal
        .try_normalize()
        .ok_or(LevelLoadingError::DegenerateNormal { face })
} // fn unit_normal

impl Level {
    /// Level from flat buffers construction function
    /// * `buffers` - flat level record
    /// * Returns valid level or loading error
    pub fn from_buffers(buffers: LevelBuffers) -> Result<Level, LevelLoadingError> {
        let LevelBuffers { vertices, normals, indices, lights, portals } = buffers;

        if vertices.len() % 12 != 0 {
            return Err(LevelLoadingError::InvalidBufferLength { len: vertices.len() });
        }
        if normals.len() != vertices.len() {
            return Err(LevelLoadingError::NormalCountMismatch { vertices: vertices.len(), normals: normals.len() });
        }
        if vertices.is_empty() {
            return Err(LevelLoadingError::NoFaces);
        }

        let vertex_count = vertices.len() / 3;
        if let Some(index) = indices.iter().find(|index| **index as usize >= vertex_count) {
            return Err(LevelLoadingError::IndexOutOfRange { index: *index, count: vertex_count });
        }
        if indices.len() % 3 != 0 {
            return Err(LevelLoadingError::InvalidIndexCount { len: indices.len() });
        }

        let faces = vertices
            .chunks_exact(12)
            .zip(normals.chunks_exact(12))
            .enumerate()
            .map(|(face, (v, n))| {
                let quad = [
                    Vec3::new(v[0], v[1], v[2]),
                    Vec3::new(v[3], v[4], v[5]),
                    Vec3::new(v[6], v[7], v[8]),
                    Vec3::new(v[9], v[10], v[11]),
                ];

                // Normal is constant per face, first vertex one is taken
                Ok(Face::new(quad, unit_normal(Vec3::new(n[0], n[1], n[2]), face)?))
            })
            .collect::<Result<Vec<Face>, LevelLoadingError>>()?;

        Ok(Level { faces, indices, portals, lights, spawn: Spawn::default() })
    } // fn from_buffers

    /// Render mesh building function
    /// * Returns mesh with level indices, or two triangles per face if level has none
    pub fn build_mesh(&self) -> Mesh {
        let mut mesh = Mesh {
            vertices: Vec::with_capacity(self.faces.len() * 4),
            normals: Vec::with_capacity(self.faces.len() * 4),
            indices: self.indices.clone(),
        };

        for face in &self.faces {
            let base = mesh.vertices.len() as u32;

            mesh.vertices.extend_from_slice(&face.vertices);
            mesh.normals.extend(std::iter::repeat(face.normal).take(4));
            if self.indices.is_empty() {
                mesh.indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
            }
        }

        mesh
    } // fn build_mesh
} // impl Level


// file mod.rs
