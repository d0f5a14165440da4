/// GLIDE Project
/// `File` level/loader.rs
/// `Description` .lvl level file loading module
/// `Author` TioT2
/// `Last changed` 18.10.2026

use super::*;

/// Fixed-size float tuple parsing function
/// * `elem` - line element iterator
/// * `line` - line number, for error reporting
/// * Returns N parsed floats
fn parse_floats<'a, const N: usize>(elem: &mut impl Iterator<Item = &'a str>, line: usize) -> Result<[f32; N], LevelLoadingError> {
    let mut values = [0.0f32; N];

    for value in &mut values {
        *value = elem
            .next()
            .ok_or(LevelLoadingError::NotEnoughComponents { line, required: N })?
            .parse::<f32>()
            .map_err(|_| LevelLoadingError::NumberParsingError { line })?;
    }

    Ok(values)
} // fn parse_floats

/// Fixed-size index tuple parsing function
/// * Returns N parsed indices
fn parse_indices<'a, const N: usize>(elem: &mut impl Iterator<Item = &'a str>, line: usize) -> Result<[u32; N], LevelLoadingError> {
    let mut indices = [0u32; N];

    for index in &mut indices {
        *index = elem
            .next()
            .ok_or(LevelLoadingError::NotEnoughComponents { line, required: N })?
            .parse::<u32>()
            .map_err(|_| LevelLoadingError::NumberParsingError { line })?;
    }

    Ok(indices)
} // fn parse_indices

/// Quad vertex index parsing function
/// * Returns quad vertices looked up in the point list
fn parse_quad<'a>(elem: &mut impl Iterator<Item = &'a str>, line: usize, points: &[Vec3]) -> Result<[Vec3; 4], LevelLoadingError> {
    let indices = parse_indices::<4>(elem, line)?;
    let mut quad = [Vec3::ZERO; 4];

    for (vertex, index) in quad.iter_mut().zip(indices) {
        *vertex = *points
            .get(index as usize)
            .ok_or(LevelLoadingError::InvalidVertexIndex { line, index })?;
    }

    Ok(quad)
} // fn parse_quad

impl Level {
    /// Level from .lvl file loading function
    /// * `source` - file text
    /// * Returns valid Level or LevelLoadingError
    pub fn load_from_lvl(source: &str) -> Result<Level, LevelLoadingError> {
        let mut points = Vec::<Vec3>::new();
        let mut buffers = LevelBuffers::default();
        let mut spawn: Option<Spawn> = None;

        // Parse file data
        for (index, line) in source.lines().map(|line| line.trim()).enumerate() {
            let line_number = index + 1;
            let mut elem = line.split_whitespace();

            let line_type = match elem.next() {
                Some(s) => s,
                None => continue,
            };

            match line_type {
                // Comment
                s if s.starts_with('#') => {}

                // Vertex
                "v" | "vertex" => {
                    let [x, y, z] = parse_floats::<3>(&mut elem, line_number)?;
                    // -0.0 and 0.0 must produce the same bits for edge matching
                    points.push(Vec3::new(x + 0.0, y + 0.0, z + 0.0));
                }

                // Face, normal is validated on level construction
                "f" | "face" => {
                    let quad = parse_quad(&mut elem, line_number, &points)?;
                    let normal = parse_floats::<3>(&mut elem, line_number)?;

                    for vertex in quad {
                        buffers.vertices.extend_from_slice(&vertex.to_array());
                        buffers.normals.extend_from_slice(&normal);
                    }
                }

                // Render triangle, indices count face vertices in order of appearance
                "t" | "triangle" => {
                    buffers.indices.extend(parse_indices::<3>(&mut elem, line_number)?);
                }

                // Portal
                "p" | "portal" => {
                    let quad = parse_quad(&mut elem, line_number, &points)?;
                    let [nx, ny, nz, ax, ay, az, tx, ty, tz] = parse_floats::<9>(&mut elem, line_number)?;
                    let normal = Vec3::new(nx, ny, nz)
                        .try_normalize()
                        .ok_or(LevelLoadingError::DegeneratePortalNormal { line: line_number })?;

                    buffers.portals.push(Portal {
                        quad: Face::new(quad, normal),
                        position: Vec3::new(ax, ay, az),
                        to: Vec3::new(tx, ty, tz),
                    });
                }

                // Spot light
                "l" | "light" => {
                    let [px, py, pz, dx, dy, dz, cut_off, outer_cut_off, r, g, b, constant, linear, quadratic] =
                        parse_floats::<14>(&mut elem, line_number)?;

                    buffers.lights.push(Light {
                        position: Vec3::new(px, py, pz),
                        direction: Vec3::new(dx, dy, dz).normalize_or_zero(),
                        cut_off: cut_off.cos(),
                        outer_cut_off: outer_cut_off.cos(),
                        color: Vec3::new(r, g, b),
                        constant,
                        linear,
                        quadratic,
                    });
                }

                // Spawn pose
                "c" | "camera" => {
                    let [x, y, z, yaw, pitch] = parse_floats::<5>(&mut elem, line_number)?;

                    spawn = Some(Spawn { position: Vec3::new(x, y, z), yaw, pitch });
                }

                _ => return Err(LevelLoadingError::UnknownLineType {
                    line: line_number,
                    line_type: line_type.to_string(),
                }),
            }
        }

        let mut level = Level::from_buffers(buffers)?;

        level.spawn = spawn.unwrap_or_else(|| {
            tracing::warn!("level has no camera line, spawning at origin");
            Spawn::default()
        });

        tracing::debug!(
            "parsed level: {} vertices, {} faces, {} portals, {} lights",
            points.len(), level.faces.len(), level.portals.len(), level.lights.len(),
        );

        Ok(level)
    } // fn load_from_lvl

    /// Built-in level loading function
    pub fn load_default() -> Result<Level, LevelLoadingError> {
        Self::load_from_lvl(include_str!("../../levels/default.lvl"))
    } // fn load_default
} // impl Level

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "
        # unit floor square
        v -1 0 -1
        v -1 0 1
        v 1 0 1
        v 1 0 -1
        face 0 1 2 3 0 2 0
        c 0 0.5 0 90 -10
    ";

    #[test]
    fn square_level() {
        let level = Level::load_from_lvl(SQUARE).unwrap();

        assert_eq!(level.faces.len(), 1);
        assert_eq!(level.faces[0].normal, Vec3::Y);
        assert_eq!(level.faces[0].vertices[2], Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(level.spawn, Spawn { position: Vec3::new(0.0, 0.5, 0.0), yaw: 90.0, pitch: -10.0 });
    }

    #[test]
    fn default_level_loads() {
        let level = Level::load_default().unwrap();

        assert!(level.faces.len() >= 7);
        assert_eq!(level.portals.len(), 1);
        assert!(level.lights.iter().all(|light| !light.is_none()));
        assert!((level.portals[0].offset() - Vec3::new(0.0, 0.0, -14.0)).length() < 1e-5);
    }

    #[test]
    fn light_angles_become_cosines() {
        let level = Level::load_from_lvl(&format!("{SQUARE}\nl 0 1 0 0 -2 0 1.4 1.5 1 1 1 1 0.7 1.8")).unwrap();
        let light = level.lights[0];

        assert!((light.cut_off - 1.4f32.cos()).abs() < 1e-6);
        assert!((light.outer_cut_off - 1.5f32.cos()).abs() < 1e-6);
        assert_eq!(light.direction, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn negative_zero_is_normalized() {
        let level = Level::load_from_lvl("v -0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 0 1 2 3 0 0 1").unwrap();

        assert_eq!(level.faces[0].vertices[0].x.to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn loading_errors() {
        assert_eq!(
            Level::load_from_lvl("v 0 0").unwrap_err(),
            LevelLoadingError::NotEnoughComponents { line: 1, required: 3 }
        );
        assert_eq!(
            Level::load_from_lvl("v 0 zero 0").unwrap_err(),
            LevelLoadingError::NumberParsingError { line: 1 }
        );
        assert_eq!(
            Level::load_from_lvl("v 0 0 0\nf 0 0 0 7 0 1 0").unwrap_err(),
            LevelLoadingError::InvalidVertexIndex { line: 2, index: 7 }
        );
        assert_eq!(
            Level::load_from_lvl("q 1 2 3").unwrap_err(),
            LevelLoadingError::UnknownLineType { line: 1, line_type: "q".into() }
        );
        assert_eq!(
            Level::load_from_lvl("v 0 0 0\nf 0 0 0 0 0 0 0").unwrap_err(),
            LevelLoadingError::DegenerateNormal { face: 0 }
        );
        assert_eq!(Level::load_from_lvl("# nothing\n").unwrap_err(), LevelLoadingError::NoFaces);
        assert_eq!(
            Level::load_from_lvl(&format!("{SQUARE}\np 0 1 2 3 0 0 0 0 0 0 0 0 1")).unwrap_err(),
            LevelLoadingError::DegeneratePortalNormal { line: 10 }
        );
        assert_eq!(
            Level::load_from_lvl(&format!("{SQUARE}\nt 0 1 4")).unwrap_err(),
            LevelLoadingError::IndexOutOfRange { index: 4, count: 4 }
        );
    }

    #[test]
    fn triangle_lines_set_render_indices() {
        let level = Level::load_from_lvl(&format!("{SQUARE}\nt 2 1 0\ntriangle 3 2 0")).unwrap();

        assert_eq!(level.indices, vec![2, 1, 0, 3, 2, 0]);
        assert_eq!(level.build_mesh().indices, vec![2, 1, 0, 3, 2, 0]);
        assert!(Level::load_from_lvl(SQUARE).unwrap().indices.is_empty());
    }
}

// file loader.rs
