//! # Primitive Shapes
//!
//! Fixed vertex tables for the procedural scene.

use super::ColoredGeometry;

const ORANGE: [f32; 3] = [1.0, 0.5, 0.25];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLACK: [f32; 3] = [0.0, 0.0, 0.0];
const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const CYAN: [f32; 3] = [0.0, 1.0, 1.0];

/// Unit cube centered at the origin, one flat color per face
///
/// 6 faces * 2 triangles * 3 vertices = 36 unindexed vertices spanning
/// -0.5 to 0.5 on every axis.
#[rustfmt::skip]
pub fn colored_cube() -> ColoredGeometry {
    let faces: [([[f32; 3]; 6], [f32; 3]); 6] = [
        // Back (-Z)
        ([
            [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5],
            [-0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5],
        ], ORANGE),
        // Right (+X)
        ([
            [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5],
            [ 0.5, -0.5, -0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5],
        ], GREEN),
        // Front (+Z)
        ([
            [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5],
            [ 0.5, -0.5,  0.5], [-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5],
        ], BLACK),
        // Left (-X)
        ([
            [-0.5, -0.5,  0.5], [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5],
            [-0.5, -0.5,  0.5], [-0.5,  0.5, -0.5], [-0.5,  0.5,  0.5],
        ], MAGENTA),
        // Top (+Y)
        ([
            [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5,  0.5,  0.5],
            [-0.5,  0.5, -0.5], [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5],
        ], YELLOW),
        // Bottom (-Y)
        ([
            [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5],
            [-0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [-0.5, -0.5, -0.5],
        ], CYAN),
    ];

    let mut data = ColoredGeometry::default();
    for (corners, color) in faces {
        for corner in corners {
            data.positions.push(corner);
            data.colors.push(color);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_generation() {
        let cube = colored_cube();
        assert_eq!(cube.vertex_count(), 36);
        assert_eq!(cube.colors.len(), cube.positions.len());
        assert_eq!(cube.vertex_count() % 3, 0);
        assert_eq!(cube.triangle_count(), 12);
    }

    #[test]
    fn test_cube_bounds() {
        let cube = colored_cube();
        for p in &cube.positions {
            for c in p {
                assert!(*c == 0.5 || *c == -0.5);
            }
        }
    }

    #[test]
    fn test_each_face_has_one_color() {
        let cube = colored_cube();
        for face in cube.colors.chunks(6) {
            assert!(face.iter().all(|c| *c == face[0]));
        }
        assert_eq!(cube.colors[0], ORANGE);
        assert_eq!(cube.colors[35], CYAN);
    }
}
