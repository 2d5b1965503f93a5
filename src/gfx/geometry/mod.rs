//! # Geometry Data
//!
//! CPU-side vertex data, built once at startup and uploaded once.
//!
//! - [`TexturedGeometry`] - flat position/UV arrays from the OBJ loader
//! - [`ColoredGeometry`] - flat position/color arrays for the procedural cube
//!
//! Both are unindexed triangle lists: every three consecutive entries form a
//! triangle and insertion order is draw order.

pub mod primitives;

pub use primitives::*;

use crate::gfx::scene::vertex::{ColoredVertex, TexturedVertex};

/// Positions with a parallel array of texture coordinates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TexturedGeometry {
    pub positions: Vec<[f32; 3]>,
    /// Same length as `positions`
    pub uvs: Vec<[f32; 2]>,
}

impl TexturedGeometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Interleaves positions and UVs into upload order
    pub fn to_vertices(&self) -> Vec<TexturedVertex> {
        self.positions
            .iter()
            .zip(&self.uvs)
            .map(|(&position, &tex_coords)| TexturedVertex {
                position,
                tex_coords,
            })
            .collect()
    }
}

/// Positions with a parallel per-vertex color
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColoredGeometry {
    pub positions: Vec<[f32; 3]>,
    /// Same length as `positions`
    pub colors: Vec<[f32; 3]>,
}

impl ColoredGeometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn to_vertices(&self) -> Vec<ColoredVertex> {
        self.positions
            .iter()
            .zip(&self.colors)
            .map(|(&position, &color)| ColoredVertex { position, color })
            .collect()
    }
}
