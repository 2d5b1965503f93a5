//! Diffuse texture lookup in Wavefront MTL files

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum MtlError {
    #[error("failed to read material file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid material data: {0}")]
    Load(#[from] tobj::LoadError),
}

/// The diffuse texture file named by a material library
///
/// Only `map_Kd` is used. When several materials name one, the last one
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialReference {
    pub diffuse_texture: Option<String>,
}

impl MaterialReference {
    /// Reads a material file, logging and returning no texture on failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(material) => {
                if material.diffuse_texture.is_none() {
                    log::warn!("Material {:?} has no map_Kd entry", path);
                }
                material
            }
            Err(e) => {
                log::error!("Failed to load material {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MtlError> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    pub fn parse<R: BufRead>(mut reader: R) -> Result<Self, MtlError> {
        let (materials, _) = tobj::load_mtl_buf(&mut reader)?;
        let diffuse_texture = materials
            .into_iter()
            .filter_map(|material| material.diffuse_texture)
            .last();

        Ok(MaterialReference { diffuse_texture })
    }

    /// Path of the texture, resolved next to `material_path`
    pub fn texture_path(&self, material_path: &Path) -> Option<PathBuf> {
        let name = self.diffuse_texture.as_ref()?;
        Some(match material_path.parent() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        })
    }
}
