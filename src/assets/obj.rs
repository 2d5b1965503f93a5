//! Wavefront OBJ loading through `tobj`
//!
//! Faces are kept as written (no triangulation) and with separate position
//! and UV indices. Every face must be a triangle with a UV index on each
//! corner; the result is an unindexed triangle list ready for upload.

use std::{
    cell::RefCell,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::gfx::geometry::TexturedGeometry;

/// Why a model file was rejected
#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid model data: {0}")]
    Load(#[from] tobj::LoadError),

    #[error("'{model}' has a face with {arity} corners, only triangles are supported")]
    NonTriangleFace { model: String, arity: u32 },

    #[error("'{model}' has face corners without a texture coordinate")]
    MissingTexCoords { model: String },
}

/// Geometry and material library reference read from an OBJ file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjModel {
    pub geometry: TexturedGeometry,
    /// File name given by the `mtllib` statement, relative to the model
    pub material_library: Option<String>,
}

impl ObjModel {
    /// Reads a model, logging and returning an empty model on any failure
    ///
    /// Rendering carries on with zero geometry when the file is missing or
    /// rejected.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(model) => {
                log::info!(
                    "Loaded model {:?}: {} triangles",
                    path,
                    model.geometry.triangle_count()
                );
                model
            }
            Err(e) => {
                log::error!("Failed to load model {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ObjError> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    pub fn parse<R: BufRead>(mut reader: R) -> Result<Self, ObjError> {
        let material_library = RefCell::new(None);
        let options = tobj::LoadOptions {
            single_index: false,
            triangulate: false,
            ..Default::default()
        };

        // Materials are resolved separately; only the library name is kept.
        let (models, _) = tobj::load_obj_buf(&mut reader, &options, |mtl_path| {
            let name = mtl_path.to_string_lossy();
            if !name.is_empty() {
                *material_library.borrow_mut() = Some(name.into_owned());
            }
            tobj::load_mtl_buf(&mut io::empty())
        })?;

        let mut geometry = TexturedGeometry::default();
        for model in &models {
            append_triangles(model, &mut geometry)?;
        }

        Ok(ObjModel {
            geometry,
            material_library: material_library.into_inner(),
        })
    }

    /// Path of the material library, resolved next to `model_path`
    pub fn material_path(&self, model_path: &Path) -> Option<PathBuf> {
        let name = self.material_library.as_ref()?;
        Some(match model_path.parent() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        })
    }
}

/// Expands one `tobj` model into flat position/UV arrays in face order
fn append_triangles(model: &tobj::Model, geometry: &mut TexturedGeometry) -> Result<(), ObjError> {
    let mesh = &model.mesh;

    // `face_arities` is left empty when every face is a triangle.
    if let Some(&arity) = mesh.face_arities.iter().find(|&&arity| arity != 3) {
        return Err(ObjError::NonTriangleFace {
            model: model.name.clone(),
            arity,
        });
    }
    if mesh.texcoord_indices.len() != mesh.indices.len() {
        return Err(ObjError::MissingTexCoords {
            model: model.name.clone(),
        });
    }

    for (&v, &vt) in mesh.indices.iter().zip(&mesh.texcoord_indices) {
        let (v, vt) = (v as usize, vt as usize);
        let position = mesh
            .positions
            .get(3 * v..3 * v + 3)
            .ok_or(tobj::LoadError::FaceVertexOutOfBounds)?;
        let uv = mesh
            .texcoords
            .get(2 * vt..2 * vt + 2)
            .ok_or(tobj::LoadError::FaceTexCoordOutOfBounds)?;
        geometry
            .positions
            .push([position[0], position[1], position[2]]);
        geometry.uvs.push([uv[0], uv[1]]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(src: &str) -> Result<ObjModel, ObjError> {
        ObjModel::parse(Cursor::new(src))
    }

    fn is_index_out_of_range(err: &ObjError) -> bool {
        matches!(
            err,
            ObjError::Load(
                tobj::LoadError::FaceVertexOutOfBounds | tobj::LoadError::FaceTexCoordOutOfBounds
            )
        )
    }

    #[test]
    fn test_single_triangle_in_face_order() {
        let model = parse(
            "v 0.0 0.0 0.0\n\
             v 1.0 0.0 0.0\n\
             v 0.0 1.0 0.0\n\
             vt 0.0 0.0\n\
             vt 1.0 0.0\n\
             vt 0.0 1.0\n\
             vn 0.0 0.0 1.0\n\
             f 1/1/1 2/2/1 3/3/1\n",
        )
        .unwrap();

        assert_eq!(
            model.geometry.positions,
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
        );
        assert_eq!(model.geometry.uvs, vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(model.material_library, None);
    }

    #[test]
    fn test_shared_indices_are_expanded() {
        let model = parse(
            "v -1 -1 0\nv 1 -1 0\nv 1 1 0\nv -1 1 0\n\
             vt 0 0\nvt 1 0\nvt 1 1\nvt 0 1\n\
             f 1/1 2/2 3/3\n\
             f 3/3 4/4 1/1\n",
        )
        .unwrap();

        assert_eq!(model.geometry.vertex_count(), 6);
        assert_eq!(model.geometry.triangle_count(), 2);
        assert_eq!(model.geometry.positions[3], [1.0, 1.0, 0.0]);
        assert_eq!(model.geometry.positions[5], [-1.0, -1.0, 0.0]);
        assert_eq!(model.geometry.uvs[4], [0.0, 1.0]);
    }

    #[test]
    fn test_mtllib_and_ignored_statements() {
        let model = parse(
            "# exported\n\
             mtllib bola.mtl\n\
             o Sphere\n\
             \n\
             v 0 0 0\nv 0 1 0\nv 1 0 0\n\
             vt 0 0\n\
             vn 0 0 1\n\
             usemtl Material\n\
             s off\n\
             f 1/1/1 2/1/1 3/1/1\n",
        )
        .unwrap();

        assert_eq!(model.material_library.as_deref(), Some("bola.mtl"));
        assert_eq!(model.geometry.vertex_count(), 3);
    }

    #[test]
    fn test_out_of_range_index_rejects_file() {
        let err = parse("v 0 0 0\nvt 0 0\nvn 0 0 1\nf 1/1/1 2/1/1 1/1/1\n").unwrap_err();
        assert!(is_index_out_of_range(&err), "unexpected error: {err}");
    }

    #[test]
    fn test_out_of_range_uv_rejects_file() {
        let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nf 1/1 2/2 3/1\n").unwrap_err();
        assert!(is_index_out_of_range(&err), "unexpected error: {err}");
    }

    #[test]
    fn test_zero_index_is_rejected() {
        assert!(parse("v 0 0 0\nvt 0 0\nf 1/0 1/1 1/1\n").is_err());
    }

    #[test]
    fn test_quad_face_is_rejected() {
        let err = parse(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nvt 0 0\n\
             f 1/1 2/1 3/1 4/1\n",
        )
        .unwrap_err();
        assert!(matches!(err, ObjError::NonTriangleFace { arity: 4, .. }));
    }

    #[test]
    fn test_face_without_uv_is_rejected() {
        let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\n").unwrap_err();
        assert!(matches!(err, ObjError::MissingTexCoords { .. }));
    }

    #[test]
    fn test_non_numeric_vertex_is_rejected() {
        let err = parse("v 0 zero 0\n").unwrap_err();
        assert!(matches!(err, ObjError::Load(_)));
    }

    #[test]
    fn test_empty_file_has_no_geometry() {
        let model = parse("# nothing here\n").unwrap();
        assert!(model.geometry.is_empty());
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let path = std::env::temp_dir().join("turntable-missing-model.obj");
        let _ = std::fs::remove_file(&path);

        assert!(matches!(ObjModel::from_file(&path), Err(ObjError::Io(_))));

        let model = ObjModel::load(&path);
        assert!(model.geometry.is_empty());
        assert_eq!(model.material_library, None);
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "turntable-model-{}.obj",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "mtllib tri.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 0 1\nvn 0 0 1\nf 1/1/1 2/2/1 3/3/1\n",
        )
        .unwrap();

        let model = ObjModel::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(model.geometry.vertex_count(), 3);
        assert_eq!(
            model.material_path(&path),
            Some(std::env::temp_dir().join("tri.mtl"))
        );
    }
}
