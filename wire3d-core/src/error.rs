/// Errors raised while loading meshes or resolving their edges
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("mesh file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read mesh file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed vertex on line {line}: '{text}'")]
    MalformedVertex { line: usize, text: String },

    #[error("malformed face token '{token}' on line {line}")]
    MalformedFace { line: usize, token: String },

    #[error("vertex index {index} out of range for mesh with {len} vertices")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("edge record has {len} indices, at least 2 are needed to draw it")]
    EdgeTooShort { len: usize },
}

pub type Result<T> = std::result::Result<T, MeshError>;
