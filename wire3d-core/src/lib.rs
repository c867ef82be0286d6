//! wire3d Core Library - Mesh loading, rigid transforms and projection
//!
//! This library holds everything that does not depend on a display surface:
//! parsing mesh files, moving meshes around, projecting their edges through a
//! pinhole camera and driving the per-frame cycle against a [`DrawTarget`].

pub mod error;
pub mod frame;
pub mod geometry;
pub mod obj;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use error::MeshError;
pub use frame::{Color, DrawTarget, FrameDriver, FrameError, MeshId, Scene};
pub use geometry::{EdgeRecord, Mesh, Vertex};
pub use obj::{load_mesh, load_mesh_from_reader, load_mesh_from_str};
pub use projection::{Camera, Segment};
pub use transform::{Axis, Spin};
