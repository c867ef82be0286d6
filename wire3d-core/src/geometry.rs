/// Geometry primitives for wireframe meshes
use std::fmt;

use nalgebra::Point3;

use crate::error::{MeshError, Result};

/// A mesh vertex in world space
pub type Vertex = Point3<f32>;

/// An ordered tuple of 1-based vertex indices.
///
/// Face records keep every index of the face, but only the first two are
/// connected when the mesh is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord(pub Vec<i64>);

impl EdgeRecord {
    pub fn new(indices: Vec<i64>) -> Self {
        Self(indices)
    }

    pub fn pair(a: i64, b: i64) -> Self {
        Self(vec![a, b])
    }

    pub fn indices(&self) -> &[i64] {
        &self.0
    }

    /// The two indices a line is drawn between
    pub fn endpoints(&self) -> Result<(i64, i64)> {
        match self.0.as_slice() {
            [a, b, ..] => Ok((*a, *b)),
            short => Err(MeshError::EdgeTooShort { len: short.len() }),
        }
    }
}

impl From<(i64, i64)> for EdgeRecord {
    fn from((a, b): (i64, i64)) -> Self {
        Self::pair(a, b)
    }
}

/// A wireframe mesh: vertices, edge records and the pivot they move around
#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: String,
    pub origin: Point3<f32>,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<EdgeRecord>,
}

impl Mesh {
    pub fn new(name: impl Into<String>, vertices: Vec<Vertex>, edges: Vec<EdgeRecord>) -> Self {
        Self {
            name: name.into(),
            origin: Point3::origin(),
            vertices,
            edges,
        }
    }

    /// Move every vertex by `origin` and make it the pivot for later transforms.
    pub fn placed_at(mut self, origin: Point3<f32>) -> Self {
        let offset = origin.coords;
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
        self.origin = origin;
        self
    }

    pub fn position(&self) -> Point3<f32> {
        self.origin
    }

    /// Look up a vertex by its 1-based file index.
    ///
    /// Index 0 wraps around to the last vertex; edges synthesized for
    /// connect-all meshes start at 0 and rely on this. Negative indices
    /// never resolve.
    pub fn vertex(&self, index: i64) -> Result<&Vertex> {
        let len = self.vertices.len();
        let slot = match index {
            0 => len.checked_sub(1),
            k if k > 0 => usize::try_from(k - 1).ok(),
            _ => None,
        };

        slot.and_then(|slot| self.vertices.get(slot))
            .ok_or(MeshError::IndexOutOfRange { index, len })
    }

    /// Resolve both drawn endpoints of an edge record.
    pub fn edge_vertices(&self, edge: &EdgeRecord) -> Result<(Vertex, Vertex)> {
        let (a, b) = edge.endpoints()?;
        Ok((*self.vertex(a)?, *self.vertex(b)?))
    }

    pub fn log_position(&self) {
        log::info!("{}", self);
    }

    pub fn log_vertices(&self) {
        for (i, vertex) in self.vertices.iter().enumerate() {
            log::debug!(
                "{} vertex {}: ({}, {}, {})",
                self.name,
                i + 1,
                vertex.x,
                vertex.y,
                vertex.z
            );
        }
    }

    /// Create a wireframe cube centred on the origin, for testing
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let vertices = vec![
            Point3::new(-half, -half, -half),
            Point3::new(half, -half, -half),
            Point3::new(half, half, -half),
            Point3::new(-half, half, -half),
            Point3::new(-half, -half, half),
            Point3::new(half, -half, half),
            Point3::new(half, half, half),
            Point3::new(-half, half, half),
        ];

        let edges = [
            // Back face
            (1, 2), (2, 3), (3, 4), (4, 1),
            // Front face
            (5, 6), (6, 7), (7, 8), (8, 5),
            // Connecting edges
            (1, 5), (2, 6), (3, 7), (4, 8),
        ]
        .into_iter()
        .map(EdgeRecord::from)
        .collect();

        Self::new("cube", vertices, edges)
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({}, {}, {}), {} vertices, {} edges",
            self.name,
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.vertices.len(),
            self.edges.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment_mesh() -> Mesh {
        Mesh::new(
            "segment",
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            vec![EdgeRecord::pair(1, 2)],
        )
    }

    #[test]
    fn test_vertex_lookup_is_one_based() {
        let mesh = segment_mesh();
        assert_eq!(*mesh.vertex(1).unwrap(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(*mesh.vertex(2).unwrap(), Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_index_zero_wraps_to_last_vertex() {
        let mesh = segment_mesh();
        assert_eq!(*mesh.vertex(0).unwrap(), Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_index_past_end_is_out_of_range() {
        let mesh = segment_mesh();
        match mesh.vertex(3) {
            Err(MeshError::IndexOutOfRange { index, len }) => {
                assert_eq!(index, 3);
                assert_eq!(len, 2);
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_index_is_out_of_range() {
        let mesh = segment_mesh();
        assert!(matches!(
            mesh.vertex(-1),
            Err(MeshError::IndexOutOfRange { index: -1, len: 2 })
        ));
    }

    #[test]
    fn test_empty_mesh_has_no_vertices_to_resolve() {
        let mesh = Mesh::new("empty", Vec::new(), Vec::new());
        assert!(matches!(
            mesh.vertex(0),
            Err(MeshError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_edge_vertices_use_first_two_indices() {
        let mut mesh = segment_mesh();
        mesh.vertices.push(Point3::new(5.0, 5.0, 5.0));
        let edge = EdgeRecord::new(vec![2, 1, 3]);
        let (a, b) = mesh.edge_vertices(&edge).unwrap();
        assert_eq!(a, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(b, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_single_index_edge_is_too_short() {
        let mesh = segment_mesh();
        let edge = EdgeRecord::new(vec![1]);
        assert!(matches!(
            mesh.edge_vertices(&edge),
            Err(MeshError::EdgeTooShort { len: 1 })
        ));
    }

    #[test]
    fn test_placed_at_offsets_vertices_and_sets_pivot() {
        let mesh = segment_mesh().placed_at(Point3::new(2.5, 0.0, -1.0));
        assert_eq!(mesh.position(), Point3::new(2.5, 0.0, -1.0));
        assert_eq!(mesh.vertices[0], Point3::new(2.5, 0.0, -1.0));
        assert_eq!(mesh.vertices[1], Point3::new(3.5, 0.0, -1.0));
    }

    #[test]
    fn test_cube_edges_resolve() {
        let cube = Mesh::cube(2.0);
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.edges.len(), 12);
        for edge in &cube.edges {
            let (a, b) = cube.edge_vertices(edge).unwrap();
            assert!((a - b).norm() > 0.0);
        }
    }
}
