/// Pinhole camera and perspective projection
use std::fmt;

use nalgebra::{Point2, Point3, Rotation2, Vector3};

use crate::error::Result;
use crate::geometry::{EdgeRecord, Mesh, Vertex};
use crate::transform::rotate_pair;

/// Perspective strength: camera-relative x and y are scaled by `FOV / z`
pub const FOV: f32 = 500.0;

/// Nominal viewing distance. Not part of the projection formula.
pub const DISTANCE: f32 = 5.0;

/// A projected line, in camera-relative screen units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2<f32>,
    pub end: Point2<f32>,
}

/// Camera defined only by its position in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
}

impl Camera {
    pub fn new(position: Point3<f32>) -> Self {
        Self { position }
    }

    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.position += Vector3::new(dx, dy, dz);
    }

    /// Rotate the camera position about the world X axis.
    ///
    /// This moves the camera as a point; it does not change what it faces.
    pub fn rotate_x(&mut self, angle: f32) {
        let (y, z) = rotate_pair(&Rotation2::new(angle), self.position.y, self.position.z);
        self.position.y = y;
        self.position.z = z;
    }

    /// Rotate the camera position about the world Y axis, as a point.
    pub fn rotate_y(&mut self, angle: f32) {
        let (x, z) = rotate_pair(&Rotation2::new(angle), self.position.x, self.position.z);
        self.position.x = x;
        self.position.z = z;
    }

    /// Project a world-space vertex to camera-relative 2D coordinates.
    ///
    /// Points at the camera's own depth (`z == 0` after the offset) are
    /// passed through unscaled rather than rejected.
    pub fn project(&self, vertex: &Vertex) -> Point2<f32> {
        let offset = vertex - self.position;
        if offset.z != 0.0 {
            let factor = FOV / offset.z;
            Point2::new(offset.x * factor, offset.y * factor)
        } else {
            Point2::new(offset.x, offset.y)
        }
    }

    /// Resolve an edge of `mesh` and project both of its endpoints.
    pub fn project_edge(&self, mesh: &Mesh, edge: &EdgeRecord) -> Result<Segment> {
        let (start, end) = mesh.edge_vertices(edge)?;
        Ok(Segment {
            start: self.project(&start),
            end: self.project(&end),
        })
    }

    pub fn log_position(&self) {
        log::info!("{}", self);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point3::new(0.0, 0.0, -DISTANCE))
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "camera at ({}, {}, {})",
            self.position.x, self.position.y, self.position.z
        )
    }
}
