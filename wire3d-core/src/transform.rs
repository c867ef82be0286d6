/// Rigid transforms applied in place to mesh vertices
use nalgebra::{Rotation2, Vector2, Vector3};

use crate::geometry::Mesh;

/// Coordinate axis a rotation happens about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotate the pair `(a, b)` by `rotation` as a point in their plane.
pub(crate) fn rotate_pair(rotation: &Rotation2<f32>, a: f32, b: f32) -> (f32, f32) {
    let rotated = rotation * Vector2::new(a, b);
    (rotated.x, rotated.y)
}

impl Mesh {
    /// Rotate about the X axis through the pivot, in the Y-Z plane.
    pub fn rotate_x(&mut self, angle: f32) {
        let rotation = Rotation2::new(angle);
        let pivot = self.origin;
        for vertex in &mut self.vertices {
            let (y, z) = rotate_pair(&rotation, vertex.y - pivot.y, vertex.z - pivot.z);
            vertex.y = y + pivot.y;
            vertex.z = z + pivot.z;
        }
    }

    /// Rotate about the Y axis through the pivot, in the X-Z plane.
    pub fn rotate_y(&mut self, angle: f32) {
        let rotation = Rotation2::new(angle);
        let pivot = self.origin;
        for vertex in &mut self.vertices {
            let (x, z) = rotate_pair(&rotation, vertex.x - pivot.x, vertex.z - pivot.z);
            vertex.x = x + pivot.x;
            vertex.z = z + pivot.z;
        }
    }

    /// Rotate about the Z axis through the pivot, in the X-Y plane.
    pub fn rotate_z(&mut self, angle: f32) {
        let rotation = Rotation2::new(angle);
        let pivot = self.origin;
        for vertex in &mut self.vertices {
            let (x, y) = rotate_pair(&rotation, vertex.x - pivot.x, vertex.y - pivot.y);
            vertex.x = x + pivot.x;
            vertex.y = y + pivot.y;
        }
    }

    pub fn rotate(&mut self, axis: Axis, angle: f32) {
        match axis {
            Axis::X => self.rotate_x(angle),
            Axis::Y => self.rotate_y(angle),
            Axis::Z => self.rotate_z(angle),
        }
    }

    /// Move the pivot and every vertex by the same delta
    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        let delta = Vector3::new(dx, dy, dz);
        self.origin += delta;
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
    }

    /// Scale each axis independently about the pivot. Negative factors mirror.
    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) {
        let factors = Vector3::new(sx, sy, sz);
        let pivot = self.origin;
        for vertex in &mut self.vertices {
            *vertex = pivot + (*vertex - pivot).component_mul(&factors);
        }
    }
}

/// A rotation applied to a mesh once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub axis: Axis,
    pub angle: f32,
}

impl Spin {
    pub fn new(axis: Axis, angle: f32) -> Self {
        Self { axis, angle }
    }

    pub fn apply(&self, mesh: &mut Mesh) {
        mesh.rotate(self.axis, self.angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::EdgeRecord;
    use nalgebra::Point3;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn sample_mesh() -> Mesh {
        Mesh::new(
            "sample",
            vec![
                Point3::new(1.0, 2.0, 3.0),
                Point3::new(-0.5, 0.25, 4.0),
                Point3::new(0.0, -3.0, -1.5),
            ],
            vec![EdgeRecord::pair(1, 2), EdgeRecord::pair(2, 3)],
        )
        .placed_at(Point3::new(0.5, -1.0, 2.0))
    }

    fn assert_close(a: &Mesh, b: &Mesh) {
        for (va, vb) in a.vertices.iter().zip(&b.vertices) {
            assert!((va - vb).norm() < EPS, "{:?} != {:?}", va, vb);
        }
    }

    #[test]
    fn test_rotate_x_round_trip() {
        let original = sample_mesh();
        let mut mesh = original.clone();
        mesh.rotate_x(0.7);
        mesh.rotate_x(-0.7);
        assert_close(&mesh, &original);
    }

    #[test]
    fn test_rotate_y_and_z_round_trip() {
        let original = sample_mesh();
        let mut mesh = original.clone();
        mesh.rotate_y(1.3);
        mesh.rotate_z(-2.1);
        mesh.rotate_z(2.1);
        mesh.rotate_y(-1.3);
        assert_close(&mesh, &original);
    }

    #[test]
    fn test_rotation_is_counter_clockwise_in_plane() {
        let mut mesh = Mesh::new("unit", vec![Point3::new(1.0, 0.0, 0.0)], Vec::new());
        mesh.rotate_z(FRAC_PI_2);
        assert!((mesh.vertices[0] - Point3::new(0.0, 1.0, 0.0)).norm() < EPS);

        let mut mesh = Mesh::new("unit", vec![Point3::new(0.0, 1.0, 0.0)], Vec::new());
        mesh.rotate_x(FRAC_PI_2);
        assert!((mesh.vertices[0] - Point3::new(0.0, 0.0, 1.0)).norm() < EPS);

        let mut mesh = Mesh::new("unit", vec![Point3::new(1.0, 0.0, 0.0)], Vec::new());
        mesh.rotate_y(FRAC_PI_2);
        assert!((mesh.vertices[0] - Point3::new(0.0, 0.0, 1.0)).norm() < EPS);
    }

    #[test]
    fn test_rotation_pivots_around_origin_of_mesh() {
        let mut mesh = Mesh::new(
            "offset",
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            Vec::new(),
        )
        .placed_at(Point3::new(10.0, 0.0, 0.0));
        mesh.rotate_z(PI);
        assert!((mesh.vertices[0] - Point3::new(10.0, 0.0, 0.0)).norm() < EPS);
        assert!((mesh.vertices[1] - Point3::new(9.0, 0.0, 0.0)).norm() < EPS);
        assert_eq!(mesh.position(), Point3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_translate_round_trip() {
        let original = sample_mesh();
        let mut mesh = original.clone();
        mesh.translate(1.5, -2.25, 3.0);
        assert_eq!(mesh.position(), Point3::new(2.0, -3.25, 5.0));
        mesh.translate(-1.5, 2.25, -3.0);
        assert_eq!(mesh.position(), original.position());
        assert_close(&mesh, &original);
    }

    #[test]
    fn test_unit_scale_is_noop() {
        let original = sample_mesh();
        let mut mesh = original.clone();
        mesh.scale(1.0, 1.0, 1.0);
        assert_close(&mesh, &original);
    }

    #[test]
    fn test_negative_scale_mirrors_about_pivot() {
        let mut mesh = Mesh::new("point", vec![Point3::new(0.0, 1.0, 0.0)], Vec::new())
            .placed_at(Point3::new(0.0, -1.0, 0.0));
        assert_eq!(mesh.vertices[0], Point3::new(0.0, 0.0, 0.0));
        mesh.scale(1.0, -1.0, 1.0);
        assert!((mesh.vertices[0] - Point3::new(0.0, -2.0, 0.0)).norm() < EPS);
    }

    #[test]
    fn test_non_uniform_scale() {
        let mut mesh = Mesh::new("point", vec![Point3::new(1.0, 1.0, 1.0)], Vec::new());
        mesh.scale(2.0, 3.0, 0.5);
        assert_eq!(mesh.vertices[0], Point3::new(2.0, 3.0, 0.5));
    }

    #[test]
    fn test_spin_matches_direct_rotation() {
        let mut spun = sample_mesh();
        let mut rotated = sample_mesh();
        Spin::new(Axis::Y, PI / 360.0).apply(&mut spun);
        rotated.rotate_y(PI / 360.0);
        assert_close(&spun, &rotated);
    }
}
