/// The demo scene: four meshes, two of them spinning
use nalgebra::Point3;
use std::f32::consts::PI;
use std::path::Path;
use wire3d_core::error::Result;
use wire3d_core::{load_mesh, Axis, Camera, Scene};

/// Angle each spinning mesh turns by per frame
pub const SPIN_STEP: f32 = PI / 360.0;

/// Load the demo meshes from `objects_dir` and arrange them in front of the camera.
pub fn build_demo_scene(objects_dir: &Path) -> Result<Scene> {
    let mut scene = Scene::new(Camera::new(Point3::new(0.0, 0.0, -5.0)));

    let pyramid = scene.add_mesh(load_mesh(
        objects_dir.join("pyramid.obj"),
        Point3::new(0.0, 0.0, 0.0),
        true,
    )?);
    scene.add_mesh(load_mesh(
        objects_dir.join("cube.obj"),
        Point3::new(-4.5, 0.0, 0.0),
        true,
    )?);
    let cat = scene.add_mesh(load_mesh(
        objects_dir.join("cat.obj"),
        Point3::new(2.5, 0.0, 0.0),
        false,
    )?);
    let heart = scene.add_mesh(load_mesh(
        objects_dir.join("heart.obj"),
        Point3::new(0.0, -1.0, 0.0),
        false,
    )?);

    // Screen y grows downwards; flip the heart so it stands upright
    scene.mesh_mut(heart).scale(1.0, -1.0, 1.0);

    scene.spin(pyramid, Axis::Y, SPIN_STEP);
    scene.spin(cat, Axis::Z, SPIN_STEP);

    Ok(scene)
}
