/// Scene state and the per-frame update/draw cycle
///
/// The driver never touches a window or terminal itself: it spins meshes,
/// projects their edges and hands the resulting segments to a [`DrawTarget`].
use nalgebra::Point2;
use thiserror::Error;

use crate::error::{MeshError, Result};
use crate::geometry::Mesh;
use crate::projection::{Camera, Segment};
use crate::transform::{Axis, Spin};

/// Line color as 8-bit RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Surface that receives projected lines and owns display timing and input
pub trait DrawTarget {
    type Error;

    fn clear_frame(&mut self) -> std::result::Result<(), Self::Error>;

    /// Draw one line. Points are camera-relative; centring on the surface is
    /// up to the target.
    fn draw_line(
        &mut self,
        start: Point2<f32>,
        end: Point2<f32>,
        color: Color,
    ) -> std::result::Result<(), Self::Error>;

    fn present_frame(&mut self) -> std::result::Result<(), Self::Error>;

    /// Block until the next frame is due.
    fn wait_for_next_tick(&mut self, target_fps: u32);

    fn poll_quit_requested(&mut self) -> std::result::Result<bool, Self::Error>;
}

#[derive(Debug, Error)]
pub enum FrameError<E> {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("draw target failed: {0}")]
    Target(#[source] E),
}

/// Handle to a mesh added to a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshId(usize);

/// Everything drawn each frame: meshes, the active camera and the spins
/// applied before drawing.
#[derive(Debug, Clone)]
pub struct Scene {
    meshes: Vec<Mesh>,
    spins: Vec<(MeshId, Spin)>,
    pub camera: Camera,
    pub color: Color,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            meshes: Vec::new(),
            spins: Vec::new(),
            camera,
            color: Color::default(),
        }
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn mesh(&self, id: MeshId) -> &Mesh {
        &self.meshes[id.0]
    }

    pub fn mesh_mut(&mut self, id: MeshId) -> &mut Mesh {
        &mut self.meshes[id.0]
    }

    /// Rotate `id` about `axis` by `angle` radians on every frame.
    pub fn spin(&mut self, id: MeshId, axis: Axis, angle: f32) {
        self.spins.push((id, Spin::new(axis, angle)));
    }

    /// Apply one frame's worth of spins
    pub fn advance(&mut self) {
        for (id, spin) in &self.spins {
            spin.apply(&mut self.meshes[id.0]);
        }
    }

    /// Project every edge of every mesh, in mesh order then edge order.
    pub fn segments(&self) -> impl Iterator<Item = Result<Segment>> + '_ {
        self.meshes.iter().flat_map(move |mesh| {
            mesh.edges
                .iter()
                .map(move |edge| self.camera.project_edge(mesh, edge))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.meshes.iter().map(|mesh| mesh.edges.len()).sum()
    }
}

/// Runs the update/draw cycle against a [`DrawTarget`]
#[derive(Debug, Clone)]
pub struct FrameDriver {
    target_fps: u32,
    frames: u64,
}

impl FrameDriver {
    pub const DEFAULT_FPS: u32 = 60;

    pub fn new(target_fps: u32) -> Self {
        Self {
            target_fps: target_fps.max(1),
            frames: 0,
        }
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Number of frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance the scene once and draw it.
    pub fn step<T: DrawTarget>(
        &mut self,
        scene: &mut Scene,
        target: &mut T,
    ) -> std::result::Result<(), FrameError<T::Error>> {
        scene.advance();

        target.clear_frame().map_err(FrameError::Target)?;
        for segment in scene.segments() {
            let segment = segment?;
            target
                .draw_line(segment.start, segment.end, scene.color)
                .map_err(FrameError::Target)?;
        }
        target.present_frame().map_err(FrameError::Target)?;
        target.wait_for_next_tick(self.target_fps);

        self.frames += 1;
        log::trace!("frame {} presented", self.frames);
        Ok(())
    }

    /// Step until the target asks to quit. Quit is checked before each frame.
    pub fn run<T: DrawTarget>(
        &mut self,
        scene: &mut Scene,
        target: &mut T,
    ) -> std::result::Result<(), FrameError<T::Error>> {
        log::debug!(
            "driving {} meshes ({} edges) at {} fps",
            scene.meshes().len(),
            scene.edge_count(),
            self.target_fps
        );

        while !target.poll_quit_requested().map_err(FrameError::Target)? {
            self.step(scene, target)?;
        }

        log::debug!("quit requested after {} frames", self.frames);
        Ok(())
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FPS)
    }
}
