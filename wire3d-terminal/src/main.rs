/// wire3d Terminal Demo - Spinning wireframes
///
/// Loads the demo meshes and draws them as character-cell wireframes.
/// Usage: wire3d-terminal [OBJECTS_DIR]
///   - Q/ESC: Quit
use anyhow::{Context, Result};
use std::path::PathBuf;
use wire3d_core::FrameDriver;
use wire3d_terminal::config::{self, ViewConfig};
use wire3d_terminal::demo;
use wire3d_terminal::TerminalCanvas;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let objects_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::OBJECTS_DIR));

    log::info!("Loading demo scene from {}", objects_dir.display());
    let mut scene = demo::build_demo_scene(&objects_dir)
        .with_context(|| format!("Failed to build scene from {}", objects_dir.display()))?;

    for mesh in scene.meshes() {
        mesh.log_position();
        mesh.log_vertices();
    }
    scene.camera.log_position();

    let view = ViewConfig::default();
    scene.color = view.line_color;
    let mut driver = FrameDriver::new(view.target_fps);

    log::info!("Starting terminal renderer (press Q to quit)...");
    let mut canvas = TerminalCanvas::new(view).context("Failed to query terminal size")?;
    canvas
        .run(&mut scene, &mut driver)
        .context("Render loop failed")?;

    log::info!("Stopped after {} frames", driver.frames());
    Ok(())
}
