/// Terminal drawing surface for the wire3d frame driver
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    terminal,
};
use nalgebra::Point2;
use std::io::{self, stdout, Stdout, Write};
use std::time::{Duration, Instant};
use wire3d_core::{Color, DrawTarget, FrameDriver, FrameError, Scene};

pub mod config;
pub mod demo;
pub mod renderer;

pub use config::ViewConfig;
pub use renderer::{LineRasterizer, Viewport};

/// Crossterm-backed [`DrawTarget`]: owns the character grid, frame pacing
/// and keyboard input
pub struct TerminalCanvas<W: Write = Stdout> {
    out: W,
    config: ViewConfig,
    viewport: Viewport,
    rasterizer: LineRasterizer,
    quit_requested: bool,
    last_tick: Instant,
    last_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalCanvas<Stdout> {
    pub fn new(config: ViewConfig) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        Ok(Self::with_writer(
            stdout(),
            config,
            columns as usize,
            rows as usize,
        ))
    }

    /// Take over the terminal, drive `scene` until quit is requested, then
    /// restore the terminal even if a frame failed.
    pub fn run(
        &mut self,
        scene: &mut Scene,
        driver: &mut FrameDriver,
    ) -> Result<(), FrameError<io::Error>> {
        terminal::enable_raw_mode().map_err(FrameError::Target)?;
        enter_screen(&mut self.out, terminal::disable_raw_mode).map_err(FrameError::Target)?;

        let result = driver.run(scene, self);

        // Cleanup
        let restored = terminal::disable_raw_mode()
            .and_then(|_| execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show));

        result?;
        restored.map_err(FrameError::Target)
    }
}

/// Switch `out` to the alternate screen with the cursor hidden. If that
/// fails, `rollback` undoes the raw mode set up before it and the write error
/// is returned.
fn enter_screen<W: Write>(
    out: &mut W,
    rollback: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide).map_err(|err| {
        if let Err(rollback_err) = rollback() {
            log::warn!("failed to leave raw mode: {}", rollback_err);
        }
        err
    })
}

impl<W: Write> TerminalCanvas<W> {
    pub fn with_writer(out: W, config: ViewConfig, columns: usize, rows: usize) -> Self {
        let now = Instant::now();
        Self {
            out,
            viewport: Viewport::new(config.viewport_width, config.viewport_height),
            rasterizer: LineRasterizer::new(columns, rows, config.glyph),
            config,
            quit_requested: false,
            last_tick: now,
            last_sample: now,
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn rasterizer(&self) -> &LineRasterizer {
        &self.rasterizer
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// React to one terminal event: quit keys and resizes.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) if kind != KeyEventKind::Release => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.quit_requested = true;
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.quit_requested = true;
                }
                _ => {}
            },
            Event::Resize(columns, rows) => {
                self.rasterizer.resize(columns as usize, rows as usize);
            }
            _ => {}
        }
    }

    fn sample_fps(&mut self) {
        self.frame_count += 1;
        let now = Instant::now();
        if (now - self.last_sample).as_secs() >= 1 {
            self.fps = self.frame_count as f32 / (now - self.last_sample).as_secs_f32();
            self.frame_count = 0;
            self.last_sample = now;
        }
    }
}

impl<W: Write> DrawTarget for TerminalCanvas<W> {
    type Error = io::Error;

    fn clear_frame(&mut self) -> io::Result<()> {
        self.rasterizer.clear();
        Ok(())
    }

    fn draw_line(&mut self, start: Point2<f32>, end: Point2<f32>, color: Color) -> io::Result<()> {
        let (columns, rows) = (self.rasterizer.width(), self.rasterizer.height());
        let start = self.viewport.to_grid(start, columns, rows);
        let end = self.viewport.to_grid(end, columns, rows);
        self.rasterizer.draw_line(start, end, color);
        Ok(())
    }

    fn present_frame(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;
        self.rasterizer.draw(&mut self.out)?;

        if self.config.show_status {
            queue!(
                self.out,
                cursor::MoveTo(0, 0),
                SetForegroundColor(TermColor::Yellow),
                Print(format!("wire3d | FPS: {:.1} | Q/Esc=Quit", self.fps)),
                ResetColor
            )?;
        }

        self.out.flush()?;
        self.sample_fps();
        Ok(())
    }

    fn wait_for_next_tick(&mut self, target_fps: u32) {
        let frame_time = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));
        let elapsed = self.last_tick.elapsed();
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
        self.last_tick = Instant::now();
    }

    fn poll_quit_requested(&mut self) -> io::Result<bool> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(self.quit_requested)
    }
}
