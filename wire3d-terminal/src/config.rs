use wire3d_core::{Color, FrameDriver};

// Virtual viewport the camera-relative coordinates are centred in
pub const VIEWPORT_WIDTH: u32 = 800;
pub const VIEWPORT_HEIGHT: u32 = 600;

// Frame pacing
pub const TARGET_FPS: u32 = FrameDriver::DEFAULT_FPS;

// Appearance
pub const LINE_COLOR: Color = Color::WHITE;
pub const LINE_GLYPH: char = '#';

// Where the demo scene's mesh files live when no directory is given
pub const OBJECTS_DIR: &str = "objects";

/// Settings for the terminal canvas
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub target_fps: u32,
    pub line_color: Color,
    pub glyph: char,
    pub show_status: bool,
}

impl ViewConfig {
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width.max(1);
        self.viewport_height = height.max(1);
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps.max(1);
        self
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn with_status(mut self, show_status: bool) -> Self {
        self.show_status = show_status;
        self
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            target_fps: TARGET_FPS,
            line_color: LINE_COLOR,
            glyph: LINE_GLYPH,
            show_status: true,
        }
    }
}
