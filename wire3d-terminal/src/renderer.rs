/// Character-cell line rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::{self, Write};
use wire3d_core::Color;

/// Virtual screen that camera-relative points are centred in before being
/// scaled down to the character grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    /// Offset a camera-relative point by half the viewport, then scale it to
    /// fractional cell coordinates of a `columns` x `rows` grid.
    pub fn to_grid(&self, point: Point2<f32>, columns: usize, rows: usize) -> Point2<f32> {
        Point2::new(
            (point.x + self.width / 2.0) * columns as f32 / self.width,
            (point.y + self.height / 2.0) * rows as f32 / self.height,
        )
    }
}

/// Line rasterizer that plots into a character buffer
pub struct LineRasterizer {
    width: usize,
    height: usize,
    glyph: char,
    cells: Vec<Option<Color>>,
}

impl LineRasterizer {
    pub fn new(width: usize, height: usize, glyph: char) -> Self {
        Self {
            width,
            height,
            glyph,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![None; width * height];
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            None
        }
    }

    /// Number of cells with something drawn in them
    pub fn lit_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Draw a line between two points given in fractional cell coordinates.
    /// The part outside the grid is clipped away before rasterizing.
    pub fn draw_line(&mut self, start: Point2<f32>, end: Point2<f32>, color: Color) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        // Cell k covers [k - 0.5, k + 0.5), so the grid spans half a cell
        // beyond the outer cell centres.
        let min = Point2::new(-0.5, -0.5);
        let max = Point2::new(self.width as f32 - 0.5, self.height as f32 - 0.5);
        if let Some((start, end)) = clip_line(start, end, min, max) {
            self.rasterize(
                (start.x.round() as i32, start.y.round() as i32),
                (end.x.round() as i32, end.y.round() as i32),
                color,
            );
        }
    }

    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = Some(color);
        }
    }

    /// Bresenham's line algorithm over integer cells
    fn rasterize(&mut self, (x0, y0): (i32, i32), (x1, y1): (i32, i32), color: Color) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut current: Option<Color> = None;
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                match self.cells[y * self.width + x] {
                    Some(color) => {
                        if current != Some(color) {
                            writer.queue(SetForegroundColor(term_color(color)))?;
                            current = Some(color);
                        }
                        writer.queue(Print(self.glyph))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Liang-Barsky clipping against the box `[min.x, max.x] x [min.y, max.y]`
fn clip_line(
    start: Point2<f32>,
    end: Point2<f32>,
    min: Point2<f32>,
    max: Point2<f32>,
) -> Option<(Point2<f32>, Point2<f32>)> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if !(dx.is_finite() && dy.is_finite()) {
        return None;
    }

    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;
    let edges = [
        (-dx, start.x - min.x),
        (dx, max.x - start.x),
        (-dy, start.y - min.y),
        (dy, max.y - start.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        Point2::new(start.x + t0 * dx, start.y + t0 * dy),
        Point2::new(start.x + t1 * dx, start.y + t1 * dy),
    ))
}
