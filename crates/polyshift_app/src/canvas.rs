//! Terminal rendering adapter
//!
//! Converts polygons to a character grid at the render boundary; the morph
//! engine never depends on this. World coordinates are mapped onto the grid,
//! and edges are plotted with integer line stepping, including the implicit
//! closing edge between the last and first vertex.

use std::fmt;

use polyshift_core::{Point, Polygon};

/// A fixed-size character grid with a square world-space viewport.
pub struct Canvas {
    width: usize,
    height: usize,
    world: f64,
    cells: Vec<bool>,
}

impl Canvas {
    /// Grid of `width` x `height` cells covering world coordinates
    /// [0, world] on both axes.
    pub fn new(width: usize, height: usize, world: f64) -> Self {
        Self {
            width,
            height,
            world,
            cells: vec![false; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Draw every edge of the polygon, closing it last-to-first.
    pub fn draw_polygon(&mut self, polygon: &Polygon) {
        let points = polygon.points();
        if points.is_empty() {
            return;
        }
        for i in 0..points.len() {
            let a = self.project(points[i]);
            let b = self.project(points[(i + 1) % points.len()]);
            self.line(a, b);
        }
    }

    /// Map a world-space point onto the grid.
    fn project(&self, point: Point) -> (i64, i64) {
        let x = point.x as f64 / self.world * (self.width - 1) as f64;
        let y = point.y as f64 / self.world * (self.height - 1) as f64;
        (x as i64, y as i64)
    }

    fn plot(&mut self, x: i64, y: i64) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.cells[y as usize * self.width + x as usize] = true;
        }
    }

    /// Bresenham line between two grid cells.
    fn line(&mut self, (x0, y0): (i64, i64), (x1, y1): (i64, i64)) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x += sx;
            }
            if doubled <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    #[cfg(test)]
    fn is_set(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &cell in row {
                f.write_str(if cell { "#" } else { " " })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// A proportional text progress bar, `width` cells wide.
pub fn progress_bar(progress: f32, width: usize) -> String {
    let filled = ((progress * width as f32) as usize).min(width);
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        progress * 100.0
    )
}
