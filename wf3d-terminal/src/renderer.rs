/// Character-cell canvas for drawing wireframes in a terminal
use crossterm::{
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wf3d_core::Wireframe;

use crate::config::DisplaySettings;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    color: Option<Color>,
}

const BLANK: Cell = Cell {
    glyph: ' ',
    color: None,
};

/// Rasterizes node x/y coordinates (in pixels) onto a grid of terminal cells
pub struct Canvas {
    width: usize,
    height: usize,
    cell_width: f64,
    cell_height: f64,
    cells: Vec<Cell>,
}

impl Canvas {
    /// `cell_width` and `cell_height` give how many pixels one cell covers
    pub fn new(width: usize, height: usize, cell_width: f64, cell_height: f64) -> Self {
        Self {
            width,
            height,
            cell_width,
            cell_height,
            cells: vec![BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Glyph at a cell, `None` outside the canvas
    pub fn glyph_at(&self, col: usize, row: usize) -> Option<char> {
        (col < self.width && row < self.height).then(|| self.cells[row * self.width + col].glyph)
    }

    fn to_cell(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (x / self.cell_width).floor() as i64,
            (y / self.cell_height).floor() as i64,
        )
    }

    fn plot(&mut self, col: i64, row: i64, glyph: char, color: Color) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return;
        }
        self.cells[row * self.width + col] = Cell {
            glyph,
            color: Some(color),
        };
    }

    /// Liang-Barsky clip of a pixel segment to the canvas area.
    /// Non-finite endpoints give `None`.
    fn clip_segment(
        &self,
        from: (f64, f64),
        to: (f64, f64),
    ) -> Option<((f64, f64), (f64, f64))> {
        if ![from.0, from.1, to.0, to.1].iter().all(|v| v.is_finite()) {
            return None;
        }
        let x_max = self.width as f64 * self.cell_width;
        let y_max = self.height as f64 * self.cell_height;
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        if !dx.is_finite() || !dy.is_finite() {
            return None;
        }

        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in [
            (-dx, from.0),
            (dx, x_max - from.0),
            (-dy, from.1),
            (dy, y_max - from.1),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }

        Some((
            (from.0 + t0 * dx, from.1 + t0 * dy),
            (from.0 + t1 * dx, from.1 + t1 * dy),
        ))
    }

    /// Bresenham line between two pixel positions, clipped to the canvas
    pub fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), glyph: char, color: Color) {
        let Some((from, to)) = self.clip_segment(from, to) else {
            return;
        };
        let (mut x0, mut y0) = self.to_cell(from.0, from.1);
        let (x1, y1) = self.to_cell(to.0, to.1);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, glyph, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    pub fn draw_point(&mut self, at: (f64, f64), glyph: char, color: Color) {
        if !at.0.is_finite() || !at.1.is_finite() {
            return;
        }
        let (col, row) = self.to_cell(at.0, at.1);
        self.plot(col, row, glyph, color);
    }

    /// Draw edges first so node glyphs stay visible on top
    pub fn render_wireframe(&mut self, wireframe: &Wireframe, settings: &DisplaySettings) {
        if settings.display_edges {
            for (start, stop) in wireframe.segments() {
                self.draw_line(
                    (start.x, start.y),
                    (stop.x, stop.y),
                    settings.edge_glyph,
                    settings.edge_color,
                );
            }
        }

        if settings.display_nodes {
            for node in wireframe.nodes() {
                self.draw_point((node.x, node.y), settings.node_glyph, settings.node_color);
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W, background: Color) -> std::io::Result<()> {
        writer.queue(SetBackgroundColor(background))?;
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                if let Some(color) = cell.color {
                    writer.queue(SetForegroundColor(color))?;
                }
                writer.queue(Print(cell.glyph))?;
            }
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn count(canvas: &Canvas, glyph: char) -> usize {
        canvas.cells.iter().filter(|c| c.glyph == glyph).count()
    }

    #[test]
    fn test_horizontal_line() {
        let mut canvas = Canvas::new(10, 3, 1.0, 1.0);
        canvas.draw_line((1.0, 1.0), (8.0, 1.0), '*', Color::White);
        assert_eq!(count(&canvas, '*'), 8);
        assert_eq!(canvas.glyph_at(1, 1), Some('*'));
        assert_eq!(canvas.glyph_at(8, 1), Some('*'));
        assert_eq!(canvas.glyph_at(9, 1), Some(' '));
    }

    #[test]
    fn test_line_is_clipped() {
        let mut canvas = Canvas::new(4, 4, 1.0, 1.0);
        canvas.draw_line((-10.0, -10.0), (10.0, 10.0), '#', Color::White);
        for i in 0..4 {
            assert_eq!(canvas.glyph_at(i, i), Some('#'));
        }
        assert_eq!(count(&canvas, '#'), 4);
    }

    #[test]
    fn test_far_off_screen_edge() {
        let mut canvas = Canvas::new(4, 4, 1.0, 1.0);
        canvas.draw_line((0.0, 0.5), (1e30, 0.5), '*', Color::White);
        assert_eq!(count(&canvas, '*'), 4);
        for col in 0..4 {
            assert_eq!(canvas.glyph_at(col, 0), Some('*'));
        }

        let mut canvas = Canvas::new(80, 30, 5.0, 10.0);
        canvas.draw_line((0.0, 0.0), (5e9, 0.0), '*', Color::White);
        assert_eq!(count(&canvas, '*'), 80);

        canvas.clear();
        canvas.draw_line((-1e300, -1e300), (1e300, -1e300), '*', Color::White);
        canvas.draw_line((1e12, 1e12), (2e12, 3e12), '*', Color::White);
        assert_eq!(count(&canvas, '*'), 0);
    }

    #[test]
    fn test_non_finite_endpoints_skipped() {
        let mut canvas = Canvas::new(4, 4, 1.0, 1.0);
        canvas.draw_line((0.0, 0.0), (f64::NAN, 2.0), '*', Color::White);
        canvas.draw_line((f64::INFINITY, 0.0), (1.0, 1.0), '*', Color::White);
        canvas.draw_point((f64::NAN, f64::NAN), 'o', Color::White);
        assert_eq!(count(&canvas, ' '), 16);
    }

    #[test]
    fn test_pixel_to_cell_mapping() {
        let mut canvas = Canvas::new(80, 30, 5.0, 10.0);
        canvas.draw_point((250.0, 250.0), 'o', Color::White);
        assert_eq!(canvas.glyph_at(50, 25), Some('o'));
        assert_eq!(canvas.glyph_at(80, 0), None);
    }

    #[test]
    fn test_nodes_drawn_over_edges() {
        let wf = Wireframe::cube(Point3::new(1.0, 1.0, 0.0), 4.0);
        let mut canvas = Canvas::new(8, 8, 1.0, 1.0);
        let settings = DisplaySettings::default();
        canvas.render_wireframe(&wf, &settings);
        assert_eq!(canvas.glyph_at(1, 1), Some(settings.node_glyph));
        assert_eq!(canvas.glyph_at(3, 1), Some(settings.edge_glyph));

        canvas.clear();
        let hidden = DisplaySettings {
            display_nodes: false,
            display_edges: false,
            ..settings
        };
        canvas.render_wireframe(&wf, &hidden);
        assert_eq!(count(&canvas, ' '), 64);
    }

    #[test]
    fn test_draw_emits_rows() {
        let mut canvas = Canvas::new(3, 2, 1.0, 1.0);
        canvas.draw_point((0.0, 0.0), 'o', Color::White);
        let mut out = Vec::new();
        canvas.draw(&mut out, Color::Black).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), 2);
        assert!(text.contains('o'));
    }
}
