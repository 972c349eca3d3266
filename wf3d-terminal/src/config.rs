/// Viewer configuration and command line options
use clap::Parser;
use crossterm::style::Color;

/// How wireframes are drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySettings {
    pub background: Color,
    pub node_color: Color,
    pub edge_color: Color,
    pub node_glyph: char,
    pub edge_glyph: char,
    pub display_nodes: bool,
    pub display_edges: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            background: Color::Rgb { r: 10, g: 10, b: 50 },
            node_color: Color::Rgb { r: 255, g: 255, b: 255 },
            edge_color: Color::Rgb { r: 200, g: 200, b: 200 },
            node_glyph: 'o',
            edge_glyph: '.',
            display_nodes: true,
            display_edges: true,
        }
    }
}

/// Screen geometry and the size of each key-driven step
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Virtual screen size in pixels
    pub width: f64,
    pub height: f64,
    /// Pixels covered by one terminal cell
    pub cell_width: f64,
    pub cell_height: f64,
    pub translate_step: f64,
    pub rotate_step: f64,
    pub zoom_in: f64,
    pub zoom_out: f64,
    pub display: DisplaySettings,
}

impl ViewerConfig {
    /// Canvas size in cells
    pub fn grid_size(&self) -> (usize, usize) {
        (
            (self.width / self.cell_width).ceil().max(1.0) as usize,
            (self.height / self.cell_height).ceil().max(1.0) as usize,
        )
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            cell_width: 5.0,
            cell_height: 10.0,
            translate_step: 10.0,
            rotate_step: 0.1,
            zoom_in: 1.25,
            zoom_out: 0.75,
            display: DisplaySettings::default(),
        }
    }
}

/// Terminal wireframe viewer
#[derive(Parser, Debug)]
#[command(name = "wf3d-terminal", version)]
pub struct Cli {
    /// Virtual screen width in pixels
    #[arg(long, default_value_t = 400.0, value_parser = positive_finite)]
    pub width: f64,

    /// Virtual screen height in pixels
    #[arg(long, default_value_t = 300.0, value_parser = positive_finite)]
    pub height: f64,

    /// Pixels per terminal column
    #[arg(long, default_value_t = 5.0, value_parser = positive_finite)]
    pub cell_width: f64,

    /// Pixels per terminal row
    #[arg(long, default_value_t = 10.0, value_parser = positive_finite)]
    pub cell_height: f64,

    /// Corner of the demo cube (same value on every axis)
    #[arg(long, default_value_t = 50.0)]
    pub cube_origin: f64,

    /// Edge length of the demo cube
    #[arg(long, default_value_t = 200.0)]
    pub cube_size: f64,

    /// Distance moved per arrow key press
    #[arg(long, default_value_t = 10.0)]
    pub step: f64,

    /// Radians turned per rotation key press
    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    pub angle: f64,

    #[arg(long, default_value_t = 1.25)]
    pub zoom_in: f64,

    #[arg(long, default_value_t = 0.75)]
    pub zoom_out: f64,

    #[arg(long)]
    pub hide_nodes: bool,

    #[arg(long)]
    pub hide_edges: bool,

    /// Print the node and edge listing and exit
    #[arg(long)]
    pub dump: bool,
}

/// Screen and cell sizes must be finite and greater than zero
fn positive_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("expected a finite number greater than 0, got {value}"))
    }
}

impl Cli {
    pub fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            width: self.width,
            height: self.height,
            cell_width: self.cell_width,
            cell_height: self.cell_height,
            translate_step: self.step,
            rotate_step: self.angle,
            zoom_in: self.zoom_in,
            zoom_out: self.zoom_out,
            display: DisplaySettings {
                display_nodes: !self.hide_nodes,
                display_edges: !self.hide_edges,
                ..DisplaySettings::default()
            },
        }
    }
}
