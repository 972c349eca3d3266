/// Named wireframe registry and the bulk operations bound to keys
use crossterm::event::KeyCode;
use log::{debug, info};
use nalgebra::{Matrix4, Vector3};
use std::collections::BTreeMap;
use wf3d_core::{Axis, Result, Transform, Wireframe};

/// Something a key press asks the viewer to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Move by (sign * step) along an axis
    Translate(Axis, f64),
    ZoomIn,
    ZoomOut,
    /// Turn by (sign * angle) about an axis through the origin
    Rotate(Axis, f64),
    Quit,
}

impl Action {
    /// Key bindings: arrows move, `=`/`-` zoom, q/w, a/s, z/x turn about X, Y, Z
    pub fn from_key(code: KeyCode) -> Option<Self> {
        let action = match code {
            KeyCode::Left => Action::Translate(Axis::X, -1.0),
            KeyCode::Right => Action::Translate(Axis::X, 1.0),
            KeyCode::Down => Action::Translate(Axis::Y, 1.0),
            KeyCode::Up => Action::Translate(Axis::Y, -1.0),
            KeyCode::Char('=') | KeyCode::Char('+') => Action::ZoomIn,
            KeyCode::Char('-') => Action::ZoomOut,
            KeyCode::Char('q') => Action::Rotate(Axis::X, 1.0),
            KeyCode::Char('w') => Action::Rotate(Axis::X, -1.0),
            KeyCode::Char('a') => Action::Rotate(Axis::Y, 1.0),
            KeyCode::Char('s') => Action::Rotate(Axis::Y, -1.0),
            KeyCode::Char('z') => Action::Rotate(Axis::Z, 1.0),
            KeyCode::Char('x') => Action::Rotate(Axis::Z, -1.0),
            KeyCode::Esc => Action::Quit,
            _ => return None,
        };
        Some(action)
    }
}

/// Holds the wireframes on screen and moves them all together
#[derive(Debug, Default)]
pub struct Viewer {
    wireframes: BTreeMap<String, Wireframe>,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a wireframe, replacing any previous one with the same name
    pub fn add_wireframe(&mut self, name: impl Into<String>, wireframe: Wireframe) {
        let name = name.into();
        info!(
            "registered wireframe '{}' ({} nodes, {} edges)",
            name,
            wireframe.node_count(),
            wireframe.edge_count()
        );
        self.wireframes.insert(name, wireframe);
    }

    pub fn wireframe(&self, name: &str) -> Option<&Wireframe> {
        self.wireframes.get(name)
    }

    pub fn wireframes(&self) -> impl Iterator<Item = (&str, &Wireframe)> + '_ {
        self.wireframes.iter().map(|(name, wf)| (name.as_str(), wf))
    }

    pub fn len(&self) -> usize {
        self.wireframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wireframes.is_empty()
    }

    fn transform_all(&mut self, matrix: &Matrix4<f64>) -> Result<()> {
        for wireframe in self.wireframes.values_mut() {
            wireframe.transform(matrix)?;
        }
        Ok(())
    }

    pub fn translate_all(&mut self, offset: Vector3<f64>) -> Result<()> {
        debug!("translate all by {:?}", offset.as_slice());
        self.transform_all(&Transform::translation_matrix(offset.x, offset.y, offset.z))
    }

    pub fn scale_all(&mut self, factors: Vector3<f64>) -> Result<()> {
        debug!("scale all by {:?}", factors.as_slice());
        self.transform_all(&Transform::scale_matrix(factors.x, factors.y, factors.z))
    }

    pub fn rotate_all(&mut self, axis: Axis, radians: f64) -> Result<()> {
        debug!("rotate all about {axis} by {radians}");
        self.transform_all(&Transform::rotation_matrix(axis, radians))
    }

    pub fn rotate_x(&mut self, radians: f64) -> Result<()> {
        self.rotate_all(Axis::X, radians)
    }

    pub fn rotate_y(&mut self, radians: f64) -> Result<()> {
        self.rotate_all(Axis::Y, radians)
    }

    pub fn rotate_z(&mut self, radians: f64) -> Result<()> {
        self.rotate_all(Axis::Z, radians)
    }

    /// Carry out a key action using the given step sizes. `Quit` is left to
    /// the event loop.
    pub fn apply(
        &mut self,
        action: Action,
        translate_step: f64,
        rotate_step: f64,
        zoom: (f64, f64),
    ) -> Result<()> {
        match action {
            Action::Translate(axis, sign) => {
                let mut offset = Vector3::zeros();
                offset[axis.index()] = sign * translate_step;
                self.translate_all(offset)
            }
            Action::ZoomIn => self.scale_all(Vector3::repeat(zoom.0)),
            Action::ZoomOut => self.scale_all(Vector3::repeat(zoom.1)),
            Action::Rotate(axis, sign) => self.rotate_all(axis, sign * rotate_step),
            Action::Quit => Ok(()),
        }
    }
}
