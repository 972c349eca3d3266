/// Terminal front-end that draws wireframes as characters
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use log::debug;
use std::io::{self, stdout, Write};
use std::time::Duration;

pub mod config;
pub mod renderer;
pub mod viewer;

pub use config::{Cli, DisplaySettings, ViewerConfig};
pub use renderer::Canvas;
pub use viewer::{Action, Viewer};

/// Main application struct for terminal wireframe display
pub struct TerminalApp {
    viewer: Viewer,
    config: ViewerConfig,
    canvas: Canvas,
    running: bool,
    status: Option<String>,
}

impl TerminalApp {
    pub fn new(viewer: Viewer, config: ViewerConfig) -> Self {
        let (cols, rows) = config.grid_size();
        Self {
            viewer,
            canvas: Canvas::new(cols, rows, config.cell_width, config.cell_height),
            config,
            running: true,
            status: None,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.render()?;

        while self.running {
            // Redraw only after input changed something
            if event::poll(Duration::from_millis(100))? {
                self.handle_input()?;
                self.render()?;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
            if kind == KeyEventKind::Release {
                return Ok(());
            }
            match Action::from_key(code) {
                Some(Action::Quit) => self.running = false,
                Some(action) => {
                    let result = self.viewer.apply(
                        action,
                        self.config.translate_step,
                        self.config.rotate_step,
                        (self.config.zoom_in, self.config.zoom_out),
                    );
                    self.status = match result {
                        Ok(()) => None,
                        Err(e) => {
                            debug!("{action:?} failed: {e}");
                            Some(e.to_string())
                        }
                    };
                }
                None => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        self.canvas.clear();
        for (_, wireframe) in self.viewer.wireframes() {
            self.canvas.render_wireframe(wireframe, &self.config.display);
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.canvas.draw(&mut stdout, self.config.display.background)?;

        // Draw UI overlay
        let line = match &self.status {
            Some(error) => format!("Error: {error}"),
            None => "WF3D | Arrows=Move +/-=Zoom Q/W A/S Z/X=Rotate X/Y/Z Esc=Quit".to_string(),
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(line),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
