/// WF3D Terminal Demo - Wireframe Cube
///
/// Shows a cube wireframe using raw x/y node coordinates as screen pixels.
/// Controls:
///   - Arrow Keys: Move
///   - =/-: Zoom in/out
///   - Q/W, A/S, Z/X: Rotate about X, Y, Z
///   - ESC: Quit

use anyhow::Result;
use clap::Parser;
use nalgebra::Point3;
use wf3d_core::Wireframe;
use wf3d_terminal::{Cli, TerminalApp, Viewer};

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("wf3d=info");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let config = cli.viewer_config();

    let origin = Point3::new(cli.cube_origin, cli.cube_origin, cli.cube_origin);
    let cube = Wireframe::cube(origin, cli.cube_size);

    if cli.dump {
        print!("{cube}");
        return Ok(());
    }

    let mut viewer = Viewer::new();
    viewer.add_wireframe("cube", cube);

    let mut app = TerminalApp::new(viewer, config);
    app.run()?;

    log::info!("viewer closed");
    Ok(())
}
