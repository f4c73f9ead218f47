use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use tictactoe3d::AppConfig;

/// 3D tic-tac-toe. Click a cell to place a mark, Space restarts, Escape quits.
#[derive(Parser, Debug)]
#[command(name = "tictactoe3d")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Distance between cell centers in world units
    #[arg(long, default_value_t = 3.0)]
    spacing: f32,

    /// Camera distance from the board
    #[arg(long, default_value_t = 12.0)]
    camera_distance: f32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f32,
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig::new()
            .size(self.width, self.height)
            .cell_spacing(self.spacing)
            .camera_distance(self.camera_distance)
            .fov(self.fov)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match tictactoe3d::run(cli.config()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
