use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use dreamchess_ui::error::ConfigError;
use dreamchess_ui::logging::init_logging;
use dreamchess_ui::{UiConfig, UiDriver, UiError, WinitPlatform};

#[derive(Parser)]
#[command(name = "dreamchess-ui")]
#[command(about = "DreamChess title screen; prints the chosen game setup as JSON", long_about = None)]
struct Cli {
    /// Directory holding fonts, title image and themes
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frame rate limit, 0 for none
    #[arg(long)]
    fps_cap: Option<u32>,

    /// Show the FPS counter from the start
    #[arg(long)]
    show_fps: bool,
}

impl Cli {
    fn ui_config(&self) -> Result<UiConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => UiConfig::load(path)?,
            None => UiConfig::default(),
        };
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(fps_cap) = self.fps_cap {
            config.fps_cap = fps_cap;
        }
        config.show_fps |= self.show_fps;
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<(), UiError> {
    let config = cli.ui_config()?;
    let platform = WinitPlatform::new(config.window.clone())?;
    let mut driver = UiDriver::init(platform, config)?;

    let chosen = driver.menu()?;
    driver.shutdown();

    match chosen {
        Some(game) => {
            let json = serde_json::to_string_pretty(&game).map_err(ConfigError::from)?;
            println!("{json}");
        }
        None => info!("no game started"),
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%e, "dreamchess-ui failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
