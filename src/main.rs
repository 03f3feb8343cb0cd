use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use retro_desk::config::{self, DeskConfig};
use retro_desk::desktop::Desktop;
use retro_desk::drivers::OutputDriver;
use retro_desk::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use retro_desk::geometry::Viewport;
use retro_desk::prefs::PrefsStore;
use retro_desk::runner::run_desktop;
use retro_desk::tracing_sub;
use retro_desk::window::WindowStore;

/// Retro desktop with draggable, stacked windows.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Config file (TOML). Defaults to <config dir>/retro-desk/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Preferences file (JSON). Defaults to <config dir>/retro-desk/prefs.json.
    #[arg(long, value_name = "PATH")]
    prefs: Option<PathBuf>,

    /// Write logs to this file. Without it logs are discarded.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// trace, debug, info, warn or error.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Start with an empty desktop.
    #[arg(long)]
    no_welcome: bool,

    /// Frame interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    tracing_sub::init(args.log_file.as_deref(), tracing_sub::parse_level(&args.log_level))?;

    let config = DeskConfig::load(args.config.as_deref())?;
    let store = WindowStore::new(config.registry(), Viewport::default())
        .with_capacity(config.desktop.capacity)
        .with_welcome_id(config.desktop.welcome_window.clone());
    let prefs = args
        .prefs
        .clone()
        .or_else(|| config::default_path("prefs.json"))
        .map(PrefsStore::open_or_empty);
    let mut desktop = Desktop::new(store, config.cells, prefs);

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let size = output.size()?;
    desktop.resize_terminal(size.width, size.height);
    if config.desktop.open_welcome && !args.no_welcome {
        desktop.open(&config.desktop.welcome_window);
    }
    tracing::info!(
        columns = size.width,
        rows = size.height,
        capacity = desktop.store().capacity(),
        "desktop started"
    );

    let result = run_desktop(
        &mut output,
        ConsoleInputDriver::new(),
        &mut desktop,
        Duration::from_millis(args.tick_ms.max(1)),
    );
    output.exit()?;
    tracing::info!("desktop stopped");
    result
}
