use std::path::PathBuf;

use clap::Parser;

use feescope::{App, init_logging};

#[derive(Parser, Debug)]
#[command(name = "feescope")]
#[command(about = "A terminal client for exploring how fees erode investment growth")]
struct Args {
    /// Base URL of the investment simulator API
    #[arg(short, long, default_value = "http://localhost:8000/api")]
    api_base: String,

    /// Path to the data directory for logs (default: ~/.feescope/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".feescope")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::new(args.api_base);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("failed to restore terminal: {err}");
    }

    Ok(())
}
