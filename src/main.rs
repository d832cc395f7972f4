use clap::Parser;
use rove::RoveError;
use rove::core::config::Config;
use rove::core::lister::FsLister;
use rove::core::state::Navigator;
use rove::tui::{self, Theme};
use simplelog::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rove", about = "Browse directories in the terminal")]
struct Args {
    /// Directory to start in (defaults to the working directory)
    path: Option<PathBuf>,

    /// Disable colors; use bold/reverse video instead
    #[arg(long)]
    no_color: bool,

    /// Write a log to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match start(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn start(args: Args) -> Result<(), RoveError> {
    let config = Config::resolve(
        args.path.as_deref(),
        !args.no_color,
        args.log_file,
        args.log_level,
    )?;

    config.init_logging()?;

    log::info!("Rove starting in {}", config.start_dir.display());

    let nav = Navigator::new(Box::new(FsLister), config.start_dir.clone())?;
    tui::run(nav, Theme::new(config.color))
}
