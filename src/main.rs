use std::error::Error;

use clap::Parser;

mod app;
mod cli;
mod config;
mod error;
mod game;
mod logging;
mod ui;

use crate::error::AppError;

fn main() -> Result<(), Box<dyn Error>> {
    let args = cli::Args::parse();
    run(&args)?;
    Ok(())
}

fn run(args: &cli::Args) -> Result<(), AppError> {
    logging::init(&args.log_file, args.verbose)?;

    let settings = args.resolve()?;
    if args.print_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }
    log::info!(
        "starting: {} slots, speed {}, debounce {}ms, frame {}ms",
        settings.slots,
        settings.speed,
        settings.debounce_ms,
        settings.frame_ms
    );

    app::run(&settings)
}
