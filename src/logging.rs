use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Env, Target};

use crate::error::AppError;

/// Sends log output to `path`; the terminal belongs to the UI.
/// `RUST_LOG` still takes precedence over the default level.
pub fn init(path: &Path, verbose: bool) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| AppError::Logger(e.to_string()))
}
