use std::path::PathBuf;

use clap::Parser;

use crate::config::{LOG_PATH, Settings};
use crate::error::ConfigError;

#[derive(Debug, Parser)]
#[command(name = "orbit-four")]
#[command(about = "Circular Connect-4 for two players on one keyboard")]
pub struct Args {
    /// TOML settings file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of slots on the ring
    #[arg(long)]
    pub slots: Option<usize>,

    /// Cursor speed in slots per frame
    #[arg(long)]
    pub speed: Option<f64>,

    /// Cooldown between placements, in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Frame interval, in milliseconds
    #[arg(long)]
    pub frame_ms: Option<u64>,

    /// Ring radius in terminal rows
    #[arg(long)]
    pub radius: Option<u16>,

    /// Where log output goes
    #[arg(long, default_value = LOG_PATH)]
    pub log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the resolved settings as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_or_default(path)?,
            None => Settings::default(),
        };
        if let Some(slots) = self.slots {
            settings.slots = slots;
        }
        if let Some(speed) = self.speed {
            settings.speed = speed;
        }
        if let Some(ms) = self.debounce_ms {
            settings.debounce_ms = ms;
        }
        if let Some(ms) = self.frame_ms {
            settings.frame_ms = ms;
        }
        if let Some(radius) = self.radius {
            settings.radius = radius;
        }
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_defaults() {
        let args = Args::parse_from(["orbit-four"]);
        assert_eq!(args.resolve().unwrap(), Settings::default());
        assert_eq!(args.log_file, PathBuf::from(LOG_PATH));
        assert!(!args.verbose);
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orbit.toml");
        std::fs::write(&path, "slots = 12\nspeed = 0.4\n").unwrap();

        let args = Args::parse_from([
            "orbit-four",
            "--config",
            path.to_str().unwrap(),
            "--speed",
            "0.2",
            "--debounce-ms",
            "150",
        ]);
        let settings = args.resolve().unwrap();
        assert_eq!(settings.slots, 12);
        assert!((settings.speed - 0.2).abs() < 1e-12);
        assert_eq!(settings.debounce_ms, 150);
    }

    #[test]
    fn test_invalid_flag_value_is_rejected() {
        let args = Args::parse_from(["orbit-four", "--slots", "2"]);
        assert!(matches!(args.resolve(), Err(ConfigError::Validation(_))));
    }
}
