use std::path::PathBuf;

/// Errors that can occur when loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to render TOML: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to start logger: {0}")]
    Logger(String),
}
