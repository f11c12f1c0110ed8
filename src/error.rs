use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown palette identifier: {0}")]
    UnknownPalette(String),

    #[error("style must be one of light, dark (got {0})")]
    UnknownStyle(String),

    #[error("context must be one of print, notebook, presentation (got {0})")]
    InvalidContext(String),

    #[error("font scale must be a positive, finite number (got {0})")]
    InvalidFontScale(f64),

    #[error("{0} is not a valid style parameter")]
    UnknownStyleKey(String),

    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    #[error("failed to read or write style data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse theme options: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
