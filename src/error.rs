use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The bundled image could not be turned into a display-ready handle.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image asset `{name}` is empty")]
    Empty { name: &'static str },
    #[error("image asset `{name}` could not be decoded")]
    Decode {
        name: &'static str,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration")]
    Parse(#[from] serde_json::Error),
    #[error("breakpoints must be finite (small_max = {small_max}, medium_max = {medium_max})")]
    NonFiniteBreakpoint { small_max: f64, medium_max: f64 },
    #[error(
        "small_max ({small_max}) must be non-negative and not exceed medium_max ({medium_max})"
    )]
    InvertedBreakpoints { small_max: f64, medium_max: f64 },
    #[error("window size must be positive, got {width}x{height}")]
    WindowSize { width: f64, height: f64 },
}
