// src/error.rs
//
// Error taxonomy shared by the stage, the chain and the config loader

/// Convenience result type used across ladderline.
pub type LadderResult<T> = Result<T, LadderError>;

#[derive(thiserror::Error, Debug)]
pub enum LadderError {
    /// The chain needs at least one node.
    #[error("invalid node count {0}: a ladder needs at least one node")]
    InvalidNodeCount(usize),

    /// No usable drawing surface (zero-sized, or the window could not be built).
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("invalid color '{0}': expected #rrggbb or #rgb")]
    InvalidColor(String),

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LadderError {
    pub fn surface_unavailable(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }
}
