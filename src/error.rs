use thiserror::Error;

/// Why `WorldCore::insert` refused a body. The world is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertError {
    #[error("overlaps body {0}")]
    OverlapsBody(usize),

    #[error("overlaps obstacle {0}")]
    OverlapsObstacle(usize),

    /// Circle is not fully inside [0, width] x [0, height]
    #[error("outside world bounds")]
    OutOfBounds,

    #[error("velocity is not finite")]
    NonFiniteVelocity,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
