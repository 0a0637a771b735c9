use thiserror::Error;

/// Rejected widget configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max value must be a positive finite number, got {0}")]
    InvalidMaxValue(f64),

    #[error("{0} must be at least 1")]
    ZeroCapacity(&'static str),
    #[error("{what} must be at most {max}, got {got}")]
    CapacityTooLarge {
        what: &'static str,
        got: usize,
        max: usize,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
