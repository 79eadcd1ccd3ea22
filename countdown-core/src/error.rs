//! Domain errors for countdown configuration, color parsing and the task driver.

/// Reasons a `CountdownConfig` is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Initial value must be at least one second")]
    ZeroInitialValue,
    #[error("Initial value must not exceed {max} seconds")]
    InitialValueTooLarge { max: u32 },
    #[error("Font size must be positive")]
    ZeroFontSize,
}

/// Reasons a hex color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Color must start with '#'")]
    MissingHash,
    #[error("Color must have 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("Invalid hex digits in color: {0}")]
    InvalidHex(String),
}

/// Failures of the background countdown task
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Countdown task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
