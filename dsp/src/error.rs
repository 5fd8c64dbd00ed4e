//! Configuration error types

use thiserror::Error;

/// Result type for generator configuration
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while configuring a generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The table size must be at least one entry
    #[error("table size must be positive")]
    ZeroTableSize,

    /// Function type name not recognized
    #[error("unknown function type `{0}` (expected one of: exp, sinc, rect)")]
    UnknownFunction(String),

    /// Raw selector code outside of the supported set
    #[error("unknown function selector code {0}")]
    UnknownSelectorCode(u8),
}
