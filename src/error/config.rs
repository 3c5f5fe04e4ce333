use thiserror::Error;

/// Configuration errors raised during startup or environment loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {var}")]
    InvalidValue {
        /// Name of the offending variable.
        var: String,
        /// The raw value that failed to parse.
        value: String,
    },
}
