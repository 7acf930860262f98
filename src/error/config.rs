use thiserror::Error;

/// Configuration failures during startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    ///
    /// Results in a 500 Internal Server Error if it ever reaches a response,
    /// but in practice aborts startup.
    #[error("Missing environment variable '{0}'")]
    MissingEnvVar(String),
}
