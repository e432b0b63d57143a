use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid resolver on line {line}: '{value}'")]
    InvalidResolver { line: usize, value: String },

    #[error("Invalid configuration: {0}")]
    Validation(String),
}
