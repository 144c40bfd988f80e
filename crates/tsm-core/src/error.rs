use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinimizeError {
    #[error("Variable error in line {line}: {content}")]
    MalformedDeclaration { line: usize, content: String },
    #[error("Name space exhausted: {needed} identifiers but only {available} short names of up to {max_len} letters")]
    NameSpaceExhausted {
        needed: usize,
        available: usize,
        max_len: usize,
    },
    #[error("Duplicate identifier: {name}")]
    DuplicateIdentifier { name: String },
    #[error("Invalid aggressiveness: {0} (expected 0-5)")]
    InvalidAggressiveness(u8),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MinimizeError>;
