use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkbrandError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("could not parse generated analysis: {0}")]
    Parse(String),

    #[error("generator request failed: {0}")]
    Generator(String),

    #[error("no text generator configured; set {0} to analyze new companies")]
    GeneratorUnavailable(String),

    #[error("we couldn't analyze \"{0}\"; try a different company")]
    Unanalyzable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl WorkbrandError {
    /// Errors the caller can fix by changing arguments.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, WorkbrandError>;
