use thiserror::Error;

#[derive(Error, Debug)]
pub enum EspmanError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Device answered with HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed JSON ({source}): {raw}")]
    MalformedJson {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {field}: {value:?}")]
    InvalidInput { field: String, value: String },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("No sensor block with id {0}")]
    UnknownBlock(uuid::Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<&str> for EspmanError {
    fn from(error: &str) -> Self {
        EspmanError::Config(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EspmanError>;
