use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaugeError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("no drawable surface with id '{0}' in {1}")]
    SurfaceNotFound(String, String),

    #[error("no hosting document found under {0}")]
    DocumentNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GaugeError>;
