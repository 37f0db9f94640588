use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    DateTimeParse(#[from] chrono::ParseError),
    #[error("local time does not exist: {0}")]
    InvalidLocalTime(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error(transparent)]
    HttpRequestError(#[from] reqwest::Error),
    #[error("{0}")]
    ExternalServiceError(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
