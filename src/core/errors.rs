use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlipwiseError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport failure. The request URL is stripped before it gets here.
    #[error("Network error: {0}")]
    Reqwest(Box<reqwest::Error>),

    /// Non-2xx response. `message` is what the server put in `error`, or a
    /// per-endpoint fallback when it did not say.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Validation(String),

    #[error("FlipwiseError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for FlipwiseError {
    fn from(error: std::io::Error) -> Self {
        FlipwiseError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for FlipwiseError {
    fn from(error: reqwest::Error) -> Self {
        FlipwiseError::Reqwest(Box::new(error.without_url()))
    }
}
