use rekt_domain::RektError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("upstream failure: {0}")]
    Upstream(String),
    #[error("unprocessable: {0}")]
    Unprocessable(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<RektError> for AppError {
    fn from(value: RektError) -> Self {
        match value {
            err if err.is_upstream() => AppError::Upstream(err.to_string()),
            err @ (RektError::UnsupportedGroupField(_) | RektError::InvalidLimit { .. }) => {
                AppError::BadRequest(err.to_string())
            }
            err @ (RektError::EmptyCollection(_) | RektError::DivisionByZero { .. }) => {
                AppError::Unprocessable(err.to_string())
            }
            err => AppError::Internal(anyhow::anyhow!(err)),
        }
    }
}
