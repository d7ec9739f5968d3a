use thiserror::Error;

pub type RektResult<T> = Result<T, RektError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RektError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("upstream rejected the api key")]
    Unauthorized,
    #[error("graphql error: {0}")]
    Api(String),
    #[error("malformed record {id}: field '{field}' has value '{value}'")]
    MalformedRecord {
        id: String,
        field: &'static str,
        value: String,
    },
    #[error("cannot compute {0} over an empty collection")]
    EmptyCollection(&'static str),
    #[error("mean funds lost is zero for group '{group}'")]
    DivisionByZero { group: String },
    #[error("unsupported group field '{0}'")]
    UnsupportedGroupField(String),
    #[error("invalid limit {limit}: expected 1..={max}")]
    InvalidLimit { limit: usize, max: usize },
}

impl RektError {
    pub fn malformed(id: &str, field: &'static str, value: impl ToString) -> Self {
        RektError::MalformedRecord {
            id: id.to_string(),
            field,
            value: value.to_string(),
        }
    }

    /// Failures that originate on the remote side of the fetch.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            RektError::Transport(_)
                | RektError::Unauthorized
                | RektError::Api(_)
                | RektError::MalformedRecord { .. }
        )
    }
}
