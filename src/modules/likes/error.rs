/// Failures of a single like toggle.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response (connect, DNS, timeout).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body was not the JSON we expected.
    #[error("could not parse response: {0}")]
    Parse(String),

    /// Non-2xx status, or an `error` body from a mutation endpoint.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The backend answered with a shape outside its documented contract.
    #[error("server contract violation: {0}")]
    ContractViolation(String),

    /// The button's container does not carry usable attributes.
    #[error("invalid `{name}` attribute: {value:?}")]
    InvalidAttribute { name: &'static str, value: Option<String> },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Parse(_) | Self::ContractViolation(_) => ErrorKind::Parse,
            Self::Server { .. } => ErrorKind::Server,
            Self::InvalidAttribute { .. } => ErrorKind::Input,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Server {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Server,
    Input,
}

pub type Result<T> = std::result::Result<T, Error>;
