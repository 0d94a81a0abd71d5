use mongodb::error::Error as MongoError;

/// Underlying cause of a failed connection attempt.
#[derive(thiserror::Error, Debug)]
pub enum ConnectError {
    #[error("Environment variable '{0}' is not set")]
    MissingUrl(&'static str),

    #[error("Invalid settings: {0}")]
    Settings(#[from] clap::Error),

    #[error("{0}")]
    Mongo(#[from] MongoError),
}

impl ConnectError {
    /// Configuration problems are detected locally, before any network activity.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ConnectError::MissingUrl(_) | ConnectError::Settings(_))
    }
}

/// Domain error surfaced to callers: the original cause plus where it happened.
#[derive(thiserror::Error, Debug)]
#[error("Error occurred in {module} while {operation}: {source}")]
pub struct Error {
    pub module: &'static str,
    pub operation: &'static str,
    #[source]
    pub source: ConnectError,
}

impl Error {
    pub fn new(module: &'static str, operation: &'static str, source: impl Into<ConnectError>) -> Self {
        Error {
            module,
            operation,
            source: source.into(),
        }
    }

    pub fn cause(&self) -> &ConnectError {
        &self.source
    }

    pub fn is_configuration(&self) -> bool {
        self.source.is_configuration()
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
