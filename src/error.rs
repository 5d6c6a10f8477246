use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqueezeError {
    #[error("No Tinify API key found. Set TINIFY_KEY in the environment or in a .env file")]
    MissingCredential,

    #[error("No directory specified! Set IMAGE_DIR in the environment or in a .env file")]
    MissingDirectory,

    #[error("Cannot read image directory {path:?}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("{kind} error (HTTP {status}): {error}: {message}")]
    Service {
        kind: ServiceErrorKind,
        status: u16,
        error: String,
        message: String,
    },

    #[error("Unexpected service response: {0}")]
    InvalidResponse(String),

    #[error("Failed to start async runtime: {0}")]
    Runtime(String),
}

/// Error families reported by the compression service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// Bad credential or monthly limit reached.
    Account,
    /// The request or the uploaded file was rejected.
    Client,
    Server,
}

impl ServiceErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 429 => ServiceErrorKind::Account,
            400..=499 => ServiceErrorKind::Client,
            _ => ServiceErrorKind::Server,
        }
    }
}

impl std::fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ServiceErrorKind::Account => "Account",
            ServiceErrorKind::Client => "Client",
            ServiceErrorKind::Server => "Server",
        };
        write!(f, "{}", name)
    }
}

pub type Result<T> = std::result::Result<T, SqueezeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_kind_from_status() {
        assert_eq!(ServiceErrorKind::from_status(401), ServiceErrorKind::Account);
        assert_eq!(ServiceErrorKind::from_status(429), ServiceErrorKind::Account);
        assert_eq!(ServiceErrorKind::from_status(400), ServiceErrorKind::Client);
        assert_eq!(ServiceErrorKind::from_status(415), ServiceErrorKind::Client);
        assert_eq!(ServiceErrorKind::from_status(500), ServiceErrorKind::Server);
        assert_eq!(ServiceErrorKind::from_status(503), ServiceErrorKind::Server);
    }

    #[test]
    fn test_service_error_display() {
        let err = SqueezeError::Service {
            kind: ServiceErrorKind::Account,
            status: 401,
            error: "Unauthorized".to_string(),
            message: "Credentials are invalid.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Account error (HTTP 401): Unauthorized: Credentials are invalid."
        );
    }
}
