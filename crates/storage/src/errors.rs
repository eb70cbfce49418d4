use sweeper_models::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Authentication failed for '{0}': {1}")]
    AuthenticationError(String, String),

    #[error("Network failure for '{0}': {1}")]
    NetworkError(String, String),

    #[error("Upload failed for '{0}': {1}")]
    UploadError(String, String),

    #[error("Invalid storage configuration: {0}")]
    ConfigError(String),
}

impl StorageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageError::IoError(_) => ErrorKind::Io,
            StorageError::AuthenticationError(..) => ErrorKind::Authentication,
            StorageError::NetworkError(..) => ErrorKind::Network,
            StorageError::UploadError(..) => ErrorKind::Storage,
            StorageError::ConfigError(_) => ErrorKind::Config,
        }
    }

    /// Classifies a failed request.
    ///
    /// `code` is the service error code when the remote end answered,
    /// `transport` is set when the request never got a response.
    pub fn from_request_failure(
        key: &str,
        code: Option<&str>,
        transport: bool,
        message: String,
    ) -> Self {
        let key = key.to_string();

        if code.is_some_and(is_auth_code) || mentions_credentials(&message) {
            StorageError::AuthenticationError(key, message)
        } else if transport {
            StorageError::NetworkError(key, message)
        } else {
            StorageError::UploadError(key, message)
        }
    }
}

const AUTH_ERROR_CODES: &[&str] = &[
    "AccessDenied",
    "ExpiredToken",
    "InvalidAccessKeyId",
    "InvalidToken",
    "SignatureDoesNotMatch",
    "TokenRefreshRequired",
];

fn is_auth_code(code: &str) -> bool {
    AUTH_ERROR_CODES.contains(&code)
}

// Credential resolution fails before any request is sent
fn mentions_credentials(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    message.contains("no credentials") || message.contains("failed to load credentials")
}
