use std::fmt;

#[derive(Debug)]
pub enum HoteldeskError {
    ApiError {
        status: u16,
        message: String,
    },
    EmptyToken,
    StoreError(String),
    NetworkError(reqwest::Error),
    JsonError(serde_json::Error),
    Other(String),
}

impl fmt::Display for HoteldeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoteldeskError::ApiError { status, message } => {
                write!(f, "Authentication error (status {}): {}", status, message)
            }
            HoteldeskError::EmptyToken => {
                write!(f, "Login response did not include a token")
            }
            HoteldeskError::StoreError(msg) => write!(f, "Session store error: {}", msg),
            HoteldeskError::NetworkError(e) => write!(f, "Network error: {}", e),
            HoteldeskError::JsonError(e) => write!(f, "JSON error: {}", e),
            HoteldeskError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for HoteldeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HoteldeskError::NetworkError(e) => Some(e),
            HoteldeskError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HoteldeskError {
    fn from(err: reqwest::Error) -> Self {
        HoteldeskError::NetworkError(err)
    }
}

impl From<serde_json::Error> for HoteldeskError {
    fn from(err: serde_json::Error) -> Self {
        HoteldeskError::JsonError(err)
    }
}

impl From<String> for HoteldeskError {
    fn from(msg: String) -> Self {
        HoteldeskError::Other(msg)
    }
}

impl From<&str> for HoteldeskError {
    fn from(msg: &str) -> Self {
        HoteldeskError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HoteldeskError>;
