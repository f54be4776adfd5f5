//! Error taxonomy for payment submission.
//!
//! Every submission failure is one of three kinds, so call sites must
//! handle each path explicitly. The numeric classification mirrors HTTP
//! status codes: 400, 401, and 5xx.

/// Result type for submission operations.
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Classified failure of a payment submission.
///
/// All errors are terminal for the attempt; there is no retry logic here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    /// Malformed or missing request fields (400).
    #[error("bad request: {0}")]
    BadRequest(String),
    /// No active session (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// Backend failure (5xx, or any other unclassified status).
    #[error("server error ({status}): {message}")]
    ServerError { status: u16, message: String },
}

impl PaymentError {
    /// The HTTP-style status classification for this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::ServerError { status, .. } => *status,
        }
    }

    /// The bare message, without the classification prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message) => message,
            Self::Unauthorized(message) => message,
            Self::ServerError { message, .. } => message,
        }
    }

    /// Map an HTTP response status to the matching error kind.
    ///
    /// 400 and 401 map to their dedicated kinds; everything else keeps its
    /// status inside `ServerError` so callers can still classify it.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => Self::BadRequest(message),
            401 => Self::Unauthorized(message),
            _ => Self::ServerError { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(PaymentError::BadRequest("x".into()).status(), 400);
        assert_eq!(PaymentError::Unauthorized("x".into()).status(), 401);
        assert_eq!(
            PaymentError::ServerError {
                status: 503,
                message: "x".into()
            }
            .status(),
            503
        );
    }

    #[test]
    fn test_from_status() {
        assert_eq!(
            PaymentError::from_status(400, "bad"),
            PaymentError::BadRequest("bad".to_string())
        );
        assert_eq!(
            PaymentError::from_status(401, "auth"),
            PaymentError::Unauthorized("auth".to_string())
        );
        assert_eq!(
            PaymentError::from_status(500, "boom"),
            PaymentError::ServerError {
                status: 500,
                message: "boom".to_string()
            }
        );
        // Unclassified statuses keep their code.
        assert_eq!(PaymentError::from_status(404, "missing").status(), 404);
    }

    #[test]
    fn test_display_and_message() {
        let err = PaymentError::ServerError {
            status: 500,
            message: "Server error occurred".to_string(),
        };
        assert_eq!(err.to_string(), "server error (500): Server error occurred");
        assert_eq!(err.message(), "Server error occurred");
    }
}
