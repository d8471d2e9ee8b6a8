use serde_json::Value;

/// Application error taxonomy. Every variant carries the message shown to the
/// user; `Display` renders it as `message (kind)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// A precondition failed before any network call was attempted.
    #[error("{0} (invalid_parameter)")]
    InvalidParameter(String),

    /// Non-2xx response without a structured detail body.
    #[error("{0} (request_error)")]
    Request(String),

    /// Structured detail present, but missing a name or a message.
    #[error("{0} (backend_error)")]
    Backend(String),

    /// Error declared by the backend with its own name and message.
    #[error("{message} ({name})")]
    Server { name: String, message: String },

    #[error(
        "Network error occurred, please check your Internet connection \
         or maybe there is error occurred at server side. (network_error)"
    )]
    Network,

    /// Unclassified failure.
    #[error("{0} (unknown_error)")]
    Unknown(String),

    /// Text could not be parsed into the expected record shape.
    #[error("{0} (parse_error)")]
    Parse(String),

    /// A required client capability (browser window, clipboard) is missing.
    #[error("{0} (environment_error)")]
    Environment(String),
}

impl AppError {
    /// Short string tag identifying the error kind.
    pub fn kind(&self) -> &str {
        match self {
            Self::InvalidParameter(_) => "invalid_parameter",
            Self::Request(_) => "request_error",
            Self::Backend(_) => "backend_error",
            Self::Server { name, .. } => name,
            Self::Network => "network_error",
            Self::Unknown(_) => "unknown_error",
            Self::Parse(_) => "parse_error",
            Self::Environment(_) => "environment_error",
        }
    }

    /// The user-facing message without the kind suffix.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidParameter(m)
            | Self::Request(m)
            | Self::Backend(m)
            | Self::Unknown(m)
            | Self::Parse(m)
            | Self::Environment(m) => m.clone(),
            Self::Server { message, .. } => message.clone(),
            Self::Network => {
                "Network error occurred, please check your Internet connection \
                 or maybe there is error occurred at server side."
                    .to_string()
            }
        }
    }
}

/// Raw outcome of a failed HTTP exchange, before classification.
#[derive(Debug, Clone, PartialEq)]
pub enum RawFailure {
    /// The server answered with a non-2xx status. `body` holds the decoded
    /// JSON payload when the response carried one.
    Response { status: u16, body: Option<Value> },
    /// The request never reached the server.
    Unreachable,
    /// Anything else: request building, body streaming, decoding.
    Other(String),
}

/// Translates a raw transport failure into the error surfaced to the user.
///
/// First match wins. The order decides which message reaches the end user for
/// every class of backend or connectivity failure:
/// 1. response without a structured `detail` -> `request_error`
/// 2. `detail` missing a name or a message -> `backend_error`
/// 3. `detail` with both -> pass-through of the server-declared error
/// 4. unreachable network -> `network_error`
/// 5. everything else -> `unknown_error`
pub fn classify(failure: RawFailure) -> AppError {
    match failure {
        RawFailure::Response { status, body } => {
            let Some(detail) = body.as_ref().and_then(|b| b.get("detail")) else {
                return AppError::Request(format!(
                    "Error occurred when requesting backend API (HTTP status code: {status})"
                ));
            };

            let name = detail.get("name").and_then(Value::as_str);
            let message = detail.get("message").and_then(Value::as_str);
            match (name, message) {
                (Some(name), Some(message)) => AppError::Server {
                    name: name.to_string(),
                    message: message.to_string(),
                },
                _ => AppError::Backend(detail.to_string()),
            }
        }
        RawFailure::Unreachable => AppError::Network,
        RawFailure::Other(message) => {
            AppError::Unknown(format!("Error occurred when requesting API: {message}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_without_detail_is_request_error() {
        let error = classify(RawFailure::Response {
            status: 500,
            body: None,
        });
        assert_eq!(error.kind(), "request_error");
        assert!(error.message().contains("500"));
    }

    #[test]
    fn test_body_without_detail_is_request_error() {
        let error = classify(RawFailure::Response {
            status: 502,
            body: Some(json!({"unrelated": true})),
        });
        assert_eq!(error.kind(), "request_error");
    }

    #[test]
    fn test_incomplete_detail_is_backend_error() {
        let error = classify(RawFailure::Response {
            status: 400,
            body: Some(json!({"detail": {"name": "missing_message"}})),
        });
        assert_eq!(error.kind(), "backend_error");
        assert!(error.message().contains("missing_message"));
    }

    #[test]
    fn test_complete_detail_passes_through() {
        let error = classify(RawFailure::Response {
            status: 401,
            body: Some(json!({"detail": {"name": "token_required", "message": "Login first"}})),
        });
        assert_eq!(error.kind(), "token_required");
        assert_eq!(error.message(), "Login first");
    }

    #[test]
    fn test_unreachable_is_network_error() {
        let error = classify(RawFailure::Unreachable);
        assert_eq!(error, AppError::Network);
        assert_eq!(error.kind(), "network_error");
    }

    #[test]
    fn test_anything_else_is_unknown_error() {
        let error = classify(RawFailure::Other("socket closed".to_string()));
        assert_eq!(error.kind(), "unknown_error");
        assert!(error.message().contains("socket closed"));
    }

    #[test]
    fn test_display_includes_kind_in_parentheses() {
        let error = AppError::InvalidParameter("days must be at least 1".to_string());
        assert_eq!(error.to_string(), "days must be at least 1 (invalid_parameter)");

        let error = AppError::Server {
            name: "token_required".to_string(),
            message: "Login first".to_string(),
        };
        assert_eq!(error.to_string(), "Login first (token_required)");
    }
}
