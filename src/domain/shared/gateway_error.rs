use crate::error::AppError;

/// Failure modes shared by the translate, quiz and speech gateways.
///
/// Malformed upstream output has no variant; the gateways replace it with
/// placeholder content.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::InvalidInput(msg) => AppError::BadRequest(msg),
            GatewayError::ServiceUnavailable(msg) => AppError::ServiceUnavailable(msg),
            GatewayError::Upstream(msg) => AppError::ExternalService(msg),
        }
    }
}

/// Keep a request field only when it has non-whitespace content
pub fn require_field(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Truncate to at most `max_chars` characters on a char boundary
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
