//! Error types for the data layer.

use thiserror::Error;

/// Failures while talking to the detection backend.
///
/// Transport problems (unreachable host, timeout, body decode) and non-2xx
/// statuses collapse into a single "fetch failed" condition: the client
/// recovers locally by substituting the endpoint's fixed fallback value, so
/// this type never crosses into the presentation layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned status {0}")]
    Status(u16),
}

impl ApiError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport(e) if e.is_timeout())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
