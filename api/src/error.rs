use thiserror::Error;

/// Failure of a backend call.
///
/// Pages never surface these directly; every async boundary catches and
/// downgrades them to local view state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network, DNS, CORS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Status code of a rejected response, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_render_code_and_body() {
        let err = ApiError::Status {
            status: 401,
            message: "unauthorized".into(),
        };
        assert_eq!(err.to_string(), "server returned 401: unauthorized");
        assert_eq!(err.status(), Some(401));
    }
}
