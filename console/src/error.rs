//! Server-side faults surfaced as HTTP 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Failure while handling a request: a file write, a poisoned lock, or a
/// template error. User input problems are never errors; they render as
/// page messages.
///
/// The client only sees a generic 500 body; the full chain goes to the log.
#[derive(Debug)]
pub struct ConsoleError(anyhow::Error);

pub type ConsoleResult<T> = Result<T, ConsoleError>;

impl<E> From<E> for ConsoleError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        error!(error = %format!("{:#}", self.0), "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[tokio::test]
    async fn converts_to_generic_internal_server_error() {
        let err = ConsoleError::from(
            anyhow!("Permission denied (os error 13)").context("write block list /srv/proxy/block_list.txt"),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(&body[..], b"Internal Server Error");
    }
}
