//! Error types for showbook-web
//!
//! Page handlers return `WebResult`; a missing entity renders the 404 page,
//! everything else is logged and renders the 500 page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::ui;

/// Page handler error type
#[derive(Debug, Error)]
pub enum WebError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// showbook-common error
    #[error(transparent)]
    Common(#[from] showbook_common::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound(_) | WebError::Common(showbook_common::Error::NotFound(_)) => {
                (StatusCode::NOT_FOUND, Html(ui::errors::not_found_page())).into_response()
            }
            WebError::Common(err) => {
                error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(ui::errors::server_error_page()),
                )
                    .into_response()
            }
        }
    }
}

/// Result type for page handlers
pub type WebResult<T> = Result<T, WebError>;

/// Parse a path id; anything that is not an integer is a missing page
pub fn parse_id(raw: &str) -> WebResult<i64> {
    raw.parse()
        .map_err(|_| WebError::NotFound(format!("no page for id {:?}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(WebError::NotFound(_))));
        assert!(matches!(parse_id(""), Err(WebError::NotFound(_))));
    }

    #[test]
    fn test_status_codes() {
        let response = WebError::NotFound("venue 1".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response =
            WebError::from(showbook_common::Error::NotFound("artist 2".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response =
            WebError::from(showbook_common::Error::Internal("boom".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
