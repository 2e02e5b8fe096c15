//! Landing page handler

use axum::{http::HeaderMap, response::Response};

use super::page;
use crate::ui;

/// GET /
pub async fn index(headers: HeaderMap) -> Response {
    page(&headers, ui::home::home_page)
}
