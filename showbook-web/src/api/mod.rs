//! HTTP handlers
//!
//! Page handlers return `WebResult<Response>`. Mutation handlers never fail
//! the request: errors become a danger flash and a log entry.

pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::{
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;
use showbook_common::Error;
use tracing::{error, warn};

use crate::flash::{self, Flash};
use crate::WebError;

pub use health::health_routes;

/// Render a page, delivering the flash carried in by the request cookie
pub(crate) fn page(headers: &HeaderMap, render: impl FnOnce(Option<&Flash>) -> String) -> Response {
    let flash = flash::from_headers(headers);
    let mut response = Html(render(flash.as_ref())).into_response();
    if flash.is_some() {
        response
            .headers_mut()
            .append(header::SET_COOKIE, flash::clear_cookie());
    }
    response
}

/// Render the landing page with `flash`, replacing any flash still pending
/// in the request cookie
pub(crate) fn landing_with_flash(headers: &HeaderMap, flash: &Flash) -> Response {
    let mut response = Html(crate::ui::home::home_page(Some(flash))).into_response();
    if flash::from_headers(headers).is_some() {
        response
            .headers_mut()
            .append(header::SET_COOKIE, flash::clear_cookie());
    }
    response
}

/// Redirect to `to`, carrying `flash` to the page rendered there
pub(crate) fn redirect_with_flash(to: &str, flash: &Flash) -> Response {
    let mut response = Redirect::to(to).into_response();
    response
        .headers_mut()
        .append(header::SET_COOKIE, flash.set_cookie());
    response
}

/// `{"success": bool}` for the delete endpoints; the page script navigates
/// and the next page shows `flash`
pub(crate) fn json_with_flash(success: bool, flash: &Flash) -> Response {
    let mut response = Json(json!({ "success": success })).into_response();
    response
        .headers_mut()
        .append(header::SET_COOKIE, flash.set_cookie());
    response
}

/// Danger flash for a failed mutation; the cause is logged
///
/// `subject` names what was submitted ("Venue The Musical Hop"), `action`
/// completes "could not be ..." ("listed", "updated", "deleted").
pub(crate) fn failure_flash(err: &Error, subject: &str, action: &str) -> Flash {
    if err.is_validation() {
        warn!("{} could not be {}: {}", subject, action, err);
        Flash::danger(format!("{}. {} could not be {}.", err, subject, action))
    } else {
        error!("{} could not be {}: {}", subject, action, err);
        Flash::danger(format!(
            "An error occurred. {} could not be {}.",
            subject, action
        ))
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> WebError {
    WebError::NotFound("no such route".to_string())
}
