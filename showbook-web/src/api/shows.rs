//! Show handlers

use axum::{
    extract::State,
    http::HeaderMap,
    response::Response,
};
use showbook_common::db::shows;
use showbook_common::time::{self, STORAGE_FORMAT};
use showbook_common::Result;
use sqlx::SqlitePool;
use tracing::info;

use super::{failure_flash, landing_with_flash, page};
use crate::flash::Flash;
use crate::forms::FormData;
use crate::{ui, AppState, WebResult};

/// GET /shows
pub async fn list_shows(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> WebResult<Response> {
    let listing = shows::list_shows(&state.db).await?;
    Ok(page(&headers, |flash| ui::shows::index_page(&listing, flash)))
}

/// GET /shows/create
pub async fn create_show_form(headers: HeaderMap) -> Response {
    let start_time = time::now().format(STORAGE_FORMAT).to_string();
    page(&headers, |flash| ui::forms::show_form_page(&start_time, flash))
}

/// POST /shows/create
///
/// An unknown venue or artist fails the foreign key check and is reported
/// like any other persistence failure.
pub async fn create_show_submission(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let form = FormData::parse(&body);
    let flash = match insert(&state.db, &form).await {
        Ok(id) => {
            info!("Listed show {}", id);
            Flash::success("Show was successfully listed!")
        }
        Err(err) => failure_flash(&err, "Show", "listed"),
    };
    landing_with_flash(&headers, &flash)
}

async fn insert(pool: &SqlitePool, form: &FormData) -> Result<i64> {
    let input = form.show_input()?;
    let mut tx = pool.begin().await?;
    let id = shows::insert_show(&mut tx, &input).await?;
    tx.commit().await?;
    Ok(id)
}
