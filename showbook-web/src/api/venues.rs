//! Venue handlers

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, Response},
};
use showbook_common::db::models::VenueInput;
use showbook_common::db::venues;
use showbook_common::{directory, time, Error, Result};
use sqlx::SqlitePool;
use tracing::info;

use super::{failure_flash, json_with_flash, landing_with_flash, page, redirect_with_flash};
use crate::error::parse_id;
use crate::flash::Flash;
use crate::forms::FormData;
use crate::{ui, AppState, WebError, WebResult};

/// GET /venues
pub async fn list_venues(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> WebResult<Response> {
    let areas = directory::venue_areas(&state.db).await?;
    Ok(page(&headers, |flash| ui::venues::index_page(&areas, flash)))
}

/// POST /venues/search
pub async fn search_venues(State(state): State<AppState>, body: String) -> WebResult<Html<String>> {
    let term = FormData::parse(&body).search_term();
    let results = directory::search_venues(&state.db, &term, time::now()).await?;
    Ok(Html(ui::venues::search_page(&term, &results)))
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
) -> WebResult<Response> {
    let id = parse_id(&raw_id)?;
    let venue = directory::venue_detail(&state.db, id, time::now())
        .await?
        .ok_or_else(|| WebError::NotFound(format!("venue {}", id)))?;
    Ok(page(&headers, |flash| ui::venues::detail_page(&venue, flash)))
}

/// GET /venues/create
pub async fn create_venue_form(headers: HeaderMap) -> Response {
    page(&headers, |flash| {
        ui::forms::venue_form_page(
            "List a new venue",
            "/venues/create",
            &VenueInput::default(),
            flash,
        )
    })
}

/// POST /venues/create
///
/// Renders the landing page with the outcome flash.
pub async fn create_venue_submission(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let form = FormData::parse(&body);
    let flash = match insert(&state.db, &form).await {
        Ok((id, name)) => {
            info!("Listed venue {} ({})", id, name);
            Flash::success(format!("Venue {} was successfully listed!", name))
        }
        Err(err) => failure_flash(
            &err,
            &format!("Venue {}", form.get("name").unwrap_or("UNKNOWN")),
            "listed",
        ),
    };
    landing_with_flash(&headers, &flash)
}

async fn insert(pool: &SqlitePool, form: &FormData) -> Result<(i64, String)> {
    let input = form.venue_input()?;
    let mut tx = pool.begin().await?;
    let id = venues::insert_venue(&mut tx, &input).await?;
    tx.commit().await?;
    Ok((id, input.name))
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
) -> WebResult<Response> {
    let id = parse_id(&raw_id)?;
    let venue = venues::find_venue(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("venue {}", id)))?;
    let values = VenueInput::from(venue);
    let action = format!("/venues/{}/edit", id);

    Ok(page(&headers, |flash| {
        ui::forms::venue_form_page("Edit venue", &action, &values, flash)
    }))
}

/// POST /venues/:id/edit
///
/// Redirects to the detail page with the outcome flash.
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: String,
) -> WebResult<Response> {
    let id = parse_id(&raw_id)?;
    if venues::find_venue(&state.db, id).await?.is_none() {
        return Err(WebError::NotFound(format!("venue {}", id)));
    }

    let form = FormData::parse(&body);
    let flash = match update(&state.db, id, &form).await {
        Ok(name) => {
            info!("Updated venue {} ({})", id, name);
            Flash::success(format!("Venue {} was successfully updated!", name))
        }
        Err(Error::NotFound(what)) => return Err(WebError::NotFound(what)),
        Err(err) => failure_flash(
            &err,
            &format!("Venue {}", form.get("name").unwrap_or(&raw_id)),
            "updated",
        ),
    };

    Ok(redirect_with_flash(&format!("/venues/{}", id), &flash))
}

async fn update(pool: &SqlitePool, id: i64, form: &FormData) -> Result<String> {
    let input = form.venue_input()?;
    let mut tx = pool.begin().await?;
    venues::update_venue(&mut tx, id, &input).await?;
    tx.commit().await?;
    Ok(input.name)
}

/// DELETE /venues/:id/delete
///
/// Shows and genre entries of the venue are removed with it.
pub async fn delete_venue(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let outcome = match raw_id.parse::<i64>() {
        Ok(id) => remove(&state.db, id).await,
        Err(_) => Err(Error::NotFound(format!("venue {}", raw_id))),
    };

    match outcome {
        Ok(name) => {
            info!("Deleted venue {} ({})", raw_id, name);
            json_with_flash(true, &Flash::success(format!("Venue {} successfully deleted.", name)))
        }
        Err(err) => json_with_flash(
            false,
            &failure_flash(&err, &format!("Venue {}", raw_id), "deleted"),
        ),
    }
}

async fn remove(pool: &SqlitePool, id: i64) -> Result<String> {
    let mut tx = pool.begin().await?;
    let name = venues::delete_venue(&mut tx, id).await?;
    tx.commit().await?;
    Ok(name)
}
