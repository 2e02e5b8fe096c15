//! Artist handlers

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, Response},
};
use showbook_common::db::models::ArtistInput;
use showbook_common::db::artists;
use showbook_common::{directory, time, Error, Result};
use sqlx::SqlitePool;
use tracing::info;

use super::{failure_flash, json_with_flash, landing_with_flash, page, redirect_with_flash};
use crate::error::parse_id;
use crate::flash::Flash;
use crate::forms::FormData;
use crate::{ui, AppState, WebError, WebResult};

/// GET /artists
pub async fn list_artists(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> WebResult<Response> {
    let entries = directory::artist_entries(&state.db).await?;
    Ok(page(&headers, |flash| ui::artists::index_page(&entries, flash)))
}

/// POST /artists/search
pub async fn search_artists(State(state): State<AppState>, body: String) -> WebResult<Html<String>> {
    let term = FormData::parse(&body).search_term();
    let results = directory::search_artists(&state.db, &term, time::now()).await?;
    Ok(Html(ui::artists::search_page(&term, &results)))
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
) -> WebResult<Response> {
    let id = parse_id(&raw_id)?;
    let artist = directory::artist_detail(&state.db, id, time::now())
        .await?
        .ok_or_else(|| WebError::NotFound(format!("artist {}", id)))?;
    Ok(page(&headers, |flash| ui::artists::detail_page(&artist, flash)))
}

/// GET /artists/create
pub async fn create_artist_form(headers: HeaderMap) -> Response {
    page(&headers, |flash| {
        ui::forms::artist_form_page(
            "List a new artist",
            "/artists/create",
            &ArtistInput::default(),
            flash,
        )
    })
}

/// POST /artists/create
///
/// Renders the landing page with the outcome flash.
pub async fn create_artist_submission(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let form = FormData::parse(&body);
    let flash = match insert(&state.db, &form).await {
        Ok((id, name)) => {
            info!("Listed artist {} ({})", id, name);
            Flash::success(format!("Artist {} was successfully listed!", name))
        }
        Err(err) => failure_flash(
            &err,
            &format!("Artist {}", form.get("name").unwrap_or("UNKNOWN")),
            "listed",
        ),
    };
    landing_with_flash(&headers, &flash)
}

async fn insert(pool: &SqlitePool, form: &FormData) -> Result<(i64, String)> {
    let input = form.artist_input()?;
    let mut tx = pool.begin().await?;
    let id = artists::insert_artist(&mut tx, &input).await?;
    tx.commit().await?;
    Ok((id, input.name))
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
) -> WebResult<Response> {
    let id = parse_id(&raw_id)?;
    let artist = artists::find_artist(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("artist {}", id)))?;
    let values = ArtistInput::from(artist);
    let action = format!("/artists/{}/edit", id);

    Ok(page(&headers, |flash| {
        ui::forms::artist_form_page("Edit artist", &action, &values, flash)
    }))
}

/// POST /artists/:id/edit
///
/// Redirects to the detail page with the outcome flash.
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: String,
) -> WebResult<Response> {
    let id = parse_id(&raw_id)?;
    if artists::find_artist(&state.db, id).await?.is_none() {
        return Err(WebError::NotFound(format!("artist {}", id)));
    }

    let form = FormData::parse(&body);
    let flash = match update(&state.db, id, &form).await {
        Ok(name) => {
            info!("Updated artist {} ({})", id, name);
            Flash::success(format!("Artist {} was successfully updated!", name))
        }
        Err(Error::NotFound(what)) => return Err(WebError::NotFound(what)),
        Err(err) => failure_flash(
            &err,
            &format!("Artist {}", form.get("name").unwrap_or(&raw_id)),
            "updated",
        ),
    };

    Ok(redirect_with_flash(&format!("/artists/{}", id), &flash))
}

async fn update(pool: &SqlitePool, id: i64, form: &FormData) -> Result<String> {
    let input = form.artist_input()?;
    let mut tx = pool.begin().await?;
    artists::update_artist(&mut tx, id, &input).await?;
    tx.commit().await?;
    Ok(input.name)
}

/// DELETE /artists/:id/delete
///
/// Shows and genre entries of the artist are removed with it.
pub async fn delete_artist(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let outcome = match raw_id.parse::<i64>() {
        Ok(id) => remove(&state.db, id).await,
        Err(_) => Err(Error::NotFound(format!("artist {}", raw_id))),
    };

    match outcome {
        Ok(name) => {
            info!("Deleted artist {} ({})", raw_id, name);
            json_with_flash(true, &Flash::success(format!("Artist {} successfully deleted.", name)))
        }
        Err(err) => json_with_flash(
            false,
            &failure_flash(&err, &format!("Artist {}", raw_id), "deleted"),
        ),
    }
}

async fn remove(pool: &SqlitePool, id: i64) -> Result<String> {
    let mut tx = pool.begin().await?;
    let name = artists::delete_artist(&mut tx, id).await?;
    tx.commit().await?;
    Ok(name)
}
