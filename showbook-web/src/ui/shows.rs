//! Show listing page

use showbook_common::db::models::ShowListing;
use showbook_common::time::{format_datetime, DateFormat};

use super::{escape, image, layout};
use crate::flash::Flash;

pub fn index_page(shows: &[ShowListing], flash: Option<&Flash>) -> String {
    let rows: String = shows
        .iter()
        .map(|show| {
            format!(
                r#"<div class="item">{img}<div>
            <a href="/artists/{artist_id}">{artist}</a> at <a href="/venues/{venue_id}">{venue}</a><br>
            <span class="muted">{when}</span>
        </div></div>"#,
                img = image(&show.artist_image_link, &show.artist_name),
                artist_id = show.artist_id,
                artist = escape(&show.artist_name),
                venue_id = show.venue_id,
                venue = escape(&show.venue_name),
                when = escape(&format_datetime(&show.start_time, DateFormat::Medium)),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Shows</h1>
    <p><a href="/shows/create" class="button">Post a show</a></p>
    {rows}"#,
        rows = if shows.is_empty() {
            r#"<p class="muted">No shows listed yet.</p>"#.to_string()
        } else {
            rows
        },
    );
    layout("Shows", flash, &body)
}
