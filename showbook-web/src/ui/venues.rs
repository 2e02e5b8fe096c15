//! Venue pages

use showbook_common::directory::{SearchResults, VenueArea, VenueDetail};
use showbook_common::db::models::VenueShow;
use showbook_common::time::{format_datetime, DateFormat};

use super::{delete_button, escape, external_link, genre_tags, image, layout, search_form};
use crate::flash::Flash;

/// Venues grouped by area
pub fn index_page(areas: &[VenueArea], flash: Option<&Flash>) -> String {
    let mut body = format!(
        "<h1>Venues</h1>\n    {}\n    <p><a href=\"/venues/create\" class=\"button\">Post a venue</a></p>",
        search_form("/venues/search", "Find a venue", "")
    );

    if areas.is_empty() {
        body.push_str(r#"<p class="muted">No venues listed yet.</p>"#);
    }

    for area in areas {
        body.push_str(&format!(
            "\n    <h3>{}, {}</h3>\n    <ul>",
            escape(&area.city),
            escape(&area.state)
        ));
        for venue in &area.venues {
            body.push_str(&format!(
                r#"<li><a href="/venues/{}">{}</a> <span class="muted">{} upcoming shows</span></li>"#,
                venue.id,
                escape(&venue.name),
                venue.num_upcoming_shows
            ));
        }
        body.push_str("</ul>");
    }

    layout("Venues", flash, &body)
}

/// Venue search results
pub fn search_page(term: &str, results: &SearchResults) -> String {
    let items: String = results
        .data
        .iter()
        .map(|v| {
            format!(
                r#"<li><a href="/venues/{}">{}</a> <span class="muted">{} upcoming shows</span></li>"#,
                v.id,
                escape(&v.name),
                v.num_upcoming_shows
            )
        })
        .collect();

    let body = format!(
        r#"{form}
    <h3>Number of search results for "{term}": {count}</h3>
    <ul>{items}</ul>"#,
        form = search_form("/venues/search", "Find a venue", term),
        term = escape(term),
        count = results.count,
        items = items,
    );
    layout("Venue Search", None, &body)
}

fn show_rows(shows: &[VenueShow]) -> String {
    shows
        .iter()
        .map(|show| {
            format!(
                r#"<div class="item">{img}<div><a href="/artists/{id}">{name}</a><br><span class="muted">{when}</span></div></div>"#,
                img = image(&show.artist_image_link, &show.artist_name),
                id = show.artist_id,
                name = escape(&show.artist_name),
                when = escape(&format_datetime(&show.start_time, DateFormat::Full)),
            )
        })
        .collect()
}

/// Venue detail with past and upcoming shows
pub fn detail_page(venue: &VenueDetail, flash: Option<&Flash>) -> String {
    let seeking = match &venue.seeking_description {
        Some(text) => format!(
            r#"<p><strong>Currently seeking talent</strong><br>{}</p>"#,
            escape(text)
        ),
        None if venue.seeking_talent => "<p><strong>Currently seeking talent</strong></p>".to_string(),
        None => r#"<p class="muted">Not currently seeking talent</p>"#.to_string(),
    };

    let body = format!(
        r#"<h1>{name}</h1>
    <p class="muted">ID: {id}</p>
    <p>{genres}</p>
    <p>{address}<br>{city}, {state}<br>{phone}</p>
    {website}
    {facebook}
    {seeking}
    <div class="item">{image}</div>
    <p>
        <a href="/venues/{id}/edit" class="button">Edit</a>
        {delete}
    </p>
    <h2>{upcoming_count} Upcoming Shows</h2>
    {upcoming}
    <h2>{past_count} Past Shows</h2>
    {past}"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_tags(&venue.genres),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape(&venue.phone),
        website = external_link(&venue.website, "Website"),
        facebook = external_link(&venue.facebook_link, "Facebook"),
        seeking = seeking,
        image = image(&venue.image_link, &venue.name),
        delete = delete_button(&format!("/venues/{}/delete", venue.id), "Delete venue"),
        upcoming_count = venue.upcoming_shows_count,
        upcoming = show_rows(&venue.upcoming_shows),
        past_count = venue.past_shows_count,
        past = show_rows(&venue.past_shows),
    );

    layout(&venue.name, flash, &body)
}
