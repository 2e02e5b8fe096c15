//! Artist pages

use showbook_common::db::models::ArtistShow;
use showbook_common::directory::{ArtistDetail, ArtistEntry, SearchResults};
use showbook_common::time::{format_datetime, DateFormat};

use super::{delete_button, escape, external_link, genre_tags, image, layout, search_form};
use crate::flash::Flash;

pub fn index_page(artists: &[ArtistEntry], flash: Option<&Flash>) -> String {
    let items: String = artists
        .iter()
        .map(|a| format!(r#"<li><a href="/artists/{}">{}</a></li>"#, a.id, escape(&a.name)))
        .collect();

    let body = format!(
        r#"<h1>Artists</h1>
    {form}
    <p><a href="/artists/create" class="button">Post an artist</a></p>
    <ul>{items}</ul>"#,
        form = search_form("/artists/search", "Find an artist", ""),
        items = items,
    );
    layout("Artists", flash, &body)
}

pub fn search_page(term: &str, results: &SearchResults) -> String {
    let items: String = results
        .data
        .iter()
        .map(|a| {
            format!(
                r#"<li><a href="/artists/{}">{}</a> <span class="muted">{} upcoming shows</span></li>"#,
                a.id,
                escape(&a.name),
                a.num_upcoming_shows
            )
        })
        .collect();

    let body = format!(
        r#"{form}
    <h3>Number of search results for "{term}": {count}</h3>
    <ul>{items}</ul>"#,
        form = search_form("/artists/search", "Find an artist", term),
        term = escape(term),
        count = results.count,
        items = items,
    );
    layout("Artist Search", None, &body)
}

fn show_rows(shows: &[ArtistShow]) -> String {
    shows
        .iter()
        .map(|show| {
            format!(
                r#"<div class="item">{img}<div><a href="/venues/{id}">{name}</a><br><span class="muted">{when}</span></div></div>"#,
                img = image(&show.venue_image_link, &show.venue_name),
                id = show.venue_id,
                name = escape(&show.venue_name),
                when = escape(&format_datetime(&show.start_time, DateFormat::Full)),
            )
        })
        .collect()
}

pub fn detail_page(artist: &ArtistDetail, flash: Option<&Flash>) -> String {
    let seeking = match &artist.seeking_description {
        Some(text) => format!(
            r#"<p><strong>Currently seeking performance venues</strong><br>{}</p>"#,
            escape(text)
        ),
        None if artist.seeking_venue => {
            "<p><strong>Currently seeking performance venues</strong></p>".to_string()
        }
        None => r#"<p class="muted">Not currently seeking performance venues</p>"#.to_string(),
    };

    let body = format!(
        r#"<h1>{name}</h1>
    <p class="muted">ID: {id}</p>
    <p>{genres}</p>
    <p>{city}, {state}<br>{phone}</p>
    {website}
    {facebook}
    {seeking}
    <div class="item">{image}</div>
    <p>
        <a href="/artists/{id}/edit" class="button">Edit</a>
        {delete}
    </p>
    <h2>{upcoming_count} Upcoming Shows</h2>
    {upcoming}
    <h2>{past_count} Past Shows</h2>
    {past}"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_tags(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(&artist.phone),
        website = external_link(&artist.website, "Website"),
        facebook = external_link(&artist.facebook_link, "Facebook"),
        seeking = seeking,
        image = image(&artist.image_link, &artist.name),
        delete = delete_button(&format!("/artists/{}/delete", artist.id), "Delete artist"),
        upcoming_count = artist.upcoming_shows_count,
        upcoming = show_rows(&artist.upcoming_shows),
        past_count = artist.past_shows_count,
        past = show_rows(&artist.past_shows),
    );

    layout(&artist.name, flash, &body)
}
