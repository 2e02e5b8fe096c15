//! Landing page

use super::layout;
use crate::flash::Flash;

pub fn home_page(flash: Option<&Flash>) -> String {
    layout(
        "Home",
        flash,
        r#"<h1>Showbook</h1>
    <p>Find venues, discover artists and book the shows that bring them together.</p>
    <p>
        <a href="/venues/create" class="button">Post a venue</a>
        <a href="/artists/create" class="button">Post an artist</a>
        <a href="/shows/create" class="button">Post a show</a>
    </p>"#,
    )
}
