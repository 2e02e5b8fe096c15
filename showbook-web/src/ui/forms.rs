//! Create and edit forms
//!
//! Field names match what `crate::forms::FormData` reads back. Edit forms
//! are filled from the stored record; create forms start from defaults.

use showbook_common::db::models::{ArtistInput, VenueInput};

use super::{escape, layout};
use crate::flash::Flash;
use crate::forms::{GENRES, STATES};

fn text_input(name: &str, label: &str, value: &str, kind: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
        <input type="{kind}" id="{name}" name="{name}" value="{value}">"#,
        name = name,
        label = label,
        kind = kind,
        value = escape(value),
    )
}

/// `<option>`s for `choices`, then any stored value outside them
///
/// Every value in `selected` renders as a selected option.
fn select_options(choices: &[&str], selected: &[&str]) -> String {
    let extras = selected
        .iter()
        .filter(|value| !value.is_empty() && !choices.contains(*value));
    choices
        .iter()
        .chain(extras)
        .map(|choice| {
            format!(
                r#"<option value="{0}"{1}>{0}</option>"#,
                escape(choice),
                if selected.contains(choice) { " selected" } else { "" }
            )
        })
        .collect()
}

fn state_select(selected: &str) -> String {
    format!(
        r#"<label for="state">State</label>
        <select id="state" name="state">{}</select>"#,
        select_options(STATES, &[selected])
    )
}

/// Multi-select; each selected option is submitted as its own `genres` pair
fn genre_select(selected: &[String]) -> String {
    let selected: Vec<&str> = selected.iter().map(String::as_str).collect();
    format!(
        r#"<label for="genres">Genres</label>
        <select id="genres" name="genres" multiple size="8">{}</select>"#,
        select_options(GENRES, &selected)
    )
}

fn seeking_fields(flag: &str, label: &str, checked: bool, description: Option<&str>) -> String {
    format!(
        r#"<label><input type="checkbox" name="{flag}" value="y"{checked}> {label}</label>
        <label for="seeking_description">Seeking description</label>
        <textarea id="seeking_description" name="seeking_description" rows="3">{description}</textarea>"#,
        flag = flag,
        label = label,
        checked = if checked { " checked" } else { "" },
        description = escape(description.unwrap_or_default()),
    )
}

fn form_page(title: &str, action: &str, fields: &[String], flash: Option<&Flash>) -> String {
    let body = format!(
        r#"<h1>{title}</h1>
    <form method="post" action="{action}">
        {fields}
        <p><button class="button" type="submit">{title}</button></p>
    </form>"#,
        title = escape(title),
        action = escape(action),
        fields = fields.join("\n        "),
    );
    layout(title, flash, &body)
}

/// Venue form posting to `action`, filled from `values`
pub fn venue_form_page(
    title: &str,
    action: &str,
    values: &VenueInput,
    flash: Option<&Flash>,
) -> String {
    let fields = [
        text_input("name", "Name", &values.name, "text"),
        text_input("city", "City", &values.city, "text"),
        state_select(&values.state),
        text_input("address", "Address", &values.address, "text"),
        text_input("phone", "Phone", &values.phone, "tel"),
        genre_select(&values.genres),
        text_input("image_link", "Image link", &values.image_link, "url"),
        text_input("facebook_link", "Facebook link", &values.facebook_link, "url"),
        text_input("website_link", "Website", &values.website_link, "url"),
        seeking_fields(
            "seeking_talent",
            "Seeking talent",
            values.seeking_talent,
            values.seeking_description.as_deref(),
        ),
    ];
    form_page(title, action, &fields, flash)
}

/// Artist form posting to `action`, filled from `values`
pub fn artist_form_page(
    title: &str,
    action: &str,
    values: &ArtistInput,
    flash: Option<&Flash>,
) -> String {
    let fields = [
        text_input("name", "Name", &values.name, "text"),
        text_input("city", "City", &values.city, "text"),
        state_select(&values.state),
        text_input("phone", "Phone", &values.phone, "tel"),
        genre_select(&values.genres),
        text_input("image_link", "Image link", &values.image_link, "url"),
        text_input("facebook_link", "Facebook link", &values.facebook_link, "url"),
        text_input("website_link", "Website", &values.website_link, "url"),
        seeking_fields(
            "seeking_venue",
            "Seeking venue",
            values.seeking_venue,
            values.seeking_description.as_deref(),
        ),
    ];
    form_page(title, action, &fields, flash)
}

/// Show form; `start_time` is prefilled with the current time
pub fn show_form_page(start_time: &str, flash: Option<&Flash>) -> String {
    let fields = [
        text_input("artist_id", "Artist ID", "", "text"),
        text_input("venue_id", "Venue ID", "", "text"),
        text_input("start_time", "Start time", start_time, "text"),
    ];
    form_page("List a new show", "/shows/create", &fields, flash)
}
