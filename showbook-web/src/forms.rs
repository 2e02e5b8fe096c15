//! Form body parsing
//!
//! Bodies are `application/x-www-form-urlencoded`. The genres multi-select
//! submits one `genres` pair per selected option, so fields are kept as an
//! ordered list of pairs rather than a map.

use showbook_common::db::models::{ArtistInput, ShowInput, VenueInput};
use showbook_common::time::normalize_start_time;
use showbook_common::{Error, Result};

/// Genre choices offered by the venue and artist forms
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// US state abbreviations offered by the venue and artist forms
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Decoded form fields in submission order
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn parse(body: &str) -> Self {
        Self {
            pairs: url::form_urlencoded::parse(body.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First value submitted for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted for `key`, in order
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Value of a field the form always submits
    pub fn require(&self, key: &str) -> Result<String> {
        self.get(key)
            .map(str::to_string)
            .ok_or_else(|| Error::Validation(format!("missing field {}", key)))
    }

    /// Checkbox fields are only submitted when ticked, with value `y`
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("y")
    }

    fn name(&self) -> Result<String> {
        let name = self.require("name")?;
        if name.trim().is_empty() {
            return Err(Error::Validation("name must not be empty".to_string()));
        }
        Ok(name)
    }

    fn seeking_description(&self) -> Result<Option<String>> {
        let text = self.require("seeking_description")?;
        Ok(if text.is_empty() { None } else { Some(text) })
    }

    /// Search box value; an absent field searches for everything
    pub fn search_term(&self) -> String {
        self.get("search_term").unwrap_or_default().to_string()
    }

    pub fn venue_input(&self) -> Result<VenueInput> {
        Ok(VenueInput {
            name: self.name()?,
            city: self.require("city")?,
            state: self.require("state")?,
            address: self.require("address")?,
            phone: self.require("phone")?,
            image_link: self.require("image_link")?,
            facebook_link: self.require("facebook_link")?,
            website_link: self.require("website_link")?,
            seeking_talent: self.flag("seeking_talent"),
            seeking_description: self.seeking_description()?,
            genres: self.get_all("genres"),
        })
    }

    pub fn artist_input(&self) -> Result<ArtistInput> {
        Ok(ArtistInput {
            name: self.name()?,
            city: self.require("city")?,
            state: self.require("state")?,
            phone: self.require("phone")?,
            image_link: self.require("image_link")?,
            facebook_link: self.require("facebook_link")?,
            website_link: self.require("website_link")?,
            seeking_venue: self.flag("seeking_venue"),
            seeking_description: self.seeking_description()?,
            genres: self.get_all("genres"),
        })
    }

    pub fn show_input(&self) -> Result<ShowInput> {
        let venue_id = parse_id_field(&self.require("venue_id")?, "venue_id")?;
        let artist_id = parse_id_field(&self.require("artist_id")?, "artist_id")?;
        let raw_start = self.require("start_time")?;
        let start_time = normalize_start_time(&raw_start)
            .ok_or_else(|| Error::Validation(format!("unreadable start_time {:?}", raw_start)))?;

        Ok(ShowInput {
            start_time,
            venue_id,
            artist_id,
        })
    }
}

fn parse_id_field(value: &str, field: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Validation(format!("{} must be a number", field)))
}
