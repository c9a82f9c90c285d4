//! Form input parsing and validation.
//!
//! Bodies are decoded as ordered key/value pairs rather than into a struct so
//! that repeated keys (`genres`) and checkbox presence survive decoding. A
//! checkbox counts as checked when its key is present, whatever its value.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::db::{
    entities::{artist, venue},
    enums::is_us_state,
};

const REQUIRED: &str = "This field is required.";

/// Raw `application/x-www-form-urlencoded` submission.
#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted under `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Trimmed value, empty when the key is missing.
    pub fn text(&self, key: &str) -> String {
        self.value(key).map(str::trim).unwrap_or_default().to_string()
    }

    /// Trimmed value, `None` when missing or blank.
    pub fn optional(&self, key: &str) -> Option<String> {
        Some(self.text(key)).filter(|v| !v.is_empty())
    }

    /// Every non-blank value submitted under `key` or `key[]`, in order.
    pub fn values(&self, key: &str) -> Vec<String> {
        let bracketed = format!("{}[]", key);
        self.0
            .iter()
            .filter(|(k, _)| k == key || *k == bracketed)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    pub fn is_present(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Ordered list of per-field validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn notice(&self) -> String {
        format!("Errors: {}", self)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

fn require(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.is_empty() {
        errors.add(field, REQUIRED);
    }
}

fn check_state(errors: &mut ValidationErrors, value: &str) {
    if !value.is_empty() && !is_us_state(value) {
        errors.add("state", "Not a valid choice.");
    }
}

fn check_url(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    let Some(url) = value else { return };
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {}
        _ => errors.add(field, "Invalid URL."),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            address: fields.optional("address"),
            phone: fields.optional("phone"),
            image_link: fields.optional("image_link"),
            facebook_link: fields.optional("facebook_link"),
            website_link: fields.optional("website_link"),
            genres: fields.values("genres"),
            seeking_talent: fields.is_present("seeking_talent"),
            seeking_description: fields.optional("seeking_description"),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "city", &self.city);
        require(&mut errors, "state", &self.state);
        check_state(&mut errors, &self.state);
        check_url(&mut errors, "image_link", self.image_link.as_deref());
        check_url(&mut errors, "facebook_link", self.facebook_link.as_deref());
        check_url(&mut errors, "website_link", self.website_link.as_deref());
        errors.into_result()
    }
}

impl From<&venue::Model> for VenueForm {
    fn from(venue: &venue::Model) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            website_link: venue.website.clone(),
            genres: venue.genre_list(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            phone: fields.optional("phone"),
            image_link: fields.optional("image_link"),
            facebook_link: fields.optional("facebook_link"),
            website_link: fields.optional("website_link"),
            genres: fields.values("genres"),
            seeking_venue: fields.is_present("seeking_venue"),
            seeking_description: fields.optional("seeking_description"),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "city", &self.city);
        require(&mut errors, "state", &self.state);
        check_state(&mut errors, &self.state);
        check_url(&mut errors, "image_link", self.image_link.as_deref());
        check_url(&mut errors, "facebook_link", self.facebook_link.as_deref());
        check_url(&mut errors, "website_link", self.website_link.as_deref());
        errors.into_result()
    }
}

impl From<&artist::Model> for ArtistForm {
    fn from(artist: &artist::Model) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website.clone(),
            genres: artist.genre_list(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

/// Show form keeps the raw strings so a rejected submission can be re-rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

/// A validated show submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

impl ShowForm {
    /// Blank form with the start time preset to `now`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            start_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            ..Default::default()
        }
    }

    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            artist_id: fields.text("artist_id"),
            venue_id: fields.text("venue_id"),
            start_time: fields.text("start_time"),
        }
    }

    pub fn validate(&self) -> Result<NewShow, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let artist_id = parse_id(&mut errors, "artist_id", &self.artist_id);
        let venue_id = parse_id(&mut errors, "venue_id", &self.venue_id);

        let start_time = if self.start_time.is_empty() {
            errors.add("start_time", REQUIRED);
            None
        } else {
            let parsed = parse_start_time(&self.start_time);
            if parsed.is_none() {
                errors.add("start_time", "Not a valid datetime value.");
            }
            parsed
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(NewShow {
                    artist_id,
                    venue_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_id(errors: &mut ValidationErrors, field: &'static str, raw: &str) -> Option<i32> {
    if raw.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, "Not a valid integer value.");
            None
        }
    }
}

/// Accepts RFC 3339 or a naive `YYYY-MM-DD HH:MM[:SS]` (space or `T`
/// separated). Naive values are taken as UTC.
pub fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
