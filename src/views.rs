//! Typed view models handed from handlers to templates.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::Serialize;

use crate::db::entities::{artist, venue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
}

/// All venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Groups venues by (city, state). Groups come out ordered by state then
/// city; each group keeps the relative order of its input venues.
pub fn group_by_location(venues: Vec<venue::Model>) -> Vec<LocationGroup> {
    let mut groups: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for venue in venues {
        groups
            .entry((venue.state, venue.city))
            .or_default()
            .push(VenueSummary {
                id: venue.id,
                name: venue.name,
            });
    }

    groups
        .into_iter()
        .map(|((state, city), venues)| LocationGroup {
            city,
            state,
            venues,
        })
        .collect()
}

/// A show joined with the display fields of its venue and artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct ShowListItem {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl ShowListItem {
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_time > now
    }

    pub fn display_start_time(&self, format: DateFormat) -> String {
        format_datetime(&self.start_time, format)
    }
}

/// Splits shows into `(upcoming, past)` relative to `now`, preserving order.
pub fn partition_shows(
    shows: Vec<ShowListItem>,
    now: DateTime<Utc>,
) -> (Vec<ShowListItem>, Vec<ShowListItem>) {
    shows.into_iter().partition(|show| show.is_upcoming(now))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetailView {
    pub venue: venue::Model,
    pub genres: Vec<String>,
    pub past_shows: Vec<ShowListItem>,
    pub upcoming_shows: Vec<ShowListItem>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetailView {
    pub fn new(venue: venue::Model, shows: Vec<ShowListItem>, now: DateTime<Utc>) -> Self {
        let (upcoming_shows, past_shows) = partition_shows(shows, now);
        Self {
            genres: venue.genre_list(),
            venue,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetailView {
    pub artist: artist::Model,
    pub genres: Vec<String>,
    pub past_shows: Vec<ShowListItem>,
    pub upcoming_shows: Vec<ShowListItem>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetailView {
    pub fn new(artist: artist::Model, shows: Vec<ShowListItem>, now: DateTime<Utc>) -> Self {
        let (upcoming_shows, past_shows) = partition_shows(shows, now);
        Self {
            genres: artist.genre_list(),
            artist,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults<T> {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(search_term: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            search_term: search_term.into(),
            count: data.len(),
            data,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    Medium,
}

pub fn format_datetime(value: &DateTime<Utc>, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}
