use axum::http::StatusCode;
use maud::{html, Markup};

use super::components::{genre_tags, link_or_dash, search_box, show_sections, ShowSide};
use super::{base_layout, Flash};
use crate::db::entities::{artist, venue};
use crate::views::{
    ArtistDetailView, DateFormat, LocationGroup, SearchResults, ShowListItem, VenueDetailView,
};

pub fn home_page(
    flash: Option<&Flash>,
    venues: &[venue::Model],
    artists: &[artist::Model],
) -> Markup {
    base_layout(
        "Home",
        flash,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-8" { "Fyyur" }

            div class="grid grid-cols-1 md:grid-cols-2 gap-8" {
                section class="recent-venues" {
                    h2 class="text-xl font-semibold mb-4" { "Recently Listed Venues" }
                    ul {
                        @for venue in venues {
                            li {
                                a href={"/venues/" (venue.id)} { (venue.name) }
                                span class="text-sm text-gray-500" {
                                    " " (venue.city) ", " (venue.state)
                                }
                            }
                        }
                    }
                }

                section class="recent-artists" {
                    h2 class="text-xl font-semibold mb-4" { "Recently Listed Artists" }
                    ul {
                        @for artist in artists {
                            li {
                                a href={"/artists/" (artist.id)} { (artist.name) }
                                span class="text-sm text-gray-500" {
                                    " " (artist.city) ", " (artist.state)
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn venues_page(areas: &[LocationGroup]) -> Markup {
    base_layout(
        "Venues",
        None,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-8" { "Venues" }
            (search_box("/venues/search", "Find a venue", ""))

            @if areas.is_empty() {
                p class="text-gray-600" { "No venues listed yet." }
            }
            @for area in areas {
                section class="area mb-6" {
                    h3 class="text-lg font-semibold" { (area.city) ", " (area.state) }
                    ul class="items" {
                        @for venue in &area.venues {
                            li { a href={"/venues/" (venue.id)} { (venue.name) } }
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_search_page(results: &SearchResults<venue::Model>) -> Markup {
    base_layout(
        "Venue Search",
        None,
        html! {
            (search_box("/venues/search", "Find a venue", &results.search_term))
            h3 class="search-count text-lg mb-4" {
                "Number of search results for " (results.search_term) ": " (results.count)
            }
            ul class="items" {
                @for venue in &results.data {
                    li { a href={"/venues/" (venue.id)} { (venue.name) } }
                }
            }
        },
    )
}

pub fn venue_detail_page(view: &VenueDetailView) -> Markup {
    let venue = &view.venue;
    base_layout(
        &venue.name,
        None,
        html! {
            div class="venue-detail" {
                h1 class="text-3xl font-bold text-gray-900" { (venue.name) }
                p class="subtitle text-gray-500" { "ID: " (venue.id) }
                (genre_tags(&view.genres))

                dl class="mt-4 space-y-1" {
                    dt { "Address" } dd { (venue.address.as_deref().unwrap_or("-")) }
                    dt { "Location" } dd { (venue.city) ", " (venue.state) }
                    dt { "Phone" } dd { (venue.phone.as_deref().unwrap_or("-")) }
                    dt { "Website" } dd { (link_or_dash(venue.website.as_deref())) }
                    dt { "Facebook" } dd { (link_or_dash(venue.facebook_link.as_deref())) }
                }

                @if venue.seeking_talent {
                    div class="seeking mt-4 p-4 bg-yellow-50 rounded" {
                        p class="font-semibold" { "Currently seeking talent" }
                        @if let Some(description) = &venue.seeking_description {
                            p { (description) }
                        }
                    }
                } @else {
                    p class="not-seeking mt-4 text-gray-500" { "Not currently seeking talent" }
                }

                @if let Some(image) = &venue.image_link {
                    img src=(image) alt="Venue Image" class="mt-4 max-w-md rounded";
                }

                div class="actions mt-6 flex space-x-3" {
                    a href={"/venues/" (venue.id) "/edit"} class="btn" { "Edit" }
                    button
                        class="btn btn-danger"
                        hx-delete={"/venues/" (venue.id)}
                        hx-target="body"
                        hx-push-url="/"
                        hx-confirm="Delete this venue?" {
                        "Delete"
                    }
                }
            }

            (show_sections(
                &view.upcoming_shows,
                view.upcoming_shows_count,
                &view.past_shows,
                view.past_shows_count,
                ShowSide::Artist,
            ))
        },
    )
}

pub fn artists_page(artists: &[artist::Model]) -> Markup {
    base_layout(
        "Artists",
        None,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-8" { "Artists" }
            (search_box("/artists/search", "Find an artist", ""))

            @if artists.is_empty() {
                p class="text-gray-600" { "No artists listed yet." }
            }
            ul class="items" {
                @for artist in artists {
                    li { a href={"/artists/" (artist.id)} { (artist.name) } }
                }
            }
        },
    )
}

pub fn artist_search_page(results: &SearchResults<artist::Model>) -> Markup {
    base_layout(
        "Artist Search",
        None,
        html! {
            (search_box("/artists/search", "Find an artist", &results.search_term))
            h3 class="search-count text-lg mb-4" {
                "Number of search results for " (results.search_term) ": " (results.count)
            }
            ul class="items" {
                @for artist in &results.data {
                    li { a href={"/artists/" (artist.id)} { (artist.name) } }
                }
            }
        },
    )
}

pub fn artist_detail_page(view: &ArtistDetailView) -> Markup {
    let artist = &view.artist;
    base_layout(
        &artist.name,
        None,
        html! {
            div class="artist-detail" {
                h1 class="text-3xl font-bold text-gray-900" { (artist.name) }
                p class="subtitle text-gray-500" { "ID: " (artist.id) }
                (genre_tags(&view.genres))

                dl class="mt-4 space-y-1" {
                    dt { "Location" } dd { (artist.city) ", " (artist.state) }
                    dt { "Phone" } dd { (artist.phone.as_deref().unwrap_or("-")) }
                    dt { "Website" } dd { (link_or_dash(artist.website.as_deref())) }
                    dt { "Facebook" } dd { (link_or_dash(artist.facebook_link.as_deref())) }
                }

                @if artist.seeking_venue {
                    div class="seeking mt-4 p-4 bg-yellow-50 rounded" {
                        p class="font-semibold" { "Currently seeking performance venues" }
                        @if let Some(description) = &artist.seeking_description {
                            p { (description) }
                        }
                    }
                } @else {
                    p class="not-seeking mt-4 text-gray-500" {
                        "Not currently seeking performance venues"
                    }
                }

                @if let Some(image) = &artist.image_link {
                    img src=(image) alt="Artist Image" class="mt-4 max-w-md rounded";
                }

                div class="actions mt-6" {
                    a href={"/artists/" (artist.id) "/edit"} class="btn" { "Edit" }
                }
            }

            (show_sections(
                &view.upcoming_shows,
                view.upcoming_shows_count,
                &view.past_shows,
                view.past_shows_count,
                ShowSide::Venue,
            ))
        },
    )
}

pub fn shows_page(shows: &[ShowListItem]) -> Markup {
    base_layout(
        "Shows",
        None,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-8" { "Shows" }

            @if shows.is_empty() {
                p class="text-gray-600" { "No shows scheduled yet." }
            }
            div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                @for show in shows {
                    div class="show bg-white rounded-lg shadow-md p-4" {
                        @if let Some(image) = &show.artist_image_link {
                            img src=(image) alt=(show.artist_name) class="w-full object-cover rounded" loading="lazy";
                        }
                        h4 class="font-semibold" {
                            a href={"/artists/" (show.artist_id)} { (show.artist_name) }
                        }
                        p class="text-sm" {
                            "playing at "
                            a href={"/venues/" (show.venue_id)} { (show.venue_name) }
                        }
                        p class="text-xs text-gray-500" {
                            (show.display_start_time(DateFormat::Medium))
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let title = match status {
        StatusCode::NOT_FOUND => "Not Found",
        StatusCode::INTERNAL_SERVER_ERROR => "Server Error",
        _ => status.canonical_reason().unwrap_or("Error"),
    };

    base_layout(
        title,
        None,
        html! {
            div class="error text-center py-12" {
                h1 class="text-5xl font-bold text-gray-900" { (status.as_u16()) }
                h2 class="text-2xl text-gray-700 mt-2" { (title) }
                p class="text-gray-600 mt-4" { (message) }
                a href="/" class="inline-block mt-6 text-primary hover:underline" {
                    "Back to home"
                }
            }
        },
    )
}
