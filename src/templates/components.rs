use maud::{html, Markup};

use crate::views::{DateFormat, ShowListItem};

/// One-shot notice rendered at the top of the returned page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    Success(String),
    Error(String),
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Error(msg) => msg,
        }
    }
}

pub fn flash_banner(flash: &Flash) -> Markup {
    let class = match flash {
        Flash::Success(_) => "flash flash-success bg-green-100 text-green-800",
        Flash::Error(_) => "flash flash-error bg-red-100 text-red-800",
    };

    html! {
        div class=(class) role="alert" {
            (flash.message())
        }
    }
}

pub fn genre_tags(genres: &[String]) -> Markup {
    html! {
        div class="genres flex flex-wrap gap-2" {
            @for genre in genres {
                span class="genre px-2 py-1 text-xs rounded-full bg-gray-200" { (genre) }
            }
        }
    }
}

pub fn search_box(action: &str, placeholder: &str, term: &str) -> Markup {
    html! {
        form class="search mb-6" method="post" action=(action) {
            input
                type="search"
                name="search_term"
                value=(term)
                placeholder=(placeholder)
                aria-label=(placeholder)
                class="px-3 py-2 border border-gray-300 rounded-md";
        }
    }
}

/// Which side of a show to feature on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowSide {
    Artist,
    Venue,
}

pub fn show_card(show: &ShowListItem, side: ShowSide) -> Markup {
    let (href, name, image) = match side {
        ShowSide::Artist => (
            format!("/artists/{}", show.artist_id),
            &show.artist_name,
            show.artist_image_link.as_deref(),
        ),
        ShowSide::Venue => (
            format!("/venues/{}", show.venue_id),
            &show.venue_name,
            show.venue_image_link.as_deref(),
        ),
    };

    html! {
        div class="show-card bg-white rounded-lg shadow-md p-4" {
            @if let Some(image) = image {
                img src=(image) alt=(name) class="w-24 h-24 object-cover rounded" loading="lazy";
            }
            h5 { a href=(href) { (name) } }
            p class="text-sm text-gray-600" {
                (show.display_start_time(DateFormat::Full))
            }
        }
    }
}

/// Upcoming/past show sections shared by the venue and artist pages.
/// Upcoming and past show sections. Counts come from the detail view.
pub fn show_sections(
    upcoming: &[ShowListItem],
    upcoming_count: usize,
    past: &[ShowListItem],
    past_count: usize,
    side: ShowSide,
) -> Markup {
    html! {
        section class="upcoming-shows mt-8" {
            h2 class="text-xl font-semibold mb-4" {
                (upcoming_count) " Upcoming " (plural(upcoming_count, "Show"))
            }
            div class="grid grid-cols-2 md:grid-cols-4 gap-4" {
                @for show in upcoming {
                    (show_card(show, side))
                }
            }
        }
        section class="past-shows mt-8" {
            h2 class="text-xl font-semibold mb-4" {
                (past_count) " Past " (plural(past_count, "Show"))
            }
            div class="grid grid-cols-2 md:grid-cols-4 gap-4" {
                @for show in past {
                    (show_card(show, side))
                }
            }
        }
    }
}

pub fn link_or_dash(url: Option<&str>) -> Markup {
    html! {
        @match url {
            Some(url) => {
                a href=(url) target="_blank" rel="noopener" { (url) }
            }
            None => {
                "-"
            }
        }
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
