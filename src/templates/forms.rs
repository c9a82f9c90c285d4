use maud::{html, Markup};

use super::{base_layout, Flash};
use crate::db::enums::{Genre, US_STATES};
use crate::forms::{ArtistForm, ShowForm, VenueForm};

fn text_input(label: &str, name: &str, value: Option<&str>, required: bool) -> Markup {
    html! {
        div class="form-group mb-4" {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            input
                type="text"
                id=(name)
                name=(name)
                value=[value]
                required[required]
                class="w-full px-3 py-2 border border-gray-300 rounded-md";
        }
    }
}

fn state_select(selected: &str) -> Markup {
    html! {
        div class="form-group mb-4" {
            label for="state" class="block text-sm font-medium text-gray-700 mb-2" { "State" }
            select id="state" name="state" required class="w-full px-3 py-2 border border-gray-300 rounded-md" {
                option value="" { "Select a state" }
                @for code in US_STATES {
                    option value=(code) selected[code == selected] { (code) }
                }
            }
        }
    }
}

/// Preset genres plus any stored label outside the presets, so editing a
/// record keeps its genres.
fn genre_select(selected: &[String]) -> Markup {
    let custom: Vec<&String> = selected
        .iter()
        .filter(|label| Genre::from_str(label).is_none())
        .collect();

    html! {
        div class="form-group mb-4" {
            label for="genres" class="block text-sm font-medium text-gray-700 mb-2" { "Genres" }
            select id="genres" name="genres" multiple class="w-full px-3 py-2 border border-gray-300 rounded-md" {
                @for genre in Genre::ALL {
                    option
                        value=(genre.as_str())
                        selected[selected.iter().any(|g| g == genre.as_str())] {
                        (genre.as_str())
                    }
                }
                @for label in &custom {
                    option value=(label) selected { (label) }
                }
            }
        }
    }
}

fn checkbox(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        div class="form-group mb-4" {
            label class="inline-flex items-center" {
                input type="checkbox" name=(name) value="y" checked[checked];
                span class="ml-2" { (label) }
            }
        }
    }
}

fn textarea(label: &str, name: &str, value: Option<&str>) -> Markup {
    html! {
        div class="form-group mb-4" {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            textarea id=(name) name=(name) class="w-full px-3 py-2 border border-gray-300 rounded-md" {
                (value.unwrap_or_default())
            }
        }
    }
}

fn submit(label: &str) -> Markup {
    html! {
        button type="submit" class="px-4 py-2 bg-primary text-white font-semibold rounded-md" {
            (label)
        }
    }
}

/// Venue create/edit form; `action` is the POST target.
pub fn venue_form_page(
    title: &str,
    action: &str,
    form: &VenueForm,
    flash: Option<&Flash>,
) -> Markup {
    base_layout(
        title,
        flash,
        html! {
            div class="max-w-3xl mx-auto" {
                h1 class="text-3xl font-bold text-gray-900 mb-8" { (title) }
                form method="post" action=(action) class="bg-white rounded-lg shadow-sm p-6" {
                    (text_input("Name", "name", Some(&form.name), true))
                    (text_input("City", "city", Some(&form.city), true))
                    (state_select(&form.state))
                    (text_input("Address", "address", form.address.as_deref(), false))
                    (text_input("Phone", "phone", form.phone.as_deref(), false))
                    (genre_select(&form.genres))
                    (text_input("Facebook Link", "facebook_link", form.facebook_link.as_deref(), false))
                    (text_input("Image Link", "image_link", form.image_link.as_deref(), false))
                    (text_input("Website Link", "website_link", form.website_link.as_deref(), false))
                    (checkbox("Looking for Talent", "seeking_talent", form.seeking_talent))
                    (textarea("Seeking Description", "seeking_description", form.seeking_description.as_deref()))
                    (submit("Save Venue"))
                }
            }
        },
    )
}

pub fn artist_form_page(
    title: &str,
    action: &str,
    form: &ArtistForm,
    flash: Option<&Flash>,
) -> Markup {
    base_layout(
        title,
        flash,
        html! {
            div class="max-w-3xl mx-auto" {
                h1 class="text-3xl font-bold text-gray-900 mb-8" { (title) }
                form method="post" action=(action) class="bg-white rounded-lg shadow-sm p-6" {
                    (text_input("Name", "name", Some(&form.name), true))
                    (text_input("City", "city", Some(&form.city), true))
                    (state_select(&form.state))
                    (text_input("Phone", "phone", form.phone.as_deref(), false))
                    (genre_select(&form.genres))
                    (text_input("Facebook Link", "facebook_link", form.facebook_link.as_deref(), false))
                    (text_input("Image Link", "image_link", form.image_link.as_deref(), false))
                    (text_input("Website Link", "website_link", form.website_link.as_deref(), false))
                    (checkbox("Looking for Venues", "seeking_venue", form.seeking_venue))
                    (textarea("Seeking Description", "seeking_description", form.seeking_description.as_deref()))
                    (submit("Save Artist"))
                }
            }
        },
    )
}

pub fn show_form_page(form: &ShowForm, flash: Option<&Flash>) -> Markup {
    base_layout(
        "New Show",
        flash,
        html! {
            div class="max-w-3xl mx-auto" {
                h1 class="text-3xl font-bold text-gray-900 mb-8" { "List a new show" }
                form method="post" action="/shows/create" class="bg-white rounded-lg shadow-sm p-6" {
                    (text_input("Artist ID", "artist_id", Some(&form.artist_id), true))
                    (text_input("Venue ID", "venue_id", Some(&form.venue_id), true))
                    (text_input("Start Time (YYYY-MM-DD HH:MM:SS)", "start_time", Some(&form.start_time), true))
                    (submit("Create Show"))
                }
            }
        },
    )
}
