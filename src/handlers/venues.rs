use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;

use super::{home::render_home, page, EntityId, SearchForm};
use crate::{
    error::{AppError, Result},
    forms::{FormFields, VenueForm},
    state::AppState,
    templates::{venue_detail_page, venue_form_page, venue_search_page, venues_page, Flash},
    views::{group_by_location, SearchResults, VenueDetailView},
};

const NEW_VENUE_TITLE: &str = "List a new venue";

fn edit_title(name: &str) -> String {
    format!("Edit venue {}", name)
}

/// Venues grouped by city and state
pub async fn list_venues(State(state): State<AppState>) -> Result<Html<String>> {
    let venues = state.venues().find_all().await?;
    let areas = group_by_location(venues);
    Ok(Html(venues_page(&areas).into_string()))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let venues = state.venues().search(&form.search_term).await?;
    let results = SearchResults::new(form.search_term, venues);
    Ok(Html(venue_search_page(&results).into_string()))
}

/// Venue page with its shows split into upcoming and past
pub async fn show_venue(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Html<String>> {
    let venue = state.venues().get(id).await?;
    let shows = state.shows().find_for_venue(id).await?;
    let view = VenueDetailView::new(venue, shows, Utc::now());
    Ok(Html(venue_detail_page(&view).into_string()))
}

pub async fn create_venue_form() -> Html<String> {
    Html(venue_form_page(NEW_VENUE_TITLE, "/venues/create", &VenueForm::default(), None).into_string())
}

pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let form = VenueForm::from_fields(&FormFields::new(fields));
    if let Err(errors) = form.validate() {
        tracing::debug!(%errors, "Rejected venue submission");
        let flash = Flash::error(errors.notice());
        return Ok(page(
            StatusCode::UNPROCESSABLE_ENTITY,
            venue_form_page(NEW_VENUE_TITLE, "/venues/create", &form, Some(&flash)),
        ));
    }

    match state.venues().create(&form).await {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, name = %venue.name, "Venue listed");
            let flash = Flash::success(format!("Venue {} was successfully listed!", venue.name));
            render_home(&state, StatusCode::OK, flash).await
        }
        Err(e) => {
            tracing::error!(error = %e, name = %form.name, "Failed to list venue");
            let flash = Flash::error(format!(
                "An error occurred. Venue {} could not be listed.",
                form.name
            ));
            render_home(&state, StatusCode::INTERNAL_SERVER_ERROR, flash).await
        }
    }
}

pub async fn edit_venue(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Html<String>> {
    let venue = state.venues().get(id).await?;
    let form = VenueForm::from(&venue);
    let markup = venue_form_page(
        &edit_title(&venue.name),
        &format!("/venues/{}/edit", id),
        &form,
        None,
    );
    Ok(Html(markup.into_string()))
}

pub async fn edit_venue_submission(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let form = VenueForm::from_fields(&FormFields::new(fields));
    let action = format!("/venues/{}/edit", id);
    // The title names the stored venue, not the submitted name
    let existing = state.venues().get(id).await?;
    let title = edit_title(&existing.name);

    if let Err(errors) = form.validate() {
        tracing::debug!(venue_id = id, %errors, "Rejected venue edit");
        let flash = Flash::error(errors.notice());
        return Ok(page(
            StatusCode::UNPROCESSABLE_ENTITY,
            venue_form_page(&title, &action, &form, Some(&flash)),
        ));
    }

    match state.venues().update(id, &form).await {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, "Venue updated");
            Ok(Redirect::to(&format!("/venues/{}", venue.id)).into_response())
        }
        Err(e @ AppError::NotFound(_)) => Err(e),
        Err(e) => {
            tracing::error!(venue_id = id, error = %e, "Failed to update venue");
            let flash = Flash::error("An error occurred. Venue could not be updated.");
            Ok(page(
                StatusCode::INTERNAL_SERVER_ERROR,
                venue_form_page(&title, &action, &form, Some(&flash)),
            ))
        }
    }
}

/// Deletes a venue and returns the home page with the outcome.
pub async fn delete_venue(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response> {
    match state.venues().delete(id).await {
        Ok(venue) => {
            tracing::info!(venue_id = id, name = %venue.name, "Venue deleted");
            render_home(&state, StatusCode::OK, Flash::success(format!("Venue {} deleted.", venue.name))).await
        }
        Err(e @ AppError::NotFound(_)) => Err(e),
        Err(AppError::Conflict(msg)) => {
            tracing::info!(venue_id = id, "Refused to delete venue with shows");
            render_home(&state, StatusCode::CONFLICT, Flash::error(msg)).await
        }
        Err(e) => {
            tracing::error!(venue_id = id, error = %e, "Failed to delete venue");
            let flash = Flash::error("An error occurred. Please try again");
            render_home(&state, StatusCode::INTERNAL_SERVER_ERROR, flash).await
        }
    }
}
