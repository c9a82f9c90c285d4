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
    forms::{ArtistForm, FormFields},
    state::AppState,
    templates::{artist_detail_page, artist_form_page, artist_search_page, artists_page, Flash},
    views::{ArtistDetailView, SearchResults},
};

const NEW_ARTIST_TITLE: &str = "List a new artist";

fn edit_title(name: &str) -> String {
    format!("Edit artist {}", name)
}

pub async fn list_artists(State(state): State<AppState>) -> Result<Html<String>> {
    let artists = state.artists().find_all().await?;
    Ok(Html(artists_page(&artists).into_string()))
}

/// Zero matches render an empty result list, same as venue search.
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let artists = state.artists().search(&form.search_term).await?;
    let results = SearchResults::new(form.search_term, artists);
    Ok(Html(artist_search_page(&results).into_string()))
}

pub async fn show_artist(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Html<String>> {
    let artist = state.artists().get(id).await?;
    let shows = state.shows().find_for_artist(id).await?;
    let view = ArtistDetailView::new(artist, shows, Utc::now());
    Ok(Html(artist_detail_page(&view).into_string()))
}

pub async fn create_artist_form() -> Html<String> {
    Html(artist_form_page(NEW_ARTIST_TITLE, "/artists/create", &ArtistForm::default(), None).into_string())
}

pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let form = ArtistForm::from_fields(&FormFields::new(fields));
    if let Err(errors) = form.validate() {
        tracing::debug!(%errors, "Rejected artist submission");
        let flash = Flash::error(errors.notice());
        return Ok(page(
            StatusCode::UNPROCESSABLE_ENTITY,
            artist_form_page(NEW_ARTIST_TITLE, "/artists/create", &form, Some(&flash)),
        ));
    }

    match state.artists().create(&form).await {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, name = %artist.name, "Artist listed");
            let flash = Flash::success(format!("Artist {} was successfully listed!", artist.name));
            render_home(&state, StatusCode::OK, flash).await
        }
        Err(e) => {
            tracing::error!(error = %e, name = %form.name, "Failed to list artist");
            let flash = Flash::error(format!(
                "An error occurred. Artist {} could not be listed.",
                form.name
            ));
            render_home(&state, StatusCode::INTERNAL_SERVER_ERROR, flash).await
        }
    }
}

pub async fn edit_artist(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Html<String>> {
    let artist = state.artists().get(id).await?;
    let form = ArtistForm::from(&artist);
    let markup = artist_form_page(
        &edit_title(&artist.name),
        &format!("/artists/{}/edit", id),
        &form,
        None,
    );
    Ok(Html(markup.into_string()))
}

pub async fn edit_artist_submission(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let form = ArtistForm::from_fields(&FormFields::new(fields));
    let action = format!("/artists/{}/edit", id);
    // The title names the stored artist, not the submitted name
    let existing = state.artists().get(id).await?;
    let title = edit_title(&existing.name);

    if let Err(errors) = form.validate() {
        tracing::debug!(artist_id = id, %errors, "Rejected artist edit");
        let flash = Flash::error(errors.notice());
        return Ok(page(
            StatusCode::UNPROCESSABLE_ENTITY,
            artist_form_page(&title, &action, &form, Some(&flash)),
        ));
    }

    match state.artists().update(id, &form).await {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, "Artist updated");
            Ok(Redirect::to(&format!("/artists/{}", artist.id)).into_response())
        }
        Err(e @ AppError::NotFound(_)) => Err(e),
        Err(e) => {
            tracing::error!(artist_id = id, error = %e, "Failed to update artist");
            let flash = Flash::error("An error occurred. Artist could not be updated.");
            Ok(page(
                StatusCode::INTERNAL_SERVER_ERROR,
                artist_form_page(&title, &action, &form, Some(&flash)),
            ))
        }
    }
}
