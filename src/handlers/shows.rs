use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Response},
    Form,
};
use chrono::Utc;

use super::{home::render_home, page};
use crate::{
    error::Result,
    forms::{FormFields, ShowForm},
    state::AppState,
    templates::{show_form_page, shows_page, Flash},
};

/// Every show with its venue and artist, earliest first
pub async fn list_shows(State(state): State<AppState>) -> Result<Html<String>> {
    let shows = state.shows().find_all().await?;
    Ok(Html(shows_page(&shows).into_string()))
}

pub async fn create_show_form() -> Html<String> {
    Html(show_form_page(&ShowForm::starting_at(Utc::now()), None).into_string())
}

pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let form = ShowForm::from_fields(&FormFields::new(fields));
    let new_show = match form.validate() {
        Ok(new_show) => new_show,
        Err(errors) => {
            tracing::debug!(%errors, "Rejected show submission");
            let flash = Flash::error(errors.notice());
            return Ok(page(
                StatusCode::UNPROCESSABLE_ENTITY,
                show_form_page(&form, Some(&flash)),
            ));
        }
    };

    match state.shows().create(&new_show).await {
        Ok(show) => {
            tracing::info!(
                show_id = show.id,
                artist_id = show.artist_id,
                venue_id = show.venue_id,
                "Show listed"
            );
            render_home(&state, StatusCode::OK, Flash::success("Show was successfully listed!")).await
        }
        Err(e) => {
            tracing::error!(
                artist_id = new_show.artist_id,
                venue_id = new_show.venue_id,
                error = %e,
                "Failed to list show"
            );
            let flash = Flash::error("An error occurred. Show could not be listed.");
            render_home(&state, StatusCode::INTERNAL_SERVER_ERROR, flash).await
        }
    }
}
