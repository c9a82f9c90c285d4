use axum::{extract::State, http::StatusCode, response::{Html, Response}};
use maud::Markup;

use super::page;
use crate::{
    error::Result,
    state::AppState,
    templates::{home_page, Flash},
};

/// Number of venues and artists shown on the home page.
pub const RECENT_LIMIT: u64 = 10;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    Ok(Html(home_markup(&state, None).await?.into_string()))
}

/// Home page carrying the outcome of a mutation.
pub(crate) async fn render_home(
    state: &AppState,
    status: StatusCode,
    flash: Flash,
) -> Result<Response> {
    let markup = home_markup(state, Some(&flash)).await?;
    Ok(page(status, markup))
}

async fn home_markup(state: &AppState, flash: Option<&Flash>) -> Result<Markup> {
    let venues = state.venues().find_recent(RECENT_LIMIT).await?;
    let artists = state.artists().find_recent(RECENT_LIMIT).await?;
    Ok(home_page(flash, &venues, &artists))
}
