pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use std::any::Any;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use maud::Markup;
use serde::Deserialize;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, services::ServeDir,
    trace::TraceLayer,
};

use crate::{error::AppError, state::AppState, templates::error_page};

/// Body of the venue and artist search forms.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Numeric id taken from the path. Anything that does not parse as an id is
/// treated as a missing page rather than a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::debug!(path = %parts.uri.path(), %rejection, "Unparseable id in path");
                Err(not_found_error())
            }
        }
    }
}

pub(crate) fn page(status: StatusCode, markup: Markup) -> Response {
    (status, Html(markup.into_string())).into_response()
}

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))

        // Venues
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route(
            "/venues/:id",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(venues::edit_venue).post(venues::edit_venue_submission),
        )

        // Artists
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route("/artists/:id", get(artists::show_artist))
        .route(
            "/artists/:id/edit",
            get(artists::edit_artist).post(artists::edit_artist_submission),
        )

        // Shows
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show_submission),
        )
}

/// Full application: pages, health check, static assets, error pages and
/// middleware.
pub fn app_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/health", get(health::health_check))
        .merge(html_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn not_found_error() -> AppError {
    AppError::NotFound("The page you requested does not exist.".to_string())
}

async fn not_found() -> AppError {
    not_found_error()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "Request handler panicked");

    let status = StatusCode::INTERNAL_SERVER_ERROR;
    page(
        status,
        error_page(status, "Something went wrong on our end. Please try again later."),
    )
}
