//! Integration tests for venue routes
//!
//! Covers listing grouped by location, search, detail pages, the create and
//! edit forms, and deletion.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use sea_orm::EntityTrait;
use tower::util::ServiceExt;

use fyyur::db::entities::venue;
use fyyur::handlers;
use fyyur::state::AppState;
use fyyur::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    handlers::app_router(state.clone())
}

async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

const MUSICAL_HOP_FORM: &str = "name=The+Musical+Hop&city=San+Francisco&state=CA\
    &address=1015+Folsom+Street&phone=123-123-1234\
    &genres=Jazz&genres=Reggae&genres=Swing\
    &facebook_link=https%3A%2F%2Fwww.facebook.com%2FTheMusicalHop\
    &image_link=https%3A%2F%2Fexample.com%2Fhop.jpg\
    &website_link=https%3A%2F%2Fwww.themusicalhop.com\
    &seeking_talent=y&seeking_description=We+are+on+the+lookout+for+a+local+artist";

#[tokio::test]
async fn test_list_venues_empty() {
    let state = setup_test_app_state().await;

    let response = get(create_test_router(&state), "/venues").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("No venues listed yet."));
}

#[tokio::test]
async fn test_list_venues_grouped_by_city_and_state() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_venue(&state.db, "The Dueling Pianos Bar", "New York", "NY").await;
    create_test_venue(&state.db, "Park Square Live Music", "San Francisco", "CA").await;

    let response = get(create_test_router(&state), "/venues").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert_eq!(body.matches("San Francisco, CA</h3>").count(), 1);
    assert_eq!(body.matches("New York, NY</h3>").count(), 1);
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Park Square Live Music"));
    assert!(body.contains("The Dueling Pianos Bar"));

    // Both San Francisco venues are listed under the same heading
    let heading = body.find("San Francisco, CA</h3>").unwrap();
    let next_heading = body[heading..].find("</section>").unwrap() + heading;
    let section = &body[heading..next_heading];
    assert!(section.contains("The Musical Hop"));
    assert!(section.contains("Park Square Live Music"));
}

#[tokio::test]
async fn test_search_venues_is_case_insensitive() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_venue(&state.db, "Park Square Live Music & Coffee", "San Francisco", "CA").await;

    let response = post_form(create_test_router(&state), "/venues/search", "search_term=Hop").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Number of search results for Hop: 1"));
    assert!(body.contains("The Musical Hop"));
    assert!(!body.contains("Park Square"));

    let response = post_form(create_test_router(&state), "/venues/search", "search_term=hop").await;
    let body = body_text(response).await;
    assert!(body.contains("Number of search results for hop: 1"));
}

#[tokio::test]
async fn test_search_venues_empty_term_matches_everything() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_venue(&state.db, "The Dueling Pianos Bar", "New York", "NY").await;

    let response = post_form(create_test_router(&state), "/venues/search", "search_term=").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Number of search results for : 2"));

    // A missing field behaves like an empty one
    let response = post_form(create_test_router(&state), "/venues/search", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Number of search results for : 2"));
}

#[tokio::test]
async fn test_search_venues_treats_wildcards_literally() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let response = post_form(create_test_router(&state), "/venues/search", "search_term=%25").await;
    let body = body_text(response).await;
    assert!(body.contains(": 0"));
}

#[tokio::test]
async fn test_show_venue_not_found() {
    let state = setup_test_app_state().await;

    let response = get(create_test_router(&state), "/venues/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_text(response).await;
    assert!(body.contains("404"));
}

#[tokio::test]
async fn test_unparseable_venue_id_is_not_found() {
    let state = setup_test_app_state().await;

    for uri in ["/venues/abc", "/venues/99999999999", "/venues/abc/edit"] {
        let response = get(create_test_router(&state), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {}", uri);
        let body = body_text(response).await;
        assert!(body.contains("Not Found"), "GET {} should render the error page", uri);
    }

    let response = delete(create_test_router(&state), "/venues/abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_form(
        create_test_router(&state),
        "/venues/abc/edit",
        "name=Ghost&city=Austin&state=TX",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_show_venue_splits_past_and_upcoming_shows() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    create_test_show(&state.db, artist.id, venue.id, Utc::now() - Duration::days(30)).await;

    let response = get(create_test_router(&state), &format!("/venues/{}", venue.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("1 Past Show"));
    assert!(body.contains("0 Upcoming Shows"));
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("Not currently seeking talent"));
}

#[tokio::test]
async fn test_create_venue_form_renders() {
    let state = setup_test_app_state().await;

    let response = get(create_test_router(&state), "/venues/create").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"action="/venues/create""#));
    assert!(body.contains(r#"name="seeking_talent""#));
}

#[tokio::test]
async fn test_create_venue_round_trip() {
    let state = setup_test_app_state().await;

    let response = post_form(create_test_router(&state), "/venues/create", MUSICAL_HOP_FORM).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Venue The Musical Hop was successfully listed!"));

    let venues = venue::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(venues.len(), 1);
    let venue = &venues[0];
    assert_eq!(venue.name, "The Musical Hop");
    assert_eq!(venue.city, "San Francisco");
    assert_eq!(venue.state, "CA");
    assert_eq!(venue.address.as_deref(), Some("1015 Folsom Street"));
    assert_eq!(venue.phone.as_deref(), Some("123-123-1234"));
    assert_eq!(venue.genre_list(), vec!["Jazz", "Reggae", "Swing"]);
    assert_eq!(venue.website.as_deref(), Some("https://www.themusicalhop.com"));
    assert_eq!(
        venue.facebook_link.as_deref(),
        Some("https://www.facebook.com/TheMusicalHop")
    );
    assert!(venue.seeking_talent);
    assert_eq!(
        venue.seeking_description.as_deref(),
        Some("We are on the lookout for a local artist")
    );

    let response = get(create_test_router(&state), &format!("/venues/{}", venue.id)).await;
    let body = body_text(response).await;
    assert!(body.contains("Currently seeking talent"));
    assert!(body.contains("We are on the lookout for a local artist"));
    assert!(body.contains("Reggae"));
}

#[tokio::test]
async fn test_create_venue_without_checkbox_is_not_seeking() {
    let state = setup_test_app_state().await;

    let response = post_form(
        create_test_router(&state),
        "/venues/create",
        "name=The+Dueling+Pianos+Bar&city=New+York&state=NY&genres=Classical",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let venues = venue::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(venues.len(), 1);
    assert!(!venues[0].seeking_talent);
    assert_eq!(venues[0].address, None);
}

#[tokio::test]
async fn test_create_venue_validation_failure() {
    let state = setup_test_app_state().await;

    let response = post_form(
        create_test_router(&state),
        "/venues/create",
        "name=&city=Austin&state=TX",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("name: This field is required."));
    // The submitted values are kept in the re-rendered form
    assert!(body.contains(r#"value="Austin""#));

    let venues = venue::Entity::find().all(&state.db).await.unwrap();
    assert!(venues.is_empty());
}

#[tokio::test]
async fn test_create_venue_rejects_unknown_state() {
    let state = setup_test_app_state().await;

    let response = post_form(
        create_test_router(&state),
        "/venues/create",
        "name=Nowhere&city=Atlantis&state=ZZ&genres=Jazz",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("state: Not a valid choice."));
}

#[tokio::test]
async fn test_create_venue_keeps_custom_genre_labels() {
    let state = setup_test_app_state().await;

    let response = post_form(
        create_test_router(&state),
        "/venues/create",
        "name=The+Musical+Hop&city=San+Francisco&state=CA&genres=Jazz&genres=Swing",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let venues = venue::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(venues[0].genre_list(), vec!["Jazz", "Swing"]);

    // The edit form still offers the custom label as a selected option
    let response = get(create_test_router(&state), &format!("/venues/{}/edit", venues[0].id)).await;
    let body = body_text(response).await;
    assert!(body.contains(r#"<option value="Swing" selected>Swing</option>"#));
}

#[tokio::test]
async fn test_edit_venue_form_is_prepopulated() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let response = get(create_test_router(&state), &format!("/venues/{}/edit", venue.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"value="The Musical Hop""#));
    assert!(body.contains(r#"value="San Francisco""#));
}

#[tokio::test]
async fn test_rejected_edit_keeps_the_stored_name_in_the_title() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let response = post_form(
        create_test_router(&state),
        &format!("/venues/{}/edit", venue.id),
        "name=&city=San+Francisco&state=CA",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Edit venue The Musical Hop"));
}

#[tokio::test]
async fn test_edit_venue_missing_is_not_found() {
    let state = setup_test_app_state().await;

    let response = get(create_test_router(&state), "/venues/42/edit").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_form(
        create_test_router(&state),
        "/venues/42/edit",
        "name=Ghost&city=Austin&state=TX",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_venue_replaces_all_fields() {
    let state = setup_test_app_state().await;
    let response = post_form(create_test_router(&state), "/venues/create", MUSICAL_HOP_FORM).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_form(
        create_test_router(&state),
        "/venues/1/edit",
        "name=The+Musical+Hop+II&city=Oakland&state=CA&genres=Folk",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/venues/1");

    let venue = venue::Entity::find_by_id(1)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(venue.name, "The Musical Hop II");
    assert_eq!(venue.city, "Oakland");
    assert_eq!(venue.genre_list(), vec!["Folk"]);
    // Fields left blank are cleared, an absent checkbox means false
    assert_eq!(venue.address, None);
    assert_eq!(venue.website, None);
    assert!(!venue.seeking_talent);
    assert_eq!(venue.seeking_description, None);
}

#[tokio::test]
async fn test_delete_venue() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let response = delete(create_test_router(&state), &format!("/venues/{}", venue.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Venue The Musical Hop deleted."));

    let response = get(create_test_router(&state), &format!("/venues/{}", venue.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_venue_with_shows_is_rejected() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    create_test_show(&state.db, artist.id, venue.id, Utc::now() + Duration::days(7)).await;

    let response = delete(create_test_router(&state), &format!("/venues/{}", venue.id)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_text(response).await;
    assert!(body.contains("cannot be deleted"));

    let still_there = venue::Entity::find_by_id(venue.id).one(&state.db).await.unwrap();
    assert!(still_there.is_some());
}

#[tokio::test]
async fn test_delete_missing_venue_is_not_found() {
    let state = setup_test_app_state().await;

    let response = delete(create_test_router(&state), "/venues/7").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_home_lists_recent_venues() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let response = get(create_test_router(&state), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Recently Listed Venues"));
    assert!(body.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_unknown_route_renders_not_found_page() {
    let state = setup_test_app_state().await;

    let response = get(create_test_router(&state), "/does/not/exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_text(response).await;
    assert!(body.contains("Not Found"));
}

#[tokio::test]
async fn test_health_check() {
    let state = setup_test_app_state().await;

    let response = get(create_test_router(&state), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}
