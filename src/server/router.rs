//! Router builder for the lawyer directory routes

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    AppState, available_lawyers, create_lawyer, delete_lawyer, featured_lawyers, filter_lawyers,
    get_lawyer, lawyers_by_experience, lawyers_by_practice_area, lawyers_by_price,
    lawyers_by_rating, list_lawyers, search_lawyers, update_lawyer,
};

/// Build the directory routes:
///
/// - GET /lawyers - All records
/// - GET /lawyers/{id} - One record
/// - GET /lawyers/practice/{area} - Filter by practice area
/// - GET /lawyers/rating/{min_rating} - Filter by minimum rating
/// - GET /lawyers/price?min=&max= - Filter by hourly-rate band
/// - GET /lawyers/experience/{level} - Filter by experience level
/// - GET /lawyers/available - Available for consultation
/// - GET /lawyers/featured - Featured profiles
/// - GET /lawyers/search?q= - Free-text search
/// - POST /lawyers/filter - Composite filter
/// - POST /lawyers, PATCH/DELETE /lawyers/{id} - Catalog administration
pub fn lawyer_routes(state: AppState) -> Router {
    Router::new()
        .route("/lawyers", get(list_lawyers).post(create_lawyer))
        .route("/lawyers/available", get(available_lawyers))
        .route("/lawyers/featured", get(featured_lawyers))
        .route("/lawyers/search", get(search_lawyers))
        .route("/lawyers/price", get(lawyers_by_price))
        .route("/lawyers/filter", post(filter_lawyers))
        .route("/lawyers/practice/{area}", get(lawyers_by_practice_area))
        .route("/lawyers/rating/{min_rating}", get(lawyers_by_rating))
        .route("/lawyers/experience/{level}", get(lawyers_by_experience))
        .route(
            "/lawyers/{id}",
            get(get_lawyer).patch(update_lawyer).delete(delete_lawyer),
        )
        .with_state(state)
}
