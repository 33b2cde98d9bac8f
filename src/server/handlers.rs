//! HTTP handlers for the lawyer directory
//!
//! Every filter endpoint builds a [`FilterOptions`] and delegates to the
//! store's composite evaluator, so the single-dimension routes and the
//! POST /lawyers/filter route share one predicate implementation.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use std::sync::Arc;

use crate::core::error::{ApiError, ApiResult, ValidationError};
use crate::core::filter::FilterOptions;
use crate::core::model::{ExperienceLevel, Lawyer, LawyerId, LawyerPatch, NewLawyer, PracticeArea};
use crate::core::validate::{validate_new, validate_patch};
use crate::storage::LawyerStore;

/// Shared application state, injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LawyerStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn LawyerStore>) -> Self {
        Self { store }
    }
}

fn parse_id(raw: &str) -> ApiResult<LawyerId> {
    raw.parse::<LawyerId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            ValidationError::InvalidId {
                value: raw.to_string(),
            }
            .into()
        })
}

pub async fn list_lawyers(State(state): State<AppState>) -> ApiResult<Json<Vec<Lawyer>>> {
    Ok(Json(state.store.list().await?))
}

pub async fn get_lawyer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Lawyer>> {
    let id = parse_id(&raw_id)?;
    let lawyer = state
        .store
        .get(id)
        .await?
        .ok_or(ApiError::NotFound { id })?;
    Ok(Json(lawyer))
}

pub async fn lawyers_by_practice_area(
    State(state): State<AppState>,
    Path(raw_area): Path<String>,
) -> ApiResult<Json<Vec<Lawyer>>> {
    let area = PracticeArea::parse(&raw_area).ok_or(ValidationError::UnknownPracticeArea {
        value: raw_area,
    })?;
    let lawyers = state
        .store
        .find(&FilterOptions::by_practice_area(area))
        .await?;
    Ok(Json(lawyers))
}

pub async fn lawyers_by_rating(
    State(state): State<AppState>,
    Path(raw_rating): Path<String>,
) -> ApiResult<Json<Vec<Lawyer>>> {
    let min_rating: f64 = raw_rating
        .parse()
        .map_err(|_| ValidationError::RatingOutOfRange { value: f64::NAN })?;
    if min_rating.is_nan() || !(1.0..=5.0).contains(&min_rating) {
        return Err(ValidationError::RatingOutOfRange { value: min_rating }.into());
    }

    let lawyers = state
        .store
        .find(&FilterOptions::by_min_rating(min_rating))
        .await?;
    Ok(Json(lawyers))
}

#[derive(Debug, Deserialize)]
pub struct PriceRangeQuery {
    min: Option<String>,
    max: Option<String>,
}

pub async fn lawyers_by_price(
    State(state): State<AppState>,
    Query(range): Query<PriceRangeQuery>,
) -> ApiResult<Json<Vec<Lawyer>>> {
    // Defaults mirror the filter panel's full band: 0..=500 currency units.
    let min: i64 = match range.min {
        Some(raw) => raw.parse().map_err(|_| ValidationError::InvalidPriceRange)?,
        None => 0,
    };
    let max: i64 = match range.max {
        Some(raw) => raw.parse().map_err(|_| ValidationError::InvalidPriceRange)?,
        None => 500,
    };
    if min < 0 || max <= 0 || min > max {
        return Err(ValidationError::InvalidPriceRange.into());
    }
    let (min, max) = (
        u32::try_from(min).map_err(|_| ValidationError::InvalidPriceRange)?,
        u32::try_from(max).map_err(|_| ValidationError::InvalidPriceRange)?,
    );

    let lawyers = state
        .store
        .find(&FilterOptions::by_price_range(min, max))
        .await?;
    Ok(Json(lawyers))
}

pub async fn lawyers_by_experience(
    State(state): State<AppState>,
    Path(raw_level): Path<String>,
) -> ApiResult<Json<Vec<Lawyer>>> {
    let level =
        ExperienceLevel::parse(&raw_level).ok_or(ValidationError::UnknownExperienceLevel {
            value: raw_level,
        })?;
    let lawyers = state
        .store
        .find(&FilterOptions::by_experience_level(level))
        .await?;
    Ok(Json(lawyers))
}

pub async fn available_lawyers(State(state): State<AppState>) -> ApiResult<Json<Vec<Lawyer>>> {
    let lawyers = state.store.find(&FilterOptions::available_only()).await?;
    Ok(Json(lawyers))
}

pub async fn featured_lawyers(State(state): State<AppState>) -> ApiResult<Json<Vec<Lawyer>>> {
    Ok(Json(state.store.featured().await?))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

pub async fn search_lawyers(
    State(state): State<AppState>,
    Query(search): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Lawyer>>> {
    let query = search
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(ValidationError::EmptySearchQuery)?;

    let lawyers = state.store.find(&FilterOptions::by_query(query)).await?;
    Ok(Json(lawyers))
}

pub async fn filter_lawyers(
    State(state): State<AppState>,
    payload: Result<Json<FilterOptions>, JsonRejection>,
) -> ApiResult<Json<Vec<Lawyer>>> {
    let Json(filter) = payload.map_err(|rejection| ValidationError::InvalidBody {
        message: rejection.body_text(),
    })?;
    filter.validate()?;

    Ok(Json(state.store.find(&filter).await?))
}

pub async fn create_lawyer(
    State(state): State<AppState>,
    payload: Result<Json<NewLawyer>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(new) = payload.map_err(|rejection| ValidationError::InvalidBody {
        message: rejection.body_text(),
    })?;
    validate_new(&new)?;

    let lawyer = state.store.create(new).await?;
    Ok((StatusCode::CREATED, Json(lawyer)))
}

pub async fn update_lawyer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<LawyerPatch>, JsonRejection>,
) -> ApiResult<Json<Lawyer>> {
    let id = parse_id(&raw_id)?;
    let Json(patch) = payload.map_err(|rejection| ValidationError::InvalidBody {
        message: rejection.body_text(),
    })?;
    validate_patch(&patch)?;

    let lawyer = state
        .store
        .update(id, patch)
        .await?
        .ok_or(ApiError::NotFound { id })?;
    Ok(Json(lawyer))
}

pub async fn delete_lawyer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    if state.store.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound { id })
    }
}
