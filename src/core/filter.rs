//! Predicate filters and the composite filter evaluator
//!
//! One filter dimension per predicate, each a pure function over a single
//! record. [`FilterOptions`] conjoins the configured dimensions; within a
//! multi-value dimension (practice areas, experience levels) membership is
//! an OR. The same evaluator backs every HTTP filter endpoint and the
//! embeddable listing session, so the two surfaces cannot drift.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::model::{ExperienceLevel, Lawyer, PracticeArea};

/// A filter configuration for a single query.
///
/// Every field is optional; an absent field places no constraint on that
/// dimension. Constructed per request and discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    pub practice_areas: Option<Vec<PracticeArea>>,
    pub min_rating: Option<f64>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub experience_levels: Option<Vec<ExperienceLevel>>,
    pub only_available: Option<bool>,
    pub query: Option<String>,
}

impl FilterOptions {
    /// Constrain to a single practice area.
    pub fn by_practice_area(area: PracticeArea) -> Self {
        Self {
            practice_areas: Some(vec![area]),
            ..Default::default()
        }
    }

    /// Constrain to a rating floor.
    pub fn by_min_rating(min_rating: f64) -> Self {
        Self {
            min_rating: Some(min_rating),
            ..Default::default()
        }
    }

    /// Constrain to an hourly-rate band.
    pub fn by_price_range(min_price: u32, max_price: u32) -> Self {
        Self {
            min_price: Some(min_price),
            max_price: Some(max_price),
            ..Default::default()
        }
    }

    /// Constrain to a single experience level.
    pub fn by_experience_level(level: ExperienceLevel) -> Self {
        Self {
            experience_levels: Some(vec![level]),
            ..Default::default()
        }
    }

    /// Constrain to lawyers available for consultation.
    pub fn available_only() -> Self {
        Self {
            only_available: Some(true),
            ..Default::default()
        }
    }

    /// Constrain to a free-text query.
    pub fn by_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// The free-text query with blank input treated as no constraint.
    fn effective_query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Check numeric bounds on a client-supplied configuration.
    ///
    /// Membership in the enumerations is already guaranteed by construction;
    /// only the rating floor needs a range check here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(min_rating) = self.min_rating {
            if !(1.0..=5.0).contains(&min_rating) {
                return Err(ValidationError::RatingOutOfRange { value: min_rating });
            }
        }
        Ok(())
    }

    /// Conjunction of every configured dimension, short-circuiting on the
    /// first failing predicate.
    pub fn matches(&self, lawyer: &Lawyer) -> bool {
        self.practice_areas
            .as_deref()
            .is_none_or(|areas| matches_practice_areas(lawyer, areas))
            && self
                .min_rating
                .is_none_or(|min| matches_min_rating(lawyer, min))
            && matches_price_range(lawyer, self.min_price.unwrap_or(0), self.max_price)
            && self
                .experience_levels
                .as_deref()
                .is_none_or(|levels| matches_experience_levels(lawyer, levels))
            && matches_availability(lawyer, self.only_available.unwrap_or(false))
            && self
                .effective_query()
                .is_none_or(|query| matches_query(lawyer, query))
    }

    /// Filter a record list, preserving original relative order.
    pub fn apply(&self, lawyers: Vec<Lawyer>) -> Vec<Lawyer> {
        lawyers
            .into_iter()
            .filter(|lawyer| self.matches(lawyer))
            .collect()
    }
}

/// True when the record's practice areas intersect the configured set.
/// An empty set passes every record.
pub fn matches_practice_areas(lawyer: &Lawyer, areas: &[PracticeArea]) -> bool {
    areas.is_empty() || lawyer.practice_areas.iter().any(|area| areas.contains(area))
}

/// True when the rating meets the floor. A rating exactly at the floor passes.
pub fn matches_min_rating(lawyer: &Lawyer, min_rating: f64) -> bool {
    lawyer.rating >= min_rating
}

/// True when the hourly rate lies in `[min_price, max_price]`, with no upper
/// bound when `max_price` is absent. Both endpoints are inclusive.
pub fn matches_price_range(lawyer: &Lawyer, min_price: u32, max_price: Option<u32>) -> bool {
    lawyer.hourly_rate >= min_price && max_price.is_none_or(|max| lawyer.hourly_rate <= max)
}

/// True when the experience level is a member of the configured set.
/// An empty set passes every record.
pub fn matches_experience_levels(lawyer: &Lawyer, levels: &[ExperienceLevel]) -> bool {
    levels.is_empty() || levels.contains(&lawyer.experience_level)
}

/// True unless availability is demanded and the record is unavailable.
pub fn matches_availability(lawyer: &Lawyer, only_available: bool) -> bool {
    !only_available || lawyer.available_for_consultation
}

/// Case-insensitive substring match against name, location, bio, or any
/// practice-area tag. Tags are matched on their raw snake_case form
/// ("family_law"), not the display label.
pub fn matches_query(lawyer: &Lawyer, query: &str) -> bool {
    let needle = query.to_lowercase();
    lawyer.name.to_lowercase().contains(&needle)
        || lawyer.location.to_lowercase().contains(&needle)
        || lawyer.bio.to_lowercase().contains(&needle)
        || lawyer
            .practice_areas
            .iter()
            .any(|area| area.as_str().contains(&needle))
}
