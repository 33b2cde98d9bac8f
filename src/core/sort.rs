//! Sort comparators for filtered result sets

use serde::{Deserialize, Serialize};

use super::model::Lawyer;

/// Named sort criteria.
///
/// Every sort is stable: records with equal keys keep their input order.
/// `Relevance` is the no-op order, and any unknown wire name falls back to
/// it by definition rather than erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Relevance,
    RatingHigh,
    RatingLow,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    /// Parse a wire name; anything unrecognized is `Relevance`.
    pub fn parse(name: &str) -> Self {
        match name {
            "rating-high" => SortKey::RatingHigh,
            "rating-low" => SortKey::RatingLow,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            _ => SortKey::Relevance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::RatingHigh => "rating-high",
            SortKey::RatingLow => "rating-low",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }
}

/// Order records in place by the given criterion.
pub fn sort_lawyers(lawyers: &mut [Lawyer], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::RatingHigh => lawyers.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::RatingLow => lawyers.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        SortKey::PriceLow => lawyers.sort_by(|a, b| a.hourly_rate.cmp(&b.hourly_rate)),
        SortKey::PriceHigh => lawyers.sort_by(|a, b| b.hourly_rate.cmp(&a.hourly_rate)),
    }
}
