//! # Lexmatch
//!
//! A lawyer directory service: browse, search, and filter a catalog of
//! lawyer profiles by practice area, price, rating, experience level, and
//! availability.
//!
//! ## Features
//!
//! - **Shared filter core**: one pure predicate module backs both the HTTP
//!   filter endpoints and the embeddable listing session, so the two
//!   surfaces cannot drift
//! - **Stable sorting**: five named sort orders with original-order
//!   tie-breaking; unknown sort names fall back to relevance
//! - **Defined pagination boundaries**: pages past the end are empty, not
//!   errors
//! - **Pluggable storage**: handlers depend on the [`storage::LawyerStore`]
//!   trait; the in-memory backend can be swapped without touching core logic
//! - **Closed enumerations**: practice areas and experience levels are sum
//!   types, so invalid values are rejected at the boundary by construction
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lexmatch::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let store = Arc::new(InMemoryLawyerStore::new());
//!     seed_if_empty(store.as_ref()).await?;
//!
//!     let config = ServerConfig::load()?;
//!     lexmatch::server::serve(&config, AppState::new(store)).await
//! }
//! ```

pub mod config;
pub mod core;
pub mod seed;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ApiError, ApiResult, ValidationError},
        filter::FilterOptions,
        listing::{ListingSession, page_window},
        model::{ExperienceLevel, Lawyer, LawyerId, LawyerPatch, NewLawyer, PracticeArea},
        paginate::{DEFAULT_PAGE_SIZE, Page, PageMeta, paginate},
        sort::{SortKey, sort_lawyers},
    };

    // === Storage ===
    pub use crate::storage::{InMemoryLawyerStore, LawyerStore};

    // === Seeding ===
    pub use crate::seed::{seed_if_empty, starter_profiles};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{AppState, app, lawyer_routes};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
