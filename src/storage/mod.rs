//! Storage backends for lawyer profiles
//!
//! The serving layer depends on [`LawyerStore`] only, so the in-memory
//! backend can be swapped for a persistent one without touching the
//! filter/sort/paginate core.

mod in_memory;

pub use in_memory::InMemoryLawyerStore;

use crate::core::filter::FilterOptions;
use crate::core::model::{Lawyer, LawyerId, LawyerPatch, NewLawyer};
use anyhow::Result;
use async_trait::async_trait;

/// Record store for lawyer profiles.
///
/// Ids are positive integers assigned sequentially starting at 1 and never
/// reused after deletion. `list` returns records in insertion order, and the
/// predicate-based retrievals preserve that order in their output.
#[async_trait]
pub trait LawyerStore: Send + Sync {
    /// Insert a record, assigning the next unused id.
    async fn create(&self, new: NewLawyer) -> Result<Lawyer>;

    /// Fetch a record by id.
    async fn get(&self, id: LawyerId) -> Result<Option<Lawyer>>;

    /// Merge a partial update over an existing record.
    /// Returns `None` when the id is absent.
    async fn update(&self, id: LawyerId, patch: LawyerPatch) -> Result<Option<Lawyer>>;

    /// Remove a record. Returns `false` when the id was already absent.
    async fn delete(&self, id: LawyerId) -> Result<bool>;

    /// All records, in insertion order.
    async fn list(&self) -> Result<Vec<Lawyer>>;

    /// Records surviving the composite filter, in insertion order.
    async fn find(&self, filter: &FilterOptions) -> Result<Vec<Lawyer>>;

    /// Records flagged as featured, in insertion order.
    async fn featured(&self) -> Result<Vec<Lawyer>>;
}
