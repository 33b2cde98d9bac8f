//! In-memory implementation of LawyerStore

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

use super::LawyerStore;
use crate::core::filter::FilterOptions;
use crate::core::model::{Lawyer, LawyerId, LawyerPatch, NewLawyer};

/// In-memory lawyer store.
///
/// Process-lifetime storage behind an `RwLock`; the map preserves insertion
/// order so `list` does too. The id counter only ever advances, so deleted
/// ids are never handed out again.
#[derive(Clone)]
pub struct InMemoryLawyerStore {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    lawyers: IndexMap<LawyerId, Lawyer>,
    next_id: LawyerId,
}

impl InMemoryLawyerStore {
    /// Create an empty store. The first created record gets id 1.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                lawyers: IndexMap::new(),
                next_id: 1,
            })),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))
    }
}

impl Default for InMemoryLawyerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LawyerStore for InMemoryLawyerStore {
    async fn create(&self, new: NewLawyer) -> Result<Lawyer> {
        let mut inner = self.write()?;

        let id = inner.next_id;
        inner.next_id += 1;

        let lawyer = new.into_lawyer(id);
        inner.lawyers.insert(id, lawyer.clone());

        Ok(lawyer)
    }

    async fn get(&self, id: LawyerId) -> Result<Option<Lawyer>> {
        let inner = self.read()?;

        Ok(inner.lawyers.get(&id).cloned())
    }

    async fn update(&self, id: LawyerId, patch: LawyerPatch) -> Result<Option<Lawyer>> {
        let mut inner = self.write()?;

        let Some(lawyer) = inner.lawyers.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply_to(lawyer);

        Ok(Some(lawyer.clone()))
    }

    async fn delete(&self, id: LawyerId) -> Result<bool> {
        let mut inner = self.write()?;

        // shift_remove keeps the remaining records in insertion order.
        Ok(inner.lawyers.shift_remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Lawyer>> {
        let inner = self.read()?;

        Ok(inner.lawyers.values().cloned().collect())
    }

    async fn find(&self, filter: &FilterOptions) -> Result<Vec<Lawyer>> {
        let inner = self.read()?;

        Ok(inner
            .lawyers
            .values()
            .filter(|lawyer| filter.matches(lawyer))
            .cloned()
            .collect())
    }

    async fn featured(&self) -> Result<Vec<Lawyer>> {
        let inner = self.read()?;

        Ok(inner
            .lawyers
            .values()
            .filter(|lawyer| lawyer.featured)
            .cloned()
            .collect())
    }
}
