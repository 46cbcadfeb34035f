//! In-memory `DeveloperStore` adapter.
//!
//! Records live in a `Vec` behind a mutex so insertion order is the listing
//! order. The identifier counter is kept separately from the records and only
//! moves forward, so deleting the newest record never frees its identifier.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{DeveloperStore, DeveloperStoreError};
use crate::domain::{Developer, DeveloperId, DeveloperProfile};

use super::seed_developers;

#[derive(Debug)]
struct StoreState {
    records: Vec<Developer>,
    /// `None` once every identifier has been handed out.
    next_id: Option<DeveloperId>,
}

/// Developer store that lives for the lifetime of the process.
#[derive(Debug)]
pub struct InMemoryDeveloperStore {
    state: Mutex<StoreState>,
}

impl InMemoryDeveloperStore {
    /// Store pre-populated with the example portfolio.
    pub fn seeded() -> Self {
        Self::with_records(seed_developers())
    }

    /// Store with no records; the first identifier handed out is 1.
    pub fn empty() -> Self {
        Self::with_records(Vec::new())
    }

    /// Store holding `records`; the counter starts after the largest id.
    pub fn with_records(records: Vec<Developer>) -> Self {
        let next_id = records
            .iter()
            .map(Developer::id)
            .max()
            .map_or(Some(DeveloperId::new(1)), DeveloperId::next);
        Self {
            state: Mutex::new(StoreState { records, next_id }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryDeveloperStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl DeveloperStore for InMemoryDeveloperStore {
    async fn list(&self) -> Result<Vec<Developer>, DeveloperStoreError> {
        Ok(self.lock().records.clone())
    }

    async fn get(&self, id: DeveloperId) -> Result<Option<Developer>, DeveloperStoreError> {
        Ok(self
            .lock()
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned())
    }

    async fn create(&self, profile: DeveloperProfile) -> Result<Developer, DeveloperStoreError> {
        let mut state = self.lock();
        let id = state
            .next_id
            .ok_or_else(|| DeveloperStoreError::query("identifier space exhausted"))?;
        state.next_id = id.next();
        let developer = Developer::new(id, profile);
        state.records.push(developer.clone());
        Ok(developer)
    }

    async fn update(&self, developer: Developer) -> Result<Developer, DeveloperStoreError> {
        let mut state = self.lock();
        if let Some(slot) = state
            .records
            .iter_mut()
            .find(|record| record.id() == developer.id())
        {
            *slot = developer.clone();
        }
        Ok(developer)
    }

    async fn delete(&self, id: DeveloperId) -> Result<(), DeveloperStoreError> {
        self.lock().records.retain(|record| record.id() != id);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Developer>, DeveloperStoreError> {
        Ok(self
            .lock()
            .records
            .iter()
            .find(|record| record.profile().email == email)
            .cloned())
    }
}
