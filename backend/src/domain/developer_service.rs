//! Use-cases driving the developer store.
//!
//! Handlers call this service rather than the store so that validation,
//! filtering, aggregation and error mapping happen in one place.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use super::ports::{DeveloperStore, DeveloperStoreError};
use super::{
    Developer, DeveloperId, DeveloperProfile, DeveloperValidationError, Error, PortfolioSummary,
    SkillFilter, count_professionals, filter_developers,
};

/// Filtered listing plus headline counts of the whole portfolio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperListing {
    /// Records passing the filter, in store order.
    pub items: Vec<Developer>,
    /// Size of the unfiltered portfolio.
    pub total: usize,
    /// Professional developers in the unfiltered portfolio.
    pub professional: usize,
}

/// Developer use-cases over a [`DeveloperStore`].
#[derive(Clone)]
pub struct DeveloperService {
    store: Arc<dyn DeveloperStore>,
}

impl DeveloperService {
    pub fn new(store: Arc<dyn DeveloperStore>) -> Self {
        Self { store }
    }

    /// Every record, in insertion order.
    pub async fn list(&self) -> Result<Vec<Developer>, Error> {
        self.store.list().await.map_err(map_store_error)
    }

    /// Records matching `query` and `skill`, with portfolio counts.
    pub async fn search(&self, query: &str, skill: SkillFilter) -> Result<DeveloperListing, Error> {
        let records = self.list().await?;
        let items = filter_developers(&records, query, skill);
        debug!(query, %skill, matched = items.len(), "developer search");
        Ok(DeveloperListing {
            total: records.len(),
            professional: count_professionals(&records),
            items,
        })
    }

    /// Lookup by identifier; absence is not an error here.
    pub async fn get(&self, id: DeveloperId) -> Result<Option<Developer>, Error> {
        self.store.get(id).await.map_err(map_store_error)
    }

    /// Validate `profile` and append it under a fresh identifier.
    pub async fn create(&self, profile: DeveloperProfile) -> Result<Developer, Error> {
        let profile = profile.validated().map_err(map_validation_error)?;
        let created = self.store.create(profile).await.map_err(map_store_error)?;
        info!(developer_id = %created.id(), "developer created");
        Ok(created)
    }

    /// Validate `profile` and replace the record stored under `id`.
    ///
    /// Replacing an unknown identifier changes nothing and echoes the
    /// submitted record back.
    pub async fn update(&self, id: DeveloperId, profile: DeveloperProfile) -> Result<Developer, Error> {
        let profile = profile.validated().map_err(map_validation_error)?;
        let updated = self
            .store
            .update(Developer::new(id, profile))
            .await
            .map_err(map_store_error)?;
        info!(developer_id = %id, "developer updated");
        Ok(updated)
    }

    /// Remove the record stored under `id`, if any.
    pub async fn delete(&self, id: DeveloperId) -> Result<(), Error> {
        self.store.delete(id).await.map_err(map_store_error)?;
        info!(developer_id = %id, "developer deleted");
        Ok(())
    }

    /// Dashboard figures over the whole portfolio.
    pub async fn summary(&self) -> Result<PortfolioSummary, Error> {
        let records = self.list().await?;
        Ok(PortfolioSummary::from_records(&records))
    }
}

fn map_store_error(error: DeveloperStoreError) -> Error {
    match error {
        DeveloperStoreError::Connection { message } => {
            Error::internal(format!("developer store unavailable: {message}"))
        }
        DeveloperStoreError::Query { message } => {
            Error::internal(format!("developer store error: {message}"))
        }
    }
}

fn map_validation_error(error: DeveloperValidationError) -> Error {
    Error::invalid_request(error.to_string())
        .with_details(json!({ "field": error.field(), "code": error.code() }))
}
