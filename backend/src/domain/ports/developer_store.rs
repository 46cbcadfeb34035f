//! Port owning the canonical collection of developer records.
//!
//! The store is the single source of truth: callers receive copies and must
//! go back through the port to change anything. Operations are `async` so a
//! remote or database backend can implement the same contract as the
//! in-memory adapter.

use async_trait::async_trait;

use crate::domain::{Developer, DeveloperId, DeveloperProfile};

use super::define_port_error;

define_port_error! {
    /// Failures raised by developer store adapters.
    pub enum DeveloperStoreError {
        /// The backing store could not be reached.
        Connection { message: String } => "developer store connection failed: {message}",
        /// A read or write failed while executing.
        Query { message: String } => "developer store query failed: {message}",
    }
}

/// Record store keyed by [`DeveloperId`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeveloperStore: Send + Sync {
    /// Every record, in insertion order.
    async fn list(&self) -> Result<Vec<Developer>, DeveloperStoreError>;

    /// Exact-match lookup by identifier.
    async fn get(&self, id: DeveloperId) -> Result<Option<Developer>, DeveloperStoreError>;

    /// Allocate the next identifier, append the record, and return it.
    ///
    /// Identifiers increase monotonically and are never handed out twice,
    /// even after the record holding one has been deleted.
    async fn create(&self, profile: DeveloperProfile) -> Result<Developer, DeveloperStoreError>;

    /// Replace the record sharing `developer`'s identifier, keeping its
    /// position. An unknown identifier leaves the store untouched and the
    /// input is returned as-is.
    async fn update(&self, developer: Developer) -> Result<Developer, DeveloperStoreError>;

    /// Remove the record if present; an unknown identifier is ignored.
    async fn delete(&self, id: DeveloperId) -> Result<(), DeveloperStoreError>;

    /// Exact, case-sensitive lookup by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Developer>, DeveloperStoreError>;
}
