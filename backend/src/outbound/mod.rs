//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local developer store and session flags
//! - **filesystem**: session flags persisted under a state directory
//!
//! Adapters translate between domain types and their storage representation.
//! They contain no business logic.

pub mod filesystem;
pub mod memory;
