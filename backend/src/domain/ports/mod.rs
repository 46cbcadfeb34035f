//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod developer_store;
mod session_flag_store;

#[cfg(test)]
pub use developer_store::MockDeveloperStore;
pub use developer_store::{DeveloperStore, DeveloperStoreError};
#[cfg(test)]
pub use session_flag_store::MockSessionFlagStore;
pub use session_flag_store::{SessionFlagStore, SessionFlagStoreError};
