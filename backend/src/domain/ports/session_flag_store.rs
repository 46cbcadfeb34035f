//! Port for the durable key/value slot holding the signed-in flag.

use super::define_port_error;

define_port_error! {
    /// Failures raised while reading or writing the durable flag.
    pub enum SessionFlagStoreError {
        /// The underlying storage rejected the operation.
        Storage { message: String } => "session flag storage failed: {message}",
    }
}

/// Durable string slots that outlive the process, addressed by key.
///
/// Adapters only need to honour a handful of keys; values are opaque text.
#[cfg_attr(test, mockall::automock)]
pub trait SessionFlagStore: Send + Sync {
    /// Current value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, SessionFlagStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), SessionFlagStoreError>;

    /// Remove `key`; removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), SessionFlagStoreError>;
}
