//! Adapters persisting state under a directory on disk.
//!
//! All access goes through a `cap_std::fs::Dir` handle opened once at
//! construction, so adapters can only touch files beneath that directory.

mod session_flag_store;

pub use session_flag_store::FileSessionFlagStore;
