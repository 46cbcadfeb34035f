//! Process-local adapters holding state in memory.

mod developer_store;
mod seed;
mod session_flag_store;

pub use developer_store::InMemoryDeveloperStore;
pub use seed::seed_developers;
pub use session_flag_store::InMemorySessionFlagStore;
