//! Domain primitives, aggregates and use-cases.
//!
//! Purpose: define the developer portfolio model and the rules that act on
//! it, independent of transport and storage. Types document their invariants
//! and serialisation contracts (serde) in their own Rustdoc.
//!
//! Public surface:
//! - Developer, DeveloperProfile, DeveloperId: portfolio records.
//! - Skill, SkillFilter: the closed skill vocabulary and list filter.
//! - PortfolioSummary, SkillCounts: dashboard aggregates.
//! - SessionGuard, LoginCredentials: the single administrator session.
//! - NavigationDecision, View: route resolution for the client.
//! - DeveloperService: store-backed developer use-cases.
//! - Error, ErrorCode: transport-agnostic failures.

pub mod auth;
pub mod developer;
pub mod developer_filter;
pub mod developer_service;
pub mod error;
pub mod navigation;
pub mod ports;
pub mod session;
pub mod skill;
pub mod skill_stats;
pub mod trace_id;

pub use self::auth::{ADMIN_EMAIL, ADMIN_PASSWORD, LoginCredentials, LoginValidationError};
pub use self::developer::{Developer, DeveloperId, DeveloperProfile, DeveloperValidationError};
pub use self::developer_filter::{SkillFilter, filter_developers};
pub use self::developer_service::{DeveloperListing, DeveloperService};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::navigation::{
    DASHBOARD_PATH, LOGIN_PATH, NavigationDecision, Route, View, resolve_navigation,
};
pub use self::session::{
    SESSION_FLAG_KEY, SIGNED_IN_VALUE, SIGNED_OUT_VALUE, SessionGuard, SessionState, SignInError,
};
pub use self::skill::{Skill, UnknownSkillError, toggle_skill};
pub use self::skill_stats::{PortfolioSummary, SkillCounts, count_by_skill, count_professionals};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use portfolio::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::unauthorized("login required"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
