//! Developer portfolio backend.
//!
//! The crate is laid out hexagonally: [`domain`] holds the model, rules and
//! ports; [`outbound`] implements the ports; [`inbound`] exposes the domain
//! over HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
