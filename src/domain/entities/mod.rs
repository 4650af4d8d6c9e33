//! Core domain entities representing the business data model.
//!
//! - [`UrlRecord`] - A persisted slug to long URL mapping
//! - [`ResolvedUrl`] - The lightweight view returned by slug resolution
//! - [`Visit`] - A recorded redirect event
//!
//! Entities are plain data structures without business logic; `NewUrl`
//! carries input for creation, mirroring the record/new split used elsewhere.

pub mod url;
pub mod visit;

pub use url::{NewUrl, ResolvedUrl, UrlRecord};
pub use visit::Visit;
