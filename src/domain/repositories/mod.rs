//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! - [`UrlRepository`] - URL records and visit events
//! - [`SequenceRepository`] - the slug sequence counter
//! - [`ReportRepository`] - visit count aggregates

pub mod report_repository;
pub mod sequence_repository;
pub mod url_repository;

pub use report_repository::{ReportRepository, UrlStats};
pub use sequence_repository::SequenceRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use report_repository::MockReportRepository;
#[cfg(test)]
pub use sequence_repository::MockSequenceRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
