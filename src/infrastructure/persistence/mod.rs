//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`PgUrlRepository`] - URL record storage and visit insertion
//! - [`PgSequenceRepository`] - slug counter with `FOR UPDATE` locking
//! - [`PgReportRepository`] - visit count aggregates

pub mod pg_report_repository;
pub mod pg_sequence_repository;
pub mod pg_url_repository;

pub use pg_report_repository::PgReportRepository;
pub use pg_sequence_repository::PgSequenceRepository;
pub use pg_url_repository::PgUrlRepository;
