//! Utility functions shared across the application.
//!
//! - [`base62`] - Checksummed base62 slug encoding

pub mod base62;
