//! Application layer: service orchestration over domain repositories.

pub mod services;
