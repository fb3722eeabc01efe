//! Infrastructure layer - Framework implementations
//!
//! This layer contains the SeaORM-backed repository implementations.

pub mod repositories;

pub use repositories::*;
