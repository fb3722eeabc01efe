//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM in the traits).
//! Only trait definitions, plain data types and domain error types.

pub mod errors;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::*;
