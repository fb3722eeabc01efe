//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Could not reach or open the database
    Connection(String),
    /// Schema provisioning failed
    Schema(String),
    /// A write violated a constraint or was rolled back
    Constraint(String),
    /// A read query failed
    Query(String),
    /// Loaded data is internally inconsistent
    Integrity(String),
    /// Writing rendered output failed
    Io(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Connection(msg) => write!(f, "Connection error: {}", msg),
            DomainError::Schema(msg) => write!(f, "Schema error: {}", msg),
            DomainError::Constraint(msg) => write!(f, "Constraint error: {}", msg),
            DomainError::Query(msg) => write!(f, "Query error: {}", msg),
            DomainError::Integrity(msg) => write!(f, "Integrity error: {}", msg),
            DomainError::Io(msg) => write!(f, "Io error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Query(e.to_string())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Io(e.to_string())
    }
}
