//! # Payments Types
//!
//! Domain types and port traits for the payment query service.
//! This crate has ZERO IO dependencies - only data structures,
//! value rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Payment, PaymentItem, User, YearMonth)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Report shapes handed to callers
//! - `error/` - Domain, adapter and query error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Payment, PaymentId, PaymentItem, User, YearMonth, sum_amounts};
pub use dto::*;
pub use error::{ClockError, DomainError, QueryError, RepoError};
pub use ports::{ClockSource, PaymentRepository};
