//! # Payments Hex
//!
//! Application service layer for the payment reporting workspace.
//!
//! ## Architecture
//!
//! - `service/` - Query service (filters and aggregates repository snapshots)
//!
//! The service is generic over `R: PaymentRepository` and `C: ClockSource`,
//! allowing different adapters to be injected.

pub mod service;


pub use service::PaymentQueryService;
