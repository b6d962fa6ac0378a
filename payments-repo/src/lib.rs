//! # Payments Repository
//!
//! Concrete adapters for the payment query service.
//! This crate provides the repositories that implement the `PaymentRepository`
//! port and the clocks that implement the `ClockSource` port.

pub mod clock;
pub mod json_file;
pub mod memory;

pub use clock::{FixedClock, SystemClock};
pub use json_file::JsonFilePaymentRepository;
pub use memory::InMemoryPaymentRepository;
