//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (in-memory, JSON file) implement this trait.

use std::sync::Arc;

use crate::domain::Payment;
use crate::error::RepoError;

/// Read-only source of payments.
///
/// Each call returns an independent snapshot that the caller owns.
/// Implementations must never hand out a view that changes under the caller.
pub trait PaymentRepository: Send + Sync {
    /// Returns every payment currently known.
    fn find_all(&self) -> Result<Vec<Payment>, RepoError>;
}

impl<T: PaymentRepository + ?Sized> PaymentRepository for &T {
    fn find_all(&self) -> Result<Vec<Payment>, RepoError> {
        (**self).find_all()
    }
}

impl<T: PaymentRepository + ?Sized> PaymentRepository for Arc<T> {
    fn find_all(&self) -> Result<Vec<Payment>, RepoError> {
        (**self).find_all()
    }
}

impl<T: PaymentRepository + ?Sized> PaymentRepository for Box<T> {
    fn find_all(&self) -> Result<Vec<Payment>, RepoError> {
        (**self).find_all()
    }
}
