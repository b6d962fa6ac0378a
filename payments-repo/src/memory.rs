//! In-memory repository adapter.

use payments_types::{Payment, PaymentRepository, RepoError};

/// Repository over a fixed list of payments.
///
/// Every `find_all` hands out a fresh copy, so callers can never observe
/// each other's snapshots.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentRepository {
    payments: Vec<Payment>,
}

impl InMemoryPaymentRepository {
    pub fn new(payments: Vec<Payment>) -> Self {
        Self { payments }
    }
}

impl From<Vec<Payment>> for InMemoryPaymentRepository {
    fn from(payments: Vec<Payment>) -> Self {
        Self::new(payments)
    }
}

impl PaymentRepository for InMemoryPaymentRepository {
    fn find_all(&self) -> Result<Vec<Payment>, RepoError> {
        Ok(self.payments.clone())
    }
}
