//! Payment Query Service
//!
//! Answers reporting questions over the repository snapshot.
//! Contains NO infrastructure logic - pure in-memory filtering and aggregation.
//!
//! Every operation reads the repository exactly once and works on that
//! snapshot. Operations that depend on "now" read the clock exactly once
//! per call, so every payment in one call is judged against the same instant.

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, Days, FixedOffset};
use rust_decimal::Decimal;

use payments_types::{
    ClockSource, MonthlySummary, Payment, PaymentItem, PaymentRepository, QueryError, YearMonth,
    sum_amounts,
};

/// Read-only query service over a payment repository.
///
/// Generic over `R: PaymentRepository` and `C: ClockSource` - the adapters
/// are injected at compile time. This enables:
/// - Testing with in-memory repositories and pinned clocks
/// - Borrowing collaborators (`&R`, `Arc<R>`) instead of owning them
pub struct PaymentQueryService<R: PaymentRepository, C: ClockSource> {
    repo: R,
    clock: C,
}

impl<R: PaymentRepository, C: ClockSource> PaymentQueryService<R, C> {
    /// Creates a new query service over the given collaborators.
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the underlying clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn snapshot(&self) -> Result<Vec<Payment>, QueryError> {
        Ok(self.repo.find_all()?)
    }

    fn now(&self) -> Result<DateTime<FixedOffset>, QueryError> {
        Ok(self.clock.now()?)
    }

    fn payments_in(&self, month: YearMonth) -> Result<Vec<Payment>, QueryError> {
        Ok(self
            .snapshot()?
            .into_iter()
            .filter(|payment| month.contains(&payment.payment_date))
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Listings
    // ─────────────────────────────────────────────────────────────────────────────

    /// All payments, newest first.
    ///
    /// Payments with the same instant keep their repository order.
    #[tracing::instrument(skip(self))]
    pub fn list_payments_by_date_descending(&self) -> Result<Vec<Payment>, QueryError> {
        let mut payments = self.snapshot()?;
        payments.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
        tracing::debug!(count = payments.len(), "sorted payments");
        Ok(payments)
    }

    /// Payments dated in the clock's current calendar month.
    #[tracing::instrument(skip(self))]
    pub fn list_payments_for_current_month(&self) -> Result<Vec<Payment>, QueryError> {
        let month = YearMonth::of(&self.now()?);
        let payments = self.payments_in(month)?;
        tracing::debug!(%month, count = payments.len(), "current month payments");
        Ok(payments)
    }

    /// Payments dated in the given calendar month.
    #[tracing::instrument(skip(self), fields(month = %month))]
    pub fn list_payments_for_month(&self, month: YearMonth) -> Result<Vec<Payment>, QueryError> {
        let payments = self.payments_in(month)?;
        tracing::debug!(count = payments.len(), "month payments");
        Ok(payments)
    }

    /// Payments dated strictly after `now - days` calendar days.
    ///
    /// # Errors
    /// - `InvalidArgument` if `days` is negative or the window start is not
    ///   a representable date
    #[tracing::instrument(skip(self))]
    pub fn list_payments_for_last_days(&self, days: i64) -> Result<Vec<Payment>, QueryError> {
        let days = u64::try_from(days).map_err(|_| {
            QueryError::InvalidArgument(format!("Day count cannot be negative, got {days}"))
        })?;

        let now = self.now()?;
        let since = now.checked_sub_days(Days::new(days)).ok_or_else(|| {
            QueryError::InvalidArgument(format!("{days} days before {now} is out of range"))
        })?;

        let payments: Vec<Payment> = self
            .snapshot()?
            .into_iter()
            .filter(|payment| payment.payment_date > since)
            .collect();
        tracing::debug!(%since, count = payments.len(), "recent payments");
        Ok(payments)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Sets
    // ─────────────────────────────────────────────────────────────────────────────

    /// Distinct payments that have exactly one item.
    #[tracing::instrument(skip(self))]
    pub fn set_of_payments_with_single_item(&self) -> Result<HashSet<Payment>, QueryError> {
        Ok(self
            .snapshot()?
            .into_iter()
            .filter(|payment| payment.payment_items.len() == 1)
            .collect())
    }

    /// Distinct product names sold in the clock's current calendar month.
    #[tracing::instrument(skip(self))]
    pub fn set_of_product_names_sold_in_current_month(
        &self,
    ) -> Result<BTreeSet<String>, QueryError> {
        let month = YearMonth::of(&self.now()?);
        Ok(self
            .payments_in(month)?
            .into_iter()
            .flat_map(|payment| payment.payment_items)
            .map(|item| item.name)
            .collect())
    }

    /// Distinct payments whose final total is strictly greater than `threshold`.
    ///
    /// # Errors
    /// - `Overflow` if any payment's total does not fit a `Decimal`
    #[tracing::instrument(skip(self))]
    pub fn set_of_payments_with_total_over(
        &self,
        threshold: i64,
    ) -> Result<HashSet<Payment>, QueryError> {
        let threshold = Decimal::from(threshold);
        let mut over = HashSet::new();
        for payment in self.snapshot()? {
            if payment.total()? > threshold {
                over.insert(payment);
            }
        }
        Ok(over)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Sums
    // ─────────────────────────────────────────────────────────────────────────────

    /// Sum of final prices over all items of payments in `month`.
    ///
    /// Zero when nothing matches; `Overflow` if the sum does not fit a `Decimal`.
    #[tracing::instrument(skip(self), fields(month = %month))]
    pub fn sum_of_final_prices_for_month(&self, month: YearMonth) -> Result<Decimal, QueryError> {
        Ok(sum_amounts(self.payments_in(month)?.iter().map(Payment::total))?)
    }

    /// Sum of `regular_price - final_price` over all items of payments in `month`.
    ///
    /// Zero when nothing matches; `Overflow` if the sum does not fit a `Decimal`.
    #[tracing::instrument(skip(self), fields(month = %month))]
    pub fn sum_of_discounts_for_month(&self, month: YearMonth) -> Result<Decimal, QueryError> {
        Ok(sum_amounts(
            self.payments_in(month)?.iter().map(Payment::total_discount),
        )?)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Per-user lookups
    // ─────────────────────────────────────────────────────────────────────────────

    /// Every item bought by the user with exactly this email.
    ///
    /// Items follow repository payment order, then item order.
    #[tracing::instrument(skip(self))]
    pub fn items_for_user_email(&self, email: &str) -> Result<Vec<PaymentItem>, QueryError> {
        let items: Vec<PaymentItem> = self
            .snapshot()?
            .into_iter()
            .filter(|payment| payment.user.email == email)
            .flat_map(|payment| payment.payment_items)
            .collect();
        tracing::debug!(count = items.len(), "user items");
        Ok(items)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Reports
    // ─────────────────────────────────────────────────────────────────────────────

    /// Count, totals and product names for one month, from a single snapshot.
    #[tracing::instrument(skip(self), fields(month = %month))]
    pub fn monthly_summary(&self, month: YearMonth) -> Result<MonthlySummary, QueryError> {
        let payments = self.payments_in(month)?;

        let summary = MonthlySummary {
            month,
            payment_count: payments.len(),
            total_final: sum_amounts(payments.iter().map(Payment::total))?,
            total_discount: sum_amounts(payments.iter().map(Payment::total_discount))?,
            product_names: payments
                .iter()
                .flat_map(|payment| &payment.payment_items)
                .map(|item| item.name.clone())
                .collect(),
        };
        tracing::debug!(
            payments = summary.payment_count,
            total = %summary.total_final,
            "monthly summary"
        );
        Ok(summary)
    }
}
