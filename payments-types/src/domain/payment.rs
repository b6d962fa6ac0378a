//! Payment domain model.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;
use super::year_month::YearMonth;
use crate::error::DomainError;

/// Adds up amounts without wrapping or panicking.
///
/// Stops at the first error. An empty input sums to zero.
pub fn sum_amounts<I>(amounts: I) -> Result<Decimal, DomainError>
where
    I: IntoIterator<Item = Result<Decimal, DomainError>>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount?).ok_or(DomainError::AmountOverflow)
    })
}

/// Unique identifier for a Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A priced line within a payment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentItem {
    /// Product name
    pub name: String,
    /// Price before discount
    pub regular_price: Decimal,
    /// Price actually charged
    pub final_price: Decimal,
}

impl PaymentItem {
    pub fn new(name: impl Into<String>, regular_price: Decimal, final_price: Decimal) -> Self {
        Self {
            name: name.into(),
            regular_price,
            final_price,
        }
    }

    /// Regular minus final price. Negative if the item was marked up.
    pub fn discount(&self) -> Result<Decimal, DomainError> {
        self.regular_price
            .checked_sub(self.final_price)
            .ok_or(DomainError::AmountOverflow)
    }
}

/// A recorded payment.
///
/// Payments are read-only snapshots handed out by a repository; the
/// query layer never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// When the payment happened, with the offset it was recorded in
    pub payment_date: DateTime<FixedOffset>,
    /// Line items, in the order they were recorded
    pub payment_items: Vec<PaymentItem>,
    /// Paying user
    pub user: User,
}

impl Payment {
    /// Creates a new payment with a fresh id.
    pub fn new(
        payment_date: DateTime<FixedOffset>,
        payment_items: Vec<PaymentItem>,
        user: User,
    ) -> Self {
        Self {
            id: PaymentId::new(),
            payment_date,
            payment_items,
            user,
        }
    }

    /// Sum of final prices across all items.
    pub fn total(&self) -> Result<Decimal, DomainError> {
        sum_amounts(self.payment_items.iter().map(|item| Ok(item.final_price)))
    }

    /// Sum of discounts across all items.
    pub fn total_discount(&self) -> Result<Decimal, DomainError> {
        sum_amounts(self.payment_items.iter().map(PaymentItem::discount))
    }

    /// Calendar month of the payment date, in its own offset.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::of(&self.payment_date)
    }
}
