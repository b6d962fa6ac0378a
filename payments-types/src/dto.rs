//! Report shapes returned to callers.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::YearMonth;

/// Aggregate figures for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: YearMonth,
    /// Number of payments dated in the month
    pub payment_count: usize,
    /// Sum of final prices
    pub total_final: Decimal,
    /// Sum of regular minus final prices
    pub total_discount: Decimal,
    /// Distinct product names sold in the month
    pub product_names: BTreeSet<String>,
}
