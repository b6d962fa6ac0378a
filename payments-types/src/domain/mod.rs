//! Domain models for the payment query service.

pub mod payment;
pub mod user;
pub mod year_month;

pub use payment::{Payment, PaymentId, PaymentItem, sum_amounts};
pub use user::User;
pub use year_month::YearMonth;
