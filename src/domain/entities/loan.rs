//! Loan entity representing a stored loan record.

use chrono::{DateTime, Utc};

/// A loan record with its database-assigned identifier.
///
/// The `id` is generated by the persistence layer on creation and never
/// changes afterwards. All monetary fields are stored as submitted.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Loan {
    pub id: i64,
    pub amount: f64,
    pub interest_rate: f64,
    pub length_months: i32,
    pub monthly_payment: f64,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new loan.
#[derive(Debug, Clone)]
pub struct NewLoan {
    pub amount: f64,
    pub interest_rate: f64,
    pub length_months: i32,
    pub monthly_payment: f64,
}

/// Partial update for an existing loan.
///
/// `None` fields are left unchanged. The `id` and `created_at` of a loan
/// can never be patched.
#[derive(Debug, Clone, Default)]
pub struct LoanPatch {
    pub amount: Option<f64>,
    pub interest_rate: Option<f64>,
    pub length_months: Option<i32>,
    pub monthly_payment: Option<f64>,
}

impl LoanPatch {
    /// Returns true when no field is set, i.e. applying the patch is a no-op.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.interest_rate.is_none()
            && self.length_months.is_none()
            && self.monthly_payment.is_none()
    }
}
