//! DTOs for the loan endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Loan, LoanPatch, NewLoan};

/// Request body for `POST /loans`. All fields are required.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLoanRequest {
    /// Principal amount, must be positive.
    #[validate(range(exclusive_min = 0.0, message = "Loan amount must be positive"))]
    pub amount: f64,

    /// Annual interest rate in percent, must be non-negative.
    #[validate(range(min = 0.0, message = "Interest rate must be non-negative"))]
    pub interest_rate: f64,

    /// Loan term in months, must be positive.
    #[validate(range(min = 1, message = "Loan length must be positive"))]
    pub length_months: i32,

    /// Monthly payment amount, must be positive.
    #[validate(range(exclusive_min = 0.0, message = "Monthly payment must be positive"))]
    pub monthly_payment: f64,
}

impl From<CreateLoanRequest> for NewLoan {
    fn from(req: CreateLoanRequest) -> Self {
        NewLoan {
            amount: req.amount,
            interest_rate: req.interest_rate,
            length_months: req.length_months,
            monthly_payment: req.monthly_payment,
        }
    }
}

/// Request body for `PUT /loans/{id}`.
///
/// All fields are optional — only provided fields are changed. Provided
/// values are validated with the same constraints as on creation.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLoanRequest {
    #[validate(range(exclusive_min = 0.0, message = "Loan amount must be positive"))]
    pub amount: Option<f64>,

    #[validate(range(min = 0.0, message = "Interest rate must be non-negative"))]
    pub interest_rate: Option<f64>,

    #[validate(range(min = 1, message = "Loan length must be positive"))]
    pub length_months: Option<i32>,

    #[validate(range(exclusive_min = 0.0, message = "Monthly payment must be positive"))]
    pub monthly_payment: Option<f64>,
}

impl From<UpdateLoanRequest> for LoanPatch {
    fn from(req: UpdateLoanRequest) -> Self {
        LoanPatch {
            amount: req.amount,
            interest_rate: req.interest_rate,
            length_months: req.length_months,
            monthly_payment: req.monthly_payment,
        }
    }
}

/// JSON representation of a stored loan.
#[derive(Debug, Serialize)]
pub struct LoanResponse {
    pub id: i64,
    pub amount: f64,
    pub interest_rate: f64,
    pub length_months: i32,
    pub monthly_payment: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Loan> for LoanResponse {
    fn from(loan: Loan) -> Self {
        LoanResponse {
            id: loan.id,
            amount: loan.amount,
            interest_rate: loan.interest_rate,
            length_months: loan.length_months,
            monthly_payment: loan.monthly_payment,
            created_at: loan.created_at,
        }
    }
}

/// Windowing query parameters for `GET /loans`.
#[derive(Debug, Deserialize, Validate)]
pub struct ListLoansParams {
    /// Number of loans to pass over, default 0.
    #[serde(default)]
    #[validate(range(min = 0, message = "skip must be non-negative"))]
    pub skip: i64,

    /// Maximum number of loans to return, default 100.
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}
