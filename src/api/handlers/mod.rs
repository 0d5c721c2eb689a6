//! HTTP request handlers for API endpoints.

pub mod health;
pub mod loans;

pub use health::health_handler;
pub use loans::{create_loan_handler, get_loan_handler, list_loans_handler, update_loan_handler};
