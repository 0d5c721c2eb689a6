//! Business logic services for the application layer.

pub mod loan_service;

pub use loan_service::LoanService;
