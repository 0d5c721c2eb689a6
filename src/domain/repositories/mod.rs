//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit tests.

pub mod loan_repository;

pub use loan_repository::LoanRepository;

#[cfg(test)]
pub use loan_repository::MockLoanRepository;
