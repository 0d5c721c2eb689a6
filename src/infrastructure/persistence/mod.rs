//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.

pub mod pg_loan_repository;

pub use pg_loan_repository::PgLoanRepository;
