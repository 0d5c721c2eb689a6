//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::loan_service::LoanService`] - Loan CRUD orchestration

pub mod services;
