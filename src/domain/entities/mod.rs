//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation and
//! partial-update inputs use separate structs (`NewLoan`, `LoanPatch`) so the
//! stored shape never carries half-initialized state.

pub mod loan;

pub use loan::{Loan, LoanPatch, NewLoan};
