//! Repository trait for loan data access.

use crate::domain::entities::{Loan, LoanPatch, NewLoan};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing and retrieving loan records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLoanRepository`] - PostgreSQL implementation
/// - `MockLoanRepository` is auto-generated with `cfg(test)` for service unit tests
/// - Integration tests use an in-memory implementation (`tests/common`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// Inserts a new loan and returns the stored record with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_loan: NewLoan) -> Result<Loan, AppError>;

    /// Finds a loan by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Loan))` if found
    /// - `Ok(None)` if no loan has this id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Loan>, AppError>;

    /// Partially updates a loan.
    ///
    /// Only fields present in [`LoanPatch`] are modified; `None` fields keep
    /// their stored value. The merge happens in a single atomic statement.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Loan))` with the merged record if the id exists
    /// - `Ok(None)` if no loan has this id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: LoanPatch) -> Result<Option<Loan>, AppError>;

    /// Lists loans in creation order (ascending id).
    ///
    /// `skip` rows are passed over and at most `limit` rows are returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Loan>, AppError>;

    /// Counts stored loans.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
