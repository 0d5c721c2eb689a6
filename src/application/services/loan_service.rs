//! Loan creation, retrieval, and update service.

use std::sync::Arc;

use crate::domain::entities::{Loan, LoanPatch, NewLoan};
use crate::domain::repositories::LoanRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for managing loan records.
///
/// Orchestrates repository calls and maps absent rows to not-found errors so
/// handlers only deal with `Loan` or `AppError`.
pub struct LoanService {
    repository: Arc<dyn LoanRepository>,
}

impl LoanService {
    /// Creates a new loan service.
    pub fn new(repository: Arc<dyn LoanRepository>) -> Self {
        Self { repository }
    }

    /// Persists a new loan and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_loan(&self, new_loan: NewLoan) -> Result<Loan, AppError> {
        let loan = self.repository.create(new_loan).await?;
        tracing::info!(loan_id = loan.id, "Loan created");
        Ok(loan)
    }

    /// Retrieves a loan by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no loan has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_loan(&self, id: i64) -> Result<Loan, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Loan not found", json!({ "id": id })))
    }

    /// Merges the provided fields onto an existing loan.
    ///
    /// An empty patch is valid and returns the stored record unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no loan has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_loan(&self, id: i64, patch: LoanPatch) -> Result<Loan, AppError> {
        let updated = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Loan not found", json!({ "id": id })))?;
        tracing::info!(loan_id = id, "Loan updated");
        Ok(updated)
    }

    /// Lists loans in creation order, windowed by `skip` and `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_loans(&self, skip: i64, limit: i64) -> Result<Vec<Loan>, AppError> {
        self.repository.list(skip, limit).await
    }

    /// Counts stored loans. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_loans(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLoanRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_loan(id: i64) -> Loan {
        Loan {
            id,
            amount: 100_000.0,
            interest_rate: 3.5,
            length_months: 360,
            monthly_payment: 449.04,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_loan_returns_stored_record() {
        let mut mock_repo = MockLoanRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Ok(sample_loan(1)));

        let service = LoanService::new(Arc::new(mock_repo));
        let loan = service
            .create_loan(NewLoan {
                amount: 100_000.0,
                interest_rate: 3.5,
                length_months: 360,
                monthly_payment: 449.04,
            })
            .await
            .unwrap();

        assert_eq!(loan.id, 1);
        assert_eq!(loan.amount, 100_000.0);
    }

    #[tokio::test]
    async fn test_get_loan_found() {
        let mut mock_repo = MockLoanRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(sample_loan(id))));

        let service = LoanService::new(Arc::new(mock_repo));
        let loan = service.get_loan(7).await.unwrap();
        assert_eq!(loan.id, 7);
    }

    #[tokio::test]
    async fn test_get_loan_missing_is_not_found() {
        let mut mock_repo = MockLoanRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = LoanService::new(Arc::new(mock_repo));
        let err = service.get_loan(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_loan_missing_is_not_found() {
        let mut mock_repo = MockLoanRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(None));

        let service = LoanService::new(Arc::new(mock_repo));
        let err = service
            .update_loan(42, LoanPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_loan_merges_fields() {
        let mut mock_repo = MockLoanRepository::new();
        mock_repo
            .expect_update()
            .with(eq(1), mockall::predicate::always())
            .returning(|id, patch| {
                let mut loan = sample_loan(id);
                if let Some(amount) = patch.amount {
                    loan.amount = amount;
                }
                Ok(Some(loan))
            });

        let service = LoanService::new(Arc::new(mock_repo));
        let patch = LoanPatch {
            amount: Some(150_000.0),
            ..Default::default()
        };
        let loan = service.update_loan(1, patch).await.unwrap();

        assert_eq!(loan.amount, 150_000.0);
        assert_eq!(loan.interest_rate, 3.5);
    }

    #[tokio::test]
    async fn test_list_loans_passes_window_through() {
        let mut mock_repo = MockLoanRepository::new();
        mock_repo
            .expect_list()
            .with(eq(0), eq(100))
            .returning(|_, _| Ok(vec![sample_loan(1), sample_loan(2)]));

        let service = LoanService::new(Arc::new(mock_repo));
        let loans = service.list_loans(0, 100).await.unwrap();
        assert_eq!(loans.len(), 2);
        assert_eq!(loans[0].id, 1);
    }
}
