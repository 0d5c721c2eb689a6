//! PostgreSQL implementation of the loan repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Loan, LoanPatch, NewLoan};
use crate::domain::repositories::LoanRepository;
use crate::error::AppError;

/// PostgreSQL repository for loan storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
pub struct PgLoanRepository {
    pool: Arc<PgPool>,
}

impl PgLoanRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanRepository for PgLoanRepository {
    async fn create(&self, new_loan: NewLoan) -> Result<Loan, AppError> {
        let loan = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (amount, interest_rate, length_months, monthly_payment)
            VALUES ($1, $2, $3, $4)
            RETURNING id, amount, interest_rate, length_months, monthly_payment, created_at
            "#,
        )
        .bind(new_loan.amount)
        .bind(new_loan.interest_rate)
        .bind(new_loan.length_months)
        .bind(new_loan.monthly_payment)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(loan)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Loan>, AppError> {
        let loan = sqlx::query_as::<_, Loan>(
            r#"
            SELECT id, amount, interest_rate, length_months, monthly_payment, created_at
            FROM loans
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(loan)
    }

    async fn update(&self, id: i64, patch: LoanPatch) -> Result<Option<Loan>, AppError> {
        // Single atomic merge: NULL binds fall back to the stored value.
        let loan = sqlx::query_as::<_, Loan>(
            r#"
            UPDATE loans
            SET amount          = COALESCE($2, amount),
                interest_rate   = COALESCE($3, interest_rate),
                length_months   = COALESCE($4, length_months),
                monthly_payment = COALESCE($5, monthly_payment)
            WHERE id = $1
            RETURNING id, amount, interest_rate, length_months, monthly_payment, created_at
            "#,
        )
        .bind(id)
        .bind(patch.amount)
        .bind(patch.interest_rate)
        .bind(patch.length_months)
        .bind(patch.monthly_payment)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(loan)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Loan>, AppError> {
        let loans = sqlx::query_as::<_, Loan>(
            r#"
            SELECT id, amount, interest_rate, length_months, monthly_payment, created_at
            FROM loans
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(loans)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
