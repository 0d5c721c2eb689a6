#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use loan_records::application::services::LoanService;
use loan_records::domain::entities::{Loan, LoanPatch, NewLoan};
use loan_records::domain::repositories::LoanRepository;
use loan_records::error::AppError;
use loan_records::state::AppState;

/// In-memory implementation of [`LoanRepository`] backing handler tests.
///
/// Assigns sequential ids starting at 1 and keeps records in insertion
/// order, matching the contract of the PostgreSQL implementation.
pub struct InMemoryLoanRepository {
    loans: Mutex<Vec<Loan>>,
    next_id: AtomicI64,
}

impl InMemoryLoanRepository {
    pub fn new() -> Self {
        Self {
            loans: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored loans, for asserting persistence side effects.
    pub fn stored_count(&self) -> usize {
        self.loans.lock().unwrap().len()
    }

    /// Snapshot of a stored loan by id.
    pub fn stored(&self, id: i64) -> Option<Loan> {
        self.loans.lock().unwrap().iter().find(|l| l.id == id).cloned()
    }
}

#[async_trait]
impl LoanRepository for InMemoryLoanRepository {
    async fn create(&self, new_loan: NewLoan) -> Result<Loan, AppError> {
        let loan = Loan {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            amount: new_loan.amount,
            interest_rate: new_loan.interest_rate,
            length_months: new_loan.length_months,
            monthly_payment: new_loan.monthly_payment,
            created_at: Utc::now(),
        };
        self.loans.lock().unwrap().push(loan.clone());
        Ok(loan)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Loan>, AppError> {
        Ok(self.stored(id))
    }

    async fn update(&self, id: i64, patch: LoanPatch) -> Result<Option<Loan>, AppError> {
        let mut loans = self.loans.lock().unwrap();
        let Some(loan) = loans.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };

        if let Some(amount) = patch.amount {
            loan.amount = amount;
        }
        if let Some(interest_rate) = patch.interest_rate {
            loan.interest_rate = interest_rate;
        }
        if let Some(length_months) = patch.length_months {
            loan.length_months = length_months;
        }
        if let Some(monthly_payment) = patch.monthly_payment {
            loan.monthly_payment = monthly_payment;
        }

        Ok(Some(loan.clone()))
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Loan>, AppError> {
        let loans = self.loans.lock().unwrap();
        Ok(loans
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.loans.lock().unwrap().len() as i64)
    }
}

/// Builds an [`AppState`] over a fresh in-memory repository.
///
/// Returns the repository alongside the state so tests can inspect what was
/// actually persisted.
pub fn create_test_state() -> (AppState, Arc<InMemoryLoanRepository>) {
    let repository = Arc::new(InMemoryLoanRepository::new());
    let loan_service = Arc::new(LoanService::new(repository.clone()));

    (AppState::new(loan_service), repository)
}
