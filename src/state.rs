//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LoanService;

/// Application state shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub loan_service: Arc<LoanService>,
}

impl AppState {
    /// Creates the application state around a loan service.
    pub fn new(loan_service: Arc<LoanService>) -> Self {
        Self { loan_service }
    }
}
