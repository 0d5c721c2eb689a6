//! Handlers for loan endpoints (create, get, update, list).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::loan::{CreateLoanRequest, ListLoansParams, LoanResponse, UpdateLoanRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new loan record.
///
/// # Endpoint
///
/// `POST /loans`
///
/// # Request Body
///
/// ```json
/// {
///   "amount": 100000,
///   "interest_rate": 3.5,
///   "length_months": 360,
///   "monthly_payment": 449.04
/// }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if a field is missing, has the wrong
/// type, or is out of range. Nothing is persisted in that case.
pub async fn create_loan_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLoanRequest>,
) -> Result<(StatusCode, Json<LoanResponse>), AppError> {
    payload.validate()?;

    let loan = state.loan_service.create_loan(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(loan.into())))
}

/// Returns a loan by its id.
///
/// # Endpoint
///
/// `GET /loans/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no loan has this id.
pub async fn get_loan_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LoanResponse>, AppError> {
    let loan = state.loan_service.get_loan(id).await?;

    Ok(Json(loan.into()))
}

/// Partially updates a loan.
///
/// # Endpoint
///
/// `PUT /loans/{id}`
///
/// # Request Body
///
/// All fields are optional. Only provided fields are changed; the rest keep
/// their stored values.
///
/// ```json
/// {
///   "amount": 150000
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if no loan has this id.
/// Returns 422 Unprocessable Entity if a provided field is out of range.
pub async fn update_loan_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLoanRequest>,
) -> Result<Json<LoanResponse>, AppError> {
    payload.validate()?;

    let loan = state.loan_service.update_loan(id, payload.into()).await?;

    Ok(Json(loan.into()))
}

/// Lists loans in creation order as a bare JSON array.
///
/// # Endpoint
///
/// `GET /loans?skip=0&limit=100`
///
/// Both query parameters are optional (`skip` defaults to 0, `limit` to 100).
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if `skip` or `limit` is out of range.
pub async fn list_loans_handler(
    Query(params): Query<ListLoansParams>,
    State(state): State<AppState>,
) -> Result<Json<Vec<LoanResponse>>, AppError> {
    params.validate()?;

    let loans = state
        .loan_service
        .list_loans(params.skip, params.limit)
        .await?;

    Ok(Json(loans.into_iter().map(LoanResponse::from).collect()))
}
