//! Customer handlers: list, get, create, update, delete.

use crate::dto::{CreateCustomer, UpdateCustomer};
use crate::error::AppError;
use crate::extractors::{EntityId, ValidatedJson};
use crate::response::{created, ok};
use crate::service::CustomerService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let customers = CustomerService::list(&state.pool).await?;
    Ok(ok(customers))
}

pub async fn get(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::get(&state.pool, id).await?;
    Ok(ok(customer))
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCustomer>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::create(&state.pool, input).await?;
    Ok(created(format!("/api/customers/{}", customer.id), customer))
}

pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(input): ValidatedJson<UpdateCustomer>,
) -> Result<impl IntoResponse, AppError> {
    CustomerService::update(&state.pool, id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    CustomerService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
