//! Order handlers. Every order in a response carries its customer.

use crate::dto::{CreateOrder, UpdateOrder};
use crate::error::AppError;
use crate::extractors::{EntityId, ValidatedJson};
use crate::response::{created, ok};
use crate::service::OrderService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::list(&state.pool).await?;
    Ok(ok(orders))
}

pub async fn get(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::get(&state.pool, id).await?;
    Ok(ok(order))
}

pub async fn list_by_customer(
    State(state): State<AppState>,
    EntityId(customer_id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::list_by_customer(&state.pool, customer_id).await?;
    Ok(ok(orders))
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateOrder>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::create(&state.pool, input).await?;
    Ok(created(format!("/api/orders/{}", order.id), order))
}

pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(input): ValidatedJson<UpdateOrder>,
) -> Result<impl IntoResponse, AppError> {
    OrderService::update(&state.pool, id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    OrderService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
