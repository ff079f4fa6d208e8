//! Customer and order resource routes.

use crate::handlers::{customers, orders};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/customers", get(customers::list).post(customers::create))
        .route(
            "/api/customers/:id",
            get(customers::get)
                .put(customers::update)
                .delete(customers::delete),
        )
        .route("/api/orders", get(orders::list).post(orders::create))
        .route(
            "/api/orders/:id",
            get(orders::get).put(orders::update).delete(orders::delete),
        )
        .route("/api/orders/customer/:customer_id", get(orders::list_by_customer))
        .with_state(state)
}
