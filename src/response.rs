//! Response helpers shared by the resource handlers.

use axum::{
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde::Serialize;

/// 201 with a `Location` header pointing at the new resource.
pub fn created<T: Serialize>(
    location: String,
    data: T,
) -> (StatusCode, [(HeaderName, String); 1], Json<T>) {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
