//! Resource logic for customers and orders: existence checks, timestamps and
//! read-modify-write on top of the store.

mod customers;
mod orders;
mod validation;
pub use customers::CustomerService;
pub use orders::OrderService;
pub use validation::{RequestValidator, Validate};

use crate::error::AppError;
use crate::store::StoreError;

/// Convert a failed write, logging the constraint that rejected it.
fn rejected(action: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |err| {
        if let StoreError::Conflict(violation) = &err {
            tracing::warn!(%violation, "error {}", action);
        }
        AppError::from(err)
    }
}
