//! Persistence gateway: typed CRUD over the `customers` and `orders` tables.
//!
//! Every operation takes the pool explicitly and runs a single statement, so each
//! write is atomic on its own and the connection goes back to the pool on every
//! exit path. Constraint violations the schema declares come back as
//! [`StoreError::Conflict`]; anything else is [`StoreError::Fatal`].

mod customers;
mod database;
mod orders;

pub use customers::CustomerStore;
pub use database::ensure_database_exists;
pub use orders::OrderStore;

use sqlx::error::ErrorKind;
use thiserror::Error;

pub const CUSTOMERS_EMAIL_KEY: &str = "customers_email_key";
pub const ORDERS_ORDER_NUMBER_KEY: &str = "orders_order_number_key";
pub const ORDERS_CUSTOMER_ID_FKEY: &str = "orders_customer_id_fkey";

/// A write rejected by a store constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("duplicate customer email")]
    DuplicateEmail,
    #[error("duplicate order number")]
    DuplicateOrderNumber,
    #[error("order references a missing customer")]
    MissingCustomer,
    #[error("customer is still referenced by orders")]
    CustomerHasOrders,
    #[error("constraint {0} violated")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("conflict: {0}")]
    Conflict(Violation),
    #[error("database: {0}")]
    Fatal(#[from] sqlx::Error),
}

/// Classify a failed write. Unique violations are named by constraint;
/// `foreign_key` says what a violation of `orders_customer_id_fkey` means for the
/// statement that raised it (an order write vs. a customer delete).
pub(crate) fn classify(err: sqlx::Error, foreign_key: Option<Violation>) -> StoreError {
    let violation = match &err {
        sqlx::Error::Database(db) => violation_for(db.kind(), db.constraint(), foreign_key),
        _ => None,
    };
    match violation {
        Some(v) => StoreError::Conflict(v),
        None => StoreError::Fatal(err),
    }
}

fn violation_for(
    kind: ErrorKind,
    constraint: Option<&str>,
    foreign_key: Option<Violation>,
) -> Option<Violation> {
    match kind {
        ErrorKind::UniqueViolation => Some(match constraint {
            Some(CUSTOMERS_EMAIL_KEY) => Violation::DuplicateEmail,
            Some(ORDERS_ORDER_NUMBER_KEY) => Violation::DuplicateOrderNumber,
            other => Violation::Other(other.unwrap_or("unique").to_string()),
        }),
        ErrorKind::ForeignKeyViolation => Some(match (constraint, foreign_key) {
            (Some(ORDERS_CUSTOMER_ID_FKEY) | None, Some(meaning)) => meaning,
            (other, _) => Violation::Other(other.unwrap_or("foreign key").to_string()),
        }),
        ErrorKind::CheckViolation => {
            Some(Violation::Other(constraint.unwrap_or("check").to_string()))
        }
        _ => None,
    }
}
