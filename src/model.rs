//! Persisted entities. Field names match the column names of the `customers` and
//! `orders` tables.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 255;
pub const PHONE_MAX_LEN: usize = 20;
pub const ORDER_NUMBER_MAX_LEN: usize = 50;
pub const STATUS_MAX_LEN: usize = 50;
pub const NOTES_MAX_LEN: usize = 500;

/// Fractional digits kept for `orders.total_amount` (NUMERIC(18, 2)).
pub const AMOUNT_SCALE: u32 = 2;
/// Integer digits left by NUMERIC(18, 2).
pub const AMOUNT_INTEGER_DIGITS: u32 = 16;

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Customer fields supplied on insert; the store assigns the id.
#[derive(Clone, Debug)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub order_number: String,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug)]
pub struct NewOrder {
    pub customer_id: i32,
    pub order_number: String,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An order with its owning customer attached. `customer` is only `None` if the
/// join found no row, which the foreign key rules out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderWithCustomer {
    pub order: Order,
    pub customer: Option<Customer>,
}

/// Rounds an amount to the stored scale, half away from zero like PostgreSQL numeric.
pub fn normalize_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// True when the amount fits NUMERIC(18, 2) after rounding.
pub fn amount_fits(amount: Decimal) -> bool {
    let limit = Decimal::from(10_i64.pow(AMOUNT_INTEGER_DIGITS));
    normalize_amount(amount).abs() < limit
}
