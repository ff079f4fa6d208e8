//! Request and response shapes exchanged over HTTP.

use crate::model::{Customer, Order, OrderWithCustomer};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/customers` and `PUT /api/customers/{id}`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

pub type CreateCustomer = CustomerInput;
pub type UpdateCustomer = CustomerInput;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            phone_number: c.phone_number,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Body of `POST /api/orders` and `PUT /api/orders/{id}`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    pub customer_id: i32,
    pub order_number: String,
    pub order_date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_amount: Decimal,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

pub type CreateOrder = OrderInput;
pub type UpdateOrder = OrderInput;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    pub customer_id: i32,
    pub order_number: String,
    pub order_date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_amount: Decimal,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub customer: Option<CustomerResponse>,
}

impl OrderResponse {
    fn new(o: Order, customer: Option<Customer>) -> Self {
        Self {
            id: o.id,
            customer_id: o.customer_id,
            order_number: o.order_number,
            order_date: o.order_date,
            total_amount: o.total_amount,
            status: o.status,
            notes: o.notes,
            created_at: o.created_at,
            updated_at: o.updated_at,
            customer: customer.map(CustomerResponse::from),
        }
    }
}

impl From<OrderWithCustomer> for OrderResponse {
    fn from(row: OrderWithCustomer) -> Self {
        Self::new(row.order, row.customer)
    }
}
