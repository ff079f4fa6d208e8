use super::rejected;
use crate::dto::{CreateOrder, OrderResponse, UpdateOrder};
use crate::error::AppError;
use crate::model::{normalize_amount, Customer, NewOrder, OrderWithCustomer};
use crate::store::{CustomerStore, OrderStore};
use chrono::Utc;
use sqlx::PgPool;

pub struct OrderService;

impl OrderService {
    pub async fn list(pool: &PgPool) -> Result<Vec<OrderResponse>, AppError> {
        let orders = OrderStore::list_with_customer(pool).await?;
        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    pub async fn get(pool: &PgPool, id: i32) -> Result<OrderResponse, AppError> {
        OrderStore::find_with_customer(pool, id)
            .await?
            .map(OrderResponse::from)
            .ok_or_else(|| not_found(id))
    }

    /// The customer must exist even when it has no orders; an unknown customer is 404.
    pub async fn list_by_customer(
        pool: &PgPool,
        customer_id: i32,
    ) -> Result<Vec<OrderResponse>, AppError> {
        if !CustomerStore::exists(pool, customer_id).await? {
            return Err(AppError::NotFound("Customer not found".into()));
        }
        let orders = OrderStore::list_by_customer_with_customer(pool, customer_id).await?;
        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    pub async fn create(pool: &PgPool, input: CreateOrder) -> Result<OrderResponse, AppError> {
        let customer = Self::referenced_customer(pool, input.customer_id).await?;
        let new = NewOrder {
            customer_id: customer.id,
            order_number: input.order_number,
            order_date: input.order_date,
            total_amount: normalize_amount(input.total_amount),
            status: input.status,
            notes: input.notes,
            created_at: Utc::now(),
        };
        let order = OrderStore::insert(pool, &new)
            .await
            .map_err(rejected("creating order"))?;
        tracing::info!(id = order.id, customer_id = order.customer_id, "order created");
        Ok(OrderWithCustomer {
            order,
            customer: Some(customer),
        }
        .into())
    }

    /// Full replacement, including moving the order to another existing customer.
    pub async fn update(pool: &PgPool, id: i32, input: UpdateOrder) -> Result<(), AppError> {
        let mut order = OrderStore::find(pool, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let customer = Self::referenced_customer(pool, input.customer_id).await?;
        order.customer_id = customer.id;
        order.order_number = input.order_number;
        order.order_date = input.order_date;
        order.total_amount = normalize_amount(input.total_amount);
        order.status = input.status;
        order.notes = input.notes;
        order.updated_at = Some(Utc::now());
        let updated = OrderStore::update(pool, &order)
            .await
            .map_err(rejected("updating order"))?;
        if !updated {
            return Err(not_found(id));
        }
        Ok(())
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        let order = OrderStore::find(pool, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        if !OrderStore::delete(pool, order.id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// A body field naming a missing customer is a bad request, not a missing resource.
    async fn referenced_customer(pool: &PgPool, customer_id: i32) -> Result<Customer, AppError> {
        CustomerStore::find(pool, customer_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Customer not found".into()))
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Order {} not found", id))
}
