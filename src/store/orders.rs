use super::{classify, StoreError, Violation};
use crate::model::{Customer, NewOrder, Order, OrderWithCustomer};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

const SELECT_ALL: &str = "SELECT id, customer_id, order_number, order_date, total_amount, status, notes, \
     created_at, updated_at FROM orders ORDER BY id";

const SELECT_BY_ID: &str = "SELECT id, customer_id, order_number, order_date, total_amount, status, notes, \
     created_at, updated_at FROM orders WHERE id = $1";

const INSERT: &str = "INSERT INTO orders \
     (customer_id, order_number, order_date, total_amount, status, notes, created_at) \
     VALUES ($1, $2, $3, $4, $5, $6, $7) \
     RETURNING id, customer_id, order_number, order_date, total_amount, status, notes, \
     created_at, updated_at";

const UPDATE: &str = "UPDATE orders \
     SET customer_id = $2, order_number = $3, order_date = $4, total_amount = $5, \
     status = $6, notes = $7, updated_at = $8 \
     WHERE id = $1";

const DELETE: &str = "DELETE FROM orders WHERE id = $1";

/// Orders joined to their customer; customer columns carry a `c_` prefix.
const SELECT_WITH_CUSTOMER: &str = "SELECT o.id, o.customer_id, o.order_number, o.order_date, \
     o.total_amount, o.status, o.notes, o.created_at, o.updated_at, \
     c.id AS c_id, c.first_name AS c_first_name, c.last_name AS c_last_name, \
     c.email AS c_email, c.phone_number AS c_phone_number, \
     c.created_at AS c_created_at, c.updated_at AS c_updated_at \
     FROM orders o LEFT JOIN customers c ON c.id = o.customer_id";

#[derive(sqlx::FromRow)]
struct OrderCustomerRow {
    #[sqlx(flatten)]
    order: Order,
    c_id: Option<i32>,
    c_first_name: Option<String>,
    c_last_name: Option<String>,
    c_email: Option<String>,
    c_phone_number: Option<String>,
    c_created_at: Option<DateTime<Utc>>,
    c_updated_at: Option<DateTime<Utc>>,
}

impl From<OrderCustomerRow> for OrderWithCustomer {
    fn from(row: OrderCustomerRow) -> Self {
        let customer = match (
            row.c_id,
            row.c_first_name,
            row.c_last_name,
            row.c_email,
            row.c_created_at,
        ) {
            (Some(id), Some(first_name), Some(last_name), Some(email), Some(created_at)) => {
                Some(Customer {
                    id,
                    first_name,
                    last_name,
                    email,
                    phone_number: row.c_phone_number,
                    created_at,
                    updated_at: row.c_updated_at,
                })
            }
            _ => None,
        };
        OrderWithCustomer {
            order: row.order,
            customer,
        }
    }
}

pub struct OrderStore;

impl OrderStore {
    pub async fn list(pool: &PgPool) -> Result<Vec<Order>, StoreError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Order>(SELECT_ALL)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn find(pool: &PgPool, id: i32) -> Result<Option<Order>, StoreError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let row = sqlx::query_as::<_, Order>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// All orders with their customer attached, in id order.
    pub async fn list_with_customer(pool: &PgPool) -> Result<Vec<OrderWithCustomer>, StoreError> {
        let sql = format!("{} ORDER BY o.id", SELECT_WITH_CUSTOMER);
        Self::fetch_with_customer(pool, &sql, None).await
    }

    pub async fn find_with_customer(
        pool: &PgPool,
        id: i32,
    ) -> Result<Option<OrderWithCustomer>, StoreError> {
        let sql = format!("{} WHERE o.id = $1", SELECT_WITH_CUSTOMER);
        let mut rows = Self::fetch_with_customer(pool, &sql, Some(id)).await?;
        Ok(rows.pop())
    }

    /// Orders owned by `customer_id`, each with the customer attached.
    pub async fn list_by_customer_with_customer(
        pool: &PgPool,
        customer_id: i32,
    ) -> Result<Vec<OrderWithCustomer>, StoreError> {
        let sql = format!("{} WHERE o.customer_id = $1 ORDER BY o.id", SELECT_WITH_CUSTOMER);
        Self::fetch_with_customer(pool, &sql, Some(customer_id)).await
    }

    /// Insert and return the stored row. A customer deleted since the caller checked
    /// it surfaces as [`Violation::MissingCustomer`].
    pub async fn insert(pool: &PgPool, new: &NewOrder) -> Result<Order, StoreError> {
        tracing::debug!(sql = %INSERT, customer_id = new.customer_id, "query");
        sqlx::query_as::<_, Order>(INSERT)
            .bind(new.customer_id)
            .bind(&new.order_number)
            .bind(new.order_date)
            .bind(new.total_amount)
            .bind(&new.status)
            .bind(&new.notes)
            .bind(new.created_at)
            .fetch_one(pool)
            .await
            .map_err(|e| classify(e, Some(Violation::MissingCustomer)))
    }

    /// Write every mutable column of `order`. Returns false when no row has its id.
    pub async fn update(pool: &PgPool, order: &Order) -> Result<bool, StoreError> {
        tracing::debug!(sql = %UPDATE, id = order.id, "query");
        let result = sqlx::query(UPDATE)
            .bind(order.id)
            .bind(order.customer_id)
            .bind(&order.order_number)
            .bind(order.order_date)
            .bind(order.total_amount)
            .bind(&order.status)
            .bind(&order.notes)
            .bind(order.updated_at)
            .execute(pool)
            .await
            .map_err(|e| classify(e, Some(Violation::MissingCustomer)))?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, StoreError> {
        tracing::debug!(sql = %DELETE, id, "query");
        let result = sqlx::query(DELETE)
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| classify(e, None))?;
        Ok(result.rows_affected() > 0)
    }

    async fn fetch_with_customer(
        pool: &PgPool,
        sql: &str,
        param: Option<i32>,
    ) -> Result<Vec<OrderWithCustomer>, StoreError> {
        tracing::debug!(sql = %sql, param = ?param, "query");
        let mut query = sqlx::query_as::<_, OrderCustomerRow>(sql);
        if let Some(p) = param {
            query = query.bind(p);
        }
        let rows = query.fetch_all(pool).await?;
        Ok(rows.into_iter().map(OrderWithCustomer::from).collect())
    }
}
