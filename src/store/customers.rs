use super::{classify, StoreError, Violation};
use crate::model::{Customer, NewCustomer};
use sqlx::PgPool;

const SELECT_ALL: &str = "SELECT id, first_name, last_name, email, phone_number, created_at, updated_at \
     FROM customers ORDER BY id";

const SELECT_BY_ID: &str = "SELECT id, first_name, last_name, email, phone_number, created_at, updated_at \
     FROM customers WHERE id = $1";

const INSERT: &str = "INSERT INTO customers (first_name, last_name, email, phone_number, created_at) \
     VALUES ($1, $2, $3, $4, $5) \
     RETURNING id, first_name, last_name, email, phone_number, created_at, updated_at";

const UPDATE: &str = "UPDATE customers \
     SET first_name = $2, last_name = $3, email = $4, phone_number = $5, updated_at = $6 \
     WHERE id = $1";

const DELETE: &str = "DELETE FROM customers WHERE id = $1";

const EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)";

pub struct CustomerStore;

impl CustomerStore {
    /// All customers in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, StoreError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Customer>(SELECT_ALL)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn find(pool: &PgPool, id: i32) -> Result<Option<Customer>, StoreError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let row = sqlx::query_as::<_, Customer>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn exists(pool: &PgPool, id: i32) -> Result<bool, StoreError> {
        tracing::debug!(sql = %EXISTS, id, "query");
        let found: bool = sqlx::query_scalar(EXISTS).bind(id).fetch_one(pool).await?;
        Ok(found)
    }

    /// Insert and return the stored row, including the generated id.
    pub async fn insert(pool: &PgPool, new: &NewCustomer) -> Result<Customer, StoreError> {
        tracing::debug!(sql = %INSERT, "query");
        sqlx::query_as::<_, Customer>(INSERT)
            .bind(&new.first_name)
            .bind(&new.last_name)
            .bind(&new.email)
            .bind(&new.phone_number)
            .bind(new.created_at)
            .fetch_one(pool)
            .await
            .map_err(|e| classify(e, None))
    }

    /// Write every mutable column of `customer`. Returns false when no row has its id.
    pub async fn update(pool: &PgPool, customer: &Customer) -> Result<bool, StoreError> {
        tracing::debug!(sql = %UPDATE, id = customer.id, "query");
        let result = sqlx::query(UPDATE)
            .bind(customer.id)
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .bind(&customer.email)
            .bind(&customer.phone_number)
            .bind(customer.updated_at)
            .execute(pool)
            .await
            .map_err(|e| classify(e, None))?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Orders still referencing the customer make the store refuse,
    /// reported as [`Violation::CustomerHasOrders`].
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, StoreError> {
        tracing::debug!(sql = %DELETE, id, "query");
        let result = sqlx::query(DELETE)
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| classify(e, Some(Violation::CustomerHasOrders)))?;
        Ok(result.rows_affected() > 0)
    }
}
