//! Schema bootstrap: DDL for the `customers` and `orders` tables.
//! Idempotent, so the server runs it on every start.

use crate::store::StoreError;
use sqlx::PgPool;

const CREATE_CUSTOMERS: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    first_name VARCHAR(100) NOT NULL,
    last_name VARCHAR(100) NOT NULL,
    email VARCHAR(255) NOT NULL,
    phone_number VARCHAR(20),
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ,
    CONSTRAINT customers_email_key UNIQUE (email)
)
"#;

const CREATE_ORDERS: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    customer_id INTEGER NOT NULL,
    order_number VARCHAR(50) NOT NULL,
    order_date TIMESTAMPTZ NOT NULL,
    total_amount NUMERIC(18, 2) NOT NULL,
    status VARCHAR(50) NOT NULL,
    notes VARCHAR(500),
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ,
    CONSTRAINT orders_order_number_key UNIQUE (order_number),
    CONSTRAINT orders_customer_id_fkey FOREIGN KEY (customer_id)
        REFERENCES customers (id) ON DELETE RESTRICT
)
"#;

const CREATE_ORDERS_CUSTOMER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS ix_orders_customer_id ON orders (customer_id)";

/// Statements in dependency order: customers before the orders that reference them.
pub const SCHEMA: &[&str] = &[CREATE_CUSTOMERS, CREATE_ORDERS, CREATE_ORDERS_CUSTOMER_INDEX];

/// Create tables, constraints and indexes that do not exist yet, in one transaction.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;
    for ddl in SCHEMA {
        tracing::debug!(sql = %ddl.trim(), "migration");
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(statements = SCHEMA.len(), "schema up to date");
    Ok(())
}
