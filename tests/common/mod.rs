//! Shared fixtures: a PostgreSQL container with the schema applied, the seed
//! data, and a helper that drives the router in-process.

// Each test binary compiles this module separately and uses a different subset.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use customer_orders::model::{Customer, NewCustomer, NewOrder, Order};
use customer_orders::{app, apply_migrations, AppConfig, AppState, CustomerStore, OrderStore};
use rstest::fixture;
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};
use tower::ServiceExt;

pub const MISSING_ID: i32 = 99999;

pub type PgContainer = ContainerAsync<GenericImage>;

pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: PgContainer,
}

pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        send(&self.router, method, uri, body).await
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Response {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> Response {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.send(Method::DELETE, uri, None).await
    }
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = router
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    Response {
        status,
        headers,
        body,
    }
}

/// Start PostgreSQL in a container, apply the schema and build the router.
#[fixture]
pub async fn test_app() -> TestApp {
    let container = GenericImage::new("postgres", "16-alpine")
        .with_exposed_port(5432.tcp())
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ))
        .with_env_var("POSTGRES_HOST_AUTH_METHOD", "trust")
        .with_startup_timeout(std::time::Duration::from_secs(120))
        .start()
        .await
        .expect("failed to start PostgreSQL container");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("container port");
    let url = format!("postgres://postgres@127.0.0.1:{}/postgres", port);

    // The server restarts once after initdb, so the first attempts may be refused.
    let mut attempts = 0;
    let pool = loop {
        match PgPoolOptions::new().max_connections(5).connect(&url).await {
            Ok(pool) => break pool,
            Err(e) if attempts < 20 => {
                attempts += 1;
                tracing::debug!(error = %e, attempts, "waiting for postgres");
                tokio::time::sleep(std::time::Duration::from_millis(250)).await;
            }
            Err(e) => panic!("could not connect to test database: {}", e),
        }
    };
    apply_migrations(&pool).await.expect("schema");

    let router = app(AppState::new(pool.clone()), &AppConfig::default());
    TestApp {
        router,
        pool,
        _container: container,
    }
}

pub async fn seed_customers(pool: &PgPool) -> Vec<Customer> {
    let rows = [
        ("John", "Doe", "john.doe@example.com", Some("555-0101")),
        ("Jane", "Smith", "jane.smith@example.com", Some("555-0102")),
        ("Bob", "Johnson", "bob.johnson@example.com", Some("555-0103")),
        ("Alice", "Williams", "alice.williams@example.com", None),
        ("Charlie", "Brown", "charlie.brown@example.com", Some("555-0105")),
    ];
    let mut customers = Vec::with_capacity(rows.len());
    for (first, last, email, phone) in rows {
        let new = NewCustomer {
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            phone_number: phone.map(Into::into),
            created_at: Utc::now(),
        };
        customers.push(CustomerStore::insert(pool, &new).await.expect("seed customer"));
    }
    customers
}

/// Five orders spread over the first three customers.
pub async fn seed_orders(pool: &PgPool, customers: &[Customer]) -> Vec<Order> {
    let now = Utc::now();
    let rows = [
        (0, "ORD-001", 10, Decimal::new(29999, 2), "Completed", Some("First order")),
        (0, "ORD-002", 5, Decimal::new(14950, 2), "Shipped", None),
        (1, "ORD-003", 3, Decimal::new(59999, 2), "Processing", Some("Rush order")),
        (1, "ORD-004", 2, Decimal::new(8999, 2), "Pending", None),
        (2, "ORD-005", 1, Decimal::new(129900, 2), "Completed", Some("Large order with discount")),
    ];
    let mut orders = Vec::with_capacity(rows.len());
    for (owner, number, days_ago, amount, status, notes) in rows {
        let new = NewOrder {
            customer_id: customers[owner].id,
            order_number: number.into(),
            order_date: now - Duration::days(days_ago),
            total_amount: amount,
            status: status.into(),
            notes: notes.map(Into::into),
            created_at: now,
        };
        orders.push(OrderStore::insert(pool, &new).await.expect("seed order"));
    }
    orders
}

pub fn unique_email(prefix: &str) -> String {
    format!("{}.{}@example.com", prefix, uuid::Uuid::new_v4())
}

pub fn unique_order_number(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &id[..8])
}

/// Exact value of a JSON number, as emitted by the server.
pub fn decimal(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => n.to_string().parse().expect("numeric amount"),
        other => panic!("expected a JSON number, got {}", other),
    }
}
