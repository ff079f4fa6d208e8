use super::rejected;
use crate::dto::{CreateCustomer, CustomerResponse, UpdateCustomer};
use crate::error::AppError;
use crate::model::{Customer, NewCustomer};
use crate::store::CustomerStore;
use chrono::Utc;
use sqlx::PgPool;

pub struct CustomerService;

impl CustomerService {
    pub async fn list(pool: &PgPool) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = CustomerStore::list(pool).await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    pub async fn get(pool: &PgPool, id: i32) -> Result<CustomerResponse, AppError> {
        Self::load(pool, id).await.map(CustomerResponse::from)
    }

    /// Stamp `createdAt`, insert, and return the stored projection with its new id.
    pub async fn create(pool: &PgPool, input: CreateCustomer) -> Result<CustomerResponse, AppError> {
        let new = NewCustomer {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone_number: input.phone_number,
            created_at: Utc::now(),
        };
        let customer = CustomerStore::insert(pool, &new)
            .await
            .map_err(rejected("creating customer"))?;
        tracing::info!(id = customer.id, "customer created");
        Ok(customer.into())
    }

    /// Full replacement of the mutable fields; `updatedAt` is set to now.
    pub async fn update(pool: &PgPool, id: i32, input: UpdateCustomer) -> Result<(), AppError> {
        let mut customer = Self::load(pool, id).await?;
        customer.first_name = input.first_name;
        customer.last_name = input.last_name;
        customer.email = input.email;
        customer.phone_number = input.phone_number;
        customer.updated_at = Some(Utc::now());
        let updated = CustomerStore::update(pool, &customer)
            .await
            .map_err(rejected("updating customer"))?;
        if !updated {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// Fails with [`AppError::Referenced`] while orders still point at the customer.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        let customer = Self::load(pool, id).await?;
        let deleted = CustomerStore::delete(pool, customer.id)
            .await
            .map_err(rejected("deleting customer"))?;
        if !deleted {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn load(pool: &PgPool, id: i32) -> Result<Customer, AppError> {
        CustomerStore::find(pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Customer {} not found", id))
}
