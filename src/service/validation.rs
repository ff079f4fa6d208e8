//! Field rules checked on request bodies before they reach the services.

use crate::dto::{CustomerInput, OrderInput};
use crate::error::AppError;
use crate::model::{
    amount_fits, AMOUNT_INTEGER_DIGITS, EMAIL_MAX_LEN, NAME_MAX_LEN, NOTES_MAX_LEN,
    ORDER_NUMBER_MAX_LEN, PHONE_MAX_LEN, STATUS_MAX_LEN,
};
use rust_decimal::Decimal;

/// A request body with field rules. Stops at the first failing field.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

pub struct RequestValidator;

impl RequestValidator {
    /// Present and not blank, at most `max` characters.
    pub fn required(field: &str, value: &str, max: usize) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{} is required", field)));
        }
        Self::max_length(field, value, max)
    }

    /// Absent, or at most `max` characters.
    pub fn optional(field: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
        match value {
            Some(v) => Self::max_length(field, v, max),
            None => Ok(()),
        }
    }

    pub fn max_length(field: &str, value: &str, max: usize) -> Result<(), AppError> {
        if value.chars().count() > max {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                field, max
            )));
        }
        Ok(())
    }

    /// One `@` with a non-empty local part and a dotted-or-plain domain, no whitespace.
    pub fn email(field: &str, value: &str) -> Result<(), AppError> {
        let valid = match value.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !value.chars().any(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(AppError::Validation(format!("{} must be a valid email", field)));
        }
        Ok(())
    }

    pub fn amount(field: &str, value: Decimal) -> Result<(), AppError> {
        if !amount_fits(value) {
            return Err(AppError::Validation(format!(
                "{} must have at most {} integer digits",
                field, AMOUNT_INTEGER_DIGITS
            )));
        }
        Ok(())
    }
}

impl Validate for CustomerInput {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::required("firstName", &self.first_name, NAME_MAX_LEN)?;
        RequestValidator::required("lastName", &self.last_name, NAME_MAX_LEN)?;
        RequestValidator::required("email", &self.email, EMAIL_MAX_LEN)?;
        RequestValidator::email("email", &self.email)?;
        RequestValidator::optional("phoneNumber", self.phone_number.as_deref(), PHONE_MAX_LEN)
    }
}

impl Validate for OrderInput {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::required("orderNumber", &self.order_number, ORDER_NUMBER_MAX_LEN)?;
        RequestValidator::required("status", &self.status, STATUS_MAX_LEN)?;
        RequestValidator::optional("notes", self.notes.as_deref(), NOTES_MAX_LEN)?;
        RequestValidator::amount("totalAmount", self.total_amount)
    }
}
