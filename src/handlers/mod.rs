//! HTTP handlers for the customer and order resources.

pub mod customers;
pub mod orders;
