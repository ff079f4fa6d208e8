//! Request extractors that report rejections through [`crate::error::AppError`].

mod id;
mod json;
pub use id::EntityId;
pub use json::ValidatedJson;
