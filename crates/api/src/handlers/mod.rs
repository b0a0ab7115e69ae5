//! Request handlers.
//!
//! Handlers extract path and body parameters, delegate to a service in
//! [`crate::services`] and return its result as JSON. Errors propagate as
//! [`crate::error::AppError`].

pub mod registration;
