//! Request handlers.
//!
//! Handlers delegate to the injected [`ShowStore`](watchme_db::store::ShowStore)
//! and map errors via [`AppError`](crate::error::AppError).

pub mod show;
