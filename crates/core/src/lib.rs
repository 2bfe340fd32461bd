//! Domain types and validation for the WatchMe watchlist tracker.
//!
//! Shared by the data-access layer, the HTTP API, and the client so that
//! every layer agrees on the shape of a show and on what counts as valid.

pub mod error;
pub mod payload;
pub mod show;
pub mod types;
