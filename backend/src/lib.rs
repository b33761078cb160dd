//! Wire model and query encoding for the hosted auth + REST backend.
//!
//! This crate owns the shapes exchanged with the backend-as-a-service behind
//! the dashboard: GoTrue-style auth payloads, PostgREST query strings, and the
//! row types of every table the UI touches. It performs no I/O itself; the
//! `client` crate executes requests from the browser and the host server only
//! reads [`BackendConfig`].

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod query;

pub use config::BackendConfig;
pub use error::BackendError;
pub use query::{Count, Method, Query};
