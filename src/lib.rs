//! User CRUD API - a minimal HTTP service for a single `User` resource
//! backed by one relational table.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The `User` record and its wire shapes
//! - **services**: Use cases over the repository
//! - **infra**: Database connection, schema and repository
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on the default SQLite file
//! cargo run -- serve
//!
//! # Point at another database
//! DATABASE_URL=postgres://localhost/users cargo run -- serve --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::User;
pub use errors::{AppError, AppResult};
pub use infra::Database;
