//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL: a SQLite file next to the process,
/// created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db?mode=rwc";

/// URL prefix of a private in-memory SQLite database
pub const SQLITE_MEMORY_PREFIX: &str = "sqlite::memory:";

// =============================================================================
// HTTP
// =============================================================================

/// HTML banner served at the root path
pub const ROOT_BANNER: &str = "<h1>User CRUD API</h1>";

/// Message returned whenever a user id has no matching record
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
