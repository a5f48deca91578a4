//! # Roster - a school GraphQL API
//!
//! Roster serves students, teachers and courses over GraphQL, keeping them as
//! documents in MongoDB or in an in-process store.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default .roster.yml
//! roster init
//!
//! # Serve the API against MongoDB
//! roster serve --store mongodb --mongodb-uri mongodb://localhost:27017
//!
//! # Run a single query
//! roster query '{ courses { id title studentIds } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Stored document models (Student, Teacher, Course)
//! - [`storage`]: Document collections and their backends

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.roster.yml` configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `RosterError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server around it.
pub mod graphql;

/// Stored document models.
pub mod model;

/// Document storage layer.
pub mod storage;

pub mod logging;
