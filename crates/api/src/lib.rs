//! Site diary API server library.
//!
//! Exposes the building blocks (config, state, error handling, REST routes,
//! GraphQL schema) so integration tests and the binary entrypoints can both
//! access them.

pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
