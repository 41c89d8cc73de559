//! proxy-core: Shared infrastructure for the plan proxy service.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
