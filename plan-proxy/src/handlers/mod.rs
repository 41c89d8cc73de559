//! HTTP handlers for the plan proxy.

pub mod generate_plan;
pub mod health;
pub mod metrics;
