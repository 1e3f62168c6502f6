//! notification-service: a stateless HTTP stub that logs and echoes notification requests.
//!
//! Nothing is delivered, queued or stored. See [`startup::build_router`] for the routes.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
