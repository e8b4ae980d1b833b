//! API module - HTTP routes, handlers, and models

pub mod assistant_handlers;
pub mod catalog;
pub mod cors;
pub mod handlers;
pub mod models;
pub mod routes;
