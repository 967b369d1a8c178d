//! HTTP API: routing, validation gate and the users resource handlers.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
