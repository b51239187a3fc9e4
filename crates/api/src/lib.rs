//! HTTP API: config, routing, and request/response mapping for the
//! ABC/XYZ reports.

pub mod app;
pub mod config;
pub mod middleware;
