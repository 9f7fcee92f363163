//! HTTP API: server bootstrap, routing, and response mapping.

pub mod app;
pub mod config;
