//! `armature-core` — framework-free building blocks for the HTTP scaffold.
//!
//! This crate contains the response envelope value object and the handler
//! failure model. Nothing in here knows about HTTP or the web framework.

pub mod envelope;
pub mod error;

pub use envelope::ApiResponse;
pub use error::{HandlerError, HandlerResult};
