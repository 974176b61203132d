//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Model invocation (Bedrock runtime over HTTP, mock for offline use)
//! - The recipegen API itself (axum server, CLI controllers, DI container)
//! - The client-side API adapter used by the CLI

pub mod adapter;
pub mod api;

pub use adapter::*;
