//! Infrastructure adapters. Implement outbound ports.
//!
//! HTTP, location providers, terminal UI, in-memory doubles. Map errors to DomainError.

pub mod http;
pub mod location;
pub mod mock;
pub mod ui;
