//! SSE HTTP handler for the web layer.
//!
//! This module contains only the Axum handler for the chat stream.
//! The bus and subscriber types live in the `sse` crate.

pub mod handler;
