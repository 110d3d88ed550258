//! Tool-layer boundary for external RPC adapters.
//!
//! Three operations over the knowledge store, each returning a uniform
//! [`ToolResponse`] envelope. Internal errors are caught and reported via
//! `success = false`; nothing propagates past this boundary.

mod handlers;
mod types;

pub use handlers::*;
pub use types::*;
