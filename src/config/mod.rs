//! Configuration for the knowledge store.

mod loader;
mod types;

pub use loader::*;
pub use types::*;
