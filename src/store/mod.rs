//! Knowledge store core: documents, scoring, commands, persistence and index.
//!
//! The facade ([`FactStore`]) composes the pieces:
//! - header parsing for the `key: value` prelude of each document
//! - the lexical relevance scorer
//! - project command matching (always ranked first)
//! - the insight writer and the regenerated `KNOWLEDGE.md` index

mod commands;
mod error;
mod facade;
mod header;
mod index;
mod scorer;
mod types;
mod writer;

pub use commands::*;
pub use error::*;
pub use facade::*;
pub use header::*;
pub use index::*;
pub use scorer::*;
pub use types::*;
pub use writer::*;
