//! Facts Keeper - Local file-backed knowledge store with relevance-ranked search.

pub mod clock;
pub mod config;
pub mod display;
pub mod storage;
pub mod store;
pub mod tools;
