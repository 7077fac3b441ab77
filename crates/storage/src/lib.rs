//! Storage layer for the launcher settings
//!
//! This crate provides the [`PreferenceStore`] capability together with a
//! persistent sled-backed implementation and an in-memory one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod memory;
pub mod store;

pub use kv::{KvConfig, KvStore};
pub use memory::MemoryStore;
pub use store::{KvError, PrefValue, PreferenceStore, Result, ValueKind};
