//! Data layer
//!
//! - `types` - entity rows plus the canonical insert/patch schemas
//! - `memory` - the in-memory store (one table per entity)
//! - `error` - data layer error type
//!
//! The store is volatile by design. The route layer only sees
//! `MemoryStore`, so a persistent backend can slot in behind the same
//! methods without touching the HTTP contract.

pub mod error;
pub mod memory;
pub mod types;

pub use error::DataError;
pub use memory::MemoryStore;
