//! PlantDesk server
//!
//! REST backend for plant nursery inventory administration. The API layer
//! sits on top of an in-memory store; see `data` for the schema types.

pub mod api;
pub mod app;
pub mod core;
pub mod data;
