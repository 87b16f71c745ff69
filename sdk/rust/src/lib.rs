//! # PlantDesk
//!
//! Rust client for the PlantDesk nursery inventory API.
//!
//! ## Quick Start
//!
//! ```no_run
//! use plantdesk::Client;
//!
//! # async fn example() -> Result<(), plantdesk::ClientError> {
//! let client = Client::new("http://127.0.0.1:5170");
//! let plants = client.plants().list().await?;
//! println!("{} plants", plants.len());
//! # Ok(())
//! # }
//! ```
//!
//! All read responses are cached per (path, query) pair; any mutation
//! through the client clears the cache so subsequent reads are fresh.

mod client;
mod error;
mod models;

pub use client::{Client, Deleted, Resource};
pub use error::ClientError;
pub use models::{
    CareGuideline, Category, Color, Fertilizer, FertilizerSchedule, Plant, PlantSize, Season,
    SizeProfile, Tag, TagGroup, Variant, VariantTag,
};
