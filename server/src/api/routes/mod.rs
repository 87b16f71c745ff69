//! API route modules
//!
//! One module per entity, each exporting `routes()` plus its handlers and
//! state struct. The server nests them under their `/api/...` prefixes.

pub mod care_guidelines;
pub mod categories;
pub mod colors;
pub mod fertilizer_schedules;
pub mod fertilizers;
pub mod health;
pub mod plants;
pub mod size_profiles;
pub mod tag_groups;
pub mod tags;
pub mod variant_tags;
pub mod variants;
