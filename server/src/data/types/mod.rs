//! Shared data types: entity rows, insert schemas and patch schemas
//!
//! One module per entity cluster. The `New*` / `*Patch` types double as the
//! request schemas for the route layer, so validation rules live here once.

pub mod catalog;
pub mod children;
pub mod enums;
pub mod plant;

pub use catalog::{
    CategoryPatch, CategoryRow, ColorPatch, ColorRow, FertilizerPatch, FertilizerRow,
    NewCategory, NewColor, NewFertilizer, NewTag, NewTagGroup, TagGroupPatch, TagGroupRow,
    TagPatch, TagRow,
};
pub use children::{
    CareGuidelinePatch, CareGuidelineRow, FertilizerSchedulePatch, FertilizerScheduleRow,
    NewCareGuideline, NewFertilizerSchedule, NewSizeProfile, NewVariant, NewVariantTag,
    SizeProfilePatch, SizeProfileRow, VariantPatch, VariantRow, VariantTagPatch, VariantTagRow,
};
pub use enums::{PlantSize, Season};
pub use plant::{NewPlant, PlantPatch, PlantRow};

/// serde default helper for `isActive`-style flags
pub(crate) fn default_true() -> bool {
    true
}
