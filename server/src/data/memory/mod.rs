//! In-memory store
//!
//! One insertion-ordered [`Table`] per entity type, constructed once at
//! startup and shared through `Arc<MemoryStore>`. Storage is volatile by
//! design: process restart resets everything.
//!
//! The store stamps server-assigned fields (`id`, `createdAt`) and enforces
//! SKU uniqueness; everything else (required fields, enum membership,
//! foreign keys, cross-field rules) is rejected one layer up before a
//! mutation is attempted.

pub mod table;

use chrono::Utc;

pub use table::Table;

use super::error::DataError;
use super::types::{
    CareGuidelinePatch, CareGuidelineRow, CategoryPatch, CategoryRow, ColorPatch, ColorRow,
    FertilizerPatch, FertilizerRow, FertilizerSchedulePatch, FertilizerScheduleRow, NewCareGuideline,
    NewCategory, NewColor, NewFertilizer, NewFertilizerSchedule, NewPlant, NewSizeProfile, NewTag,
    NewTagGroup, NewVariant, NewVariantTag, PlantPatch, PlantRow, SizeProfilePatch, SizeProfileRow,
    TagGroupPatch, TagGroupRow, TagPatch, TagRow, VariantPatch, VariantRow, VariantTagPatch,
    VariantTagRow,
};

#[derive(Default)]
pub struct MemoryStore {
    categories: Table<CategoryRow>,
    colors: Table<ColorRow>,
    tag_groups: Table<TagGroupRow>,
    tags: Table<TagRow>,
    fertilizers: Table<FertilizerRow>,
    plants: Table<PlantRow>,
    size_profiles: Table<SizeProfileRow>,
    care_guidelines: Table<CareGuidelineRow>,
    fertilizer_schedules: Table<FertilizerScheduleRow>,
    variants: Table<VariantRow>,
    variant_tags: Table<VariantTagRow>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Categories
    // =========================================================================

    pub fn create_category(&self, new: NewCategory) -> CategoryRow {
        let id = cuid2::create_id();
        let row = new.into_row(id.clone(), Utc::now());
        self.categories.insert(id, row)
    }

    pub fn list_categories(&self) -> Vec<CategoryRow> {
        self.categories.list()
    }

    pub fn get_category(&self, id: &str) -> Option<CategoryRow> {
        self.categories.get(id)
    }

    pub fn update_category(&self, id: &str, patch: CategoryPatch) -> Option<CategoryRow> {
        self.categories.update(id, |row| patch.apply(row))
    }

    pub fn delete_category(&self, id: &str) -> bool {
        self.categories.remove(id)
    }

    pub fn has_category(&self, id: &str) -> bool {
        self.categories.contains(id)
    }

    // =========================================================================
    // Colors
    // =========================================================================

    pub fn create_color(&self, new: NewColor) -> ColorRow {
        let id = cuid2::create_id();
        let row = new.into_row(id.clone());
        self.colors.insert(id, row)
    }

    pub fn list_colors(&self) -> Vec<ColorRow> {
        self.colors.list()
    }

    pub fn get_color(&self, id: &str) -> Option<ColorRow> {
        self.colors.get(id)
    }

    pub fn update_color(&self, id: &str, patch: ColorPatch) -> Option<ColorRow> {
        self.colors.update(id, |row| patch.apply(row))
    }

    pub fn delete_color(&self, id: &str) -> bool {
        self.colors.remove(id)
    }

    pub fn has_color(&self, id: &str) -> bool {
        self.colors.contains(id)
    }

    // =========================================================================
    // Tag groups
    // =========================================================================

    pub fn create_tag_group(&self, new: NewTagGroup) -> TagGroupRow {
        let id = cuid2::create_id();
        let row = new.into_row(id.clone());
        self.tag_groups.insert(id, row)
    }

    pub fn list_tag_groups(&self) -> Vec<TagGroupRow> {
        self.tag_groups.list()
    }

    pub fn get_tag_group(&self, id: &str) -> Option<TagGroupRow> {
        self.tag_groups.get(id)
    }

    pub fn update_tag_group(&self, id: &str, patch: TagGroupPatch) -> Option<TagGroupRow> {
        self.tag_groups.update(id, |row| patch.apply(row))
    }

    pub fn delete_tag_group(&self, id: &str) -> bool {
        self.tag_groups.remove(id)
    }

    pub fn has_tag_group(&self, id: &str) -> bool {
        self.tag_groups.contains(id)
    }

    // =========================================================================
    // Tags
    // =========================================================================

    pub fn create_tag(&self, new: NewTag) -> TagRow {
        let id = cuid2::create_id();
        let row = new.into_row(id.clone());
        self.tags.insert(id, row)
    }

    /// Tags, optionally scoped to one tag group
    pub fn list_tags(&self, tag_group_id: Option<&str>) -> Vec<TagRow> {
        match tag_group_id {
            Some(group) => self.tags.find(|t| t.tag_group_id == group),
            None => self.tags.list(),
        }
    }

    pub fn get_tag(&self, id: &str) -> Option<TagRow> {
        self.tags.get(id)
    }

    pub fn update_tag(&self, id: &str, patch: TagPatch) -> Option<TagRow> {
        self.tags.update(id, |row| patch.apply(row))
    }

    pub fn delete_tag(&self, id: &str) -> bool {
        self.tags.remove(id)
    }

    pub fn has_tag(&self, id: &str) -> bool {
        self.tags.contains(id)
    }

    // =========================================================================
    // Fertilizers
    // =========================================================================

    pub fn create_fertilizer(&self, new: NewFertilizer) -> FertilizerRow {
        let id = cuid2::create_id();
        let row = new.into_row(id.clone());
        self.fertilizers.insert(id, row)
    }

    pub fn list_fertilizers(&self) -> Vec<FertilizerRow> {
        self.fertilizers.list()
    }

    pub fn get_fertilizer(&self, id: &str) -> Option<FertilizerRow> {
        self.fertilizers.get(id)
    }

    pub fn update_fertilizer(&self, id: &str, patch: FertilizerPatch) -> Option<FertilizerRow> {
        self.fertilizers.update(id, |row| patch.apply(row))
    }

    pub fn delete_fertilizer(&self, id: &str) -> bool {
        self.fertilizers.remove(id)
    }

    pub fn has_fertilizer(&self, id: &str) -> bool {
        self.fertilizers.contains(id)
    }

    // =========================================================================
    // Plants
    // =========================================================================

    pub fn create_plant(&self, new: NewPlant) -> PlantRow {
        let id = cuid2::create_id();
        let row = new.into_row(id.clone(), Utc::now());
        self.plants.insert(id, row)
    }

    pub fn list_plants(&self) -> Vec<PlantRow> {
        self.plants.list()
    }

    pub fn get_plant(&self, id: &str) -> Option<PlantRow> {
        self.plants.get(id)
    }

    pub fn update_plant(&self, id: &str, patch: PlantPatch) -> Option<PlantRow> {
        self.plants.update(id, |row| patch.apply(row))
    }

    /// No cascade: children of a deleted plant stay addressable.
    pub fn delete_plant(&self, id: &str) -> bool {
        self.plants.remove(id)
    }

    pub fn has_plant(&self, id: &str) -> bool {
        self.plants.contains(id)
    }

    // =========================================================================
    // Size profiles
    // =========================================================================

    pub fn create_size_profile(&self, new: NewSizeProfile) -> SizeProfileRow {
        let id = cuid2::create_id();
        let row = new.into_row(id.clone());
        self.size_profiles.insert(id, row)
    }

    pub fn list_size_profiles(&self, plant_id: Option<&str>) -> Vec<SizeProfileRow> {
        match plant_id {
            Some(plant) => self.size_profiles.find(|p| p.plant_id == plant),
            None => self.size_profiles.list(),
        }
    }

    pub fn get_size_profile(&self, id: &str) -> Option<SizeProfileRow> {
        self.size_profiles.get(id)
    }

    pub fn update_size_profile(&self, id: &str, patch: SizeProfilePatch) -> Option<SizeProfileRow> {
        self.size_profiles.update(id, |row| patch.apply(row))
    }

    pub fn delete_size_profile(&self, id: &str) -> bool {
        self.size_profiles.remove(id)
    }

    pub fn has_size_profile(&self, id: &str) -> bool {
        self.size_profiles.contains(id)
    }

    // =========================================================================
    // Care guidelines
    // =========================================================================

    pub fn create_care_guideline(&self, new: NewCareGuideline) -> CareGuidelineRow {
        let id = cuid2::create_id();
        let row = new.into_row(id.clone());
        self.care_guidelines.insert(id, row)
    }

    pub fn list_care_guidelines(&self, plant_id: Option<&str>) -> Vec<CareGuidelineRow> {
        match plant_id {
            Some(plant) => self.care_guidelines.find(|g| g.plant_id == plant),
            None => self.care_guidelines.list(),
        }
    }

    pub fn get_care_guideline(&self, id: &str) -> Option<CareGuidelineRow> {
        self.care_guidelines.get(id)
    }

    pub fn update_care_guideline(
        &self,
        id: &str,
        patch: CareGuidelinePatch,
    ) -> Option<CareGuidelineRow> {
        self.care_guidelines.update(id, |row| patch.apply(row))
    }

    pub fn delete_care_guideline(&self, id: &str) -> bool {
        self.care_guidelines.remove(id)
    }

    pub fn has_care_guideline(&self, id: &str) -> bool {
        self.care_guidelines.contains(id)
    }

    // =========================================================================
    // Fertilizer schedules
    // =========================================================================

    pub fn create_fertilizer_schedule(&self, new: NewFertilizerSchedule) -> FertilizerScheduleRow {
        let id = cuid2::create_id();
        let row = new.into_row(id.clone());
        self.fertilizer_schedules.insert(id, row)
    }

    pub fn list_fertilizer_schedules(&self, plant_id: Option<&str>) -> Vec<FertilizerScheduleRow> {
        match plant_id {
            Some(plant) => self.fertilizer_schedules.find(|s| s.plant_id == plant),
            None => self.fertilizer_schedules.list(),
        }
    }

    pub fn get_fertilizer_schedule(&self, id: &str) -> Option<FertilizerScheduleRow> {
        self.fertilizer_schedules.get(id)
    }

    pub fn update_fertilizer_schedule(
        &self,
        id: &str,
        patch: FertilizerSchedulePatch,
    ) -> Option<FertilizerScheduleRow> {
        self.fertilizer_schedules.update(id, |row| patch.apply(row))
    }

    pub fn delete_fertilizer_schedule(&self, id: &str) -> bool {
        self.fertilizer_schedules.remove(id)
    }

    pub fn has_fertilizer_schedule(&self, id: &str) -> bool {
        self.fertilizer_schedules.contains(id)
    }

    // =========================================================================
    // Variants
    // =========================================================================

    /// Create a variant; fails if the SKU is already taken.
    /// Check and insert run under one write lock.
    pub fn create_variant(&self, new: NewVariant) -> Result<VariantRow, DataError> {
        let id = cuid2::create_id();
        let row = new.into_row(id.clone(), Utc::now());
        self.variants.with_write(|rows| {
            if rows.values().any(|v| v.sku == row.sku) {
                return Err(DataError::DuplicateSku { sku: row.sku });
            }
            rows.insert(id, row.clone());
            Ok(row)
        })
    }

    pub fn list_variants(&self, plant_id: Option<&str>) -> Vec<VariantRow> {
        match plant_id {
            Some(plant) => self.variants.find(|v| v.plant_id == plant),
            None => self.variants.list(),
        }
    }

    pub fn get_variant(&self, id: &str) -> Option<VariantRow> {
        self.variants.get(id)
    }

    /// Merge a patch; a SKU change must not collide with another variant.
    pub fn update_variant(
        &self,
        id: &str,
        patch: VariantPatch,
    ) -> Result<Option<VariantRow>, DataError> {
        self.variants.with_write(|rows| {
            if let Some(new_sku) = patch.sku.as_deref() {
                if rows.iter().any(|(vid, v)| vid != id && v.sku == new_sku) {
                    return Err(DataError::DuplicateSku {
                        sku: new_sku.to_string(),
                    });
                }
            }
            match rows.get_mut(id) {
                Some(row) => {
                    patch.apply(row);
                    Ok(Some(row.clone()))
                }
                None => Ok(None),
            }
        })
    }

    pub fn delete_variant(&self, id: &str) -> bool {
        self.variants.remove(id)
    }

    pub fn has_variant(&self, id: &str) -> bool {
        self.variants.contains(id)
    }

    // =========================================================================
    // Variant tags
    // =========================================================================

    pub fn create_variant_tag(&self, new: NewVariantTag) -> VariantTagRow {
        let id = cuid2::create_id();
        let row = new.into_row(id.clone());
        self.variant_tags.insert(id, row)
    }

    pub fn list_variant_tags(&self, variant_id: Option<&str>) -> Vec<VariantTagRow> {
        match variant_id {
            Some(variant) => self.variant_tags.find(|t| t.variant_id == variant),
            None => self.variant_tags.list(),
        }
    }

    pub fn get_variant_tag(&self, id: &str) -> Option<VariantTagRow> {
        self.variant_tags.get(id)
    }

    pub fn update_variant_tag(&self, id: &str, patch: VariantTagPatch) -> Option<VariantTagRow> {
        self.variant_tags.update(id, |row| patch.apply(row))
    }

    pub fn delete_variant_tag(&self, id: &str) -> bool {
        self.variant_tags.remove(id)
    }

    pub fn has_variant_tag(&self, id: &str) -> bool {
        self.variant_tags.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_plant(name: &str) -> NewPlant {
        serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
    }

    fn new_variant(plant_id: &str, sku: &str) -> NewVariant {
        serde_json::from_value(serde_json::json!({
            "plantId": plant_id,
            "colorId": "color-1",
            "sku": sku,
            "price": 499.0,
        }))
        .unwrap()
    }

    #[test]
    fn create_then_get_returns_equal_record() {
        let store = MemoryStore::new();
        let created = store.create_plant(new_plant("Monstera"));

        let fetched = store.get_plant(&created.id).unwrap();
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.created_at, created.created_at);
        assert!(!created.id.is_empty());
    }

    #[test]
    fn update_changes_only_supplied_fields() {
        let store = MemoryStore::new();
        let created = store.create_category(NewCategory {
            name: "Indoor Plants".into(),
            description: Some("low light".into()),
            is_active: true,
        });

        let updated = store
            .update_category(
                &created.id,
                CategoryPatch {
                    name: Some("Indoor".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Indoor");
        assert_eq!(updated.description.as_deref(), Some("low light"));
        assert!(updated.is_active);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn update_missing_id_is_none() {
        let store = MemoryStore::new();
        assert!(store
            .update_plant("missing", PlantPatch::default())
            .is_none());
    }

    #[test]
    fn delete_is_idempotent_false_not_an_error() {
        let store = MemoryStore::new();
        let plant = store.create_plant(new_plant("Tulsi"));

        assert!(store.delete_plant(&plant.id));
        assert!(store.get_plant(&plant.id).is_none());
        assert!(!store.delete_plant(&plant.id));
    }

    #[test]
    fn deleting_plant_keeps_children_addressable() {
        let store = MemoryStore::new();
        let plant = store.create_plant(new_plant("Monstera"));
        let variant = store.create_variant(new_variant(&plant.id, "MON-1")).unwrap();

        assert!(store.delete_plant(&plant.id));
        let orphan = store.get_variant(&variant.id).unwrap();
        assert_eq!(orphan.plant_id, plant.id);
    }

    #[test]
    fn variant_listing_filters_by_plant() {
        let store = MemoryStore::new();
        let monstera = store.create_plant(new_plant("Monstera"));
        let tulsi = store.create_plant(new_plant("Tulsi"));
        store.create_variant(new_variant(&monstera.id, "MON-1")).unwrap();
        store.create_variant(new_variant(&monstera.id, "MON-2")).unwrap();
        store.create_variant(new_variant(&tulsi.id, "TUL-1")).unwrap();

        let filtered = store.list_variants(Some(&monstera.id));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|v| v.plant_id == monstera.id));
        assert_eq!(store.list_variants(None).len(), 3);
    }

    #[test]
    fn duplicate_sku_rejected_on_create_and_update() {
        let store = MemoryStore::new();
        let plant = store.create_plant(new_plant("Monstera"));
        store.create_variant(new_variant(&plant.id, "MON-1")).unwrap();
        let second = store.create_variant(new_variant(&plant.id, "MON-2")).unwrap();

        assert!(matches!(
            store.create_variant(new_variant(&plant.id, "MON-1")),
            Err(DataError::DuplicateSku { .. })
        ));

        let collide = store.update_variant(
            &second.id,
            VariantPatch {
                sku: Some("MON-1".into()),
                ..Default::default()
            },
        );
        assert!(matches!(collide, Err(DataError::DuplicateSku { .. })));

        // re-asserting its own SKU is fine
        let same = store
            .update_variant(
                &second.id,
                VariantPatch {
                    sku: Some("MON-2".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(same.unwrap().sku, "MON-2");
    }

    #[test]
    fn tags_filter_by_group() {
        let store = MemoryStore::new();
        let group = store.create_tag_group(NewTagGroup {
            name: "Light".into(),
            description: None,
            is_active: true,
        });
        store.create_tag(NewTag {
            name: "Low light".into(),
            tag_group_id: group.id.clone(),
            is_active: true,
        });
        store.create_tag(NewTag {
            name: "Full sun".into(),
            tag_group_id: "other-group".into(),
            is_active: true,
        });

        assert_eq!(store.list_tags(Some(&group.id)).len(), 1);
        assert_eq!(store.list_tags(None).len(), 2);
    }
}
