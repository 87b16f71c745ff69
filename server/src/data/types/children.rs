//! Plant child entities: size profiles, care guidelines, fertilizer
//! schedules, variants and the variant/tag join
//!
//! All children reference their parent through a required `plantId`
//! (`variantId` for the join). Foreign keys are validated at write time in
//! the route layer; rows themselves carry plain id strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::default_true;
use super::enums::{PlantSize, Season};

// =============================================================================
// Size profile
// =============================================================================

/// Stored size profile record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SizeProfileRow {
    pub id: String,
    pub plant_id: String,
    pub size: PlantSize,
    /// cm
    pub height: Option<i32>,
    /// kg
    pub weight: Option<f64>,
}

/// Insert schema for size profiles
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSizeProfile {
    pub plant_id: String,
    pub size: PlantSize,
    #[validate(range(min = 0, message = "Height must be non-negative"))]
    pub height: Option<i32>,
    #[validate(range(min = 0.0, message = "Weight must be non-negative"))]
    pub weight: Option<f64>,
}

impl NewSizeProfile {
    pub fn into_row(self, id: String) -> SizeProfileRow {
        SizeProfileRow {
            id,
            plant_id: self.plant_id,
            size: self.size,
            height: self.height,
            weight: self.weight,
        }
    }
}

/// Partial-update schema for size profiles
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SizeProfilePatch {
    pub plant_id: Option<String>,
    pub size: Option<PlantSize>,
    #[validate(range(min = 0, message = "Height must be non-negative"))]
    pub height: Option<i32>,
    #[validate(range(min = 0.0, message = "Weight must be non-negative"))]
    pub weight: Option<f64>,
}

impl SizeProfilePatch {
    pub fn apply(self, row: &mut SizeProfileRow) {
        if let Some(plant_id) = self.plant_id {
            row.plant_id = plant_id;
        }
        if let Some(size) = self.size {
            row.size = size;
        }
        if let Some(height) = self.height {
            row.height = Some(height);
        }
        if let Some(weight) = self.weight {
            row.weight = Some(weight);
        }
    }
}

// =============================================================================
// Care guideline
// =============================================================================

/// Stored seasonal care guideline record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CareGuidelineRow {
    pub id: String,
    pub plant_id: String,
    pub season: Season,
    pub watering_frequency: Option<String>,
    /// ml
    pub water_amount: Option<i32>,
    pub sunlight_type: Option<String>,
    pub humidity_level: Option<String>,
    pub care_notes: Option<String>,
}

/// Insert schema for care guidelines
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCareGuideline {
    pub plant_id: String,
    pub season: Season,
    pub watering_frequency: Option<String>,
    #[validate(range(min = 0, message = "Water amount must be non-negative"))]
    pub water_amount: Option<i32>,
    pub sunlight_type: Option<String>,
    pub humidity_level: Option<String>,
    pub care_notes: Option<String>,
}

impl NewCareGuideline {
    pub fn into_row(self, id: String) -> CareGuidelineRow {
        CareGuidelineRow {
            id,
            plant_id: self.plant_id,
            season: self.season,
            watering_frequency: self.watering_frequency,
            water_amount: self.water_amount,
            sunlight_type: self.sunlight_type,
            humidity_level: self.humidity_level,
            care_notes: self.care_notes,
        }
    }
}

/// Partial-update schema for care guidelines
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CareGuidelinePatch {
    pub plant_id: Option<String>,
    pub season: Option<Season>,
    pub watering_frequency: Option<String>,
    #[validate(range(min = 0, message = "Water amount must be non-negative"))]
    pub water_amount: Option<i32>,
    pub sunlight_type: Option<String>,
    pub humidity_level: Option<String>,
    pub care_notes: Option<String>,
}

impl CareGuidelinePatch {
    pub fn apply(self, row: &mut CareGuidelineRow) {
        if let Some(plant_id) = self.plant_id {
            row.plant_id = plant_id;
        }
        if let Some(season) = self.season {
            row.season = season;
        }
        if let Some(v) = self.watering_frequency {
            row.watering_frequency = Some(v);
        }
        if let Some(v) = self.water_amount {
            row.water_amount = Some(v);
        }
        if let Some(v) = self.sunlight_type {
            row.sunlight_type = Some(v);
        }
        if let Some(v) = self.humidity_level {
            row.humidity_level = Some(v);
        }
        if let Some(v) = self.care_notes {
            row.care_notes = Some(v);
        }
    }
}

// =============================================================================
// Fertilizer schedule
// =============================================================================

/// Stored fertilizer schedule record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerScheduleRow {
    pub id: String,
    pub plant_id: String,
    pub fertilizer_id: String,
    pub application_frequency: Option<String>,
    pub application_method: Option<String>,
    pub season: Option<Season>,
    pub application_time: Option<String>,
    pub dosage: Option<String>,
    pub safety_notes: Option<String>,
}

/// Insert schema for fertilizer schedules
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewFertilizerSchedule {
    pub plant_id: String,
    pub fertilizer_id: String,
    pub application_frequency: Option<String>,
    pub application_method: Option<String>,
    pub season: Option<Season>,
    pub application_time: Option<String>,
    pub dosage: Option<String>,
    pub safety_notes: Option<String>,
}

impl NewFertilizerSchedule {
    pub fn into_row(self, id: String) -> FertilizerScheduleRow {
        FertilizerScheduleRow {
            id,
            plant_id: self.plant_id,
            fertilizer_id: self.fertilizer_id,
            application_frequency: self.application_frequency,
            application_method: self.application_method,
            season: self.season,
            application_time: self.application_time,
            dosage: self.dosage,
            safety_notes: self.safety_notes,
        }
    }
}

/// Partial-update schema for fertilizer schedules
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerSchedulePatch {
    pub plant_id: Option<String>,
    pub fertilizer_id: Option<String>,
    pub application_frequency: Option<String>,
    pub application_method: Option<String>,
    pub season: Option<Season>,
    pub application_time: Option<String>,
    pub dosage: Option<String>,
    pub safety_notes: Option<String>,
}

impl FertilizerSchedulePatch {
    pub fn apply(self, row: &mut FertilizerScheduleRow) {
        if let Some(plant_id) = self.plant_id {
            row.plant_id = plant_id;
        }
        if let Some(fertilizer_id) = self.fertilizer_id {
            row.fertilizer_id = fertilizer_id;
        }
        if let Some(v) = self.application_frequency {
            row.application_frequency = Some(v);
        }
        if let Some(v) = self.application_method {
            row.application_method = Some(v);
        }
        if let Some(v) = self.season {
            row.season = Some(v);
        }
        if let Some(v) = self.application_time {
            row.application_time = Some(v);
        }
        if let Some(v) = self.dosage {
            row.dosage = Some(v);
        }
        if let Some(v) = self.safety_notes {
            row.safety_notes = Some(v);
        }
    }
}

// =============================================================================
// Variant
// =============================================================================

/// Stored variant record (a purchasable SKU of a plant)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariantRow {
    pub id: String,
    pub plant_id: String,
    pub color_id: String,
    pub size_id: Option<String>,
    pub sku: String,
    pub price: f64,
    pub cost_price: Option<f64>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub primary_image: Option<String>,
    pub additional_images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert schema for variants
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewVariant {
    pub plant_id: String,
    pub color_id: String,
    pub size_id: Option<String>,
    #[validate(length(min = 1, max = 64, message = "SKU must be 1-64 characters"))]
    pub sku: String,
    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: f64,
    #[validate(range(min = 0.0, message = "Cost price must be non-negative"))]
    pub cost_price: Option<f64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub notes: Option<String>,
    pub primary_image: Option<String>,
    #[serde(default)]
    pub additional_images: Vec<String>,
}

impl NewVariant {
    pub fn into_row(self, id: String, created_at: DateTime<Utc>) -> VariantRow {
        VariantRow {
            id,
            plant_id: self.plant_id,
            color_id: self.color_id,
            size_id: self.size_id,
            sku: self.sku,
            price: self.price,
            cost_price: self.cost_price,
            is_active: self.is_active,
            notes: self.notes,
            primary_image: self.primary_image,
            additional_images: self.additional_images,
            created_at,
        }
    }
}

/// Partial-update schema for variants
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariantPatch {
    pub plant_id: Option<String>,
    pub color_id: Option<String>,
    pub size_id: Option<String>,
    #[validate(length(min = 1, max = 64, message = "SKU must be 1-64 characters"))]
    pub sku: Option<String>,
    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0, message = "Cost price must be non-negative"))]
    pub cost_price: Option<f64>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
    pub primary_image: Option<String>,
    pub additional_images: Option<Vec<String>>,
}

impl VariantPatch {
    pub fn apply(self, row: &mut VariantRow) {
        if let Some(plant_id) = self.plant_id {
            row.plant_id = plant_id;
        }
        if let Some(color_id) = self.color_id {
            row.color_id = color_id;
        }
        if let Some(size_id) = self.size_id {
            row.size_id = Some(size_id);
        }
        if let Some(sku) = self.sku {
            row.sku = sku;
        }
        if let Some(price) = self.price {
            row.price = price;
        }
        if let Some(cost_price) = self.cost_price {
            row.cost_price = Some(cost_price);
        }
        if let Some(is_active) = self.is_active {
            row.is_active = is_active;
        }
        if let Some(notes) = self.notes {
            row.notes = Some(notes);
        }
        if let Some(primary_image) = self.primary_image {
            row.primary_image = Some(primary_image);
        }
        if let Some(additional_images) = self.additional_images {
            row.additional_images = additional_images;
        }
    }
}

// =============================================================================
// Variant tag (join)
// =============================================================================

/// Stored variant/tag association
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariantTagRow {
    pub id: String,
    pub variant_id: String,
    pub tag_id: String,
}

/// Insert schema for variant tags
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewVariantTag {
    #[validate(length(min = 1, message = "variantId is required"))]
    pub variant_id: String,
    #[validate(length(min = 1, message = "tagId is required"))]
    pub tag_id: String,
}

impl NewVariantTag {
    pub fn into_row(self, id: String) -> VariantTagRow {
        VariantTagRow {
            id,
            variant_id: self.variant_id,
            tag_id: self.tag_id,
        }
    }
}

/// Partial-update schema for variant tags
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariantTagPatch {
    pub variant_id: Option<String>,
    pub tag_id: Option<String>,
}

impl VariantTagPatch {
    pub fn apply(self, row: &mut VariantTagRow) {
        if let Some(variant_id) = self.variant_id {
            row.variant_id = variant_id;
        }
        if let Some(tag_id) = self.tag_id {
            row.tag_id = tag_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_insert_requires_sku_and_price() {
        let missing: Result<NewVariant, _> =
            serde_json::from_str(r#"{"plantId": "p1", "colorId": "c1"}"#);
        assert!(missing.is_err());

        let negative: NewVariant = serde_json::from_str(
            r#"{"plantId": "p1", "colorId": "c1", "sku": "MON-GRN-S", "price": -1.0}"#,
        )
        .unwrap();
        assert!(negative.validate().is_err());
    }

    #[test]
    fn care_guideline_rejects_unknown_season() {
        let bad: Result<NewCareGuideline, _> =
            serde_json::from_str(r#"{"plantId": "p1", "season": "Autumn"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn variant_patch_merges_only_supplied_fields() {
        let new: NewVariant = serde_json::from_str(
            r#"{"plantId": "p1", "colorId": "c1", "sku": "MON-GRN-S", "price": 499.0}"#,
        )
        .unwrap();
        let mut row = new.into_row("v1".into(), Utc::now());

        VariantPatch {
            price: Some(549.0),
            ..Default::default()
        }
        .apply(&mut row);

        assert_eq!(row.price, 549.0);
        assert_eq!(row.sku, "MON-GRN-S");
        assert_eq!(row.plant_id, "p1");
    }
}
