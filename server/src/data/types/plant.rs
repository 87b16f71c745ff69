//! The Plant root entity
//!
//! Plants carry a long tail of merchandising attributes plus nine ordered
//! string-list fields used by the storefront (care instructions, gifting
//! suggestions, fun facts). Temperature range is a cross-field constraint
//! checked against the merged record, so it lives in the route layer rather
//! than the derive attributes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::default_true;

/// Stored plant record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantRow {
    pub id: String,
    pub name: String,
    pub scientific_name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub plant_class: Option<String>,
    pub series: Option<String>,
    pub place_of_origin: Option<String>,
    pub aura_type: Option<String>,
    pub biodiversity_booster: bool,
    pub carbon_absorber: bool,
    /// Celsius
    pub temperature_min: Option<i32>,
    /// Celsius
    pub temperature_max: Option<i32>,
    pub category_id: Option<String>,
    pub soil: Vec<String>,
    pub repotting: Vec<String>,
    pub maintenance: Vec<String>,
    pub inside_box: Vec<String>,
    pub benefits: Vec<String>,
    pub spiritual_use_case: Vec<String>,
    pub best_for_emotion: Vec<String>,
    pub best_gift_for: Vec<String>,
    pub fun_facts: Vec<String>,
    pub associated_deity: Option<String>,
    pub god_aligned: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PlantRow {
    /// Temperature invariant, checked after every merge
    pub fn temperature_range_ok(&self) -> bool {
        match (self.temperature_min, self.temperature_max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }
}

/// Insert schema for plants
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPlant {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    pub scientific_name: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub plant_class: Option<String>,
    pub series: Option<String>,
    pub place_of_origin: Option<String>,
    pub aura_type: Option<String>,
    #[serde(default)]
    pub biodiversity_booster: bool,
    #[serde(default)]
    pub carbon_absorber: bool,
    pub temperature_min: Option<i32>,
    pub temperature_max: Option<i32>,
    pub category_id: Option<String>,
    #[serde(default)]
    pub soil: Vec<String>,
    #[serde(default)]
    pub repotting: Vec<String>,
    #[serde(default)]
    pub maintenance: Vec<String>,
    #[serde(default)]
    pub inside_box: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub spiritual_use_case: Vec<String>,
    #[serde(default)]
    pub best_for_emotion: Vec<String>,
    #[serde(default)]
    pub best_gift_for: Vec<String>,
    #[serde(default)]
    pub fun_facts: Vec<String>,
    pub associated_deity: Option<String>,
    pub god_aligned: Option<String>,
}

impl NewPlant {
    pub fn into_row(self, id: String, created_at: DateTime<Utc>) -> PlantRow {
        PlantRow {
            id,
            name: self.name,
            scientific_name: self.scientific_name,
            description: self.description,
            is_active: self.is_active,
            is_featured: self.is_featured,
            plant_class: self.plant_class,
            series: self.series,
            place_of_origin: self.place_of_origin,
            aura_type: self.aura_type,
            biodiversity_booster: self.biodiversity_booster,
            carbon_absorber: self.carbon_absorber,
            temperature_min: self.temperature_min,
            temperature_max: self.temperature_max,
            category_id: self.category_id,
            soil: self.soil,
            repotting: self.repotting,
            maintenance: self.maintenance,
            inside_box: self.inside_box,
            benefits: self.benefits,
            spiritual_use_case: self.spiritual_use_case,
            best_for_emotion: self.best_for_emotion,
            best_gift_for: self.best_gift_for,
            fun_facts: self.fun_facts,
            associated_deity: self.associated_deity,
            god_aligned: self.god_aligned,
            created_at,
        }
    }
}

/// Partial-update schema for plants (absent fields are preserved)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantPatch {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,
    pub scientific_name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub plant_class: Option<String>,
    pub series: Option<String>,
    pub place_of_origin: Option<String>,
    pub aura_type: Option<String>,
    pub biodiversity_booster: Option<bool>,
    pub carbon_absorber: Option<bool>,
    pub temperature_min: Option<i32>,
    pub temperature_max: Option<i32>,
    pub category_id: Option<String>,
    pub soil: Option<Vec<String>>,
    pub repotting: Option<Vec<String>>,
    pub maintenance: Option<Vec<String>>,
    pub inside_box: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub spiritual_use_case: Option<Vec<String>>,
    pub best_for_emotion: Option<Vec<String>>,
    pub best_gift_for: Option<Vec<String>>,
    pub fun_facts: Option<Vec<String>>,
    pub associated_deity: Option<String>,
    pub god_aligned: Option<String>,
}

impl PlantPatch {
    pub fn apply(self, row: &mut PlantRow) {
        if let Some(name) = self.name {
            row.name = name;
        }
        if let Some(v) = self.scientific_name {
            row.scientific_name = Some(v);
        }
        if let Some(v) = self.description {
            row.description = Some(v);
        }
        if let Some(v) = self.is_active {
            row.is_active = v;
        }
        if let Some(v) = self.is_featured {
            row.is_featured = v;
        }
        if let Some(v) = self.plant_class {
            row.plant_class = Some(v);
        }
        if let Some(v) = self.series {
            row.series = Some(v);
        }
        if let Some(v) = self.place_of_origin {
            row.place_of_origin = Some(v);
        }
        if let Some(v) = self.aura_type {
            row.aura_type = Some(v);
        }
        if let Some(v) = self.biodiversity_booster {
            row.biodiversity_booster = v;
        }
        if let Some(v) = self.carbon_absorber {
            row.carbon_absorber = v;
        }
        if let Some(v) = self.temperature_min {
            row.temperature_min = Some(v);
        }
        if let Some(v) = self.temperature_max {
            row.temperature_max = Some(v);
        }
        if let Some(v) = self.category_id {
            row.category_id = Some(v);
        }
        if let Some(v) = self.soil {
            row.soil = v;
        }
        if let Some(v) = self.repotting {
            row.repotting = v;
        }
        if let Some(v) = self.maintenance {
            row.maintenance = v;
        }
        if let Some(v) = self.inside_box {
            row.inside_box = v;
        }
        if let Some(v) = self.benefits {
            row.benefits = v;
        }
        if let Some(v) = self.spiritual_use_case {
            row.spiritual_use_case = v;
        }
        if let Some(v) = self.best_for_emotion {
            row.best_for_emotion = v;
        }
        if let Some(v) = self.best_gift_for {
            row.best_gift_for = v;
        }
        if let Some(v) = self.fun_facts {
            row.fun_facts = v;
        }
        if let Some(v) = self.associated_deity {
            row.associated_deity = Some(v);
        }
        if let Some(v) = self.god_aligned {
            row.god_aligned = Some(v);
        }
    }

    /// The temperature bounds the row would have after applying this patch
    pub fn merged_temperature(&self, row: &PlantRow) -> (Option<i32>, Option<i32>) {
        (
            self.temperature_min.or(row.temperature_min),
            self.temperature_max.or(row.temperature_max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monstera() -> PlantRow {
        let new: NewPlant =
            serde_json::from_str(r#"{"name": "Monstera", "temperatureMin": 10}"#).unwrap();
        new.into_row("p1".into(), Utc::now())
    }

    #[test]
    fn new_plant_requires_name() {
        assert!(serde_json::from_str::<NewPlant>(r#"{"description": "leafy"}"#).is_err());
        let blank: NewPlant = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn temperature_range_checked_on_merged_record() {
        let row = monstera();
        let patch: PlantPatch = serde_json::from_str(r#"{"temperatureMax": 5}"#).unwrap();
        let (min, max) = patch.merged_temperature(&row);
        assert_eq!((min, max), (Some(10), Some(5)));

        let mut merged = row.clone();
        PlantPatch {
            temperature_max: Some(30),
            ..Default::default()
        }
        .apply(&mut merged);
        assert!(merged.temperature_range_ok());
    }

    #[test]
    fn patch_replaces_list_fields_wholesale() {
        let mut row = monstera();
        row.soil = vec!["loam".into()];
        PlantPatch {
            soil: Some(vec!["peat".into(), "perlite".into()]),
            ..Default::default()
        }
        .apply(&mut row);
        assert_eq!(row.soil, vec!["peat".to_string(), "perlite".to_string()]);
        assert_eq!(row.name, "Monstera");
    }
}
