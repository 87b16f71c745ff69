//! Wire types for PlantDesk API resources
//!
//! Field names mirror the server's camelCase JSON. Create and update
//! bodies are passed as any `Serialize` value, so callers can use these
//! types, their own structs, or `serde_json::json!` literals.

use serde::{Deserialize, Serialize};

/// Care season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
    Monsoon,
}

/// Size bucket for size profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantSize {
    Small,
    Medium,
    Large,
    #[serde(rename = "XL")]
    Xl,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    #[serde(default)]
    pub plant_class: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub aura_type: Option<String>,
    pub biodiversity_booster: bool,
    pub carbon_absorber: bool,
    #[serde(default)]
    pub temperature_min: Option<i32>,
    #[serde(default)]
    pub temperature_max: Option<i32>,
    #[serde(default)]
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
    #[serde(default)]
    pub associated_deity: Option<String>,
    #[serde(default)]
    pub god_aligned: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: String,
    pub name: String,
    pub hex_code: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub tag_group_id: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fertilizer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub fertilizer_type: String,
    #[serde(default)]
    pub npk_ratio: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub plant_id: String,
    pub color_id: String,
    #[serde(default)]
    pub size_id: Option<String>,
    pub sku: String,
    pub price: f64,
    #[serde(default)]
    pub cost_price: Option<f64>,
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub primary_image: Option<String>,
    #[serde(default)]
    pub additional_images: Vec<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeProfile {
    pub id: String,
    pub plant_id: String,
    pub size: PlantSize,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareGuideline {
    pub id: String,
    pub plant_id: String,
    pub season: Season,
    #[serde(default)]
    pub watering_frequency: Option<String>,
    #[serde(default)]
    pub water_amount: Option<i32>,
    #[serde(default)]
    pub sunlight_type: Option<String>,
    #[serde(default)]
    pub humidity_level: Option<String>,
    #[serde(default)]
    pub care_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerSchedule {
    pub id: String,
    pub plant_id: String,
    pub fertilizer_id: String,
    #[serde(default)]
    pub application_frequency: Option<String>,
    #[serde(default)]
    pub application_method: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub application_time: Option<String>,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub safety_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantTag {
    pub id: String,
    pub variant_id: String,
    pub tag_id: String,
}
