//! Catalog entities: categories, colors, tag groups, tags, fertilizers
//!
//! Each entity comes in three shapes: the stored row (`*Row`), the insert
//! schema (`New*`) and the partial-update schema (`*Patch`). The insert and
//! patch types are the canonical validation surface. Both the route layer
//! and the SDK models speak this schema, and neither accepts a client
//! supplied `id` or `createdAt`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::default_true;

/// Validate a `#rrggbb` hex color code
pub fn validate_hex_code(code: &str) -> Result<(), ValidationError> {
    let digits = match code.strip_prefix('#') {
        Some(rest) => rest,
        None => {
            return Err(ValidationError::new("hex_code")
                .with_message("Hex code must start with '#'".into()));
        }
    };
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::new("hex_code")
            .with_message("Hex code must be '#' followed by 6 hex digits".into()));
    }
    Ok(())
}

// =============================================================================
// Category
// =============================================================================

/// Stored category record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert schema for categories
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl NewCategory {
    pub fn into_row(self, id: String, created_at: DateTime<Utc>) -> CategoryRow {
        CategoryRow {
            id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
            created_at,
        }
    }
}

/// Partial-update schema for categories (absent fields are preserved)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl CategoryPatch {
    pub fn apply(self, row: &mut CategoryRow) {
        if let Some(name) = self.name {
            row.name = name;
        }
        if let Some(description) = self.description {
            row.description = Some(description);
        }
        if let Some(is_active) = self.is_active {
            row.is_active = is_active;
        }
    }
}

// =============================================================================
// Color
// =============================================================================

/// Stored color record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorRow {
    pub id: String,
    pub name: String,
    pub hex_code: String,
    pub is_active: bool,
}

/// Insert schema for colors
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewColor {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(custom(function = validate_hex_code))]
    pub hex_code: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl NewColor {
    pub fn into_row(self, id: String) -> ColorRow {
        ColorRow {
            id,
            name: self.name,
            hex_code: self.hex_code,
            is_active: self.is_active,
        }
    }
}

/// Partial-update schema for colors
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorPatch {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(custom(function = validate_hex_code))]
    pub hex_code: Option<String>,
    pub is_active: Option<bool>,
}

impl ColorPatch {
    pub fn apply(self, row: &mut ColorRow) {
        if let Some(name) = self.name {
            row.name = name;
        }
        if let Some(hex_code) = self.hex_code {
            row.hex_code = hex_code;
        }
        if let Some(is_active) = self.is_active {
            row.is_active = is_active;
        }
    }
}

// =============================================================================
// Tag group
// =============================================================================

/// Stored tag group record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagGroupRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Insert schema for tag groups
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTagGroup {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl NewTagGroup {
    pub fn into_row(self, id: String) -> TagGroupRow {
        TagGroupRow {
            id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
        }
    }
}

/// Partial-update schema for tag groups
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagGroupPatch {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl TagGroupPatch {
    pub fn apply(self, row: &mut TagGroupRow) {
        if let Some(name) = self.name {
            row.name = name;
        }
        if let Some(description) = self.description {
            row.description = Some(description);
        }
        if let Some(is_active) = self.is_active {
            row.is_active = is_active;
        }
    }
}

// =============================================================================
// Tag
// =============================================================================

/// Stored tag record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagRow {
    pub id: String,
    pub name: String,
    pub tag_group_id: String,
    pub is_active: bool,
}

/// Insert schema for tags
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTag {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    pub tag_group_id: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl NewTag {
    pub fn into_row(self, id: String) -> TagRow {
        TagRow {
            id,
            name: self.name,
            tag_group_id: self.tag_group_id,
            is_active: self.is_active,
        }
    }
}

/// Partial-update schema for tags
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagPatch {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    pub tag_group_id: Option<String>,
    pub is_active: Option<bool>,
}

impl TagPatch {
    pub fn apply(self, row: &mut TagRow) {
        if let Some(name) = self.name {
            row.name = name;
        }
        if let Some(tag_group_id) = self.tag_group_id {
            row.tag_group_id = tag_group_id;
        }
        if let Some(is_active) = self.is_active {
            row.is_active = is_active;
        }
    }
}

// =============================================================================
// Fertilizer
// =============================================================================

/// Stored fertilizer record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerRow {
    pub id: String,
    pub name: String,
    /// NPK, Organic, Liquid, ...
    #[serde(rename = "type")]
    pub fertilizer_type: String,
    /// e.g. "10-10-10"
    pub npk_ratio: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Insert schema for fertilizers
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewFertilizer {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100, message = "Type must be 1-100 characters"))]
    pub fertilizer_type: String,
    pub npk_ratio: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl NewFertilizer {
    pub fn into_row(self, id: String) -> FertilizerRow {
        FertilizerRow {
            id,
            name: self.name,
            fertilizer_type: self.fertilizer_type,
            npk_ratio: self.npk_ratio,
            description: self.description,
            is_active: self.is_active,
        }
    }
}

/// Partial-update schema for fertilizers
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerPatch {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100, message = "Type must be 1-100 characters"))]
    pub fertilizer_type: Option<String>,
    pub npk_ratio: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl FertilizerPatch {
    pub fn apply(self, row: &mut FertilizerRow) {
        if let Some(name) = self.name {
            row.name = name;
        }
        if let Some(fertilizer_type) = self.fertilizer_type {
            row.fertilizer_type = fertilizer_type;
        }
        if let Some(npk_ratio) = self.npk_ratio {
            row.npk_ratio = Some(npk_ratio);
        }
        if let Some(description) = self.description {
            row.description = Some(description);
        }
        if let Some(is_active) = self.is_active {
            row.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_code_validation() {
        assert!(validate_hex_code("#2e7d32").is_ok());
        assert!(validate_hex_code("2e7d32").is_err());
        assert!(validate_hex_code("#2e7d3").is_err());
        assert!(validate_hex_code("#2e7d3g").is_err());
    }

    #[test]
    fn insert_schema_ignores_client_supplied_id() {
        let new: NewCategory = serde_json::from_str(
            r#"{"id": "spoofed", "name": "Indoor Plants", "createdAt": "2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let row = new.into_row("c1".into(), Utc::now());
        assert_eq!(row.id, "c1");
        assert!(row.is_active);
    }

    #[test]
    fn patch_preserves_absent_fields() {
        let mut row = CategoryRow {
            id: "c1".into(),
            name: "Indoor".into(),
            description: Some("green".into()),
            is_active: true,
            created_at: Utc::now(),
        };
        let patch: CategoryPatch = serde_json::from_str(r#"{"isActive": false}"#).unwrap();
        patch.apply(&mut row);
        assert_eq!(row.name, "Indoor");
        assert_eq!(row.description.as_deref(), Some("green"));
        assert!(!row.is_active);
    }
}
