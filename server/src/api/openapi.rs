//! OpenAPI specification and Swagger UI

use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{
    care_guidelines, categories, colors, fertilizer_schedules, fertilizers, health, plants,
    size_profiles, tag_groups, tags, variant_tags, variants,
};
use crate::api::types::{ApiError, DeleteResponse};
use crate::data::types::{
    CareGuidelinePatch, CareGuidelineRow, CategoryPatch, CategoryRow, ColorPatch, ColorRow,
    FertilizerPatch, FertilizerRow, FertilizerSchedulePatch, FertilizerScheduleRow,
    NewCareGuideline, NewCategory, NewColor, NewFertilizer, NewFertilizerSchedule, NewPlant,
    NewSizeProfile, NewTag, NewTagGroup, NewVariant, NewVariantTag, PlantPatch, PlantRow,
    PlantSize, Season, SizeProfilePatch, SizeProfileRow, TagGroupPatch, TagGroupRow, TagPatch,
    TagRow, VariantPatch, VariantRow, VariantTagPatch, VariantTagRow,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PlantDesk API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Plant nursery inventory administration"
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "plants", description = "Plant catalog"),
        (name = "categories", description = "Plant categories"),
        (name = "colors", description = "Color palette"),
        (name = "tag-groups", description = "Tag group management"),
        (name = "tags", description = "Tag management"),
        (name = "fertilizers", description = "Fertilizer catalog"),
        (name = "variants", description = "Purchasable plant variants"),
        (name = "size-profiles", description = "Per-plant size profiles"),
        (name = "care-guidelines", description = "Seasonal care guidelines"),
        (name = "fertilizer-schedules", description = "Per-plant fertilizer schedules"),
        (name = "variant-tags", description = "Variant/tag associations")
    ),
    paths(
        // Health
        health::health_check,
        // Plants
        plants::list_plants,
        plants::create_plant,
        plants::get_plant,
        plants::update_plant,
        plants::delete_plant,
        // Categories
        categories::list_categories,
        categories::create_category,
        categories::get_category,
        categories::update_category,
        categories::delete_category,
        // Colors
        colors::list_colors,
        colors::create_color,
        colors::get_color,
        colors::update_color,
        colors::delete_color,
        // Tag groups
        tag_groups::list_tag_groups,
        tag_groups::create_tag_group,
        tag_groups::get_tag_group,
        tag_groups::update_tag_group,
        tag_groups::delete_tag_group,
        // Tags
        tags::list_tags,
        tags::create_tag,
        tags::get_tag,
        tags::update_tag,
        tags::delete_tag,
        // Fertilizers
        fertilizers::list_fertilizers,
        fertilizers::create_fertilizer,
        fertilizers::get_fertilizer,
        fertilizers::update_fertilizer,
        fertilizers::delete_fertilizer,
        // Variants
        variants::list_variants,
        variants::create_variant,
        variants::get_variant,
        variants::update_variant,
        variants::delete_variant,
        // Size profiles
        size_profiles::list_size_profiles,
        size_profiles::create_size_profile,
        size_profiles::get_size_profile,
        size_profiles::update_size_profile,
        size_profiles::delete_size_profile,
        // Care guidelines
        care_guidelines::list_care_guidelines,
        care_guidelines::create_care_guideline,
        care_guidelines::get_care_guideline,
        care_guidelines::update_care_guideline,
        care_guidelines::delete_care_guideline,
        // Fertilizer schedules
        fertilizer_schedules::list_fertilizer_schedules,
        fertilizer_schedules::create_fertilizer_schedule,
        fertilizer_schedules::get_fertilizer_schedule,
        fertilizer_schedules::update_fertilizer_schedule,
        fertilizer_schedules::delete_fertilizer_schedule,
        // Variant tags
        variant_tags::list_variant_tags,
        variant_tags::create_variant_tag,
        variant_tags::get_variant_tag,
        variant_tags::update_variant_tag,
        variant_tags::delete_variant_tag,
    ),
    components(schemas(
        // Shared
        DeleteResponse,
        Season,
        PlantSize,
        health::HealthResponse,
        // Plants
        PlantRow,
        NewPlant,
        PlantPatch,
        // Categories
        CategoryRow,
        NewCategory,
        CategoryPatch,
        // Colors
        ColorRow,
        NewColor,
        ColorPatch,
        // Tag groups
        TagGroupRow,
        NewTagGroup,
        TagGroupPatch,
        // Tags
        TagRow,
        NewTag,
        TagPatch,
        // Fertilizers
        FertilizerRow,
        NewFertilizer,
        FertilizerPatch,
        // Variants
        VariantRow,
        NewVariant,
        VariantPatch,
        // Size profiles
        SizeProfileRow,
        NewSizeProfile,
        SizeProfilePatch,
        // Care guidelines
        CareGuidelineRow,
        NewCareGuideline,
        CareGuidelinePatch,
        // Fertilizer schedules
        FertilizerScheduleRow,
        NewFertilizerSchedule,
        FertilizerSchedulePatch,
        // Variant tags
        VariantTagRow,
        NewVariantTag,
        VariantTagPatch,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
pub async fn openapi_json() -> Result<impl IntoResponse, ApiError> {
    let doc = serde_json::to_value(ApiDoc::openapi())
        .map_err(|e| ApiError::internal(format!("OpenAPI serialization failed: {}", e)))?;
    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        Json(doc),
    ))
}

/// Serve Swagger UI from CDN
pub async fn swagger_ui_html() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>PlantDesk API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        html { box-sizing: border-box; overflow-y: scroll; }
        *, *:before, *:after { box-sizing: inherit; }
        body { margin: 0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: "/api/openapi.json",
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout",
                deepLinking: true,
                showExtensions: true,
                showCommonExtensions: true
            });
        };
    </script>
</body>
</html>"#;
