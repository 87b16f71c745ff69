//! Closed vocabularies shared by the schema and the API
//!
//! Enum membership is enforced at deserialization time, so a request with
//! an unknown season or size never reaches the store.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Care season (Indian nursery calendar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Season {
    Summer,
    Winter,
    Monsoon,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Summer => write!(f, "Summer"),
            Season::Winter => write!(f, "Winter"),
            Season::Monsoon => write!(f, "Monsoon"),
        }
    }
}

/// Pot/plant size bucket for size profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PlantSize {
    Small,
    Medium,
    Large,
    #[serde(rename = "XL")]
    Xl,
}

impl fmt::Display for PlantSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlantSize::Small => write!(f, "Small"),
            PlantSize::Medium => write!(f, "Medium"),
            PlantSize::Large => write!(f, "Large"),
            PlantSize::Xl => write!(f, "XL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_rejects_unknown_value() {
        assert!(serde_json::from_str::<Season>("\"Spring\"").is_err());
        assert_eq!(
            serde_json::from_str::<Season>("\"Monsoon\"").unwrap(),
            Season::Monsoon
        );
    }

    #[test]
    fn plant_size_wire_name_is_xl() {
        let size: PlantSize = serde_json::from_str("\"XL\"").unwrap();
        assert_eq!(size, PlantSize::Xl);
        assert_eq!(serde_json::to_string(&PlantSize::Xl).unwrap(), "\"XL\"");
    }
}
