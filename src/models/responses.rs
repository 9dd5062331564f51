use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchedPoint, MaterialGroup, RecyclingPoint, WasteClass};

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPointsResponse {
    #[serde(rename = "searchId")]
    pub search_id: uuid::Uuid,
    #[serde(rename = "searchedAt")]
    pub searched_at: chrono::DateTime<chrono::Utc>,
    pub location: String,
    #[serde(rename = "selectedMaterials")]
    pub selected_materials: Vec<String>,
    #[serde(rename = "wasteClass")]
    pub waste_class: Option<WasteClass>,
    pub matches: Vec<MatchedPoint>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    #[serde(rename = "totalPoints")]
    pub total_points: usize,
}

/// Catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Vec<RecyclingPoint>,
    pub total: usize,
}

/// Waste class entry of the materials listing
#[derive(Debug, Clone, Serialize)]
pub struct WasteClassInfo {
    pub value: WasteClass,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<WasteClass> for WasteClassInfo {
    fn from(class: WasteClass) -> Self {
        Self {
            value: class,
            label: class.label(),
            description: class.description(),
        }
    }
}

/// Options offered by the search form
#[derive(Debug, Clone, Serialize)]
pub struct MaterialsResponse {
    pub groups: Vec<MaterialGroup>,
    #[serde(rename = "wasteClasses")]
    pub waste_classes: Vec<WasteClassInfo>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
