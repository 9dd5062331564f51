use serde::{Deserialize, Serialize};

/// Recycling point as listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecyclingPoint {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Display distance from the operator, e.g. "12.5 km"
    pub distance: String,
    pub rating: f64,
    #[serde(rename = "acceptedMaterials")]
    pub accepted_materials: Vec<String>,
    pub price: String,
    pub phone: String,
    pub hours: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Display capacity per month, e.g. "500 ton/mês"
    pub capacity: String,
}

impl RecyclingPoint {
    /// Distance in kilometers parsed from the display string
    pub fn distance_km(&self) -> Option<f64> {
        crate::core::distance::parse_distance_km(&self.distance)
    }
}

/// Map coordinates, display only
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Waste classification according to ABNT NBR 10004
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WasteClass {
    #[serde(rename = "classe-1")]
    ClassI,
    #[serde(rename = "classe-2a")]
    ClassIIA,
    #[serde(rename = "classe-2b")]
    ClassIIB,
    #[serde(rename = "especial")]
    Special,
}

impl WasteClass {
    pub const ALL: [WasteClass; 4] = [
        WasteClass::ClassI,
        WasteClass::ClassIIA,
        WasteClass::ClassIIB,
        WasteClass::Special,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            WasteClass::ClassI => "classe-1",
            WasteClass::ClassIIA => "classe-2a",
            WasteClass::ClassIIB => "classe-2b",
            WasteClass::Special => "especial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WasteClass::ClassI => "Classe I - Perigosos",
            WasteClass::ClassIIA => "Classe II-A - Não Inertes",
            WasteClass::ClassIIB => "Classe II-B - Inertes",
            WasteClass::Special => "Resíduo Especial",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WasteClass::ClassI => "Resíduos com propriedades perigosas",
            WasteClass::ClassIIA => "Resíduos não perigosos e não inertes",
            WasteClass::ClassIIB => "Resíduos não perigosos e inertes",
            WasteClass::Special => "Requer tratamento especializado",
        }
    }
}

/// A single search submission
///
/// Built from a validated request, consumed by the matcher and dropped
/// once the response is rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub selected_materials: Vec<String>,
    pub location_text: String,
    pub quantity_text: String,
    pub waste_class: Option<WasteClass>,
}

impl SearchQuery {
    pub fn new<I, S>(materials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_materials: materials.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Catalog point annotated for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPoint {
    #[serde(flatten)]
    pub point: RecyclingPoint,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    /// Accepts every selected material
    #[serde(rename = "fullMatch")]
    pub full_match: bool,
    pub premium: bool,
    #[serde(rename = "topRated")]
    pub top_rated: bool,
    /// Accepted materials that match at least one selected material
    #[serde(rename = "matchedMaterials")]
    pub matched_materials: Vec<String>,
    #[serde(rename = "phoneUrl")]
    pub phone_url: String,
    #[serde(rename = "directionsUrl")]
    pub directions_url: String,
}

/// Selectable material in the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaterialOption {
    pub id: &'static str,
    pub label: &'static str,
    pub category: &'static str,
}

/// Materials of one category, in form order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialGroup {
    pub category: &'static str,
    pub materials: Vec<MaterialOption>,
}
