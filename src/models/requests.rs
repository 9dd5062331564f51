use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{SearchQuery, WasteClass};

/// Request to search recycling points
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchPointsRequest {
    #[validate(length(min = 1), custom(function = "validate_materials"))]
    #[serde(alias = "selectedMaterials", rename = "materials")]
    pub materials: Vec<String>,
    #[validate(custom(function = "validate_not_blank"))]
    #[serde(alias = "locationText", rename = "location")]
    pub location: String,
    #[serde(default)]
    #[serde(alias = "quantityText", rename = "quantity")]
    pub quantity: String,
    #[validate(required)]
    #[serde(default)]
    #[serde(alias = "waste_class", rename = "wasteClass")]
    pub waste_class: Option<WasteClass>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

impl SearchPointsRequest {
    /// Build the query the matcher consumes
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            selected_materials: self
                .materials
                .iter()
                .map(|m| m.trim().to_string())
                .collect(),
            location_text: self.location.trim().to_string(),
            quantity_text: self.quantity.trim().to_string(),
            waste_class: self.waste_class,
        }
    }
}

// A blank material would be a substring of every accepted material.
fn validate_materials(materials: &[String]) -> Result<(), ValidationError> {
    if materials.iter().any(|m| m.trim().is_empty()) {
        return Err(ValidationError::new("blank_material"));
    }
    Ok(())
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(materials: &[&str], location: &str) -> SearchPointsRequest {
        SearchPointsRequest {
            materials: materials.iter().map(|m| m.to_string()).collect(),
            location: location.to_string(),
            quantity: String::new(),
            waste_class: Some(WasteClass::ClassIIB),
            limit: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request(&["pneus"], "Betim, MG").validate().is_ok());
    }

    #[test]
    fn test_empty_materials_rejected() {
        assert!(request(&[], "Betim, MG").validate().is_err());
    }

    #[test]
    fn test_blank_material_rejected() {
        assert!(request(&["pneus", "  "], "Betim, MG").validate().is_err());
    }

    #[test]
    fn test_blank_location_rejected() {
        assert!(request(&["pneus"], "   ").validate().is_err());
    }

    #[test]
    fn test_missing_waste_class_rejected() {
        let req: SearchPointsRequest =
            serde_json::from_str(r#"{"materials": ["pneus"], "location": "BH"}"#).unwrap();

        assert_eq!(req.waste_class, None);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut req = request(&["pneus"], "Betim, MG");

        req.limit = Some(0);
        assert!(req.validate().is_err());

        req.limit = Some(1);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_to_query_trims_fields() {
        let mut req = request(&[" pneus "], " Nova Lima ");
        req.quantity = " 10 ton ".to_string();
        req.waste_class = Some(WasteClass::ClassIIA);

        let query = req.to_query();

        assert_eq!(query.selected_materials, vec!["pneus"]);
        assert_eq!(query.location_text, "Nova Lima");
        assert_eq!(query.quantity_text, "10 ton");
        assert_eq!(query.waste_class, Some(WasteClass::ClassIIA));
    }

    #[test]
    fn test_deserialize_aliases() {
        let json = r#"{"selectedMaterials": ["cabos"], "locationText": "BH", "wasteClass": "especial"}"#;
        let req: SearchPointsRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.materials, vec!["cabos"]);
        assert_eq!(req.location, "BH");
        assert_eq!(req.waste_class, Some(WasteClass::Special));
        assert_eq!(req.limit, None);
    }
}
