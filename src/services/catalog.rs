use crate::models::{Coordinates, RecyclingPoint};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog format: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Point {0} accepts no materials")]
    EmptyMaterials(String),

    #[error("Duplicate point id: {0}")]
    DuplicateId(String),

    #[error("Point {id} has rating {rating} outside 0.0-5.0")]
    InvalidRating { id: String, rating: f64 },
}

/// Read-only catalog of recycling points
///
/// Loaded once at startup and never mutated afterwards. Share it behind an
/// `Arc`.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    points: Vec<RecyclingPoint>,
}

impl CatalogStore {
    /// Build a catalog, checking point invariants
    pub fn from_points(points: Vec<RecyclingPoint>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(points.len());

        for point in &points {
            if !seen.insert(point.id.as_str()) {
                return Err(CatalogError::DuplicateId(point.id.clone()));
            }
            if point.accepted_materials.is_empty() {
                return Err(CatalogError::EmptyMaterials(point.id.clone()));
            }
            if !(0.0..=5.0).contains(&point.rating) {
                return Err(CatalogError::InvalidRating {
                    id: point.id.clone(),
                    rating: point.rating,
                });
            }
        }

        Ok(Self { points })
    }

    /// Parse a catalog from a JSON array of points
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let points: Vec<RecyclingPoint> = serde_json::from_str(json)?;
        Self::from_points(points)
    }

    /// Load a catalog from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&json)?;

        tracing::debug!("Loaded {} points from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise use the built-in catalog
    pub async fn load_or_seed(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path).await,
            None => {
                tracing::debug!("No catalog path configured, using built-in catalog");
                Ok(Self::seed())
            }
        }
    }

    /// Built-in catalog of mining waste recycling points
    pub fn seed() -> Self {
        Self {
            points: seed_points(),
        }
    }

    pub fn points(&self) -> &[RecyclingPoint] {
        &self.points
    }

    pub fn get(&self, id: &str) -> Option<&RecyclingPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn seed_point(
    id: &str,
    name: &str,
    address: &str,
    distance: &str,
    rating: f64,
    accepted: &[&str],
    price: &str,
    phone: &str,
    hours: &str,
    (lat, lng): (f64, f64),
    certifications: &[&str],
    capacity: &str,
) -> RecyclingPoint {
    RecyclingPoint {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        distance: distance.to_string(),
        rating,
        accepted_materials: strings(accepted),
        price: price.to_string(),
        phone: phone.to_string(),
        hours: hours.to_string(),
        coordinates: Some(Coordinates { lat, lng }),
        certifications: strings(certifications),
        capacity: capacity.to_string(),
    }
}

fn seed_points() -> Vec<RecyclingPoint> {
    vec![
        seed_point(
            "1",
            "EcoMining Solutions",
            "Distrito Industrial, Km 15 - Região Metropolitana, MG",
            "12.5 km",
            4.9,
            &["plásticos industriais", "pneus de mineração", "borrachas", "cabos"],
            "R$ 3,50/kg para plásticos industriais",
            "(31) 3333-4567",
            "24h - Operação contínua",
            (-19.9167, -43.9345),
            &["ISO 14001", "ABNT NBR 15112", "IBAMA"],
            "500 ton/mês",
        ),
        seed_point(
            "2",
            "RecycleMax Industrial",
            "Rod. BR-040, Km 45 - Betim, MG",
            "18.3 km",
            4.7,
            &["equipamentos obsoletos", "estruturas metálicas", "componentes eletrônicos"],
            "Avaliação técnica no local",
            "(31) 2222-8901",
            "Seg-Sex: 6h-22h, Sáb: 6h-18h",
            (-19.9679, -44.1989),
            &["ISO 9001", "ISO 14001", "CETESB"],
            "300 ton/mês",
        ),
        seed_point(
            "3",
            "Green Industrial Waste",
            "Complexo Portuário, Setor 7 - Vitória, ES",
            "234 km",
            4.8,
            &["pneus de mineração", "correias transportadoras", "mangueiras industriais"],
            "R$ 4,20/kg para pneus de mineração",
            "(27) 3344-5566",
            "Seg-Dom: 24h - Plantão disponível",
            (-20.3155, -40.3128),
            &["ISO 14001", "ANTT", "IBAMA"],
            "800 ton/mês",
        ),
        seed_point(
            "4",
            "TechRecycle Mining",
            "Parque Tecnológico, Quadra 12 - Contagem, MG",
            "25.7 km",
            4.6,
            &["componentes eletrônicos", "baterias industriais", "equipamentos de automação"],
            "Coprocessamento especializado",
            "(31) 4444-7788",
            "Seg-Sex: 7h-19h",
            (-19.9317, -44.0544),
            &["ISO 27001", "RoHS", "WEEE"],
            "150 ton/mês",
        ),
        seed_point(
            "5",
            "Circular Mining Solutions",
            "Via Expressa, Km 8 - Nova Lima, MG",
            "31.2 km",
            4.5,
            &["plásticos industriais", "polímeros", "resinas", "tubulações"],
            "R$ 2,80/kg para polímeros",
            "(31) 5555-9900",
            "Seg-Sex: 8h-18h, Sáb: 8h-14h",
            (-19.9857, -43.8502),
            &["ISO 14001", "ABRELPE", "SINIR"],
            "400 ton/mês",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: &str, rating: f64, materials: &[&str]) -> RecyclingPoint {
        RecyclingPoint {
            id: id.to_string(),
            name: "Test".to_string(),
            address: "Rua A".to_string(),
            distance: "1 km".to_string(),
            rating,
            accepted_materials: strings(materials),
            price: String::new(),
            phone: String::new(),
            hours: String::new(),
            coordinates: None,
            certifications: vec![],
            capacity: String::new(),
        }
    }

    #[test]
    fn test_seed_catalog_is_valid() {
        let seed = CatalogStore::seed();
        let validated = CatalogStore::from_points(seed.points().to_vec());

        assert!(validated.is_ok());
        assert_eq!(seed.len(), 5);
        assert_eq!(seed.get("3").map(|p| p.name.as_str()), Some("Green Industrial Waste"));
        assert!(seed.get("99").is_none());
    }

    #[test]
    fn test_rejects_empty_materials() {
        let result = CatalogStore::from_points(vec![point("1", 4.0, &[])]);
        assert!(matches!(result, Err(CatalogError::EmptyMaterials(id)) if id == "1"));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = CatalogStore::from_points(vec![
            point("1", 4.0, &["cabos"]),
            point("1", 4.5, &["pneus"]),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_rejects_out_of_range_rating() {
        let result = CatalogStore::from_points(vec![point("1", 5.5, &["cabos"])]);
        assert!(matches!(result, Err(CatalogError::InvalidRating { .. })));
    }

    #[test]
    fn test_from_json_round_trip() {
        let json = serde_json::to_string(CatalogStore::seed().points()).unwrap();
        let catalog = CatalogStore::from_json(&json).unwrap();

        assert_eq!(catalog.points(), CatalogStore::seed().points());
    }

    #[test]
    fn test_from_json_invalid() {
        let result = CatalogStore::from_json("{not json");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = CatalogStore::load("/nonexistent/catalog.json").await;
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_or_seed_without_path() {
        let catalog = CatalogStore::load_or_seed(None).await.unwrap();
        assert_eq!(catalog.len(), 5);
    }
}
