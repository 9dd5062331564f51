//! Recycle Match - recycling point matching for mining waste marketplaces
//!
//! This library finds the recycling points that accept a set of waste
//! materials and ranks them by rating and distance.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{PointMatcher, MatchResult, materials_match, parse_distance_km};
pub use crate::models::{RecyclingPoint, SearchQuery, MatchedPoint, SearchPointsRequest, SearchPointsResponse};
pub use crate::services::{CatalogStore, CatalogError};
