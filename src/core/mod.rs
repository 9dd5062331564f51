// Core algorithm exports
pub mod distance;
pub mod links;
pub mod materials;
pub mod matcher;

pub use distance::{parse_distance_km, compare_points};
pub use links::{phone_link, directions_url};
pub use materials::{materials_match, accepts_any, accepts_all, highlighted_materials, MATERIAL_OPTIONS};
pub use matcher::{PointMatcher, MatchResult, DEFAULT_PREMIUM_RATING, DEFAULT_TOP_RATED_RATING};
