use crate::models::{MatchedPoint, RecyclingPoint, SearchQuery};
use crate::core::{
    distance::compare_points,
    links::{directions_url, phone_link},
    materials::{accepts_all, accepts_any, highlighted_materials},
};

/// Rating from which a point is flagged as premium
pub const DEFAULT_PREMIUM_RATING: f64 = 4.8;

/// Rating from which a point is flagged as top rated
pub const DEFAULT_TOP_RATED_RATING: f64 = 4.7;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<MatchedPoint>,
    pub total_points: usize,
}

/// Matches search queries against the recycling point catalog
///
/// # Pipeline Stages
/// 1. Material filter (at least one selected material accepted)
/// 2. Ranking by rating, then distance
/// 3. Annotation (full match, rating badges, highlighted materials, links)
#[derive(Debug, Clone, Copy)]
pub struct PointMatcher {
    premium_rating: f64,
    top_rated_rating: f64,
}

impl PointMatcher {
    pub fn new(premium_rating: f64, top_rated_rating: f64) -> Self {
        Self {
            premium_rating,
            top_rated_rating,
        }
    }

    pub fn premium_rating(&self) -> f64 {
        self.premium_rating
    }

    pub fn top_rated_rating(&self) -> f64 {
        self.top_rated_rating
    }

    /// Catalog points accepting the query's materials, best first
    ///
    /// An empty selection or catalog yields an empty list. The sort is
    /// stable, so points equal in rating and distance keep catalog order.
    pub fn match_points<'a>(
        &self,
        query: &SearchQuery,
        catalog: &'a [RecyclingPoint],
    ) -> Vec<&'a RecyclingPoint> {
        if query.selected_materials.is_empty() {
            return Vec::new();
        }

        let mut matched: Vec<&RecyclingPoint> = catalog
            .iter()
            .filter(|point| accepts_any(point, &query.selected_materials))
            .collect();

        matched.sort_by(|a, b| compare_points(a, b));
        matched
    }

    /// Run the matcher and annotate each result for display
    ///
    /// # Arguments
    /// * `query` - The search submission
    /// * `catalog` - All recycling points
    ///
    /// # Returns
    /// MatchResult with annotated matches in ranking order
    pub fn search(&self, query: &SearchQuery, catalog: &[RecyclingPoint]) -> MatchResult {
        let matches = self
            .match_points(query, catalog)
            .into_iter()
            .map(|point| self.annotate(point, &query.selected_materials))
            .collect();

        MatchResult {
            matches,
            total_points: catalog.len(),
        }
    }

    /// Whether the point accepts every selected material
    #[inline]
    pub fn is_full_match(&self, point: &RecyclingPoint, selected: &[String]) -> bool {
        accepts_all(point, selected)
    }

    #[inline]
    pub fn is_premium(&self, point: &RecyclingPoint) -> bool {
        point.rating >= self.premium_rating
    }

    #[inline]
    pub fn is_top_rated(&self, point: &RecyclingPoint) -> bool {
        point.rating >= self.top_rated_rating
    }

    fn annotate(&self, point: &RecyclingPoint, selected: &[String]) -> MatchedPoint {
        MatchedPoint {
            distance_km: point.distance_km(),
            full_match: self.is_full_match(point, selected),
            premium: self.is_premium(point),
            top_rated: self.is_top_rated(point),
            matched_materials: highlighted_materials(point, selected),
            phone_url: phone_link(&point.phone),
            directions_url: directions_url(&point.address),
            point: point.clone(),
        }
    }
}

impl Default for PointMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_PREMIUM_RATING, DEFAULT_TOP_RATED_RATING)
    }
}
