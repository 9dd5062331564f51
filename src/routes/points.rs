use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::Settings;
use crate::core::PointMatcher;
use crate::models::{
    ErrorResponse, HealthResponse, MaterialOption, MaterialsResponse, PointsResponse,
    SearchPointsRequest, SearchPointsResponse, WasteClass,
};
use crate::services::CatalogStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub settings: Arc<Settings>,
    pub matcher: PointMatcher,
}

impl AppState {
    pub fn new(catalog: CatalogStore, settings: Settings) -> Self {
        let matcher = PointMatcher::new(
            settings.matching.premium_rating,
            settings.matching.top_rated_rating,
        );
        Self {
            catalog: Arc::new(catalog),
            settings: Arc::new(settings),
            matcher,
        }
    }
}

/// Configure all point-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/materials", web::get().to(list_materials))
        .route("/points", web::get().to(list_points))
        .route("/points/search", web::post().to(search_points))
        .route("/points/{id}", web::get().to(get_point));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Material options and waste classes offered by the search form
///
/// GET /api/v1/materials
async fn list_materials() -> impl Responder {
    HttpResponse::Ok().json(MaterialsResponse {
        groups: MaterialOption::grouped(),
        waste_classes: WasteClass::ALL.into_iter().map(Into::into).collect(),
    })
}

/// Full catalog
///
/// GET /api/v1/points
async fn list_points(state: web::Data<AppState>) -> impl Responder {
    let points = state.catalog.points().to_vec();

    HttpResponse::Ok().json(PointsResponse {
        total: points.len(),
        points,
    })
}

/// Single catalog point
///
/// GET /api/v1/points/{id}
async fn get_point(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get(&id) {
        Some(point) => HttpResponse::Ok().json(point),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Point not found".to_string(),
            message: format!("No recycling point with id {}", id),
            status_code: 404,
        }),
    }
}

/// Search recycling points endpoint
///
/// POST /api/v1/points/search
///
/// Request body:
/// ```json
/// {
///   "materials": ["pneus de mineração"],
///   "location": "Belo Horizonte, MG",
///   "quantity": "10 ton",
///   "wasteClass": "classe-2a",
///   "limit": 10
/// }
/// ```
async fn search_points(
    state: web::Data<AppState>,
    req: web::Json<SearchPointsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let query = req.to_query();
    let limit = state.settings.effective_limit(req.limit);

    tracing::info!(
        "Searching points for materials {:?} near {:?}",
        query.selected_materials,
        query.location_text
    );

    let mut result = state.matcher.search(&query, state.catalog.points());
    let total_results = result.matches.len();
    if let Some(limit) = limit {
        result.matches.truncate(limit);
    }

    let response = SearchPointsResponse {
        search_id: uuid::Uuid::new_v4(),
        searched_at: chrono::Utc::now(),
        location: query.location_text,
        selected_materials: query.selected_materials,
        waste_class: query.waste_class,
        matches: result.matches,
        total_results,
        total_points: result.total_points,
    };

    tracing::info!(
        "Returning {} points (from {} matches, {} in catalog)",
        response.matches.len(),
        total_results,
        response.total_points
    );

    HttpResponse::Ok().json(response)
}
