// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{RecyclingPoint, Coordinates, WasteClass, SearchQuery, MatchedPoint, MaterialOption, MaterialGroup};
pub use requests::SearchPointsRequest;
pub use responses::{SearchPointsResponse, PointsResponse, MaterialsResponse, WasteClassInfo, HealthResponse, ErrorResponse};
