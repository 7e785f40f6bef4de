use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    TravelOsError,
    planner::{CityCard, TripPlanner, TripReport, TripRequest},
};

#[derive(Serialize, Deserialize)]
pub struct ApiRoute {
    pub name: String,
    pub cities: Vec<String>,
    pub distance_km: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Request failures mapped onto HTTP status codes, always with an [`ApiError`] body
pub enum ApiFailure {
    Planner(TravelOsError),
    Body(JsonRejection),
}

impl From<TravelOsError> for ApiFailure {
    fn from(err: TravelOsError) -> Self {
        Self::Planner(err)
    }
}

impl From<JsonRejection> for ApiFailure {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiFailure::Planner(err) => {
                let status = match err {
                    TravelOsError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                tracing::warn!(%status, "Plan request failed: {}", err);
                (status, err.user_message())
            }
            ApiFailure::Body(rejection) => {
                let status = rejection.status();
                let error = rejection.body_text();
                tracing::warn!(%status, "Rejected request body: {}", error);
                (status, error)
            }
        };
        (status, Json(ApiError { error })).into_response()
    }
}

pub fn router(planner: TripPlanner<'static>) -> Router {
    Router::new()
        .route("/cities", get(get_cities))
        .route("/routes", get(get_routes))
        .route("/plan", post(plan_trip))
        .with_state(planner)
}

async fn get_cities(State(planner): State<TripPlanner<'static>>) -> Json<Vec<CityCard>> {
    Json(planner.catalog().cities().iter().map(CityCard::from).collect())
}

async fn get_routes(State(planner): State<TripPlanner<'static>>) -> Json<Vec<ApiRoute>> {
    let segment_length_km = planner.settings().segment_length_km;
    let routes = planner
        .catalog()
        .routes()
        .iter()
        .map(|route| ApiRoute {
            name: route.name.clone(),
            cities: route.city_names().into_iter().map(String::from).collect(),
            distance_km: route.distance_km(segment_length_km),
        })
        .collect();
    Json(routes)
}

async fn plan_trip(
    State(planner): State<TripPlanner<'static>>,
    body: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<TripReport>, ApiFailure> {
    let Json(request) = body?;
    let report = planner.plan(&request)?;
    Ok(Json(report))
}
