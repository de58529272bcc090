use serde::{Deserialize, Serialize};

use crate::efficiency::{DrivingStyle, RouteType, TripInput};

/// `POST /efficiency/estimate` 요청 본문. 단가를 생략하면 서버 설정값을 쓴다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub start_range_km: f64,
    pub end_range_km: f64,
    pub driving_style: DrivingStyle,
    pub route_type: RouteType,
    #[serde(default)]
    pub use_air_conditioning: bool,
    pub fuel_price_per_liter: Option<f64>,
}

impl EstimateRequest {
    pub fn into_trip_input(self, default_price: f64) -> TripInput {
        TripInput {
            start_range_km: self.start_range_km,
            end_range_km: self.end_range_km,
            driving_style: self.driving_style,
            route_type: self.route_type,
            use_air_conditioning: self.use_air_conditioning,
            fuel_price_per_liter: self.fuel_price_per_liter.unwrap_or(default_price),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
