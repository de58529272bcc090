use serde::{Deserialize, Serialize};
use tracing::debug;

use super::factors::{combined_factor, DrivingStyle, RouteType, BASE_EFFICIENCY_KM_PER_LITER};

/// 한 번의 주행 추정 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInput {
    /// 출발 시 주행 가능 거리 [km]
    pub start_range_km: f64,
    /// 도착 시 주행 가능 거리 [km]
    pub end_range_km: f64,
    pub driving_style: DrivingStyle,
    pub route_type: RouteType,
    pub use_air_conditioning: bool,
    /// 연료 단가 [통화/L]
    pub fuel_price_per_liter: f64,
}

/// 주행 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResult {
    /// 소모된 주행 가능 거리 [km]
    pub km_consumed: f64,
    /// 기준 연비 [km/L]
    pub base_efficiency_km_per_liter: f64,
    /// 반올림 전 보정 계수
    pub combined_factor: f64,
    /// 보정 연비 [km/L], 소수 첫째 자리
    pub adjusted_efficiency_km_per_liter: f64,
    /// km당 비용, 소수 둘째 자리
    pub cost_per_km: f64,
    /// 주행 비용, 소수 둘째 자리
    pub trip_cost: f64,
    /// 추정 연료 사용량 [L], 소수 둘째 자리
    pub liters_used: f64,
}

/// 입력 검증 오류.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// 출발 거리가 도착 거리보다 크지 않음
    #[error("start range ({start} km) must exceed end range ({end} km)")]
    InvalidRange { start: f64, end: f64 },
    /// 음수이거나 유한하지 않은 주행 가능 거리
    #[error("range readings must be finite and non-negative")]
    InvalidReading,
    /// 0 이하이거나 유한하지 않은 연료 단가
    #[error("fuel price must be a positive number (got {0})")]
    InvalidPrice(f64),
}

impl ValidationError {
    /// API 응답에 쓰는 고정 오류 코드.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidRange { .. } => "INVALID_RANGE",
            ValidationError::InvalidReading => "INVALID_READING",
            ValidationError::InvalidPrice(_) => "INVALID_PRICE",
        }
    }
}

/// 소수 `decimals` 자리로 반올림한다. 0.5는 0에서 먼 쪽으로 올린다.
///
/// 배율을 곱한 값이 유한하지 않으면 입력을 그대로 돌려준다.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// 주행 입력으로 보정 연비와 비용을 계산한다.
///
/// km당 비용은 화면에 표시되는 소수 첫째 자리 연비로 나누어 구한다.
/// 같은 입력에는 항상 같은 결과를 돌려준다.
pub fn estimate(input: &TripInput) -> Result<TripResult, ValidationError> {
    let start = input.start_range_km;
    let end = input.end_range_km;
    if !(start > end) {
        return Err(ValidationError::InvalidRange { start, end });
    }
    if end < 0.0 || !start.is_finite() {
        return Err(ValidationError::InvalidReading);
    }
    let price = input.fuel_price_per_liter;
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::InvalidPrice(price));
    }

    let km_consumed = start - end;
    let factor = combined_factor(
        input.driving_style,
        input.route_type,
        input.use_air_conditioning,
    );
    let adjusted = round_to(BASE_EFFICIENCY_KM_PER_LITER * factor, 1);
    let cost_per_km = round_to(price / adjusted, 2);
    let trip_cost = round_to(km_consumed * cost_per_km, 2);
    let liters_used = round_to(km_consumed / adjusted, 2);
    if !trip_cost.is_finite() || !liters_used.is_finite() {
        return Err(ValidationError::InvalidReading);
    }

    debug!(
        km_consumed,
        factor,
        adjusted,
        cost_per_km,
        trip_cost,
        "trip estimated"
    );

    Ok(TripResult {
        km_consumed,
        base_efficiency_km_per_liter: BASE_EFFICIENCY_KM_PER_LITER,
        combined_factor: factor,
        adjusted_efficiency_km_per_liter: adjusted,
        cost_per_km,
        trip_cost,
        liters_used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(start: f64, end: f64, price: f64) -> TripInput {
        TripInput {
            start_range_km: start,
            end_range_km: end,
            driving_style: DrivingStyle::Normal,
            route_type: RouteType::Mixed,
            use_air_conditioning: false,
            fuel_price_per_liter: price,
        }
    }

    #[test]
    fn round_to_half_away_from_zero() {
        assert_eq!(round_to(13.122, 1), 13.1);
        assert_eq!(round_to(7.9056, 1), 7.9);
        assert_eq!(round_to(95.4198, 2), 95.42);
        assert_eq!(round_to(0.125, 2), 0.13);
    }

    #[test]
    fn range_rule_wins_over_other_checks() {
        let err = estimate(&input(-5.0, -1.0, -3.0)).unwrap_err();
        assert_eq!(err.code(), "INVALID_RANGE");
    }

    #[test]
    fn negative_end_reading_is_rejected() {
        assert_eq!(
            estimate(&input(50.0, -10.0, 1250.0)),
            Err(ValidationError::InvalidReading)
        );
        assert_eq!(
            estimate(&input(f64::INFINITY, 10.0, 1250.0)),
            Err(ValidationError::InvalidReading)
        );
    }

    #[test]
    fn nan_reading_is_an_invalid_range() {
        assert!(matches!(
            estimate(&input(f64::NAN, 10.0, 1250.0)),
            Err(ValidationError::InvalidRange { .. })
        ));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        assert_eq!(
            estimate(&input(500.0, 400.0, 0.0)).unwrap_err().code(),
            "INVALID_PRICE"
        );
        assert_eq!(
            estimate(&input(500.0, 400.0, f64::NAN)).unwrap_err().code(),
            "INVALID_PRICE"
        );
    }

    #[test]
    fn round_to_keeps_values_too_large_to_scale() {
        assert_eq!(round_to(1.3888e308, 2), 1.3888e308);
        assert_eq!(round_to(f64::MAX, 1), f64::MAX);
    }

    #[test]
    fn overflowing_trip_cost_is_rejected() {
        let mut trip = input(1e308, 0.0, 1250.0);
        trip.driving_style = DrivingStyle::Gentle;
        trip.route_type = RouteType::Highway;
        assert_eq!(estimate(&trip), Err(ValidationError::InvalidReading));
    }

    #[test]
    fn huge_but_finite_trip_keeps_finite_cost() {
        let mut trip = input(2e306, 0.0, 1250.0);
        trip.driving_style = DrivingStyle::Gentle;
        trip.route_type = RouteType::Highway;
        let r = estimate(&trip).expect("finite result");
        assert_eq!(r.cost_per_km, 69.44);
        assert!(r.trip_cost.is_finite());
        assert!(r.liters_used.is_finite());
    }

    #[test]
    fn liters_follow_rounded_efficiency() {
        let r = estimate(&input(500.0, 369.0, 1250.0)).expect("valid");
        // 131 km / 13.1 km/L
        assert_eq!(r.liters_used, 10.0);
    }
}
