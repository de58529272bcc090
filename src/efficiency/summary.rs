use serde::Serialize;

use super::estimator::{round_to, TripResult};

/// 여러 주행 결과의 통계.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub trips: usize,
    pub total_km: f64,
    pub total_liters: f64,
    pub total_cost: f64,
    /// 총 거리 / 총 연료 [km/L]
    pub average_efficiency_km_per_liter: f64,
    /// 총 비용 / 총 거리
    pub average_cost_per_km: f64,
    pub best_efficiency_km_per_liter: f64,
    pub worst_efficiency_km_per_liter: f64,
}

/// 주행 결과 목록을 집계한다. 빈 목록이면 None.
pub fn summarize(results: &[TripResult]) -> Option<TripSummary> {
    if results.is_empty() {
        return None;
    }
    let mut total_km = 0.0;
    let mut total_liters = 0.0;
    let mut total_cost = 0.0;
    let mut best = f64::MIN;
    let mut worst = f64::MAX;
    for r in results {
        total_km += r.km_consumed;
        total_liters += r.liters_used;
        total_cost += r.trip_cost;
        best = best.max(r.adjusted_efficiency_km_per_liter);
        worst = worst.min(r.adjusted_efficiency_km_per_liter);
    }
    let average_efficiency = if total_liters > 0.0 {
        total_km / total_liters
    } else {
        0.0
    };
    Some(TripSummary {
        trips: results.len(),
        total_km,
        total_liters: round_to(total_liters, 2),
        total_cost: round_to(total_cost, 2),
        average_efficiency_km_per_liter: round_to(average_efficiency, 1),
        average_cost_per_km: round_to(total_cost / total_km, 2),
        best_efficiency_km_per_liter: best,
        worst_efficiency_km_per_liter: worst,
    })
}
