//! 주유 기록 통계. 대시보드의 총 지출, 평균 단가, 단가 추세를 계산한다.

use serde::{Deserialize, Serialize};

use crate::efficiency::round_to;

/// 주유 한 건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecord {
    pub liters: f64,
    pub price_per_liter: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_station: Option<String>,
}

impl FuelRecord {
    pub fn new(liters: f64, price_per_liter: f64) -> Self {
        Self {
            liters,
            price_per_liter,
            gas_station: None,
        }
    }

    /// 주유 금액 = 단가 × 리터.
    pub fn total_cost(&self) -> f64 {
        self.price_per_liter * self.liters
    }

    pub fn validate(&self) -> Result<(), FuelLogError> {
        if !self.liters.is_finite() || self.liters <= 0.0 {
            return Err(FuelLogError::InvalidLiters(self.liters));
        }
        if !self.price_per_liter.is_finite() || self.price_per_liter < 0.0 {
            return Err(FuelLogError::InvalidPrice(self.price_per_liter));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FuelLogError {
    #[error("liters must be a positive number (got {0})")]
    InvalidLiters(f64),
    #[error("price per liter must be a non-negative number (got {0})")]
    InvalidPrice(f64),
}

/// 주유 기록 통계.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStats {
    pub records: usize,
    pub total_liters: f64,
    pub total_spent: f64,
    /// 기록별 단가의 단순 평균
    pub average_price_per_liter: f64,
    /// 가장 오래된 기록 대비 최신 기록의 단가 변화율 [%]
    pub price_trend_percent: f64,
}

/// 오래된 것부터 정렬된 기록을 집계한다. 빈 목록이면 None.
///
/// 기록이 하나뿐이거나 가장 오래된 단가가 0이면 추세는 0이다.
pub fn fuel_stats(records: &[FuelRecord]) -> Option<FuelStats> {
    let (oldest, newest) = (records.first()?, records.last()?);
    let total_spent: f64 = records.iter().map(FuelRecord::total_cost).sum();
    let total_liters: f64 = records.iter().map(|r| r.liters).sum();
    let price_sum: f64 = records.iter().map(|r| r.price_per_liter).sum();
    let trend = if records.len() > 1 && oldest.price_per_liter != 0.0 {
        (newest.price_per_liter - oldest.price_per_liter) / oldest.price_per_liter * 100.0
    } else {
        0.0
    };
    Some(FuelStats {
        records: records.len(),
        total_liters: round_to(total_liters, 2),
        total_spent: round_to(total_spent, 2),
        average_price_per_liter: round_to(price_sum / records.len() as f64, 2),
        price_trend_percent: round_to(trend, 1),
    })
}
