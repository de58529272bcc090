//! TOML 파일에 기록한 여러 주행과 주유 기록을 한 번에 추정하고 집계한다.
//!
//! ```toml
//! fuel_price_per_liter = 1250.0
//!
//! [[trip]]
//! start_range_km = 500
//! end_range_km = 400
//! driving_style = "normal"
//! route_type = "mixed"
//! use_air_conditioning = false
//!
//! [[refuel]]
//! liters = 40.0
//! price_per_liter = 1250.0
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::efficiency::{
    estimate, summarize, DrivingStyle, RouteType, TripInput, TripResult, TripSummary,
    ValidationError,
};
use crate::fuel_log::{fuel_stats, FuelLogError, FuelRecord, FuelStats};

/// 배치 파일의 주행 한 건.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchTrip {
    pub start_range_km: f64,
    pub end_range_km: f64,
    pub driving_style: DrivingStyle,
    pub route_type: RouteType,
    #[serde(default)]
    pub use_air_conditioning: bool,
    /// 없으면 파일 또는 설정의 단가를 쓴다
    pub fuel_price_per_liter: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct BatchFile {
    fuel_price_per_liter: Option<f64>,
    #[serde(default)]
    trip: Vec<BatchTrip>,
    #[serde(default)]
    refuel: Vec<BatchRefuel>,
}

/// 배치 파일의 주유 기록 한 건. 오래된 것부터 적는다.
#[derive(Debug, Clone, Deserialize)]
struct BatchRefuel {
    liters: f64,
    price_per_liter: f64,
    gas_station: Option<String>,
}

/// 배치 파일 내용.
#[derive(Debug, Clone, Default)]
pub struct BatchInput {
    pub trips: Vec<TripInput>,
    pub refuels: Vec<FuelRecord>,
}

/// 배치 처리 결과.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub results: Vec<TripResult>,
    pub summary: Option<TripSummary>,
    pub fuel: Option<FuelStats>,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("cannot read batch file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse batch file: {0}")]
    Parse(#[from] toml::de::Error),
    /// 1부터 세는 주행 번호
    #[error("trip #{index}: {source}")]
    Trip {
        index: usize,
        source: ValidationError,
    },
    /// 1부터 세는 주유 기록 번호
    #[error("refuel #{index}: {source}")]
    Refuel { index: usize, source: FuelLogError },
}

/// TOML 문자열에서 주행과 주유 기록을 읽는다. 단가 우선순위: 주행 > 파일 > `default_price`.
pub fn parse_batch(src: &str, default_price: f64) -> Result<BatchInput, BatchError> {
    let file: BatchFile = toml::from_str(src)?;
    let file_price = file.fuel_price_per_liter.unwrap_or(default_price);
    let trips = file
        .trip
        .into_iter()
        .map(|t| TripInput {
            start_range_km: t.start_range_km,
            end_range_km: t.end_range_km,
            driving_style: t.driving_style,
            route_type: t.route_type,
            use_air_conditioning: t.use_air_conditioning,
            fuel_price_per_liter: t.fuel_price_per_liter.unwrap_or(file_price),
        })
        .collect();
    let refuels = file
        .refuel
        .into_iter()
        .map(|r| FuelRecord {
            liters: r.liters,
            price_per_liter: r.price_per_liter,
            gas_station: r.gas_station,
        })
        .collect();
    Ok(BatchInput { trips, refuels })
}

/// 주행 목록만 읽는다.
pub fn parse_trips(src: &str, default_price: f64) -> Result<Vec<TripInput>, BatchError> {
    Ok(parse_batch(src, default_price)?.trips)
}

pub fn load_batch(path: &Path, default_price: f64) -> Result<BatchInput, BatchError> {
    let content = fs::read_to_string(path)?;
    let input = parse_batch(&content, default_price)?;
    info!(
        path = %path.display(),
        trips = input.trips.len(),
        refuels = input.refuels.len(),
        "batch loaded"
    );
    Ok(input)
}

/// 모든 주행을 추정하고 주유 기록을 집계한다.
/// 하나라도 검증에 실패하면 해당 번호와 함께 중단한다.
pub fn run_batch(input: &BatchInput) -> Result<BatchReport, BatchError> {
    let results = input
        .trips
        .iter()
        .enumerate()
        .map(|(i, trip)| {
            estimate(trip).map_err(|source| BatchError::Trip {
                index: i + 1,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    for (i, record) in input.refuels.iter().enumerate() {
        record
            .validate()
            .map_err(|source| BatchError::Refuel { index: i + 1, source })?;
    }
    Ok(BatchReport {
        summary: summarize(&results),
        fuel: fuel_stats(&input.refuels),
        results,
    })
}
