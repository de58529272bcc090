use serde::{Deserialize, Serialize};

use super::distance::{convert_distance, DistanceUnit};
use super::volume::{LITERS_PER_IMPERIAL_GALLON, LITERS_PER_US_GALLON};

/// 연비 표기 단위. 내부 기준은 km/L이다.
///
/// L/100km는 역수 관계이므로 0 이하 값은 0으로 돌려준다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EconomyUnit {
    KmPerLiter,
    LitersPer100Km,
    MpgUs,
    MpgImperial,
}

impl EconomyUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            EconomyUnit::KmPerLiter => "km/L",
            EconomyUnit::LitersPer100Km => "L/100km",
            EconomyUnit::MpgUs => "mpg",
            EconomyUnit::MpgImperial => "mpg (imp)",
        }
    }
}

fn miles(km: f64) -> f64 {
    convert_distance(km, DistanceUnit::Kilometer, DistanceUnit::Mile)
}

fn kilometers(mi: f64) -> f64 {
    convert_distance(mi, DistanceUnit::Mile, DistanceUnit::Kilometer)
}

fn to_km_per_liter(value: f64, unit: EconomyUnit) -> f64 {
    match unit {
        EconomyUnit::KmPerLiter => value,
        EconomyUnit::LitersPer100Km => {
            if value > 0.0 {
                100.0 / value
            } else {
                0.0
            }
        }
        EconomyUnit::MpgUs => kilometers(value) / LITERS_PER_US_GALLON,
        EconomyUnit::MpgImperial => kilometers(value) / LITERS_PER_IMPERIAL_GALLON,
    }
}

fn from_km_per_liter(km_per_l: f64, unit: EconomyUnit) -> f64 {
    match unit {
        EconomyUnit::KmPerLiter => km_per_l,
        EconomyUnit::LitersPer100Km => {
            if km_per_l > 0.0 {
                100.0 / km_per_l
            } else {
                0.0
            }
        }
        EconomyUnit::MpgUs => miles(km_per_l * LITERS_PER_US_GALLON),
        EconomyUnit::MpgImperial => miles(km_per_l * LITERS_PER_IMPERIAL_GALLON),
    }
}

/// 연비를 다른 표기로 변환한다.
pub fn convert_economy(value: f64, from: EconomyUnit, to: EconomyUnit) -> f64 {
    from_km_per_liter(to_km_per_liter(value, from), to)
}
