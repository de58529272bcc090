use serde::{Deserialize, Serialize};

/// 거리 단위. 내부 기준은 킬로미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    Kilometer,
    Mile,
}

const KM_PER_MILE: f64 = 1.609_344;

impl DistanceUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Kilometer => "km",
            DistanceUnit::Mile => "mi",
        }
    }
}

fn to_km(value: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometer => value,
        DistanceUnit::Mile => value * KM_PER_MILE,
    }
}

fn from_km(value_km: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometer => value_km,
        DistanceUnit::Mile => value_km / KM_PER_MILE,
    }
}

/// 거리를 다른 단위로 변환한다.
pub fn convert_distance(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    from_km(to_km(value, from), to)
}
