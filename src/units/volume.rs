use serde::{Deserialize, Serialize};

/// 연료 체적 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    UsGallon,
    ImperialGallon,
}

pub(crate) const LITERS_PER_US_GALLON: f64 = 3.785_411_784;
pub(crate) const LITERS_PER_IMPERIAL_GALLON: f64 = 4.546_09;

impl VolumeUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::Liter => "L",
            VolumeUnit::UsGallon => "gal",
            VolumeUnit::ImperialGallon => "gal (imp)",
        }
    }
}

fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::UsGallon => value * LITERS_PER_US_GALLON,
        VolumeUnit::ImperialGallon => value * LITERS_PER_IMPERIAL_GALLON,
    }
}

fn from_liter(value_l: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value_l,
        VolumeUnit::UsGallon => value_l / LITERS_PER_US_GALLON,
        VolumeUnit::ImperialGallon => value_l / LITERS_PER_IMPERIAL_GALLON,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    from_liter(to_liter(value, from), to)
}
