//! 결과 표시용 숫자/통화 서식.

use serde::{Deserialize, Serialize};

use crate::units::{
    convert_distance, convert_economy, convert_volume, DistanceUnit, EconomyUnit, VolumeUnit,
};

/// 통화 및 숫자 표기 규칙. 기본값은 칠레 페소(es-CL) 표기.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub code: String,
    pub symbol: String,
    /// 통화 금액의 소수 자리 수
    pub decimals: usize,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            code: "CLP".to_string(),
            symbol: "$".to_string(),
            decimals: 0,
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }
}

/// 천 단위 구분자와 소수 구분자를 적용해 숫자를 표기한다.
pub fn format_number(value: f64, decimals: usize, fmt: &CurrencyFormat) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut out = String::with_capacity(rendered.len() + int_part.len() / 3 + 1);
    let is_zero = rendered.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(fmt.thousands_separator);
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push(fmt.decimal_separator);
        out.push_str(frac);
    }
    out
}

/// 통화 금액을 표기한다. 예: `$6.944`
pub fn format_currency(amount: f64, fmt: &CurrencyFormat) -> String {
    let number = format_number(amount, fmt.decimals, fmt);
    match number.strip_prefix('-') {
        Some(abs) => format!("-{}{abs}", fmt.symbol),
        None => format!("{}{number}", fmt.symbol),
    }
}

/// km 값을 표시 단위로 바꿔 정수로 표기한다.
pub fn format_distance(km: f64, unit: DistanceUnit, fmt: &CurrencyFormat) -> String {
    let value = convert_distance(km, DistanceUnit::Kilometer, unit);
    format!("{} {}", format_number(value, 0, fmt), unit.symbol())
}

/// 리터 값을 표시 단위로 바꿔 소수 첫째 자리까지 표기한다.
pub fn format_volume(liters: f64, unit: VolumeUnit, fmt: &CurrencyFormat) -> String {
    let value = convert_volume(liters, VolumeUnit::Liter, unit);
    format!("{} {}", format_number(value, 1, fmt), unit.symbol())
}

/// km/L 값을 표시 단위로 바꿔 소수 첫째 자리까지 표기한다.
pub fn format_efficiency(km_per_liter: f64, unit: EconomyUnit, fmt: &CurrencyFormat) -> String {
    let value = convert_economy(km_per_liter, EconomyUnit::KmPerLiter, unit);
    format!("{} {}", format_number(value, 1, fmt), unit.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let fmt = CurrencyFormat::default();
        assert_eq!(format_number(1234567.0, 0, &fmt), "1.234.567");
        assert_eq!(format_number(999.0, 0, &fmt), "999");
        assert_eq!(format_number(1000.5, 2, &fmt), "1.000,50");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        let fmt = CurrencyFormat::default();
        assert_eq!(format_number(-0.001, 2, &fmt), "0,00");
        assert_eq!(format_currency(-1500.0, &fmt), "-$1.500");
    }
}
