use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 고속도로 최적 조건의 기준 연비 [km/L].
pub const BASE_EFFICIENCY_KM_PER_LITER: f64 = 18.0;

/// 에어컨 사용 시 연비 계수.
pub const AIR_CONDITIONING_FACTOR: f64 = 0.9;

/// 운전 스타일. 직렬화 이름은 영어이며 스페인어 이름도 받아들인다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrivingStyle {
    #[serde(rename = "gentle", alias = "suave")]
    Gentle,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "aggressive", alias = "agresivo")]
    Aggressive,
}

impl DrivingStyle {
    pub const ALL: [DrivingStyle; 3] = [
        DrivingStyle::Gentle,
        DrivingStyle::Normal,
        DrivingStyle::Aggressive,
    ];

    /// 기준 연비에 곱하는 계수.
    pub fn factor(self) -> f64 {
        match self {
            DrivingStyle::Gentle => 1.0,
            DrivingStyle::Normal => 0.9,
            DrivingStyle::Aggressive => 0.8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DrivingStyle::Gentle => "gentle",
            DrivingStyle::Normal => "normal",
            DrivingStyle::Aggressive => "aggressive",
        }
    }
}

/// 주행 경로 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteType {
    #[serde(rename = "city", alias = "ciudad")]
    City,
    #[serde(rename = "highway", alias = "carretera")]
    Highway,
    #[serde(rename = "mixed", alias = "mixta")]
    Mixed,
}

impl RouteType {
    pub const ALL: [RouteType; 3] = [RouteType::City, RouteType::Highway, RouteType::Mixed];

    /// 고속도로 대비 연비 비율. 혼합 14.6 km/L, 시내 10.9 km/L 근사.
    pub fn factor(self) -> f64 {
        match self {
            RouteType::Highway => 1.0,
            RouteType::Mixed => 0.81,
            RouteType::City => 0.61,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteType::City => "city",
            RouteType::Highway => "highway",
            RouteType::Mixed => "mixed",
        }
    }
}

/// 에어컨 사용 여부에 따른 계수.
pub fn air_conditioning_factor(use_air_conditioning: bool) -> f64 {
    if use_air_conditioning {
        AIR_CONDITIONING_FACTOR
    } else {
        1.0
    }
}

/// 세 계수의 곱. 계수 간 교차 항은 없다.
pub fn combined_factor(style: DrivingStyle, route: RouteType, use_air_conditioning: bool) -> f64 {
    style.factor() * route.factor() * air_conditioning_factor(use_air_conditioning)
}

/// 알 수 없는 열거형 문자열.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseFactorError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for DrivingStyle {
    type Err = ParseFactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gentle" | "suave" => Ok(DrivingStyle::Gentle),
            "normal" => Ok(DrivingStyle::Normal),
            "aggressive" | "agresivo" => Ok(DrivingStyle::Aggressive),
            other => Err(ParseFactorError {
                kind: "driving style",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for RouteType {
    type Err = ParseFactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "city" | "ciudad" => Ok(RouteType::City),
            "highway" | "carretera" => Ok(RouteType::Highway),
            "mixed" | "mixta" => Ok(RouteType::Mixed),
            other => Err(ParseFactorError {
                kind: "route type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DrivingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
