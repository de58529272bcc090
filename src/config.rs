use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::format::CurrencyFormat;
use crate::units::{DistanceUnit, EconomyUnit, VolumeUnit};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 기본 연료 단가 [통화/L].
pub const DEFAULT_FUEL_PRICE_PER_LITER: f64 = 1250.0;

/// 결과 표시 단위 프리셋.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// km, L, km/L. 내부 계산 기본값.
    Metric,
    /// mi, US gal, mpg
    UsCustomary,
    /// mi, imp gal, mpg(imp)
    Imperial,
}

impl UnitSystem {
    pub fn distance_unit(self) -> DistanceUnit {
        match self {
            UnitSystem::Metric => DistanceUnit::Kilometer,
            UnitSystem::UsCustomary | UnitSystem::Imperial => DistanceUnit::Mile,
        }
    }

    pub fn volume_unit(self) -> VolumeUnit {
        match self {
            UnitSystem::Metric => VolumeUnit::Liter,
            UnitSystem::UsCustomary => VolumeUnit::UsGallon,
            UnitSystem::Imperial => VolumeUnit::ImperialGallon,
        }
    }

    pub fn economy_unit(self) -> EconomyUnit {
        match self {
            UnitSystem::Metric => EconomyUnit::KmPerLiter,
            UnitSystem::UsCustomary => EconomyUnit::MpgUs,
            UnitSystem::Imperial => EconomyUnit::MpgImperial,
        }
    }
}

/// HTTP 서버 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    /// 언어 코드(es/en). 없으면 시스템 로케일을 따른다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// 입력에 단가가 없을 때 쓰는 연료 단가
    pub fuel_price_per_liter: f64,
    pub currency: CurrencyFormat,
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            language: None,
            fuel_price_per_liter: DEFAULT_FUEL_PRICE_PER_LITER,
            currency: CurrencyFormat::default(),
            server: ServerConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
