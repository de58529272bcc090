//! 표시용 단위 정의 및 변환 모듈 모음.

pub mod distance;
pub mod economy;
pub mod volume;

pub use distance::{convert_distance, DistanceUnit};
pub use economy::{convert_economy, EconomyUnit};
pub use volume::{convert_volume, VolumeUnit};
