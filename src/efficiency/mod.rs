//! 주행 연비 추정 모듈 모음.

pub mod estimator;
pub mod factors;
pub mod summary;

pub use estimator::*;
pub use factors::*;
pub use summary::*;
