//! 주행 연비 추정 로직을 라이브러리로 분리하여 CLI와 HTTP 서버가 함께 쓴다.

pub mod api;
pub mod app;
pub mod batch;
pub mod config;
pub mod efficiency;
pub mod format;
pub mod fuel_log;
pub mod i18n;
pub mod ui_cli;
pub mod units;
