use std::path::Path;
use tracing::info;

use crate::api::{self, models::ErrorResponse, AppState};
use crate::batch::{self, BatchError};
use crate::config::{Config, ConfigError};
use crate::efficiency::{estimate, TripInput, ValidationError};
use crate::i18n::{self, Translator};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Batch(#[from] BatchError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Estimate => ui_cli::handle_estimate(tr, config)?,
            MenuChoice::Batch => ui_cli::handle_batch(tr, config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 주행 한 건을 추정해 출력한다. `json`이면 결과 또는 오류 본문을 JSON으로 낸다.
pub fn estimate_once(
    config: &Config,
    tr: &Translator,
    input: &TripInput,
    json: bool,
) -> Result<(), AppError> {
    match estimate(input) {
        Ok(result) if json => println!("{}", serde_json::to_string_pretty(&result)?),
        Ok(result) => ui_cli::print_result(tr, config, &result),
        Err(e) => {
            if json {
                let body = ErrorResponse {
                    code: e.code().to_string(),
                    message: e.to_string(),
                };
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
            return Err(e.into());
        }
    }
    Ok(())
}

/// 배치 파일의 주행과 주유 기록을 집계해 출력한다.
pub fn batch_file(
    config: &Config,
    tr: &Translator,
    path: &Path,
    json: bool,
) -> Result<(), AppError> {
    let input = batch::load_batch(path, config.fuel_price_per_liter)?;
    let report = batch::run_batch(&input)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ui_cli::print_report(tr, config, &report);
    }
    Ok(())
}

/// HTTP 서버를 실행한다. 요청이 올 때까지 블록된다.
pub fn serve(config: &Config, tr: &Translator, bind: Option<&str>) -> Result<(), AppError> {
    let bind = bind.unwrap_or(config.server.bind.as_str());
    let state = AppState::from_config(config);
    println!("{} {bind}", tr.t(i18n::keys::SERVER_LISTENING));
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(api::serve(bind, state))?;
    info!("server stopped");
    Ok(())
}
