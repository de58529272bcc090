use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::batch::{self, BatchReport};
use crate::config::{Config, UnitSystem};
use crate::efficiency::{estimate, DrivingStyle, RouteType, TripInput, TripResult, TripSummary};
use crate::format::{
    format_currency, format_distance, format_efficiency, format_number, format_volume,
};
use crate::fuel_log::FuelStats;
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Estimate,
    Batch,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ESTIMATE));
    println!("{}", tr.t(keys::MAIN_MENU_BATCH));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Estimate),
            "2" => return Ok(MenuChoice::Batch),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 주행 연비 계산 메뉴를 처리한다. 검증 오류는 안내 후 메뉴로 돌아간다.
pub fn handle_estimate(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ESTIMATE_HEADING));
    println!("{}", tr.t(keys::ESTIMATE_SUBTITLE));
    let start = read_f64(tr, tr.t(keys::PROMPT_START_RANGE))?;
    let end = read_f64(tr, tr.t(keys::PROMPT_END_RANGE))?;
    let style = read_driving_style(tr)?;
    let route = read_route_type(tr)?;
    let ac = read_yes_no(tr.t(keys::PROMPT_USE_AC))?;
    let price = read_optional_f64(tr, tr.t(keys::PROMPT_FUEL_PRICE))?
        .unwrap_or(cfg.fuel_price_per_liter);

    let input = TripInput {
        start_range_km: start,
        end_range_km: end,
        driving_style: style,
        route_type: route,
        use_air_conditioning: ac,
        fuel_price_per_liter: price,
    };
    match estimate(&input) {
        Ok(result) => {
            println!("{} / {}", tr.driving_style(style), tr.route_type(route));
            print_result(tr, cfg, &result);
        }
        Err(e) => println!("{}: {}", tr.t(keys::ERROR_PREFIX), tr.validation_error(&e)),
    }
    Ok(())
}

/// 배치 요약 메뉴를 처리한다.
pub fn handle_batch(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::BATCH_HEADING));
    let path = read_line(tr.t(keys::PROMPT_BATCH_FILE))?;
    let outcome = batch::load_batch(Path::new(path.trim()), cfg.fuel_price_per_liter)
        .and_then(|input| batch::run_batch(&input));
    match outcome {
        Ok(report) => print_report(tr, cfg, &report),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        tr.unit_system(cfg.unit_system)
    );
    println!("{}", tr.t(keys::SETTINGS_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if !sel.trim().is_empty() {
        cfg.unit_system = match sel.trim() {
            "1" => UnitSystem::Metric,
            "2" => UnitSystem::UsCustomary,
            "3" => UnitSystem::Imperial,
            _ => {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                cfg.unit_system
            }
        };
    }

    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_PRICE),
        format_currency(cfg.fuel_price_per_liter, &cfg.currency)
    );
    match read_optional_f64(tr, tr.t(keys::SETTINGS_PROMPT_PRICE))? {
        Some(p) if p.is_finite() && p > 0.0 => cfg.fuel_price_per_liter = p,
        Some(_) => println!("{}", tr.t(keys::ERROR_INVALID_PRICE)),
        None => {}
    }
    println!(
        "{} {}, {}",
        tr.t(keys::SETTINGS_SAVED),
        tr.unit_system(cfg.unit_system),
        format_currency(cfg.fuel_price_per_liter, &cfg.currency)
    );
    Ok(())
}

/// 주행 결과를 설정된 단위와 통화로 출력한다.
pub fn print_result(tr: &Translator, cfg: &Config, result: &TripResult) {
    let units = cfg.unit_system;
    let fmt = &cfg.currency;
    println!(
        "{} {} → {}",
        tr.t(keys::RESULT_EFFICIENCY),
        format_efficiency(result.base_efficiency_km_per_liter, units.economy_unit(), fmt),
        format_efficiency(
            result.adjusted_efficiency_km_per_liter,
            units.economy_unit(),
            fmt
        )
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_COST_PER_KM),
        format_currency(result.cost_per_km, fmt)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_TRIP_COST),
        format_currency(result.trip_cost, fmt)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_KM_CONSUMED),
        format_distance(result.km_consumed, units.distance_unit(), fmt)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_LITERS_USED),
        format_volume(result.liters_used, units.volume_unit(), fmt)
    );
}

/// 배치 요약을 출력한다.
pub fn print_report(tr: &Translator, cfg: &Config, report: &BatchReport) {
    if report.summary.is_none() && report.fuel.is_none() {
        println!("{}", tr.t(keys::SUMMARY_EMPTY));
        return;
    }
    if let Some(summary) = &report.summary {
        print_trip_summary(tr, cfg, summary);
    }
    if let Some(stats) = &report.fuel {
        print_fuel_stats(tr, cfg, stats);
    }
}

fn print_trip_summary(tr: &Translator, cfg: &Config, summary: &TripSummary) {
    let units = cfg.unit_system;
    let fmt = &cfg.currency;
    println!("{} {}", tr.t(keys::SUMMARY_TRIPS), summary.trips);
    println!(
        "{} {}",
        tr.t(keys::SUMMARY_TOTAL_KM),
        format_distance(summary.total_km, units.distance_unit(), fmt)
    );
    println!(
        "{} {}",
        tr.t(keys::SUMMARY_TOTAL_LITERS),
        format_volume(summary.total_liters, units.volume_unit(), fmt)
    );
    println!(
        "{} {}",
        tr.t(keys::SUMMARY_TOTAL_COST),
        format_currency(summary.total_cost, fmt)
    );
    println!(
        "{} {}",
        tr.t(keys::SUMMARY_AVG_EFFICIENCY),
        format_efficiency(
            summary.average_efficiency_km_per_liter,
            units.economy_unit(),
            fmt
        )
    );
    println!(
        "{} {}",
        tr.t(keys::SUMMARY_AVG_COST),
        format_currency(summary.average_cost_per_km, fmt)
    );
    println!(
        "{} {} / {}",
        tr.t(keys::SUMMARY_BEST_WORST),
        format_efficiency(
            summary.best_efficiency_km_per_liter,
            units.economy_unit(),
            fmt
        ),
        format_efficiency(
            summary.worst_efficiency_km_per_liter,
            units.economy_unit(),
            fmt
        )
    );
}

fn print_fuel_stats(tr: &Translator, cfg: &Config, stats: &FuelStats) {
    let fmt = &cfg.currency;
    println!("{}", tr.t(keys::FUEL_HEADING));
    println!("{} {}", tr.t(keys::FUEL_RECORDS), stats.records);
    println!(
        "{} {}",
        tr.t(keys::FUEL_TOTAL_LITERS),
        format_volume(stats.total_liters, cfg.unit_system.volume_unit(), fmt)
    );
    println!(
        "{} {}",
        tr.t(keys::FUEL_TOTAL_SPENT),
        format_currency(stats.total_spent, fmt)
    );
    println!(
        "{} {}",
        tr.t(keys::FUEL_AVG_PRICE),
        format_currency(stats.average_price_per_liter, fmt)
    );
    let sign = if stats.price_trend_percent > 0.0 { "+" } else { "" };
    println!(
        "{} {sign}{}%",
        tr.t(keys::FUEL_PRICE_TREND),
        format_number(stats.price_trend_percent, 1, fmt)
    );
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 None.
fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_yes_no(prompt: &str) -> Result<bool, AppError> {
    let s = read_line(prompt)?;
    Ok(matches!(
        s.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes" | "1"
    ))
}

fn read_driving_style(tr: &Translator) -> Result<DrivingStyle, AppError> {
    println!("{}", tr.t(keys::DRIVING_STYLE_OPTIONS));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => return Ok(DrivingStyle::Gentle),
            "2" => return Ok(DrivingStyle::Normal),
            "3" => return Ok(DrivingStyle::Aggressive),
            other => match other.parse() {
                Ok(style) => return Ok(style),
                Err(_) => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
            },
        }
    }
}

fn read_route_type(tr: &Translator) -> Result<RouteType, AppError> {
    println!("{}", tr.t(keys::ROUTE_TYPE_OPTIONS));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => return Ok(RouteType::City),
            "2" => return Ok(RouteType::Highway),
            "3" => return Ok(RouteType::Mixed),
            other => match other.parse() {
                Ok(route) => return Ok(route),
                Err(_) => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
            },
        }
    }
}
