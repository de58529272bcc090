use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use fuel_efficiency_toolbox::app::{self, AppError};
use fuel_efficiency_toolbox::config::{self, DEFAULT_CONFIG_PATH};
use fuel_efficiency_toolbox::efficiency::{DrivingStyle, RouteType, TripInput};
use fuel_efficiency_toolbox::i18n::{self, keys, Translator};

#[derive(Debug, Parser)]
#[command(name = "fuel_efficiency_toolbox", version, about = "Trip fuel efficiency and cost estimator")]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 표시 언어 (es, en, auto)
    #[arg(long, global = true)]
    lang: Option<String>,
    /// 로그 상세도 (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 대화형 메뉴 (기본값)
    Menu,
    /// 주행 한 건을 추정한다
    Estimate(EstimateArgs),
    /// TOML 파일의 주행들을 추정하고 요약한다
    Batch {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// HTTP 서버를 실행한다
    Serve {
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(Debug, Args)]
struct EstimateArgs {
    /// 출발 시 주행 가능 거리 [km]
    #[arg(long, allow_hyphen_values = true)]
    start: f64,
    /// 도착 시 주행 가능 거리 [km]
    #[arg(long, allow_hyphen_values = true)]
    end: f64,
    #[arg(long, default_value = "normal")]
    style: DrivingStyle,
    #[arg(long, default_value = "mixed")]
    route: RouteType,
    /// 에어컨 사용
    #[arg(long)]
    ac: bool,
    /// 연료 단가. 없으면 설정값
    #[arg(long)]
    price: Option<f64>,
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err((tr, err)) => {
            let message = match &err {
                AppError::Validation(e) => tr.validation_error(e).to_string(),
                other => other.to_string(),
            };
            eprintln!("{}: {message}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG`이 없을 때 쓰는 필터.
fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let default = default_log_level(verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 오류 시에는 오류 메시지 출력에 쓸 번역기를 함께 돌려준다.
fn try_run(cli: &Cli) -> Result<(), (Translator, AppError)> {
    let mut cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            let lang = i18n::resolve_language(cli.lang.as_deref(), None);
            return Err((Translator::new(&lang), e.into()));
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), cfg.language.as_deref());
    let tr = Translator::new_with_pack(&lang, None);

    let outcome = match &cli.command {
        None | Some(Command::Menu) => app::run(&mut cfg, &cli.config, &tr),
        Some(Command::Estimate(args)) => {
            let input = TripInput {
                start_range_km: args.start,
                end_range_km: args.end,
                driving_style: args.style,
                route_type: args.route,
                use_air_conditioning: args.ac,
                fuel_price_per_liter: args.price.unwrap_or(cfg.fuel_price_per_liter),
            };
            app::estimate_once(&cfg, &tr, &input, args.json)
        }
        Some(Command::Batch { file, json }) => app::batch_file(&cfg, &tr, file, *json),
        Some(Command::Serve { bind }) => app::serve(&cfg, &tr, bind.as_deref()),
    };
    outcome.map_err(|e| (tr, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_verbose_flag_enables_debug() {
        assert_eq!(default_log_level(0), "warn");
        assert_eq!(default_log_level(1), "debug");
        assert_eq!(default_log_level(2), "trace");
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::parse_from([
            "fuel_efficiency_toolbox",
            "-v",
            "estimate",
            "--start",
            "500",
            "--end",
            "400",
        ]);
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Some(Command::Estimate(_))));
    }
}
