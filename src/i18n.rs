use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::debug;

use crate::config::UnitSystem;
use crate::efficiency::{DrivingStyle, RouteType, ValidationError};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ESTIMATE: &str = "main_menu.estimate";
    pub const MAIN_MENU_BATCH: &str = "main_menu.batch";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const ESTIMATE_HEADING: &str = "estimate.heading";
    pub const ESTIMATE_SUBTITLE: &str = "estimate.subtitle";
    pub const PROMPT_START_RANGE: &str = "prompt.start_range";
    pub const PROMPT_END_RANGE: &str = "prompt.end_range";
    pub const DRIVING_STYLE_OPTIONS: &str = "estimate.driving_style_options";
    pub const ROUTE_TYPE_OPTIONS: &str = "estimate.route_type_options";
    pub const PROMPT_USE_AC: &str = "prompt.use_ac";
    pub const PROMPT_FUEL_PRICE: &str = "prompt.fuel_price";

    pub const RESULT_EFFICIENCY: &str = "result.efficiency";
    pub const RESULT_COST_PER_KM: &str = "result.cost_per_km";
    pub const RESULT_TRIP_COST: &str = "result.trip_cost";
    pub const RESULT_KM_CONSUMED: &str = "result.km_consumed";
    pub const RESULT_LITERS_USED: &str = "result.liters_used";

    pub const BATCH_HEADING: &str = "batch.heading";
    pub const PROMPT_BATCH_FILE: &str = "prompt.batch_file";
    pub const SUMMARY_TRIPS: &str = "summary.trips";
    pub const SUMMARY_TOTAL_KM: &str = "summary.total_km";
    pub const SUMMARY_TOTAL_LITERS: &str = "summary.total_liters";
    pub const SUMMARY_TOTAL_COST: &str = "summary.total_cost";
    pub const SUMMARY_AVG_EFFICIENCY: &str = "summary.average_efficiency";
    pub const SUMMARY_AVG_COST: &str = "summary.average_cost";
    pub const SUMMARY_BEST_WORST: &str = "summary.best_worst";
    pub const SUMMARY_EMPTY: &str = "summary.empty";

    pub const FUEL_HEADING: &str = "fuel.heading";
    pub const FUEL_RECORDS: &str = "fuel.records";
    pub const FUEL_TOTAL_LITERS: &str = "fuel.total_liters";
    pub const FUEL_TOTAL_SPENT: &str = "fuel.total_spent";
    pub const FUEL_AVG_PRICE: &str = "fuel.average_price";
    pub const FUEL_PRICE_TREND: &str = "fuel.price_trend";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_UNIT_OPTIONS: &str = "settings.unit_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_CURRENT_PRICE: &str = "settings.current_price";
    pub const SETTINGS_PROMPT_PRICE: &str = "settings.prompt_price";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_INVALID_RANGE: &str = "error.invalid_range";
    pub const ERROR_INVALID_READING: &str = "error.invalid_reading";
    pub const ERROR_INVALID_PRICE: &str = "error.invalid_price";

    pub const STYLE_GENTLE: &str = "style.gentle";
    pub const STYLE_NORMAL: &str = "style.normal";
    pub const STYLE_AGGRESSIVE: &str = "style.aggressive";
    pub const ROUTE_CITY: &str = "route.city";
    pub const ROUTE_HIGHWAY: &str = "route.highway";
    pub const ROUTE_MIXED: &str = "route.mixed";
    pub const UNITS_METRIC: &str = "units.metric";
    pub const UNITS_US_CUSTOMARY: &str = "units.us_customary";
    pub const UNITS_IMPERIAL: &str = "units.imperial";

    pub const SERVER_LISTENING: &str = "server.listening";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Es,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Es
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(es/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 es로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        if let Some(ref map) = overrides {
            debug!(lang = lang_code, entries = map.len(), "language pack loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 > 선택 언어 > 스페인어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| es(key)),
            Language::Es => es(key),
        }
    }

    pub fn driving_style(&self, style: DrivingStyle) -> &str {
        self.t(match style {
            DrivingStyle::Gentle => keys::STYLE_GENTLE,
            DrivingStyle::Normal => keys::STYLE_NORMAL,
            DrivingStyle::Aggressive => keys::STYLE_AGGRESSIVE,
        })
    }

    pub fn route_type(&self, route: RouteType) -> &str {
        self.t(match route {
            RouteType::City => keys::ROUTE_CITY,
            RouteType::Highway => keys::ROUTE_HIGHWAY,
            RouteType::Mixed => keys::ROUTE_MIXED,
        })
    }

    pub fn unit_system(&self, system: UnitSystem) -> &str {
        self.t(match system {
            UnitSystem::Metric => keys::UNITS_METRIC,
            UnitSystem::UsCustomary => keys::UNITS_US_CUSTOMARY,
            UnitSystem::Imperial => keys::UNITS_IMPERIAL,
        })
    }

    /// 검증 오류를 사용자 언어 문장으로 바꾼다.
    pub fn validation_error(&self, err: &ValidationError) -> &str {
        self.t(match err {
            ValidationError::InvalidRange { .. } => keys::ERROR_INVALID_RANGE,
            ValidationError::InvalidReading => keys::ERROR_INVALID_READING,
            ValidationError::InvalidPrice(_) => keys::ERROR_INVALID_PRICE,
        })
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "es".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("es") => Some("es".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "es" => Some("es".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: 섹션/키 = "value" 로 구성된 맵.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let content = fs::read_to_string(dir.join(format!("{code}.toml"))).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., es-cl)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., es)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn es(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Saliendo de la aplicación.",
        MAIN_MENU_TITLE => "\n=== Cálculo de Rendimiento ===",
        MAIN_MENU_ESTIMATE => "1) Calcular rendimiento de un viaje",
        MAIN_MENU_BATCH => "2) Resumen de viajes desde archivo",
        MAIN_MENU_SETTINGS => "3) Configuración",
        MAIN_MENU_EXIT => "0) Salir",
        PROMPT_MENU_SELECT => "Seleccione una opción: ",
        PROMPT_SELECT => "Opción: ",
        INVALID_SELECTION_RETRY => "Opción inválida. Intente nuevamente.",
        ESTIMATE_HEADING => "\n-- Cálculo de Rendimiento --",
        ESTIMATE_SUBTITLE => "Calcula el rendimiento real considerando tu estilo de conducción",
        PROMPT_START_RANGE => "Kilómetros disponibles al inicio del viaje [km]: ",
        PROMPT_END_RANGE => "Kilómetros disponibles al final del viaje [km]: ",
        DRIVING_STYLE_OPTIONS => "Estilo de conducción: 1) Suave (Económico) 2) Normal 3) Agresivo (Deportivo)",
        ROUTE_TYPE_OPTIONS => "Tipo de ruta: 1) Ciudad (Tráfico) 2) Carretera 3) Mixta",
        PROMPT_USE_AC => "Uso de aire acondicionado (s/n): ",
        PROMPT_FUEL_PRICE => "Precio por litro (Enter = valor configurado): ",
        RESULT_EFFICIENCY => "Rendimiento base vs real:",
        RESULT_COST_PER_KM => "Costo por kilómetro:",
        RESULT_TRIP_COST => "Costo del viaje:",
        RESULT_KM_CONSUMED => "Recorrido:",
        RESULT_LITERS_USED => "Combustible estimado:",
        BATCH_HEADING => "\n-- Resumen de Viajes --",
        PROMPT_BATCH_FILE => "Archivo de viajes (TOML): ",
        SUMMARY_TRIPS => "Viajes:",
        SUMMARY_TOTAL_KM => "Distancia total:",
        SUMMARY_TOTAL_LITERS => "Combustible total:",
        SUMMARY_TOTAL_COST => "Costo total:",
        SUMMARY_AVG_EFFICIENCY => "Rendimiento promedio:",
        SUMMARY_AVG_COST => "Costo promedio por kilómetro:",
        SUMMARY_BEST_WORST => "Mejor / peor rendimiento:",
        SUMMARY_EMPTY => "El archivo no contiene viajes ni cargas de combustible.",
        FUEL_HEADING => "\n-- Cargas de Combustible --",
        FUEL_RECORDS => "Cargas:",
        FUEL_TOTAL_LITERS => "Litros cargados:",
        FUEL_TOTAL_SPENT => "Total gastado:",
        FUEL_AVG_PRICE => "Precio promedio por litro:",
        FUEL_PRICE_TREND => "Tendencia de precio:",
        SETTINGS_HEADING => "\n-- Configuración --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Sistema de unidades actual:",
        SETTINGS_UNIT_OPTIONS => "1) Métrico  2) EE.UU.  3) Imperial",
        SETTINGS_PROMPT_CHANGE => "Número a cambiar (Enter para cancelar): ",
        SETTINGS_INVALID => "Entrada inválida, no se realizan cambios.",
        SETTINGS_SAVED => "Configuración guardada:",
        SETTINGS_CURRENT_PRICE => "Precio por litro actual:",
        SETTINGS_PROMPT_PRICE => "Nuevo precio por litro (Enter para mantener): ",
        ERROR_INVALID_NUMBER => "Ingrese un número.",
        ERROR_INVALID_RANGE => "Los kilómetros disponibles iniciales deben ser mayores a los finales",
        ERROR_INVALID_READING => "Los kilómetros disponibles no pueden ser negativos",
        ERROR_INVALID_PRICE => "El precio por litro debe ser mayor a cero",
        STYLE_GENTLE => "Suave",
        STYLE_NORMAL => "Normal",
        STYLE_AGGRESSIVE => "Agresivo",
        ROUTE_CITY => "Ciudad",
        ROUTE_HIGHWAY => "Carretera",
        ROUTE_MIXED => "Mixta",
        UNITS_METRIC => "Métrico",
        UNITS_US_CUSTOMARY => "EE.UU.",
        UNITS_IMPERIAL => "Imperial",
        SERVER_LISTENING => "Servidor escuchando en",
        _ => "[traducción faltante]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Fuel Efficiency ===",
        MAIN_MENU_ESTIMATE => "1) Estimate trip efficiency",
        MAIN_MENU_BATCH => "2) Summarize trips from file",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ESTIMATE_HEADING => "\n-- Trip Efficiency --",
        ESTIMATE_SUBTITLE => "Estimate real-world efficiency for your driving style",
        PROMPT_START_RANGE => "Range at trip start [km]: ",
        PROMPT_END_RANGE => "Range at trip end [km]: ",
        DRIVING_STYLE_OPTIONS => "Driving style: 1) Gentle (eco) 2) Normal 3) Aggressive (sporty)",
        ROUTE_TYPE_OPTIONS => "Route type: 1) City (traffic) 2) Highway 3) Mixed",
        PROMPT_USE_AC => "Air conditioning on (y/n): ",
        PROMPT_FUEL_PRICE => "Price per liter (Enter = configured value): ",
        RESULT_EFFICIENCY => "Base vs adjusted efficiency:",
        RESULT_COST_PER_KM => "Cost per kilometer:",
        RESULT_TRIP_COST => "Trip cost:",
        RESULT_KM_CONSUMED => "Distance:",
        RESULT_LITERS_USED => "Estimated fuel:",
        BATCH_HEADING => "\n-- Trip Summary --",
        PROMPT_BATCH_FILE => "Trips file (TOML): ",
        SUMMARY_TRIPS => "Trips:",
        SUMMARY_TOTAL_KM => "Total distance:",
        SUMMARY_TOTAL_LITERS => "Total fuel:",
        SUMMARY_TOTAL_COST => "Total cost:",
        SUMMARY_AVG_EFFICIENCY => "Average efficiency:",
        SUMMARY_AVG_COST => "Average cost per kilometer:",
        SUMMARY_BEST_WORST => "Best / worst efficiency:",
        SUMMARY_EMPTY => "The file contains no trips or refuels.",
        FUEL_HEADING => "\n-- Refuels --",
        FUEL_RECORDS => "Refuels:",
        FUEL_TOTAL_LITERS => "Liters filled:",
        FUEL_TOTAL_SPENT => "Total spent:",
        FUEL_AVG_PRICE => "Average price per liter:",
        FUEL_PRICE_TREND => "Price trend:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_UNIT_OPTIONS => "1) Metric  2) US customary  3) Imperial",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input, nothing changed.",
        SETTINGS_SAVED => "Settings saved:",
        SETTINGS_CURRENT_PRICE => "Current price per liter:",
        SETTINGS_PROMPT_PRICE => "New price per liter (Enter to keep): ",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_INVALID_RANGE => "Starting range must be greater than the ending range",
        ERROR_INVALID_READING => "Range readings cannot be negative",
        ERROR_INVALID_PRICE => "Price per liter must be greater than zero",
        STYLE_GENTLE => "Gentle",
        STYLE_NORMAL => "Normal",
        STYLE_AGGRESSIVE => "Aggressive",
        ROUTE_CITY => "City",
        ROUTE_HIGHWAY => "Highway",
        ROUTE_MIXED => "Mixed",
        UNITS_METRIC => "Metric",
        UNITS_US_CUSTOMARY => "US customary",
        UNITS_IMPERIAL => "Imperial",
        SERVER_LISTENING => "Server listening on",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_locale_strings() {
        assert_eq!(normalize_locale_string("es_CL.UTF-8").as_deref(), Some("es"));
        assert_eq!(normalize_locale_string("en-US").as_deref(), Some("en"));
        assert_eq!(normalize_locale_string("ko_KR"), None);
    }

    #[test]
    fn cli_flag_beats_config() {
        assert_eq!(resolve_language(Some("en"), Some("es")), "en");
        assert_eq!(resolve_language(Some("auto"), Some("es-CL")), "es");
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[result]\ntrip_cost = \"Total\"\n").expect("map");
        assert_eq!(map.get(keys::RESULT_TRIP_COST).map(String::as_str), Some("Total"));
    }

    #[test]
    fn unit_systems_have_translated_labels() {
        let es = Translator::new("es");
        let en = Translator::new("en");
        assert_eq!(es.unit_system(UnitSystem::UsCustomary), "EE.UU.");
        assert_eq!(en.unit_system(UnitSystem::UsCustomary), "US customary");
        assert_eq!(en.unit_system(UnitSystem::Metric), "Metric");
    }
}
