//! 단위 변환과 표시 서식 회귀 테스트.
use fuel_efficiency_toolbox::format::{
    format_currency, format_distance, format_efficiency, format_volume, CurrencyFormat,
};
use fuel_efficiency_toolbox::i18n::{keys, Language, Translator};
use fuel_efficiency_toolbox::efficiency::ValidationError;
use fuel_efficiency_toolbox::units::{
    convert_distance, convert_economy, convert_volume, DistanceUnit, EconomyUnit, VolumeUnit,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(diff <= tol, "{label} expected {expected} got {actual}");
}

#[test]
fn economy_conversions() {
    assert_close(
        "L/100km",
        convert_economy(18.0, EconomyUnit::KmPerLiter, EconomyUnit::LitersPer100Km),
        5.5556,
        1e-4,
    );
    assert_close(
        "mpg",
        convert_economy(18.0, EconomyUnit::KmPerLiter, EconomyUnit::MpgUs),
        42.34,
        1e-2,
    );
    assert_close(
        "back",
        convert_economy(42.3384, EconomyUnit::MpgUs, EconomyUnit::KmPerLiter),
        18.0,
        1e-3,
    );
    assert_eq!(
        convert_economy(0.0, EconomyUnit::LitersPer100Km, EconomyUnit::KmPerLiter),
        0.0
    );
}

#[test]
fn distance_and_volume_conversions() {
    assert_close(
        "mi",
        convert_distance(100.0, DistanceUnit::Kilometer, DistanceUnit::Mile),
        62.137,
        1e-3,
    );
    assert_close(
        "gal",
        convert_volume(3.785_411_784, VolumeUnit::Liter, VolumeUnit::UsGallon),
        1.0,
        1e-12,
    );
}

#[test]
fn chilean_peso_formatting() {
    let fmt = CurrencyFormat::default();
    assert_eq!(format_currency(6944.0, &fmt), "$6.944");
    assert_eq!(format_currency(15823.0, &fmt), "$15.823");
    assert_eq!(format_currency(95.42, &fmt), "$95");
    assert_eq!(format_distance(100.0, DistanceUnit::Kilometer, &fmt), "100 km");
    assert_eq!(format_efficiency(13.1, EconomyUnit::KmPerLiter, &fmt), "13,1 km/L");
    assert_eq!(format_volume(7.63, VolumeUnit::Liter, &fmt), "7,6 L");
}

#[test]
fn translator_falls_back_to_spanish() {
    let es = Translator::new("es-CL");
    let en = Translator::new("en");
    let unknown = Translator::new("pt");
    assert_eq!(es.language(), Language::Es);
    assert_eq!(unknown.language(), Language::Es);
    assert_eq!(
        es.validation_error(&ValidationError::InvalidRange {
            start: 300.0,
            end: 300.0
        }),
        "Los kilómetros disponibles iniciales deben ser mayores a los finales"
    );
    assert_eq!(en.t(keys::ROUTE_HIGHWAY), "Highway");
    assert_eq!(es.t(keys::ROUTE_HIGHWAY), "Carretera");
}

#[test]
fn language_pack_overrides_builtin_strings() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("es.toml"),
        "[result]\ntrip_cost = \"Total del viaje:\"\n",
    )
    .expect("write");
    let tr = Translator::new_with_pack("es-cl", Some(dir.path()));
    assert_eq!(tr.t(keys::RESULT_TRIP_COST), "Total del viaje:");
    assert_eq!(tr.t(keys::RESULT_COST_PER_KM), "Costo por kilómetro:");
}
