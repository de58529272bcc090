use fuel_efficiency_toolbox::fuel_log::{fuel_stats, FuelLogError, FuelRecord};
use pretty_assertions::assert_eq;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn total_cost_is_price_times_liters() {
    assert_close("40 L", FuelRecord::new(40.0, 1250.0).total_cost(), 50_000.0, 1e-9);
    assert_close("12.5 L", FuelRecord::new(12.5, 1199.9).total_cost(), 14_998.75, 1e-6);
}

#[test]
fn no_records_no_stats() {
    assert_eq!(fuel_stats(&[]), None);
}

#[test]
fn single_record_has_flat_trend() {
    let stats = fuel_stats(&[FuelRecord::new(30.0, 1300.0)]).expect("stats");
    assert_eq!(stats.records, 1);
    assert_close("total spent", stats.total_spent, 39_000.0, 1e-9);
    assert_close("average price", stats.average_price_per_liter, 1300.0, 1e-9);
    assert_eq!(stats.price_trend_percent, 0.0);
}

#[test]
fn trend_compares_newest_with_oldest() {
    let records = [
        FuelRecord::new(40.0, 1200.0),
        FuelRecord::new(30.0, 1400.0),
        FuelRecord::new(20.0, 1320.0),
    ];
    let stats = fuel_stats(&records).expect("stats");
    assert_eq!(stats.records, 3);
    assert_close("total liters", stats.total_liters, 90.0, 1e-9);
    // 48000 + 42000 + 26400
    assert_close("total spent", stats.total_spent, 116_400.0, 1e-9);
    assert_close("average price", stats.average_price_per_liter, 1306.67, 1e-9);
    assert_eq!(stats.price_trend_percent, 10.0);
}

#[test]
fn falling_price_gives_negative_trend() {
    let records = [FuelRecord::new(10.0, 1300.0), FuelRecord::new(10.0, 1235.0)];
    let stats = fuel_stats(&records).expect("stats");
    assert_eq!(stats.price_trend_percent, -5.0);
}

#[test]
fn zero_oldest_price_does_not_divide() {
    let records = [FuelRecord::new(10.0, 0.0), FuelRecord::new(10.0, 1250.0)];
    let stats = fuel_stats(&records).expect("stats");
    assert_eq!(stats.price_trend_percent, 0.0);
    assert!(stats.average_price_per_liter.is_finite());
    assert_close("total spent", stats.total_spent, 12_500.0, 1e-9);
}

#[test]
fn validate_rejects_bad_records() {
    assert_eq!(
        FuelRecord::new(0.0, 1250.0).validate(),
        Err(FuelLogError::InvalidLiters(0.0))
    );
    assert_eq!(
        FuelRecord::new(10.0, -1.0).validate(),
        Err(FuelLogError::InvalidPrice(-1.0))
    );
    assert!(matches!(
        FuelRecord::new(f64::NAN, 1250.0).validate(),
        Err(FuelLogError::InvalidLiters(_))
    ));
    assert_eq!(FuelRecord::new(10.0, 0.0).validate(), Ok(()));
}
