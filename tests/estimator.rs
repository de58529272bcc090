//! 주행 연비 추정 회귀 테스트. 화면 예시와 같은 값(단가 1250)을 사용한다.
use fuel_efficiency_toolbox::efficiency::{
    combined_factor, estimate, DrivingStyle, RouteType, TripInput, ValidationError,
    BASE_EFFICIENCY_KM_PER_LITER,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn trip(
    start: f64,
    end: f64,
    style: DrivingStyle,
    route: RouteType,
    ac: bool,
) -> TripInput {
    TripInput {
        start_range_km: start,
        end_range_km: end,
        driving_style: style,
        route_type: route,
        use_air_conditioning: ac,
        fuel_price_per_liter: 1250.0,
    }
}

#[test]
fn gentle_highway_keeps_base_efficiency() {
    let r = estimate(&trip(500.0, 400.0, DrivingStyle::Gentle, RouteType::Highway, false))
        .expect("valid trip");
    assert_close("km", r.km_consumed, 100.0, 1e-9);
    assert_close("eff", r.adjusted_efficiency_km_per_liter, 18.0, 1e-9);
    assert_close("cost/km", r.cost_per_km, 69.44, 1e-9);
    assert_close("trip", r.trip_cost, 6944.0, 1e-6);
}

#[test]
fn normal_mixed_trip() {
    let r = estimate(&trip(500.0, 400.0, DrivingStyle::Normal, RouteType::Mixed, false))
        .expect("valid trip");
    assert_close("factor", r.combined_factor, 0.729, 1e-12);
    assert_close("eff", r.adjusted_efficiency_km_per_liter, 13.1, 1e-9);
    assert_close("cost/km", r.cost_per_km, 95.42, 1e-9);
    assert_close("trip", r.trip_cost, 9542.0, 1e-6);
}

#[test]
fn aggressive_city_with_ac() {
    let r = estimate(&trip(500.0, 400.0, DrivingStyle::Aggressive, RouteType::City, true))
        .expect("valid trip");
    assert_close("factor", r.combined_factor, 0.4392, 1e-12);
    assert_close("eff", r.adjusted_efficiency_km_per_liter, 7.9, 1e-9);
    assert_close("cost/km", r.cost_per_km, 158.23, 1e-9);
    assert_close("trip", r.trip_cost, 15823.0, 1e-6);
}

#[test]
fn equal_readings_are_rejected() {
    let err = estimate(&trip(300.0, 300.0, DrivingStyle::Normal, RouteType::Mixed, false))
        .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidRange { .. }));
    assert_eq!(err.code(), "INVALID_RANGE");
}

#[test]
fn end_above_start_is_rejected() {
    let err = estimate(&trip(200.0, 250.0, DrivingStyle::Gentle, RouteType::City, true))
        .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidRange { .. }));
}

#[test]
fn adjusted_never_exceeds_base() {
    for style in DrivingStyle::ALL {
        for route in RouteType::ALL {
            for ac in [false, true] {
                let r = estimate(&trip(500.0, 100.0, style, route, ac)).expect("valid trip");
                let ideal =
                    style == DrivingStyle::Gentle && route == RouteType::Highway && !ac;
                assert!(r.adjusted_efficiency_km_per_liter <= BASE_EFFICIENCY_KM_PER_LITER);
                assert_eq!(
                    r.adjusted_efficiency_km_per_liter == BASE_EFFICIENCY_KM_PER_LITER,
                    ideal,
                    "{style}/{route}/ac={ac}"
                );
            }
        }
    }
}

#[test]
fn any_descending_pair_succeeds() {
    let pairs = [(1.0, 0.0), (0.5, 0.25), (800.0, 799.9), (1e6, 0.0)];
    for (start, end) in pairs {
        assert!(
            estimate(&trip(start, end, DrivingStyle::Normal, RouteType::City, false)).is_ok(),
            "{start} -> {end}"
        );
        assert!(
            estimate(&trip(end, start, DrivingStyle::Normal, RouteType::City, false)).is_err(),
            "{end} -> {start}"
        );
    }
}

#[test]
fn same_input_same_output() {
    let input = trip(432.5, 87.25, DrivingStyle::Aggressive, RouteType::Mixed, true);
    let a = estimate(&input).expect("valid");
    let b = estimate(&input).expect("valid");
    assert_eq!(a.trip_cost.to_bits(), b.trip_cost.to_bits());
    assert_eq!(a.cost_per_km.to_bits(), b.cost_per_km.to_bits());
    assert_eq!(a, b);
}

#[test]
fn trip_cost_scales_with_distance() {
    let base = estimate(&trip(150.0, 100.0, DrivingStyle::Normal, RouteType::City, true))
        .expect("valid");
    for k in [2.0, 3.0, 8.0] {
        let scaled = estimate(&trip(
            100.0 + 50.0 * k,
            100.0,
            DrivingStyle::Normal,
            RouteType::City,
            true,
        ))
        .expect("valid");
        assert_close("scaled", scaled.trip_cost, base.trip_cost * k, 0.01 * k);
    }
}

#[test]
fn combined_factor_is_plain_product() {
    for style in DrivingStyle::ALL {
        for route in RouteType::ALL {
            let without = combined_factor(style, route, false);
            let with = combined_factor(style, route, true);
            assert_close("no ac", without, style.factor() * route.factor(), 1e-15);
            assert_close("ac", with, without * 0.9, 1e-15);
        }
    }
}
