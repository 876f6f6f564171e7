use crate::params::{SimulationParameters, YEARS_MAX, YEARS_MIN};
use crate::query::SimulationQuery;

#[test]
fn builds_normalized_query() {
    let params = SimulationParameters::default();
    let query = SimulationQuery::from_params(&params);

    assert_eq!(query.initial, 1000.0);
    assert_eq!(query.growth_rate, 0.07);
    assert_eq!(query.fee_a, 0.0);
    assert_eq!(query.fee_b, 0.02);
    assert_eq!(query.years, 30);
}

#[test]
fn query_string_has_stable_key_order() {
    let params = SimulationParameters::default();
    let query = SimulationQuery::from_params(&params);

    assert_eq!(
        query.query_string(),
        "initial=1000&growth_rate=0.07&fee_a=0&fee_b=0.02&years=30"
    );
}

#[test]
fn equal_params_build_identical_queries() {
    let params = SimulationParameters {
        initial_investment: 2500.0,
        annual_growth_rate_pct: 5.5,
        fee_rate_a_pct: 0.25,
        fee_rate_b_pct: 1.75,
        years: 40.0,
    };

    let first = SimulationQuery::from_params(&params);
    for _ in 0..10 {
        let again = SimulationQuery::from_params(&params);
        assert_eq!(again, first);
        assert_eq!(again.query_string(), first.query_string());
    }
}

#[test]
fn years_round_to_integer_of_at_least_one() {
    let mut params = SimulationParameters::default();
    params.years = 5.4;
    assert_eq!(SimulationQuery::from_params(&params).years, 5);

    // The store clamps to the UI range, but the builder is total on its own.
    params.years = 0.2;
    assert_eq!(SimulationQuery::from_params(&params).years, 1);
}

#[test]
fn store_absorbs_invalid_input() {
    let mut params = SimulationParameters::default();

    assert!(!params.set_initial_investment(f64::NAN));
    assert_eq!(params.initial_investment, 1000.0);

    assert!(!params.set_fee_rate_b_pct(f64::INFINITY));
    assert_eq!(params.fee_rate_b_pct, 2.0);

    assert!(params.set_annual_growth_rate_pct(6.0));
    assert_eq!(params.annual_growth_rate_pct, 6.0);

    // Negative input is clamped at the widget-level floor.
    assert!(params.set_initial_investment(-50.0));
    assert_eq!(params.initial_investment, 0.0);
}

#[test]
fn years_clamp_to_ui_range() {
    let mut params = SimulationParameters::default();

    params.set_years(100.0);
    assert_eq!(params.years, YEARS_MAX);

    params.set_years(1.0);
    assert_eq!(params.years, YEARS_MIN);

    assert!(!params.set_years(f64::NAN));
    assert_eq!(params.years, YEARS_MIN);

    assert!(params.step_years(1));
    assert_eq!(params.years, YEARS_MIN + 5.0);
    assert!(params.step_years(-1));
    assert!(!params.step_years(-1));
    assert_eq!(params.years, YEARS_MIN);
}
