//! Parameter Set tests: defaults, ranges, parsing and scenario loading.

use revenue_core::{
    config::ParameterSet,
    error::ModelError,
    param::ParamKey,
};

#[test]
fn defaults_agree_with_registry() {
    let params = ParameterSet::default();
    for key in ParamKey::ALL {
        assert_eq!(
            params.get(key),
            key.spec().default,
            "default of {} disagrees with registry",
            key.name()
        );
    }
    assert!(params.annual_view);
    assert!(params.validate().is_empty(), "defaults must be in range");
}

#[test]
fn names_round_trip_through_registry() {
    for key in ParamKey::ALL {
        assert_eq!(ParamKey::from_name(key.name()), Some(key));
    }
    assert_eq!(ParamKey::from_name("fee_everything"), None);
}

#[test]
fn set_within_range_succeeds() {
    let mut params = ParameterSet::default();
    params.set(ParamKey::FeeFx, 0.25).unwrap();
    params.set(ParamKey::CustomersTotal, 250.0).unwrap();
    assert_eq!(params.fx.fee_pct, 0.25);
    assert_eq!(params.customers_total, 250);
}

#[test]
fn set_outside_range_is_rejected_and_leaves_value() {
    let mut params = ParameterSet::default();

    let err = params.set(ParamKey::LoadShareFin, 60.0).unwrap_err();
    assert!(matches!(err, ModelError::InvalidParameter { ref name, .. } if name == "load_share_fin"));
    assert_eq!(params.financing.load_share_pct, 30.0);

    // Gateway share has a floor of 25%.
    assert!(params.set(ParamKey::CustomerShareGateway, 10.0).is_err());
    assert!(params.set(ParamKey::AnnualVolume, -1.0).is_err());
    assert!(params.set(ParamKey::FeeFin, f64::NAN).is_err());
}

#[test]
fn integer_parameters_reject_fractions() {
    let mut params = ParameterSet::default();
    assert!(params.set(ParamKey::CustomersTotal, 10.5).is_err());
    assert!(params.set(ParamKey::AvgTxPerCustomerGateway, 3.2).is_err());
    assert_eq!(params.customers_total, 111);
}

#[test]
fn unbounded_globals_accept_large_values() {
    let mut params = ParameterSet::default();
    params.set(ParamKey::AnnualVolume, 1.0e15).unwrap();
    params.set(ParamKey::CustomersTotal, 1_000_000.0).unwrap();
    assert_eq!(params.customers_total, 1_000_000);
}

#[test]
fn set_by_name_parses_text() {
    let mut params = ParameterSet::default();
    params.set_by_name("annual_volume", "1_500_000").unwrap();
    params.set_by_name("fixed_fee_freight", " 2,000 ").unwrap();
    params.set_by_name("annual_view", "no").unwrap();
    assert_eq!(params.annual_volume, 1_500_000.0);
    assert_eq!(params.freight_payment.fixed_fee_usd, 2_000.0);
    assert!(!params.annual_view);

    assert!(matches!(
        params.set_by_name("fee_everything", "1"),
        Err(ModelError::UnknownParameter { .. })
    ));
    assert!(matches!(
        params.set_by_name("fee_fx", "lots"),
        Err(ModelError::InvalidParameter { .. })
    ));
    assert!(params.set_by_name("annual_view", "maybe").is_err());
}

#[test]
fn validate_reports_every_violation() {
    let mut params = ParameterSet::default();
    params.fx.load_share_pct = 80.0;
    params.cargo_insurance.fee_pct = 2.0;
    params.payment_gateway.customer_share_pct = 5.0;

    let errors = params.validate();
    assert_eq!(errors.len(), 3, "got {errors:?}");
    assert!(params.ensure_valid().is_err());
}

#[test]
fn clamped_forces_values_into_range() {
    let mut params = ParameterSet::default();
    params.fx.load_share_pct = 80.0;
    params.payment_gateway.customer_share_pct = 5.0;
    params.annual_volume = -10.0;
    params.freight_payment.fee_pct = f64::NAN;

    let clamped = params.clamped();
    assert_eq!(clamped.fx.load_share_pct, 50.0);
    assert_eq!(clamped.payment_gateway.customer_share_pct, 25.0);
    assert_eq!(clamped.annual_volume, 0.0);
    assert_eq!(clamped.freight_payment.fee_pct, 0.5);
    assert!(clamped.validate().is_empty());
}

#[test]
fn partial_scenario_fills_defaults() {
    let json = r#"{
        "customers_total": 200,
        "annual_view": false,
        "fx": { "load_share_pct": 10, "fee_pct": 0.4 },
        "payment_gateway": { "fee_per_tx_usd": 20 }
    }"#;
    let params = ParameterSet::from_json(json).unwrap();

    assert_eq!(params.customers_total, 200);
    assert!(!params.annual_view);
    assert_eq!(params.fx.load_share_pct, 10.0);
    assert_eq!(params.payment_gateway.fee_per_tx_usd, 20.0);
    assert_eq!(params.payment_gateway.avg_tx_per_customer, 500);
    assert_eq!(params.annual_volume, 8_000_000_000.0);
    assert_eq!(params.financing, ParameterSet::default().financing);
}

#[test]
fn out_of_range_scenario_is_rejected() {
    let json = r#"{ "financing": { "load_share_pct": 75, "fee_pct": 0.3 } }"#;
    assert!(matches!(
        ParameterSet::from_json(json),
        Err(ModelError::InvalidParameter { .. })
    ));
    assert!(matches!(
        ParameterSet::from_json("{ not json"),
        Err(ModelError::Serialization(_))
    ));
}

#[test]
fn scenario_file_loads_from_disk() {
    let path = std::env::temp_dir().join(format!("revenue-scenario-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "customers_total": 42 }"#).unwrap();

    let params = ParameterSet::load(path.to_str().unwrap()).unwrap();
    assert_eq!(params.customers_total, 42);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        ParameterSet::load("/nonexistent/scenario.json"),
        Err(ModelError::Io { .. })
    ));
}

#[test]
fn decimal_comma_is_rejected_not_misread() {
    let mut params = ParameterSet::default();
    let err = params.set_by_name("fee_fin", "0,5").unwrap_err();
    assert!(matches!(err, ModelError::InvalidParameter { .. }), "got {err:?}");
    assert_eq!(params.financing.fee_pct, 0.3, "rejected value must not be stored");

    for bad in ["1,00", "12,3456", ",500", "1,,000", "1000,000"] {
        assert!(params.set_by_name("annual_volume", bad).is_err(), "{bad} should be refused");
    }
    assert_eq!(params.annual_volume, 8_000_000_000.0);
}

#[test]
fn thousands_separators_are_accepted_in_three_digit_groups() {
    let mut params = ParameterSet::default();
    params.set_by_name("annual_volume", "12,000,000.50").unwrap();
    assert_eq!(params.annual_volume, 12_000_000.5);
    params.set_by_name("customers_total", "1,234").unwrap();
    assert_eq!(params.customers_total, 1_234);
}

#[test]
fn customer_count_beyond_exact_range_is_rejected() {
    let mut params = ParameterSet::default();
    assert!(matches!(
        params.set(ParamKey::CustomersTotal, 1e30),
        Err(ModelError::InvalidParameter { .. })
    ));
    assert_eq!(params.customers_total, 111, "rejected value must not be stored");

    params.set(ParamKey::CustomersTotal, 9_007_199_254_740_992.0).unwrap();
    assert_eq!(params.customers_total, 9_007_199_254_740_992);

    params.customers_total = u64::MAX;
    assert_eq!(params.validate().len(), 1);
}

#[test]
fn partial_volume_line_record_keeps_that_lines_defaults() {
    let json = r#"{
        "financing": { "fee_pct": 0.5 },
        "cargo_insurance": { "load_share_pct": 12 }
    }"#;
    let params = ParameterSet::from_json(json).unwrap();

    assert_eq!(params.financing.fee_pct, 0.5);
    assert_eq!(params.financing.load_share_pct, 30.0);
    assert_eq!(params.cargo_insurance.load_share_pct, 12.0);
    assert_eq!(params.cargo_insurance.fee_pct, 0.005);
    assert_eq!(params.fx, ParameterSet::default().fx);
}
