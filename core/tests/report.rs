//! Report rendering tests.

use revenue_core::{
    config::ParameterSet,
    model::evaluate,
    report::Report,
};

fn report_for(params: &ParameterSet) -> Report {
    Report::build(params, evaluate(params))
}

#[test]
fn annual_report_has_no_monthly_column() {
    let report = report_for(&ParameterSet::default());

    assert!(report.details.iter().all(|d| d.monthly_revenue.is_none()));
    let text = report.to_string();
    assert!(text.contains("USD (annual)"));
    assert!(text.contains("Annual revenue USD"));
    assert!(!text.contains("Monthly revenue USD"));
}

#[test]
fn detail_rows_format_absent_cells() {
    let report = report_for(&ParameterSet::default());

    let fin = &report.details[0];
    assert_eq!(fin.line, "Financing");
    assert_eq!(fin.customers, "—");
    assert_eq!(fin.volume, "$ 2,400,000,000");
    assert_eq!(fin.annual_revenue, "$ 7,200,000");

    let gateway = &report.details[5];
    assert_eq!(gateway.customers, "56");
    assert_eq!(gateway.volume, "—");
    assert_eq!(gateway.annual_revenue, "$ 980,000");
}

#[test]
fn totals_lead_with_the_current_unit() {
    let annual = report_for(&ParameterSet::default());
    assert_eq!(annual.totals[0].label, "Total annual revenue (USD)");
    assert_eq!(annual.totals[0].formatted, "$ 14,180,481");
    assert_eq!(annual.totals[1].label, "Estimated total monthly revenue (USD)");

    let params = ParameterSet { annual_view: false, ..ParameterSet::default() };
    let monthly = report_for(&params);
    assert_eq!(monthly.totals[0].label, "Total monthly revenue (USD)");
    assert_eq!(monthly.totals[0].value, monthly.table.total_monthly_revenue);
    assert_eq!(monthly.totals[1].label, "Estimated total annual revenue (USD)");
    assert_eq!(monthly.details[0].monthly_revenue.as_deref(), Some("$ 600,000"));
    assert!(monthly.to_string().contains("Monthly revenue USD"));
}

#[test]
fn assumptions_describe_current_fees() {
    let report = report_for(&ParameterSet::default());
    let a = &report.assumptions;

    assert_eq!(a[0], "Total customers: 111");
    assert_eq!(a[1], "Total annual volume: $ 8,000,000,000");
    assert_eq!(a[2], "Financing: 0.30% on 30% of volume");
    assert_eq!(a[3], "FX: 0.20% on 30% of volume");
    assert_eq!(
        a[6],
        "Freight Payment: $ 150 fixed/customer (applies to 30% of customers) + 0.50% on freight paid"
    );
    assert_eq!(
        a[7],
        "Payment Gateway: $ 35 per transaction · 50% of customers · 500 tx/customer/year"
    );
}

#[test]
fn zero_customers_adds_a_note_not_a_failure() {
    let params = ParameterSet { customers_total: 0, ..ParameterSet::default() };
    let report = report_for(&params);

    assert_eq!(report.notes.len(), 1, "notes: {:?}", report.notes);
    assert!(report.notes[0].contains("Freight Payment"));
    assert_eq!(report.details[4].volume, "$ 0");
    assert!(report.to_string().contains("note:"));
}

#[test]
fn chart_bars_scale_to_largest_line() {
    let text = report_for(&ParameterSet::default()).to_string();
    let fin_line = text.lines().find(|l| l.trim_start().starts_with("Financing")).unwrap();
    assert!(fin_line.contains(&"#".repeat(40)), "largest line gets the full bar: {fin_line}");
}

#[test]
fn report_serializes_to_json() {
    let report = report_for(&ParameterSet::default());
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["table"]["rows"].as_array().unwrap().len(), 6);
    assert_eq!(value["table"]["rows"][0]["line"], "financing");
    assert!(value["table"]["rows"][5]["volume"].is_null());
    assert_eq!(value["chart"]["axis_title"], "USD (annual)");
    assert!(value.get("notes").is_none());
}
