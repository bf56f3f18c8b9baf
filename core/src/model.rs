//! The Revenue Model: Parameter Set in, Revenue Table out.
//!
//! Pure and deterministic: no I/O, no state kept between calls.
//! Percentages are converted to fractions (÷100) before use, except in
//! the freight-payment volume proxy, which takes the raw percentage
//! divided by the customer count.
//!
//! Rows are produced in BusinessLine::ALL order. A failure in one cell
//! (division by zero) is recorded on that row and never blocks the others.

use crate::{
    config::{ParameterSet, VolumeLineParams},
    rounding::{round_customer_count, RoundingPolicy},
    table::{CellIssue, RevenueRow, RevenueTable},
    types::{BusinessLine, Usd, FREIGHT_VOLUME_FACTOR, MONTHS_PER_YEAR},
};

/// Percentage → fraction.
pub fn pct(x: f64) -> f64 {
    x / 100.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevenueModel {
    pub rounding: RoundingPolicy,
}

impl RevenueModel {
    pub fn new(rounding: RoundingPolicy) -> Self {
        Self { rounding }
    }

    pub fn evaluate(&self, params: &ParameterSet) -> RevenueTable {
        let rows = BusinessLine::ALL
            .iter()
            .map(|line| self.row(*line, params))
            .collect();
        let table = RevenueTable::from_rows(params.view(), rows);

        log::debug!(
            "evaluated: customers={} volume={} total_annual={:.2} view={:?}",
            params.customers_total,
            params.annual_volume,
            table.total_annual_revenue,
            table.view
        );
        table
    }

    fn row(&self, line: BusinessLine, params: &ParameterSet) -> RevenueRow {
        match line {
            BusinessLine::Financing       => volume_row(line, params.annual_volume, &params.financing),
            BusinessLine::Fx              => volume_row(line, params.annual_volume, &params.fx),
            BusinessLine::CreditInsurance => volume_row(line, params.annual_volume, &params.credit_insurance),
            BusinessLine::CargoInsurance  => volume_row(line, params.annual_volume, &params.cargo_insurance),
            BusinessLine::FreightPayment  => self.freight_row(params),
            BusinessLine::PaymentGateway  => self.gateway_row(params),
        }
    }

    fn freight_row(&self, params: &ParameterSet) -> RevenueRow {
        let freight = &params.freight_payment;
        let mut issues = Vec::new();

        let volume = match freight_volume(
            params.annual_volume,
            freight.customer_share_pct,
            params.customers_total,
        ) {
            Some(v) => v,
            None => {
                // 0/0 is not worth flagging: nobody adopted the line.
                if freight.customer_share_pct != 0.0 {
                    log::warn!(
                        "freight payment volume: customers_total is 0 with {}% share, using 0",
                        freight.customer_share_pct
                    );
                    issues.push(CellIssue::VolumeDivisionByZero);
                }
                0.0
            }
        };

        let customers = round_customer_count(
            params.customers_total as f64 * pct(freight.customer_share_pct),
            self.rounding,
        );
        let annual_revenue = customers as f64 * freight.fixed_fee_usd * MONTHS_PER_YEAR
            + volume * pct(freight.fee_pct);

        RevenueRow {
            line: BusinessLine::FreightPayment,
            customer_count: Some(customers),
            volume: Some(volume),
            annual_revenue,
            monthly_revenue: None,
            issues,
        }
    }

    fn gateway_row(&self, params: &ParameterSet) -> RevenueRow {
        let gateway = &params.payment_gateway;
        let customers = round_customer_count(
            params.customers_total as f64 * pct(gateway.customer_share_pct),
            self.rounding,
        );
        let annual_revenue =
            customers as f64 * gateway.avg_tx_per_customer as f64 * gateway.fee_per_tx_usd;

        RevenueRow {
            line: BusinessLine::PaymentGateway,
            customer_count: Some(customers),
            volume: None,
            annual_revenue,
            monthly_revenue: None,
            issues: Vec::new(),
        }
    }
}

/// Evaluate with the default rounding policy.
pub fn evaluate(params: &ParameterSet) -> RevenueTable {
    RevenueModel::default().evaluate(params)
}

fn volume_row(line: BusinessLine, annual_volume: Usd, p: &VolumeLineParams) -> RevenueRow {
    let volume = annual_volume * pct(p.load_share_pct);
    RevenueRow {
        line,
        customer_count: None,
        volume: Some(volume),
        annual_revenue: volume * pct(p.fee_pct),
        monthly_revenue: None,
        issues: Vec::new(),
    }
}

/// Freight-payment volume proxy: `annual_volume × 0.1 × share_pct / customers_total`.
/// `share_pct` is the raw 0–100 value, not a fraction.
/// Returns `None` when `customers_total` is 0.
pub fn freight_volume(annual_volume: Usd, customer_share_pct: f64, customers_total: u64) -> Option<Usd> {
    if customers_total == 0 {
        return None;
    }
    Some(annual_volume * FREIGHT_VOLUME_FACTOR * customer_share_pct / customers_total as f64)
}
