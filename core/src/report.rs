//! Report rendering: chart, detail table, totals and current assumptions.
//!
//! A Report is built from a finished RevenueTable, never from a partial
//! one, so everything shown comes from the same ParameterSet.

use crate::{
    config::{ParameterSet, VolumeLineParams},
    format::{fmt_count, fmt_money, fmt_money_opt, fmt_pct, fmt_share},
    table::{ChartSeries, RevenueTable},
    types::{BusinessLine, Usd, ViewMode},
};
use serde::Serialize;
use std::fmt;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub line:            &'static str,
    pub customers:       String,
    pub volume:          String,
    pub annual_revenue:  String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_revenue: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalMetric {
    pub label:     &'static str,
    pub value:     Usd,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub table:       RevenueTable,
    pub chart:       ChartSeries,
    pub details:     Vec<DetailRow>,
    /// Headline total first, estimate in the other unit second.
    pub totals:      Vec<TotalMetric>,
    pub assumptions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes:       Vec<String>,
}

impl Report {
    pub fn build(params: &ParameterSet, table: RevenueTable) -> Self {
        let monthly = table.view == ViewMode::Monthly;
        let details = table
            .rows
            .iter()
            .map(|row| DetailRow {
                line:            row.line.label(),
                customers:       fmt_count(row.customer_count),
                volume:          fmt_money_opt(row.volume),
                annual_revenue:  fmt_money(row.annual_revenue),
                monthly_revenue: monthly.then(|| fmt_money(table.display_revenue(row))),
            })
            .collect();

        let (headline, estimate) = if monthly {
            ("Total monthly revenue (USD)", "Estimated total annual revenue (USD)")
        } else {
            ("Total annual revenue (USD)", "Estimated total monthly revenue (USD)")
        };
        let totals = vec![
            TotalMetric {
                label:     headline,
                value:     table.display_total(),
                formatted: fmt_money(table.display_total()),
            },
            TotalMetric {
                label:     estimate,
                value:     table.secondary_total(),
                formatted: fmt_money(table.secondary_total()),
            },
        ];

        let notes = table
            .rows
            .iter()
            .flat_map(|row| row.errors())
            .map(|e| format!("{e}; shown as 0"))
            .collect();

        Self {
            chart: table.chart_series(),
            details,
            totals,
            assumptions: assumptions(params),
            notes,
            table,
        }
    }

    fn write_chart(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Projected revenue by line, {}", self.chart.axis_title)?;
        let max = self
            .chart
            .points
            .iter()
            .map(|p| p.value)
            .fold(0.0_f64, f64::max);
        let label_w = self.chart.points.iter().map(|p| p.label.len()).max().unwrap_or(0);
        for point in &self.chart.points {
            let len = if max > 0.0 {
                ((point.value / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            writeln!(
                f,
                "  {:<label_w$}  {:<BAR_WIDTH$}  {}",
                point.label,
                "#".repeat(len),
                fmt_money(point.value)
            )?;
        }
        Ok(())
    }

    fn write_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header = vec!["Line", "Customers", "Volume USD", "Annual revenue USD"];
        if self.table.view == ViewMode::Monthly {
            header.push("Monthly revenue USD");
        }
        let cells: Vec<Vec<&str>> = self
            .details
            .iter()
            .map(|d| {
                let mut row = vec![d.line, d.customers.as_str(), d.volume.as_str(), d.annual_revenue.as_str()];
                if let Some(m) = &d.monthly_revenue {
                    row.push(m.as_str());
                }
                row
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|i| {
                cells
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(header[i].len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        writeln!(f, "Detail")?;
        write_cells(f, &header, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
        write_cells(f, &rule, &widths)?;
        for row in &cells {
            write_cells(f, row, &widths)?;
        }
        Ok(())
    }
}

/// First column left-aligned, numbers right-aligned.
fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[&str], widths: &[usize]) -> fmt::Result {
    write!(f, " ")?;
    for (i, (cell, w)) in cells.iter().zip(widths).enumerate() {
        // Pad by chars: the empty-cell dash is multi-byte.
        let pad = " ".repeat(w.saturating_sub(cell.chars().count()));
        if i == 0 {
            write!(f, " {cell}{pad}")?;
        } else {
            write!(f, "  {pad}{cell}")?;
        }
    }
    writeln!(f)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_chart(f)?;
        writeln!(f)?;
        self.write_details(f)?;
        writeln!(f)?;
        writeln!(f, "Totals")?;
        for t in &self.totals {
            writeln!(f, "  {}: {}", t.label, t.formatted)?;
        }
        for note in &self.notes {
            writeln!(f, "  note: {note}")?;
        }
        writeln!(f)?;
        writeln!(f, "Current assumptions")?;
        for a in &self.assumptions {
            writeln!(f, "  {a}")?;
        }
        writeln!(f)?;
        write!(
            f,
            "Simplification: volume lines use load share only. Customer share is used \
             only by Freight Payment (fixed fee per customer) and Payment Gateway."
        )
    }
}

fn volume_assumption(line: BusinessLine, p: &VolumeLineParams) -> String {
    format!(
        "{}: {} on {} of volume",
        line.label(),
        fmt_pct(p.fee_pct),
        fmt_share(p.load_share_pct)
    )
}

pub fn assumptions(params: &ParameterSet) -> Vec<String> {
    let freight = &params.freight_payment;
    let gateway = &params.payment_gateway;
    vec![
        format!("Total customers: {}", params.customers_total),
        format!("Total annual volume: {}", fmt_money(params.annual_volume)),
        volume_assumption(BusinessLine::Financing, &params.financing),
        volume_assumption(BusinessLine::Fx, &params.fx),
        volume_assumption(BusinessLine::CreditInsurance, &params.credit_insurance),
        volume_assumption(BusinessLine::CargoInsurance, &params.cargo_insurance),
        format!(
            "{}: {} fixed/customer (applies to {} of customers) + {} on freight paid",
            BusinessLine::FreightPayment.label(),
            fmt_money(freight.fixed_fee_usd),
            fmt_share(freight.customer_share_pct),
            fmt_pct(freight.fee_pct)
        ),
        format!(
            "{}: {} per transaction · {} of customers · {} tx/customer/year",
            BusinessLine::PaymentGateway.label(),
            fmt_money(gateway.fee_per_tx_usd),
            fmt_share(gateway.customer_share_pct),
            gateway.avg_tx_per_customer
        ),
    ]
}
