//! The Revenue Table: one row per business line plus two totals.
//!
//! Derived, recomputed from scratch every evaluation, never stored.

use crate::{
    error::ModelError,
    types::{BusinessLine, Usd, ViewMode, MONTHS_PER_YEAR},
};
use serde::Serialize;

/// A cell whose value could not be computed from the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum CellIssue {
    /// The volume divides by `customers_total`, which was 0.
    /// The cell holds the fallback value 0.
    VolumeDivisionByZero,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueRow {
    pub line:            BusinessLine,
    /// Absent for volume-only lines.
    pub customer_count:  Option<u64>,
    /// Absent for the gateway, which has no notion of volume.
    pub volume:          Option<Usd>,
    pub annual_revenue:  Usd,
    /// Present only in monthly view.
    pub monthly_revenue: Option<Usd>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues:          Vec<CellIssue>,
}

impl CellIssue {
    pub fn to_error(self, line: BusinessLine) -> ModelError {
        match self {
            CellIssue::VolumeDivisionByZero => ModelError::DivisionByZero { line },
        }
    }
}

impl RevenueRow {
    pub fn errors(&self) -> Vec<ModelError> {
        self.issues.iter().map(|i| i.to_error(self.line)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueTable {
    pub view:                  ViewMode,
    pub rows:                  Vec<RevenueRow>,
    pub total_annual_revenue:  Usd,
    pub total_monthly_revenue: Usd,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub line:  BusinessLine,
    pub label: &'static str,
    pub value: Usd,
}

/// Bar-chart input: one point per line in display units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub axis_title: String,
    pub points:     Vec<ChartPoint>,
}

impl RevenueTable {
    /// Build a table from rows in display order. Totals are derived here
    /// so they can never disagree with the rows.
    pub fn from_rows(view: ViewMode, mut rows: Vec<RevenueRow>) -> Self {
        for row in &mut rows {
            row.monthly_revenue = match view {
                ViewMode::Monthly => Some(row.annual_revenue / MONTHS_PER_YEAR),
                ViewMode::Annual  => None,
            };
        }
        let total_annual_revenue: Usd = rows.iter().map(|r| r.annual_revenue).sum();
        Self {
            view,
            rows,
            total_annual_revenue,
            total_monthly_revenue: total_annual_revenue / MONTHS_PER_YEAR,
        }
    }

    pub fn row(&self, line: BusinessLine) -> Option<&RevenueRow> {
        self.rows.iter().find(|r| r.line == line)
    }

    /// Revenue of a row in the unit of the current view.
    pub fn display_revenue(&self, row: &RevenueRow) -> Usd {
        match self.view {
            ViewMode::Annual  => row.annual_revenue,
            ViewMode::Monthly => row.monthly_revenue.unwrap_or(row.annual_revenue / MONTHS_PER_YEAR),
        }
    }

    /// The headline total in the unit of the current view.
    pub fn display_total(&self) -> Usd {
        match self.view {
            ViewMode::Annual  => self.total_annual_revenue,
            ViewMode::Monthly => self.total_monthly_revenue,
        }
    }

    /// The estimated total in the other unit.
    pub fn secondary_total(&self) -> Usd {
        match self.view {
            ViewMode::Annual  => self.total_monthly_revenue,
            ViewMode::Monthly => self.total_annual_revenue,
        }
    }

    pub fn has_issues(&self) -> bool {
        self.rows.iter().any(|r| !r.issues.is_empty())
    }

    pub fn chart_series(&self) -> ChartSeries {
        let points = self
            .rows
            .iter()
            .map(|row| {
                let value = self.display_revenue(row);
                ChartPoint {
                    line:  row.line,
                    label: row.line.label(),
                    value: if value.is_finite() { value } else { 0.0 },
                }
            })
            .collect();
        ChartSeries {
            axis_title: format!("USD ({})", self.view.unit()),
            points,
        }
    }
}
