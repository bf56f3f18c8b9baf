//! Shared primitive types used across the revenue model.

use serde::{Deserialize, Serialize};

/// An amount of money in US dollars.
pub type Usd = f64;

/// Months in a projection year. Monthly figures are always annual / 12.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Fixed share of total volume used as the freight-payment volume proxy.
pub const FREIGHT_VOLUME_FACTOR: f64 = 0.1;

/// The six revenue-generating business lines.
/// Variant order is the display order and is never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessLine {
    Financing,
    Fx,
    CreditInsurance,
    CargoInsurance,
    FreightPayment,
    PaymentGateway,
}

impl BusinessLine {
    pub const ALL: [BusinessLine; 6] = [
        BusinessLine::Financing,
        BusinessLine::Fx,
        BusinessLine::CreditInsurance,
        BusinessLine::CargoInsurance,
        BusinessLine::FreightPayment,
        BusinessLine::PaymentGateway,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BusinessLine::Financing       => "Financing",
            BusinessLine::Fx              => "FX",
            BusinessLine::CreditInsurance => "Credit Insurance",
            BusinessLine::CargoInsurance  => "Cargo Insurance",
            BusinessLine::FreightPayment  => "Freight Payment",
            BusinessLine::PaymentGateway  => "Payment Gateway",
        }
    }
}

/// Unit in which revenue figures are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Annual,
    Monthly,
}

impl ViewMode {
    pub fn from_annual_view(annual_view: bool) -> Self {
        if annual_view { ViewMode::Annual } else { ViewMode::Monthly }
    }

    /// Suffix used in axis titles: "annual" | "monthly".
    pub fn unit(self) -> &'static str {
        match self {
            ViewMode::Annual  => "annual",
            ViewMode::Monthly => "monthly",
        }
    }
}
