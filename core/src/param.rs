//! Parameter registry: name, range, step and default of every numeric input.
//!
//! Ranges are enforced where values are collected (ParameterSet::set,
//! scenario loading, the session). The model itself never re-checks them.

use crate::error::{ModelError, ModelResult};
use serde::Serialize;

/// Largest customer count stored exactly both as u64 and as f64 (2^53).
pub const MAX_CUSTOMERS: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKey {
    CustomersTotal,
    AnnualVolume,
    LoadShareFin,
    FeeFin,
    LoadShareFx,
    FeeFx,
    LoadShareCredit,
    FeeCredit,
    LoadShareCargo,
    FeeCargo,
    CustomerShareFreight,
    FixedFeeFreight,
    FeeFreight,
    CustomerShareGateway,
    FeePerTxGateway,
    AvgTxPerCustomerGateway,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    pub label:   &'static str,
    pub min:     f64,
    /// `None` for annual volume, which has no upper bound.
    pub max:     Option<f64>,
    pub step:    f64,
    pub default: f64,
    /// Whole numbers only.
    pub integer: bool,
}

impl ParamSpec {
    const fn new(label: &'static str, min: f64, max: f64, step: f64, default: f64) -> Self {
        Self { label, min, max: Some(max), step, default, integer: false }
    }

    pub fn check(&self, name: &str, value: f64) -> ModelResult<()> {
        if !value.is_finite() {
            return Err(ModelError::invalid(name, value, "must be a finite number"));
        }
        if value < self.min {
            return Err(ModelError::invalid(name, value, format!("below minimum {}", self.min)));
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(ModelError::invalid(name, value, format!("above maximum {max}")));
            }
        }
        if self.integer && value.fract() != 0.0 {
            return Err(ModelError::invalid(name, value, "must be a whole number"));
        }
        Ok(())
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let mut v = value.max(self.min);
        if let Some(max) = self.max {
            v = v.min(max);
        }
        if self.integer {
            v = v.round();
        }
        v
    }
}

impl ParamKey {
    pub const ALL: [ParamKey; 16] = [
        ParamKey::CustomersTotal,
        ParamKey::AnnualVolume,
        ParamKey::LoadShareFin,
        ParamKey::FeeFin,
        ParamKey::LoadShareFx,
        ParamKey::FeeFx,
        ParamKey::LoadShareCredit,
        ParamKey::FeeCredit,
        ParamKey::LoadShareCargo,
        ParamKey::FeeCargo,
        ParamKey::CustomerShareFreight,
        ParamKey::FixedFeeFreight,
        ParamKey::FeeFreight,
        ParamKey::CustomerShareGateway,
        ParamKey::FeePerTxGateway,
        ParamKey::AvgTxPerCustomerGateway,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ParamKey::CustomersTotal          => "customers_total",
            ParamKey::AnnualVolume            => "annual_volume",
            ParamKey::LoadShareFin            => "load_share_fin",
            ParamKey::FeeFin                  => "fee_fin",
            ParamKey::LoadShareFx             => "load_share_fx",
            ParamKey::FeeFx                   => "fee_fx",
            ParamKey::LoadShareCredit         => "load_share_credit",
            ParamKey::FeeCredit               => "fee_credit",
            ParamKey::LoadShareCargo          => "load_share_cargo",
            ParamKey::FeeCargo                => "fee_cargo",
            ParamKey::CustomerShareFreight    => "customer_share_freight",
            ParamKey::FixedFeeFreight         => "fixed_fee_freight",
            ParamKey::FeeFreight              => "fee_freight",
            ParamKey::CustomerShareGateway    => "customer_share_gateway",
            ParamKey::FeePerTxGateway         => "fee_per_tx_gateway",
            ParamKey::AvgTxPerCustomerGateway => "avg_tx_per_customer_gateway",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ParamKey::ALL.into_iter().find(|k| k.name() == name)
    }

    pub fn spec(self) -> ParamSpec {
        match self {
            ParamKey::CustomersTotal => ParamSpec {
                label:   "Current customers",
                min:     0.0,
                max:     Some(MAX_CUSTOMERS),
                step:    1.0,
                default: 111.0,
                integer: true,
            },
            ParamKey::AnnualVolume => ParamSpec {
                label:   "Total annual volume (USD)",
                min:     0.0,
                max:     None,
                step:    100_000.0,
                default: 8_000_000_000.0,
                integer: false,
            },
            ParamKey::LoadShareFin =>
                ParamSpec::new("% of volume financed", 0.0, 50.0, 1.0, 30.0),
            ParamKey::FeeFin =>
                ParamSpec::new("Financing fee (% of amount financed)", 0.0, 10.0, 0.05, 0.3),
            ParamKey::LoadShareFx =>
                ParamSpec::new("% of volume going through FX", 0.0, 50.0, 1.0, 30.0),
            ParamKey::FeeFx =>
                ParamSpec::new("FX fee (% of amount transacted)", 0.0, 10.0, 0.05, 0.2),
            ParamKey::LoadShareCredit =>
                ParamSpec::new("% of volume with credit insurance", 0.0, 50.0, 1.0, 5.0),
            ParamKey::FeeCredit =>
                ParamSpec::new("Credit insurance fee (% of insured amount)", 0.0, 1.0, 0.01, 0.01),
            ParamKey::LoadShareCargo =>
                ParamSpec::new("% of volume with cargo insurance", 0.0, 50.0, 1.0, 5.0),
            ParamKey::FeeCargo =>
                ParamSpec::new("Cargo insurance fee (% of insured amount)", 0.0, 1.0, 0.01, 0.005),
            ParamKey::CustomerShareFreight =>
                ParamSpec::new("% of customers using freight payment", 0.0, 100.0, 1.0, 30.0),
            ParamKey::FixedFeeFreight =>
                ParamSpec::new("Fixed fee per customer (USD)", 0.0, 10_000.0, 10.0, 150.0),
            ParamKey::FeeFreight =>
                ParamSpec::new("Variable fee (% of freight amount)", 0.0, 10.0, 0.05, 0.5),
            ParamKey::CustomerShareGateway =>
                ParamSpec::new("% of customers using the payment gateway", 25.0, 100.0, 1.0, 50.0),
            ParamKey::FeePerTxGateway =>
                ParamSpec::new("Fee per transaction (USD)", 0.0, 1_000.0, 1.0, 35.0),
            ParamKey::AvgTxPerCustomerGateway => ParamSpec {
                integer: true,
                ..ParamSpec::new("Average transactions per customer (per year)", 0.0, 100_000.0, 10.0, 500.0)
            },
        }
    }
}
