//! The Parameter Set: every input the revenue model reads.
//!
//! A ParameterSet is an immutable value per evaluation. The UI layer
//! builds one, the model reads it, nothing is kept between evaluations.
//! Scenario files are JSON; any field left out takes its default.

use crate::{
    error::{ModelError, ModelResult},
    param::ParamKey,
    types::{Usd, ViewMode},
};
use serde::{Deserialize, Deserializer, Serialize};

/// A line whose revenue is a fee on a share of total annual volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeLineParams {
    /// Percentage (0–50) of annual volume routed through the line.
    pub load_share_pct: f64,
    /// Percentage fee on the routed amount.
    pub fee_pct:        f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreightParams {
    pub customer_share_pct: f64,
    /// Flat monthly charge per adopting customer.
    pub fixed_fee_usd:      Usd,
    pub fee_pct:            f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayParams {
    pub customer_share_pct:  f64,
    pub fee_per_tx_usd:      Usd,
    pub avg_tx_per_customer: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    pub customers_total:  u64,
    pub annual_volume:    Usd,
    pub annual_view:      bool,
    #[serde(default = "default_financing", deserialize_with = "financing_record")]
    pub financing:        VolumeLineParams,
    #[serde(default = "default_fx", deserialize_with = "fx_record")]
    pub fx:               VolumeLineParams,
    #[serde(default = "default_credit_insurance", deserialize_with = "credit_insurance_record")]
    pub credit_insurance: VolumeLineParams,
    #[serde(default = "default_cargo_insurance", deserialize_with = "cargo_insurance_record")]
    pub cargo_insurance:  VolumeLineParams,
    pub freight_payment:  FreightParams,
    pub payment_gateway:  GatewayParams,
}

fn default_financing() -> VolumeLineParams {
    VolumeLineParams { load_share_pct: 30.0, fee_pct: 0.3 }
}

fn default_fx() -> VolumeLineParams {
    VolumeLineParams { load_share_pct: 30.0, fee_pct: 0.2 }
}

fn default_credit_insurance() -> VolumeLineParams {
    VolumeLineParams { load_share_pct: 5.0, fee_pct: 0.01 }
}

fn default_cargo_insurance() -> VolumeLineParams {
    VolumeLineParams { load_share_pct: 5.0, fee_pct: 0.005 }
}

/// A volume-line record as written in a scenario file; either field may be left out.
#[derive(Deserialize)]
struct VolumeLineRecord {
    load_share_pct: Option<f64>,
    fee_pct:        Option<f64>,
}

fn volume_record<'de, D>(d: D, default: VolumeLineParams) -> Result<VolumeLineParams, D::Error>
where
    D: Deserializer<'de>,
{
    let record = VolumeLineRecord::deserialize(d)?;
    Ok(VolumeLineParams {
        load_share_pct: record.load_share_pct.unwrap_or(default.load_share_pct),
        fee_pct:        record.fee_pct.unwrap_or(default.fee_pct),
    })
}

fn financing_record<'de, D: Deserializer<'de>>(d: D) -> Result<VolumeLineParams, D::Error> {
    volume_record(d, default_financing())
}

fn fx_record<'de, D: Deserializer<'de>>(d: D) -> Result<VolumeLineParams, D::Error> {
    volume_record(d, default_fx())
}

fn credit_insurance_record<'de, D: Deserializer<'de>>(d: D) -> Result<VolumeLineParams, D::Error> {
    volume_record(d, default_credit_insurance())
}

fn cargo_insurance_record<'de, D: Deserializer<'de>>(d: D) -> Result<VolumeLineParams, D::Error> {
    volume_record(d, default_cargo_insurance())
}

impl Default for FreightParams {
    fn default() -> Self {
        Self {
            customer_share_pct: 30.0,
            fixed_fee_usd:      150.0,
            fee_pct:            0.5,
        }
    }
}

impl Default for GatewayParams {
    fn default() -> Self {
        Self {
            customer_share_pct:  50.0,
            fee_per_tx_usd:      35.0,
            avg_tx_per_customer: 500,
        }
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            customers_total:  111,
            annual_volume:    8_000_000_000.0,
            annual_view:      true,
            financing:        default_financing(),
            fx:               default_fx(),
            credit_insurance: default_credit_insurance(),
            cargo_insurance:  default_cargo_insurance(),
            freight_payment:  FreightParams::default(),
            payment_gateway:  GatewayParams::default(),
        }
    }
}

impl ParameterSet {
    /// Load a scenario from a JSON file and validate it.
    /// In tests, use ParameterSet::default() or from_json().
    pub fn load(path: &str) -> ModelResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_string(),
            source,
        })?;
        let params = Self::from_json(&content)?;
        log::info!("loaded scenario from {path}");
        Ok(params)
    }

    pub fn from_json(content: &str) -> ModelResult<Self> {
        let params: ParameterSet = serde_json::from_str(content)?;
        params.ensure_valid()?;
        Ok(params)
    }

    pub fn view(&self) -> ViewMode {
        ViewMode::from_annual_view(self.annual_view)
    }

    /// Current value of a numeric parameter.
    pub fn get(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::CustomersTotal          => self.customers_total as f64,
            ParamKey::AnnualVolume            => self.annual_volume,
            ParamKey::LoadShareFin            => self.financing.load_share_pct,
            ParamKey::FeeFin                  => self.financing.fee_pct,
            ParamKey::LoadShareFx             => self.fx.load_share_pct,
            ParamKey::FeeFx                   => self.fx.fee_pct,
            ParamKey::LoadShareCredit         => self.credit_insurance.load_share_pct,
            ParamKey::FeeCredit               => self.credit_insurance.fee_pct,
            ParamKey::LoadShareCargo          => self.cargo_insurance.load_share_pct,
            ParamKey::FeeCargo                => self.cargo_insurance.fee_pct,
            ParamKey::CustomerShareFreight    => self.freight_payment.customer_share_pct,
            ParamKey::FixedFeeFreight         => self.freight_payment.fixed_fee_usd,
            ParamKey::FeeFreight              => self.freight_payment.fee_pct,
            ParamKey::CustomerShareGateway    => self.payment_gateway.customer_share_pct,
            ParamKey::FeePerTxGateway         => self.payment_gateway.fee_per_tx_usd,
            ParamKey::AvgTxPerCustomerGateway => self.payment_gateway.avg_tx_per_customer as f64,
        }
    }

    /// Set a numeric parameter after checking it against its range.
    pub fn set(&mut self, key: ParamKey, value: f64) -> ModelResult<()> {
        key.spec().check(key.name(), value)?;
        self.write(key, value);
        Ok(())
    }

    /// Set a parameter from its textual name and value, as typed by a user
    /// or sent by the UI layer. `annual_view` accepts true/false/yes/no/1/0.
    pub fn set_by_name(&mut self, name: &str, raw: &str) -> ModelResult<()> {
        let raw = raw.trim();
        if name == "annual_view" {
            self.annual_view = parse_flag(raw)
                .ok_or_else(|| ModelError::invalid(name, raw, "expected true or false"))?;
            return Ok(());
        }
        let key = ParamKey::from_name(name).ok_or_else(|| ModelError::UnknownParameter {
            name: name.to_string(),
        })?;
        let value = parse_number(raw).ok_or_else(|| ModelError::invalid(name, raw, "not a number"))?;
        self.set(key, value)
    }

    /// Every out-of-range value, in registry order.
    pub fn validate(&self) -> Vec<ModelError> {
        ParamKey::ALL
            .iter()
            .filter_map(|key| key.spec().check(key.name(), self.get(*key)).err())
            .collect()
    }

    pub fn ensure_valid(&self) -> ModelResult<()> {
        match self.validate().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// A copy with every value forced into its declared range,
    /// the way the input widgets constrain what a user can enter.
    pub fn clamped(&self) -> Self {
        let mut out = self.clone();
        for key in ParamKey::ALL {
            let value = key.spec().clamp(self.get(key));
            out.write(key, value);
        }
        out
    }

    fn write(&mut self, key: ParamKey, value: f64) {
        match key {
            ParamKey::CustomersTotal          => self.customers_total = value as u64,
            ParamKey::AnnualVolume            => self.annual_volume = value,
            ParamKey::LoadShareFin            => self.financing.load_share_pct = value,
            ParamKey::FeeFin                  => self.financing.fee_pct = value,
            ParamKey::LoadShareFx             => self.fx.load_share_pct = value,
            ParamKey::FeeFx                   => self.fx.fee_pct = value,
            ParamKey::LoadShareCredit         => self.credit_insurance.load_share_pct = value,
            ParamKey::FeeCredit               => self.credit_insurance.fee_pct = value,
            ParamKey::LoadShareCargo          => self.cargo_insurance.load_share_pct = value,
            ParamKey::FeeCargo                => self.cargo_insurance.fee_pct = value,
            ParamKey::CustomerShareFreight    => self.freight_payment.customer_share_pct = value,
            ParamKey::FixedFeeFreight         => self.freight_payment.fixed_fee_usd = value,
            ParamKey::FeeFreight              => self.freight_payment.fee_pct = value,
            ParamKey::CustomerShareGateway    => self.payment_gateway.customer_share_pct = value,
            ParamKey::FeePerTxGateway         => self.payment_gateway.fee_per_tx_usd = value,
            ParamKey::AvgTxPerCustomerGateway => {
                self.payment_gateway.avg_tx_per_customer = value as u64
            }
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a user-typed number. `_` is ignored anywhere; `,` is accepted only
/// as a thousands separator between three-digit groups, so a decimal comma
/// such as "0,5" is refused rather than read as 5.
fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != '_').collect();
    if cleaned.contains(',') {
        let unsigned = cleaned.strip_prefix(['-', '+']).unwrap_or(&cleaned);
        let int_part = unsigned.split_once('.').map_or(unsigned, |(i, _)| i);
        let mut groups = int_part.split(',');
        let first_ok = groups
            .next()
            .is_some_and(|g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()));
        let rest_ok = groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()));
        if !(first_ok && rest_ok) {
            return None;
        }
    }
    cleaned.replace(',', "").parse().ok()
}
