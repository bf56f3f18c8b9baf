//! Rounding of derived customer counts.
//!
//! Customer counts are `customers_total × share`, which is rarely whole.
//! The tie rule is explicit: `HalfEven` (the default) sends 55.5 to 56
//! and 54.5 to 54; `HalfUp` sends every .5 away from zero.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    #[default]
    HalfEven,
    HalfUp,
}

impl RoundingPolicy {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            RoundingPolicy::HalfEven => x.round_ties_even(),
            RoundingPolicy::HalfUp   => x.round(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "half-even" | "half_even" => Some(RoundingPolicy::HalfEven),
            "half-up" | "half_up"     => Some(RoundingPolicy::HalfUp),
            _ => None,
        }
    }
}

/// Round a fractional customer count to a whole number of customers.
/// Negative and non-finite inputs yield 0.
pub fn round_customer_count(x: f64, policy: RoundingPolicy) -> u64 {
    if !x.is_finite() || x <= 0.0 {
        return 0;
    }
    policy.apply(x) as u64
}
