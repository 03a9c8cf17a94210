// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quotation calculation.
//!
//! Base price by package type:
//!
//! | type     | base |
//! |----------|------|
//! | document | 50   |
//! | small    | 100  |
//! | medium   | 200  |
//! | large    | 350  |
//! | fragile  | 500  |
//! | other    | 150  |
//!
//! Weight adds 20 per unit with no cap. The sum is scaled by the distance
//! multiplier and rounded to the nearest whole unit.

use serde::{Deserialize, Serialize};

use crate::delivery::DistanceClass;

/// Cost added per unit of weight.
pub const WEIGHT_RATE: f64 = 20.0;

/// Result of a quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Rounded price.
    pub total: i64,
    pub breakdown: QuoteBreakdown,
}

/// How a quotation total was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    /// Price of the same shipment at zero weight, distance included.
    pub base_cost: i64,
    /// Weight surcharge before the distance multiplier.
    pub weight_cost: f64,
    pub total: i64,
}

/// Base price for a package type name. Unknown names cost 150.
pub fn base_price(package_type: &str) -> f64 {
    match package_type.trim() {
        "document" => 50.0,
        "small" => 100.0,
        "medium" => 200.0,
        "large" => 350.0,
        "fragile" => 500.0,
        _ => 150.0,
    }
}

fn total_for(weight: f64, package_type: &str, distance: DistanceClass) -> i64 {
    let raw = (base_price(package_type) + weight * WEIGHT_RATE) * distance.multiplier();
    raw.round() as i64
}

/// Quote a shipment.
///
/// Callers validate `weight` (finite, non-negative) before calling; the
/// calculator itself never fails.
pub fn calculate(weight: f64, package_type: &str, distance: &str) -> Quote {
    let distance = DistanceClass::lookup(distance);
    let total = total_for(weight, package_type, distance);
    Quote {
        total,
        breakdown: QuoteBreakdown {
            base_cost: total_for(0.0, package_type, distance),
            weight_cost: weight * WEIGHT_RATE,
            total,
        },
    }
}
