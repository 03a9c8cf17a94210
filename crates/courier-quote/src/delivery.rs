// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Distance classes and delivery-date estimates.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use courier_core::time::format_timestamp;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Coarse distance band between sender and receiver.
///
/// Unknown names fall back to [`DistanceClass::Local`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DistanceClass {
    #[default]
    Local,
    Regional,
    National,
    International,
}

impl DistanceClass {
    /// Resolve a distance name, treating unknown values as local.
    pub fn lookup(name: &str) -> Self {
        Self::from_str(name.trim()).unwrap_or_default()
    }

    /// Price multiplier applied to base and weight cost.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Local => 1.0,
            Self::Regional => 1.5,
            Self::National => 2.0,
            Self::International => 3.0,
        }
    }

    /// Days from booking to expected delivery.
    pub fn delivery_days(self) -> i64 {
        match self {
            Self::Local => 1,
            Self::Regional => 2,
            Self::National => 4,
            Self::International => 7,
        }
    }
}

/// Expected delivery timestamp for a booking created at `created_at`.
pub fn estimated_delivery(created_at: DateTime<Utc>, distance: &str) -> String {
    let days = DistanceClass::lookup(distance).delivery_days();
    format_timestamp(created_at + Duration::days(days))
}
