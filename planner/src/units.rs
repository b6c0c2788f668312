//! Display-unit conversion.
//!
//! Every length in the document is stored in centimeters. Units only change
//! how lengths are shown and how typed values are read back.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use serde::{Deserialize, Serialize};

use crate::consts::CM_PER_INCH;

/// User-selected display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Centimeters.
    #[default]
    Metric,
    /// Inches.
    Imperial,
}

/// Convert a stored centimeter length into the display unit.
#[must_use]
pub fn to_display(cm: f64, units: Units) -> f64 {
    match units {
        Units::Metric => cm,
        Units::Imperial => cm / CM_PER_INCH,
    }
}

/// Convert a value typed in the display unit back into centimeters.
#[must_use]
pub fn from_display(value: f64, units: Units) -> f64 {
    match units {
        Units::Metric => value,
        Units::Imperial => value * CM_PER_INCH,
    }
}

#[must_use]
pub fn unit_label(units: Units) -> &'static str {
    match units {
        Units::Metric => "cm",
        Units::Imperial => "in",
    }
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Human-readable length in the display unit, e.g. `"119 cm"` or `"46.85 in"`.
#[must_use]
pub fn format_length(cm: f64, units: Units) -> String {
    let value = round2(to_display(cm, units));
    format!("{value} {}", unit_label(units))
}
