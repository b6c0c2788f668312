//! Monitor rig presets and panel layout for the simulator object.
//!
//! A rig is described by a [`MonitorAttachment`] stored on the simulator. The
//! attachment comes from a closed set of [`MonitorPreset`]s; [`rig_geometry`]
//! turns it into panel segments in the simulator's local frame (origin at the
//! simulator's NW corner, before rotation), and [`RigGeometry::to_room`] maps
//! those into room coordinates.
//!
//! Triple rigs fold their side panels toward the driver: the left panel turns
//! by `-angle` about its inner edge and the right panel by `+angle`, so the
//! outer span reported for dimensions shrinks as the toe-in grows.

#[cfg(test)]
#[path = "monitor_test.rs"]
mod monitor_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{PRO_AM_RIG_OFFSET_CM, PRO_RIG_OFFSET_CM, TRIPLE_GAP_CM, TRIPLE_STAND_DEPTH_CM, TRIPLE_TOE_IN_DEG};
use crate::geometry::{distance, rotate_point};
use crate::theme::{SIM_COLOR_INDEX_PRO, SIM_COLOR_INDEX_PRO_AM};

/// Error returned for preset keys and screen sizes outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonitorError {
    #[error("unsupported monitor preset: {0}")]
    UnsupportedPreset(String),
    #[error("unsupported screen size: {0}\"")]
    UnsupportedScreenSize(u8),
}

/// How many panels a rig has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorLayout {
    #[default]
    None,
    Single,
    Triple,
}

/// Supported diagonal screen sizes. Serialised as the number of inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ScreenInches {
    In42,
    In45,
    In49,
    In55,
    In65,
}

impl TryFrom<u8> for ScreenInches {
    type Error = MonitorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            42 => Ok(Self::In42),
            45 => Ok(Self::In45),
            49 => Ok(Self::In49),
            55 => Ok(Self::In55),
            65 => Ok(Self::In65),
            other => Err(MonitorError::UnsupportedScreenSize(other)),
        }
    }
}

impl From<ScreenInches> for u8 {
    fn from(value: ScreenInches) -> Self {
        match value {
            ScreenInches::In42 => 42,
            ScreenInches::In45 => 45,
            ScreenInches::In49 => 49,
            ScreenInches::In55 => 55,
            ScreenInches::In65 => 65,
        }
    }
}

/// Discrete rig presets offered by the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitorPreset {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "single-49")]
    Single49,
    #[serde(rename = "triple-42")]
    Triple42,
    #[serde(rename = "triple-45c")]
    Triple45c,
    #[serde(rename = "triple-55")]
    Triple55,
    #[serde(rename = "triple-65")]
    Triple65,
}

impl MonitorPreset {
    /// Every preset, in menu order.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Single49,
        Self::Triple42,
        Self::Triple45c,
        Self::Triple55,
        Self::Triple65,
    ];

    /// The preset's key as used in documents and on the command line.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single49 => "single-49",
            Self::Triple42 => "triple-42",
            Self::Triple45c => "triple-45c",
            Self::Triple55 => "triple-55",
            Self::Triple65 => "triple-65",
        }
    }
}

impl fmt::Display for MonitorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MonitorPreset {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.key() == s)
            .ok_or_else(|| MonitorError::UnsupportedPreset(s.to_owned()))
    }
}

/// Monitor rig attached to the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorAttachment {
    #[serde(default, deserialize_with = "crate::lenient::or_default")]
    pub layout: MonitorLayout,
    /// Sizes outside the preset table load as `None`.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::or_default")]
    pub screen_inches: Option<ScreenInches>,
    /// Total span of all panels and gaps, unrotated.
    #[serde(default)]
    pub panel_width_cm: f64,
    /// Footprint depth of the rig including its stand.
    #[serde(default)]
    pub panel_depth_cm: f64,
    /// Bezel gap between adjacent panels (triples only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_cm: Option<f64>,
    /// Side-panel toe-in angle (triples only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::or_default")]
    pub preset_key: Option<MonitorPreset>,
}

/// Build the attachment for a preset.
#[must_use]
pub fn attachment(preset: MonitorPreset) -> MonitorAttachment {
    match preset {
        MonitorPreset::None => MonitorAttachment {
            layout: MonitorLayout::None,
            screen_inches: None,
            panel_width_cm: 0.0,
            panel_depth_cm: 0.0,
            gap_cm: None,
            angle_deg: None,
            preset_key: Some(preset),
        },
        MonitorPreset::Single49 => MonitorAttachment {
            layout: MonitorLayout::Single,
            screen_inches: Some(ScreenInches::In49),
            panel_width_cm: 119.0,
            panel_depth_cm: 30.0,
            gap_cm: None,
            angle_deg: None,
            preset_key: Some(preset),
        },
        MonitorPreset::Triple42 => triple(preset, ScreenInches::In42, 93.0, 30.0),
        MonitorPreset::Triple45c => triple(preset, ScreenInches::In45, 105.0, 32.0),
        MonitorPreset::Triple55 => triple(preset, ScreenInches::In55, 121.0, 35.0),
        MonitorPreset::Triple65 => triple(preset, ScreenInches::In65, 144.0, 40.0),
    }
}

fn triple(preset: MonitorPreset, inches: ScreenInches, panel_cm: f64, depth_cm: f64) -> MonitorAttachment {
    MonitorAttachment {
        layout: MonitorLayout::Triple,
        screen_inches: Some(inches),
        panel_width_cm: panel_cm * 3.0 + TRIPLE_GAP_CM * 2.0,
        panel_depth_cm: depth_cm + TRIPLE_STAND_DEPTH_CM,
        gap_cm: Some(TRIPLE_GAP_CM),
        angle_deg: Some(TRIPLE_TOE_IN_DEG),
        preset_key: Some(preset),
    }
}

/// Build the attachment for a preset key, rejecting unknown keys.
///
/// # Errors
///
/// Returns [`MonitorError::UnsupportedPreset`] when `key` names no preset.
pub fn attachment_for_key(key: &str) -> Result<MonitorAttachment, MonitorError> {
    key.parse::<MonitorPreset>().map(attachment)
}

/// Simulator template that decides where the rig sits on the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlacementTemplate {
    ProAm,
    Pro,
    Generic,
}

impl PlacementTemplate {
    /// Infer the template from a display name.
    ///
    /// Used for documents that predate the explicit template tag.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let upper = name.trim().to_uppercase();
        if upper.contains("PRO AM") {
            Self::ProAm
        } else if upper == "PRO" {
            Self::Pro
        } else {
            Self::Generic
        }
    }

    /// Y offset of the rig's front edge from the simulator's front edge.
    #[must_use]
    pub fn rig_offset_cm(self, rig_depth_cm: f64) -> f64 {
        match self {
            Self::ProAm => PRO_AM_RIG_OFFSET_CM,
            Self::Pro => PRO_RIG_OFFSET_CM,
            Self::Generic => -rig_depth_cm,
        }
    }

    /// Palette index a simulator built from this template starts with.
    #[must_use]
    pub fn color_index(self) -> Option<usize> {
        match self {
            Self::ProAm => Some(SIM_COLOR_INDEX_PRO_AM),
            Self::Pro => Some(SIM_COLOR_INDEX_PRO),
            Self::Generic => None,
        }
    }

    /// Display name given to a simulator built from this template.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::ProAm => "PRO AM",
            Self::Pro => "PRO",
            Self::Generic => crate::consts::SIMULATOR_NAME,
        }
    }
}

/// One screen of a rig, as the segment of its viewing face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RigPanel {
    /// Left end of the face (outer end for the left panel).
    pub start: Point,
    /// Right end of the face (outer end for the right panel).
    pub end: Point,
    /// Point the panel is rotated about.
    pub pivot: Point,
    /// Panel rotation relative to the simulator.
    pub rotation_deg: f64,
}

/// Derived geometry of a rig.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RigGeometry {
    pub panels: Vec<RigPanel>,
    /// Unrotated rig footprint, NW/NE/SE/SW.
    pub footprint: [Point; 4],
    /// Outer end of the left-most panel.
    pub outer_left: Point,
    /// Outer end of the right-most panel.
    pub outer_right: Point,
    /// True outer span between the two outer ends.
    pub span_cm: f64,
}

/// Lay out a rig on a simulator `sim_width_cm` wide.
///
/// Returns `None` for an attachment with no panels.
#[must_use]
pub fn rig_geometry(attachment: &MonitorAttachment, sim_width_cm: f64, template: PlacementTemplate) -> Option<RigGeometry> {
    let total = attachment.panel_width_cm;
    if attachment.layout == MonitorLayout::None || total <= 0.0 {
        return None;
    }
    let depth = attachment.panel_depth_cm;
    let top = template.rig_offset_cm(depth);
    let left = (sim_width_cm - total) / 2.0;
    let footprint = [
        Point::new(left, top),
        Point::new(left + total, top),
        Point::new(left + total, top + depth),
        Point::new(left, top + depth),
    ];

    let panels = match attachment.layout {
        MonitorLayout::Triple => {
            let gap = attachment.gap_cm.unwrap_or(TRIPLE_GAP_CM);
            let angle = attachment.angle_deg.unwrap_or(TRIPLE_TOE_IN_DEG);
            triple_panels(left, top, total, gap, angle)
        }
        _ => vec![RigPanel {
            start: Point::new(left, top),
            end: Point::new(left + total, top),
            pivot: Point::new(left + total / 2.0, top),
            rotation_deg: 0.0,
        }],
    };

    let outer_left = panels.first().map_or(footprint[0], |p| p.start);
    let outer_right = panels.last().map_or(footprint[1], |p| p.end);
    Some(RigGeometry {
        panels,
        footprint,
        outer_left,
        outer_right,
        span_cm: distance(outer_left, outer_right),
    })
}

fn triple_panels(left: f64, top: f64, total: f64, gap: f64, angle: f64) -> Vec<RigPanel> {
    let panel = (total - 2.0 * gap) / 3.0;

    let left_pivot = Point::new(left + panel, top);
    let left_outer = rotate_point(Point::new(left, top), left_pivot, -angle);

    let center_start = Point::new(left + panel + gap, top);
    let center_end = Point::new(left + 2.0 * panel + gap, top);

    let right_pivot = Point::new(left + 2.0 * panel + 2.0 * gap, top);
    let right_outer = rotate_point(Point::new(left + total, top), right_pivot, angle);

    vec![
        RigPanel { start: left_outer, end: left_pivot, pivot: left_pivot, rotation_deg: -angle },
        RigPanel {
            start: center_start,
            end: center_end,
            pivot: Point::new(left + total / 2.0, top),
            rotation_deg: 0.0,
        },
        RigPanel { start: right_pivot, end: right_outer, pivot: right_pivot, rotation_deg: angle },
    ]
}

impl RigGeometry {
    /// Map local rig geometry into room coordinates for a simulator centred at
    /// `center` with the given footprint and rotation.
    #[must_use]
    pub fn to_room(&self, center: Point, sim_width_cm: f64, sim_depth_cm: f64, rotation_deg: f64) -> Self {
        let origin = Point::new(center.x - sim_width_cm / 2.0, center.y - sim_depth_cm / 2.0);
        let map = |p: Point| rotate_point(Point::new(origin.x + p.x, origin.y + p.y), center, rotation_deg);
        Self {
            panels: self
                .panels
                .iter()
                .map(|panel| RigPanel {
                    start: map(panel.start),
                    end: map(panel.end),
                    pivot: map(panel.pivot),
                    rotation_deg: panel.rotation_deg + rotation_deg,
                })
                .collect(),
            footprint: self.footprint.map(map),
            outer_left: map(self.outer_left),
            outer_right: map(self.outer_right),
            span_cm: self.span_cm,
        }
    }
}
