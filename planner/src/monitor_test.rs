#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn triple_42_at(angle: f64) -> MonitorAttachment {
    MonitorAttachment { angle_deg: Some(angle), ..attachment(MonitorPreset::Triple42) }
}

// =============================================================
// Presets
// =============================================================

#[test]
fn preset_keys_round_trip_through_from_str() {
    for preset in MonitorPreset::ALL {
        assert_eq!(preset.key().parse::<MonitorPreset>().unwrap(), preset);
        assert_eq!(preset.to_string(), preset.key());
    }
}

#[test]
fn unknown_key_is_unsupported_preset() {
    let err = attachment_for_key("quad-32").unwrap_err();
    assert_eq!(err, MonitorError::UnsupportedPreset("quad-32".to_owned()));
    assert_eq!(err.to_string(), "unsupported monitor preset: quad-32");
}

#[test]
fn none_preset_has_zero_footprint() {
    let a = attachment(MonitorPreset::None);
    assert_eq!(a.layout, MonitorLayout::None);
    assert_eq!(a.panel_width_cm, 0.0);
    assert_eq!(a.panel_depth_cm, 0.0);
    assert!(a.screen_inches.is_none());
}

#[test]
fn single_49_constants() {
    let a = attachment_for_key("single-49").unwrap();
    assert_eq!(a.layout, MonitorLayout::Single);
    assert_eq!(a.screen_inches, Some(ScreenInches::In49));
    assert_eq!(a.panel_width_cm, 119.0);
    assert_eq!(a.panel_depth_cm, 30.0);
    assert!(a.gap_cm.is_none());
    assert!(a.angle_deg.is_none());
}

#[test]
fn triple_presets_share_gap_and_toe_in() {
    let expected = [
        (MonitorPreset::Triple42, 283.0, 40.0, 42),
        (MonitorPreset::Triple45c, 319.0, 42.0, 45),
        (MonitorPreset::Triple55, 367.0, 45.0, 55),
        (MonitorPreset::Triple65, 436.0, 50.0, 65),
    ];
    for (preset, width, depth, inches) in expected {
        let a = attachment(preset);
        assert_eq!(a.layout, MonitorLayout::Triple);
        assert_eq!(a.panel_width_cm, width, "{preset}");
        assert_eq!(a.panel_depth_cm, depth, "{preset}");
        assert_eq!(a.gap_cm, Some(2.0));
        assert_eq!(a.angle_deg, Some(60.0));
        assert_eq!(a.screen_inches.map(u8::from), Some(inches));
        assert_eq!(a.preset_key, Some(preset));
    }
}

// =============================================================
// Serde
// =============================================================

#[test]
fn attachment_serializes_with_camel_case_and_numeric_inches() {
    let json = serde_json::to_value(attachment(MonitorPreset::Triple42)).unwrap();
    assert_eq!(json["layout"], "triple");
    assert_eq!(json["screenInches"], 42);
    assert_eq!(json["panelWidthCm"], 283.0);
    assert_eq!(json["gapCm"], 2.0);
    assert_eq!(json["presetKey"], "triple-42");
}

#[test]
fn unsupported_screen_size_loads_as_none() {
    let raw = r#"{ "layout": "single", "screenInches": 30, "panelWidthCm": 70, "panelDepthCm": 20 }"#;
    let monitor: MonitorAttachment = serde_json::from_str(raw).unwrap();
    assert!(monitor.screen_inches.is_none());
    assert_eq!(monitor.layout, MonitorLayout::Single);
    assert_eq!(monitor.panel_width_cm, 70.0);
}

#[test]
fn unknown_layout_and_preset_load_as_defaults() {
    let raw = r#"{ "layout": "quad", "presetKey": "quad-32", "panelWidthCm": 70 }"#;
    let monitor: MonitorAttachment = serde_json::from_str(raw).unwrap();
    assert_eq!(monitor.layout, MonitorLayout::None);
    assert!(monitor.preset_key.is_none());
}

#[test]
fn screen_inches_try_from() {
    assert_eq!(ScreenInches::try_from(55_u8), Ok(ScreenInches::In55));
    assert_eq!(ScreenInches::try_from(27_u8), Err(MonitorError::UnsupportedScreenSize(27)));
}

// =============================================================
// PlacementTemplate
// =============================================================

#[test]
fn template_from_name_matches_pro_am_anywhere() {
    assert_eq!(PlacementTemplate::from_name("PRO AM"), PlacementTemplate::ProAm);
    assert_eq!(PlacementTemplate::from_name("my pro am rig"), PlacementTemplate::ProAm);
}

#[test]
fn template_from_name_matches_pro_exactly() {
    assert_eq!(PlacementTemplate::from_name("pro"), PlacementTemplate::Pro);
    assert_eq!(PlacementTemplate::from_name(" Pro "), PlacementTemplate::Pro);
    assert_eq!(PlacementTemplate::from_name("Professional"), PlacementTemplate::Generic);
    assert_eq!(PlacementTemplate::from_name("Racing Simulator"), PlacementTemplate::Generic);
}

#[test]
fn template_offsets() {
    assert_eq!(PlacementTemplate::ProAm.rig_offset_cm(40.0), 20.0);
    assert_eq!(PlacementTemplate::Pro.rig_offset_cm(40.0), 30.0);
    assert_eq!(PlacementTemplate::Generic.rig_offset_cm(40.0), -40.0);
}

#[test]
fn template_color_indices() {
    assert_eq!(PlacementTemplate::ProAm.color_index(), Some(5));
    assert_eq!(PlacementTemplate::Pro.color_index(), Some(0));
    assert_eq!(PlacementTemplate::Generic.color_index(), None);
}

// =============================================================
// rig_geometry
// =============================================================

#[test]
fn no_geometry_for_none_layout() {
    let a = attachment(MonitorPreset::None);
    assert!(rig_geometry(&a, 160.0, PlacementTemplate::Generic).is_none());
}

#[test]
fn single_panel_centered_on_simulator_width() {
    let a = attachment(MonitorPreset::Single49);
    let rig = rig_geometry(&a, 160.0, PlacementTemplate::Pro).unwrap();
    assert_eq!(rig.panels.len(), 1);
    let panel = rig.panels[0];
    assert!(point_approx_eq(panel.start, Point::new(20.5, 30.0)));
    assert!(point_approx_eq(panel.end, Point::new(139.5, 30.0)));
    assert_eq!(panel.rotation_deg, 0.0);
    assert!(approx_eq(rig.span_cm, 119.0));
}

#[test]
fn generic_rig_sits_flush_in_front_of_simulator() {
    let a = attachment(MonitorPreset::Single49);
    let rig = rig_geometry(&a, 160.0, PlacementTemplate::Generic).unwrap();
    assert!(approx_eq(rig.footprint[0].y, -30.0));
    assert!(approx_eq(rig.footprint[3].y, 0.0));
}

#[test]
fn triple_panels_have_equal_width_and_gaps() {
    let a = triple_42_at(0.0);
    let rig = rig_geometry(&a, 160.0, PlacementTemplate::ProAm).unwrap();
    assert_eq!(rig.panels.len(), 3);
    for panel in &rig.panels {
        assert!(approx_eq(distance(panel.start, panel.end), 93.0));
    }
    assert!(approx_eq(rig.panels[1].start.x - rig.panels[0].end.x, 2.0));
    assert!(approx_eq(rig.panels[2].start.x - rig.panels[1].end.x, 2.0));
}

#[test]
fn triple_side_panels_rotate_in_opposite_directions() {
    let rig = rig_geometry(&attachment(MonitorPreset::Triple42), 160.0, PlacementTemplate::ProAm).unwrap();
    assert_eq!(rig.panels[0].rotation_deg, -60.0);
    assert_eq!(rig.panels[1].rotation_deg, 0.0);
    assert_eq!(rig.panels[2].rotation_deg, 60.0);
    // Both outer ends fold toward the driver (+y) by the same amount.
    let drop = 93.0 * 60f64.to_radians().sin();
    assert!(approx_eq(rig.outer_left.y, 20.0 + drop));
    assert!(approx_eq(rig.outer_right.y, 20.0 + drop));
}

#[test]
fn triple_span_matches_panel_width_when_flat() {
    let rig = rig_geometry(&triple_42_at(0.0), 160.0, PlacementTemplate::Generic).unwrap();
    assert!(approx_eq(rig.span_cm, 283.0));
}

#[test]
fn triple_span_strictly_decreases_with_toe_in() {
    let mut previous = f64::INFINITY;
    for step in 0..=18_i32 {
        let angle = f64::from(step) * 5.0;
        let rig = rig_geometry(&triple_42_at(angle), 160.0, PlacementTemplate::Generic).unwrap();
        assert!(rig.span_cm < previous, "span at {angle} did not shrink");
        previous = rig.span_cm;
    }
}

#[test]
fn triple_span_at_preset_angle() {
    let rig = rig_geometry(&attachment(MonitorPreset::Triple42), 160.0, PlacementTemplate::Generic).unwrap();
    // 93 + 2 * 2 + 2 * 93 * cos(60°)
    assert!(approx_eq(rig.span_cm, 190.0));
}

// =============================================================
// to_room
// =============================================================

#[test]
fn to_room_translates_unrotated_simulator() {
    let rig = rig_geometry(&attachment(MonitorPreset::Single49), 160.0, PlacementTemplate::Pro).unwrap();
    let room = rig.to_room(Point::new(200.0, 150.0), 160.0, 60.0, 0.0);
    // Simulator NW corner is (120, 120).
    assert!(point_approx_eq(room.panels[0].start, Point::new(140.5, 150.0)));
    assert!(approx_eq(room.span_cm, rig.span_cm));
}

#[test]
fn to_room_rotation_preserves_span_and_adds_angle() {
    let rig = rig_geometry(&attachment(MonitorPreset::Triple55), 160.0, PlacementTemplate::ProAm).unwrap();
    let room = rig.to_room(Point::new(200.0, 150.0), 160.0, 60.0, 90.0);
    assert!(approx_eq(distance(room.outer_left, room.outer_right), rig.span_cm));
    assert_eq!(room.panels[0].rotation_deg, 30.0);
    assert_eq!(room.panels[2].rotation_deg, 150.0);
}
