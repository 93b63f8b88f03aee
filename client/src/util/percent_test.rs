use super::*;

// =============================================================
// clamp
// =============================================================

#[test]
fn clamp_passes_in_range_values_through() {
    assert_eq!(clamp(0), 0);
    assert_eq!(clamp(47), 47);
    assert_eq!(clamp(100), 100);
}

#[test]
fn clamp_caps_out_of_range_values_at_100() {
    assert_eq!(clamp(101), 100);
    assert_eq!(clamp(255), 100);
}

// =============================================================
// fill_width
// =============================================================

#[test]
fn fill_width_maps_value_to_track_percentage() {
    assert_eq!(fill_width(82), "width:82%");
    assert_eq!(fill_width(0), "width:0%");
    assert_eq!(fill_width(100), "width:100%");
}

#[test]
fn fill_width_clamps_before_formatting() {
    assert_eq!(fill_width(140), "width:100%");
}

// =============================================================
// label
// =============================================================

#[test]
fn label_formats_clamped_percentage() {
    assert_eq!(label(76), "76%");
    assert_eq!(label(200), "100%");
}
