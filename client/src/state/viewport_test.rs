use super::*;

#[test]
fn default_layout_is_desktop() {
    assert_eq!(Layout::default(), Layout::Desktop);
}

#[test]
fn narrow_widths_are_mobile() {
    assert_eq!(layout_for_width(320.0), Layout::Mobile);
    assert_eq!(layout_for_width(767.9), Layout::Mobile);
}

#[test]
fn breakpoint_and_wider_are_desktop() {
    assert_eq!(layout_for_width(MOBILE_BREAKPOINT_PX), Layout::Desktop);
    assert_eq!(layout_for_width(1440.0), Layout::Desktop);
}

#[test]
fn layouts_map_to_their_presentations() {
    assert_eq!(Layout::Desktop.presentation(), Presentation::DESKTOP);
    assert_eq!(Layout::Mobile.presentation(), Presentation::MOBILE);
}
