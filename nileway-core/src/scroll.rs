//! Scroll-position thresholds and active-section selection.

/// A section counts as reached this many pixels before its top edge crosses
/// the top of the viewport, so the highlight flips while the heading is
/// still under the fixed header.
pub const SECTION_OFFSET_PX: f64 = 120.0;

/// The scroll-to-top affordance appears past this scroll distance.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// The navbar switches to its solid styling past this scroll distance.
pub const NAVBAR_SOLID_THRESHOLD_PX: f64 = 50.0;

/// Pick the id of the last section (document order) whose adjusted top edge
/// sits at or above the scroll position. `sections` must be in document
/// order, each entry `(id, offset_top)`.
#[must_use]
pub fn active_section<'a>(sections: &'a [(String, f64)], scroll_y: f64) -> Option<&'a str> {
    let mut current = None;
    for (id, offset_top) in sections {
        if scroll_y >= offset_top - SECTION_OFFSET_PX {
            current = Some(id.as_str());
        }
    }
    current
}

#[must_use]
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD_PX
}

/// Pages without a hero keep the solid navbar at every scroll position.
#[must_use]
pub fn navbar_solid(scroll_y: f64, has_hero: bool) -> bool {
    !has_hero || scroll_y > NAVBAR_SOLID_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(String, f64)> {
        vec![
            ("home".to_string(), 0.0),
            ("about".to_string(), 600.0),
            ("gallery".to_string(), 1400.0),
            ("contact".to_string(), 2400.0),
        ]
    }

    #[test]
    fn picks_last_section_above_threshold() {
        let s = sections();
        assert_eq!(active_section(&s, 0.0), Some("home"));
        assert_eq!(active_section(&s, 479.0), Some("home"));
        assert_eq!(active_section(&s, 480.0), Some("about"));
        assert_eq!(active_section(&s, 2290.0), Some("contact"));
    }

    #[test]
    fn empty_page_has_no_active_section() {
        assert_eq!(active_section(&[], 500.0), None);
    }

    #[test]
    fn scroll_top_threshold_is_exclusive() {
        assert!(!scroll_top_visible(300.0));
        assert!(scroll_top_visible(300.5));
    }

    #[test]
    fn navbar_is_always_solid_without_hero() {
        assert!(navbar_solid(0.0, false));
        assert!(!navbar_solid(0.0, true));
        assert!(navbar_solid(51.0, true));
    }
}
