/// Vertical span of a page section, read from layout at scroll time.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section containing `y`. Overlapping spans resolve to the later one in
/// document order.
pub fn section_at(sections: &[SectionSpan], y: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(y))
        .map(|section| section.id.as_str())
}

/// In-page anchor target: `"#about"` -> `"about"`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Offsets closer than this to a click's destination count as arrived.
const ARRIVAL_TOLERANCE_PX: f64 = 1.0;

/// Active link state. A link click holds its activation until the scroll
/// reaches the click's destination or [`NavTracker::settle`] releases it, so
/// the intermediate offsets of a smooth scroll cannot override it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavTracker {
    active: Option<String>,
    held_until: Option<f64>,
}

impl NavTracker {
    #[cfg(test)]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Resynchronizes on a scroll event. Returns whether the active link changed.
    pub fn on_scroll(&mut self, sections: &[SectionSpan], scroll_offset: f64, marker_offset: f64) -> bool {
        if let Some(destination) = self.held_until {
            if (scroll_offset - destination).abs() > ARRIVAL_TOLERANCE_PX {
                return false;
            }
            self.held_until = None;
        }
        self.resync(sections, scroll_offset, marker_offset)
    }

    /// Scrolling has gone quiet. Drops any click hold, including one whose
    /// destination lies past the end of the page, and resynchronizes.
    pub fn settle(&mut self, sections: &[SectionSpan], scroll_offset: f64, marker_offset: f64) -> bool {
        self.held_until = None;
        self.resync(sections, scroll_offset, marker_offset)
    }

    /// Activates `target_id` immediately and returns the scroll destination,
    /// compensated for the fixed header.
    pub fn on_link_click(&mut self, target_id: &str, target_top: f64, header_offset: f64) -> f64 {
        self.set_active(Some(target_id.to_string()));
        let destination = target_top - header_offset;
        // The browser clamps negative scroll targets to the top.
        self.held_until = Some(destination.max(0.0));
        destination
    }

    fn resync(&mut self, sections: &[SectionSpan], scroll_offset: f64, marker_offset: f64) -> bool {
        let next = section_at(sections, scroll_offset + marker_offset).map(str::to_string);
        self.set_active(next)
    }

    fn set_active(&mut self, next: Option<String>) -> bool {
        if self.active == next {
            return false;
        }
        self.active = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new("home", 0.0, 600.0),
            SectionSpan::new("about", 600.0, 500.0),
            SectionSpan::new("skills", 1100.0, 400.0),
            SectionSpan::new("projects", 1500.0, 900.0),
            SectionSpan::new("contact", 2400.0, 500.0),
        ]
    }

    #[test]
    fn active_section_is_read_one_hundred_pixels_below_scroll_offset() {
        let mut tracker = NavTracker::default();
        tracker.on_scroll(&page(), 499.0, 100.0);
        assert_eq!(tracker.active(), Some("home"));

        tracker.on_scroll(&page(), 500.0, 100.0);
        assert_eq!(tracker.active(), Some("about"));
    }

    #[test]
    fn span_end_is_exclusive() {
        assert_eq!(section_at(&page(), 1100.0), Some("skills"));
        assert_eq!(section_at(&page(), 1099.9), Some("about"));
    }

    #[test]
    fn at_most_one_link_is_active_for_any_offset() {
        let sections = page();
        let mut tracker = NavTracker::default();

        let mut offset = -200.0;
        while offset < 3_200.0 {
            tracker.on_scroll(&sections, offset, 100.0);
            let active: Vec<_> = sections
                .iter()
                .filter(|section| tracker.is_active(&section.id))
                .collect();
            assert!(active.len() <= 1);
            assert_eq!(tracker.active(), section_at(&sections, offset + 100.0));
            offset += 37.0;
        }
    }

    #[test]
    fn leaving_every_section_clears_the_active_link() {
        let mut tracker = NavTracker::default();
        tracker.on_scroll(&page(), 2_500.0, 100.0);
        assert_eq!(tracker.active(), Some("contact"));

        assert!(tracker.on_scroll(&page(), 3_000.0, 100.0));
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn unchanged_section_reports_no_change() {
        let mut tracker = NavTracker::default();
        assert!(tracker.on_scroll(&page(), 700.0, 100.0));
        assert!(!tracker.on_scroll(&page(), 720.0, 100.0));
    }

    #[test]
    fn link_click_activates_immediately_and_compensates_header() {
        let mut tracker = NavTracker::default();
        tracker.on_scroll(&page(), 2_500.0, 100.0);

        let destination = tracker.on_link_click("about", 600.0, 80.0);
        assert_eq!(destination, 520.0);
        assert_eq!(tracker.active(), Some("about"));

        // Scroll settling at the destination resolves to the same link.
        assert!(!tracker.on_scroll(&page(), destination, 100.0));
        assert_eq!(tracker.active(), Some("about"));
    }

    #[test]
    fn smooth_scroll_in_progress_keeps_the_clicked_link() {
        let mut tracker = NavTracker::default();
        tracker.on_scroll(&page(), 2_500.0, 100.0);
        let destination = tracker.on_link_click("about", 600.0, 80.0);

        // Intermediate offsets pass through contact, projects and skills.
        for offset in [2_300.0, 1_800.0, 1_200.0, 900.0, 521.5] {
            assert!(!tracker.on_scroll(&page(), offset, 100.0));
            assert_eq!(tracker.active(), Some("about"));
        }

        assert!(!tracker.on_scroll(&page(), destination + 0.5, 100.0));
        assert!(tracker.on_scroll(&page(), 0.0, 100.0));
        assert_eq!(tracker.active(), Some("home"));
    }

    #[test]
    fn settle_releases_a_destination_the_page_cannot_reach() {
        let mut tracker = NavTracker::default();
        // Contact sits near the bottom, so the page stops short at 2_300.
        tracker.on_link_click("contact", 2_400.0, 0.0);
        assert!(!tracker.on_scroll(&page(), 2_300.0, 50.0));
        assert_eq!(tracker.active(), Some("contact"));

        assert!(tracker.settle(&page(), 2_300.0, 50.0));
        assert_eq!(tracker.active(), Some("projects"));
        assert!(tracker.on_scroll(&page(), 100.0, 100.0));
        assert_eq!(tracker.active(), Some("home"));
    }

    #[test]
    fn click_above_the_page_top_is_reached_at_zero() {
        let mut tracker = NavTracker::default();
        tracker.on_scroll(&page(), 700.0, 100.0);

        assert_eq!(tracker.on_link_click("home", 0.0, 80.0), -80.0);
        assert!(!tracker.on_scroll(&page(), 0.0, 100.0));
        assert_eq!(tracker.active(), Some("home"));
        assert!(tracker.on_scroll(&page(), 700.0, 100.0));
    }

    #[test]
    fn anchor_target_requires_hash_and_id() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#about"), None);
    }
}
