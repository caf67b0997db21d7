use crate::config::ViewConfig;

/// Scroll-dependent page chrome: navbar styling and the scroll-to-top button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollChrome {
    pub navbar_scrolled: bool,
    pub scroll_top_visible: bool,
}

impl ScrollChrome {
    pub fn at_offset(scroll_offset: f64, config: &ViewConfig) -> Self {
        Self {
            navbar_scrolled: scroll_offset > config.navbar_scrolled_threshold_px,
            scroll_top_visible: scroll_offset > config.scroll_top_threshold_px,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strictly_greater_than() {
        let config = ViewConfig::default();

        assert_eq!(ScrollChrome::at_offset(0.0, &config), ScrollChrome::default());
        assert!(!ScrollChrome::at_offset(50.0, &config).navbar_scrolled);
        assert!(ScrollChrome::at_offset(51.0, &config).navbar_scrolled);

        let near_top = ScrollChrome::at_offset(300.0, &config);
        assert!(near_top.navbar_scrolled);
        assert!(!near_top.scroll_top_visible);
        assert!(ScrollChrome::at_offset(301.0, &config).scroll_top_visible);
    }

    #[test]
    fn mobile_menu_toggles_and_closes() {
        let menu = MobileMenu::default();
        assert!(!menu.is_open());
        assert!(menu.toggled().is_open());
        assert!(!menu.toggled().toggled().is_open());
        assert!(!menu.toggled().closed().is_open());
    }
}
