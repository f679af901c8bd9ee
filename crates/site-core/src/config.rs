//! Runtime configuration for the page behaviors.
//!
//! Every tunable lives here so each setup function receives its numbers and
//! selectors explicitly instead of reaching for globals. `Default` mirrors
//! the values in [`crate::constants`].

use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub scroll_threshold: f64,
    pub header_offset: f64,
    pub parallax_speed: f64,
    pub parallax_pre_offset_ratio: f64,
    pub mobile_breakpoint: f64,
    pub selectors: Selectors,
    pub classes: Classes,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Selectors {
    pub nav_toggle: &'static str,
    pub nav_menu: &'static str,
    pub main_nav: &'static str,
    pub anchors: &'static str,
    pub parallax_sections: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Classes {
    pub active: &'static str,
    pub scrolled: &'static str,
    pub parallax_layer: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: SCROLL_THRESHOLD_PX,
            header_offset: HEADER_OFFSET_PX,
            parallax_speed: PARALLAX_SPEED,
            parallax_pre_offset_ratio: PARALLAX_PRE_OFFSET_RATIO,
            mobile_breakpoint: MOBILE_BREAKPOINT_PX,
            selectors: Selectors::default(),
            classes: Classes::default(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_toggle: NAV_TOGGLE_SELECTOR,
            nav_menu: NAV_MENU_SELECTOR,
            main_nav: MAIN_NAV_SELECTOR,
            anchors: ANCHOR_SELECTOR,
            parallax_sections: PARALLAX_SECTION_SELECTOR,
        }
    }
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            active: ACTIVE_CLASS,
            scrolled: SCROLLED_CLASS,
            parallax_layer: PARALLAX_LAYER_CLASS,
        }
    }
}
