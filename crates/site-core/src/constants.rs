// Shared tuning constants for the page behaviors.

// Navbar
pub const SCROLL_THRESHOLD_PX: f64 = 50.0; // scrollY above this marks the navbar as scrolled

// Smooth scroll
pub const HEADER_OFFSET_PX: f64 = 80.0; // height of the fixed navbar to clear

// Parallax
pub const PARALLAX_SPEED: f64 = 0.2; // background moves at this fraction of the element's top
pub const PARALLAX_PRE_OFFSET_RATIO: f64 = -0.15; // of element height, below-the-fold sections only
pub const MOBILE_BREAKPOINT_PX: f64 = 769.0; // viewports strictly narrower than this count as mobile

// Selectors consumed from the page markup
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const MAIN_NAV_SELECTOR: &str = ".main-nav";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const PARALLAX_SECTION_SELECTOR: &str = ".parallax-section";

// Classes written back to the page
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const PARALLAX_LAYER_CLASS: &str = "parallax-bg";
