// Browser-facing strings used by the wasm front-end.
// Tunables shared with host tests live in `site_core::constants`.

// Events
pub const CLICK: &str = "click";
pub const SCROLL: &str = "scroll";
pub const RESIZE: &str = "resize";
pub const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";

// Media queries
pub const MQ_COARSE_POINTER: &str = "(pointer: coarse)";
pub const MQ_HOVER_NONE: &str = "(hover: none)";
pub const MQ_REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";

// Styles applied to parallax layers
pub const CSS_TRANSFORM: &str = "transform";
pub const CSS_WILL_CHANGE: &str = "will-change";
pub const CSS_BACKGROUND_IMAGE: &str = "background-image";

// Geometry for layers created at runtime. The layer is taller than its
// section so the upward pre-offset and the scroll translation never expose
// an empty strip; the section must be positioned and clip overflow.
pub const LAYER_GEOMETRY: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("left", "0"),
    ("right", "0"),
    ("top", "0"),
    ("height", "130%"),
    ("background-size", "cover"),
    ("background-position", "center"),
    ("z-index", "-1"),
    ("pointer-events", "none"),
];

#[inline]
pub fn translate_y_value(px: f64) -> String {
    format!("translate3d(0, {:.2}px, 0)", px)
}

#[inline]
pub fn background_image_value(url: &str) -> String {
    format!("url('{}')", url)
}

// Links inside the menu panel
pub const MENU_LINK_SELECTOR: &str = "a";
