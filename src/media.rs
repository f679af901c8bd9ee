use site_core::Capabilities;
use web_sys as web;

use crate::constants::{MQ_COARSE_POINTER, MQ_HOVER_NONE, MQ_REDUCED_MOTION};

#[inline]
pub fn matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Snapshot the viewport and input capabilities that gate parallax.
pub fn capabilities(window: &web::Window) -> Capabilities {
    // Without a width, assume a wide viewport and let the media queries decide.
    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::MAX);
    Capabilities {
        viewport_width,
        coarse_pointer: matches(window, MQ_COARSE_POINTER),
        hover_none: matches(window, MQ_HOVER_NONE),
        reduced_motion: matches(window, MQ_REDUCED_MOTION),
    }
}
