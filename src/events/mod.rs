pub mod anchor;
pub mod nav;

pub use anchor::wire_smooth_scroll;
pub use nav::{wire_mobile_nav, wire_navbar_scroll};
