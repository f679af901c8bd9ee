//! In-page anchor links scrolled smoothly below the fixed header.

/// What a link's `href` points at, as far as smooth scrolling cares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    /// `href="#"`: placeholder link, left alone.
    Bare,
    /// `href="#id"`.
    Fragment(&'a str),
    /// Anything else; not an in-page link.
    External,
}

impl<'a> AnchorTarget<'a> {
    pub fn parse(href: &'a str) -> Self {
        match href.strip_prefix('#') {
            Some("") => AnchorTarget::Bare,
            Some(id) => AnchorTarget::Fragment(id),
            None => AnchorTarget::External,
        }
    }

    /// CSS selector resolving the fragment, e.g. `#contact`.
    pub fn selector(&self) -> Option<String> {
        match self {
            AnchorTarget::Fragment(id) => Some(format!("#{id}")),
            _ => None,
        }
    }
}

/// Page operations smooth scrolling needs.
pub trait ScrollHost {
    /// Document offset of the element matching `selector`, if one exists.
    fn offset_top_of(&self, selector: &str) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
}

pub struct SmoothScroll<H: ScrollHost> {
    pub host: H,
    header_offset: f64,
}

impl<H: ScrollHost> SmoothScroll<H> {
    pub fn new(host: H, header_offset: f64) -> Self {
        Self {
            host,
            header_offset,
        }
    }

    #[inline]
    pub fn destination(&self, offset_top: f64) -> f64 {
        offset_top - self.header_offset
    }

    /// Handle activation of a link with the given `href`.
    ///
    /// Returns true when a scroll was issued and the caller must prevent the
    /// default jump navigation.
    pub fn activate(&self, href: &str) -> bool {
        let Some(selector) = AnchorTarget::parse(href).selector() else {
            return false;
        };
        match self.host.offset_top_of(&selector) {
            Some(top) => {
                self.host.smooth_scroll_to(self.destination(top));
                true
            }
            None => {
                log::debug!("[anchor] no element for {}", selector);
                false
            }
        }
    }
}
