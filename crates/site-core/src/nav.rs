//! Mobile navigation menu and navbar scroll styling.

use crate::class::ClassList;

/// Toggle control plus the menu panel it opens.
///
/// Open state lives in the DOM as the `active` class; the panel is the
/// source of truth and the control mirrors it.
pub struct MobileNav<C: ClassList> {
    pub toggle: C,
    pub menu: C,
    active_class: &'static str,
}

impl<C: ClassList> MobileNav<C> {
    pub fn new(toggle: C, menu: C, active_class: &'static str) -> Self {
        Self {
            toggle,
            menu,
            active_class,
        }
    }

    pub fn is_open(&self) -> bool {
        self.menu.contains(self.active_class)
    }

    /// Flip the menu between open and closed.
    pub fn toggle(&self) {
        let open = !self.is_open();
        self.menu.set(self.active_class, open);
        self.toggle.set(self.active_class, open);
    }

    pub fn close(&self) {
        self.menu.remove(self.active_class);
        self.toggle.remove(self.active_class);
    }

    /// A link inside the menu was followed.
    pub fn link_activated(&self) {
        self.close();
    }

    /// Any click on the document. `inside_nav` is true when the target lies
    /// within the toggle control or the menu panel.
    pub fn document_clicked(&self, inside_nav: bool) {
        if !inside_nav && self.is_open() {
            self.close();
        }
    }
}

/// Adds the scrolled class to the navbar once the page is scrolled past a
/// threshold.
pub struct NavbarScroll<C: ClassList> {
    pub navbar: C,
    threshold: f64,
    scrolled_class: &'static str,
}

impl<C: ClassList> NavbarScroll<C> {
    pub fn new(navbar: C, threshold: f64, scrolled_class: &'static str) -> Self {
        Self {
            navbar,
            threshold,
            scrolled_class,
        }
    }

    #[inline]
    pub fn is_past_threshold(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }

    pub fn update(&self, scroll_y: f64) {
        self.navbar
            .set(self.scrolled_class, self.is_past_threshold(scroll_y));
    }
}
