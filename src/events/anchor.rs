use crate::constants::CLICK;
use crate::dom;
use site_core::{ScrollHost, SiteConfig, SmoothScroll};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scrolls the window and resolves fragment targets in the document.
pub struct WindowScroll {
    window: web::Window,
    document: web::Document,
}

impl ScrollHost for WindowScroll {
    fn offset_top_of(&self, selector: &str) -> Option<f64> {
        // Ids that are not valid selectors throw; treat them as unresolved.
        let el = dom::query(&self.document, selector)?;
        let html = el.dyn_into::<web::HtmlElement>().ok()?;
        Some(html.offset_top() as f64)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = web::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn wire_smooth_scroll(window: &web::Window, document: &web::Document, config: &SiteConfig) {
    let anchors = dom::query_all(document, config.selectors.anchors);
    if anchors.is_empty() {
        return;
    }
    let scroll = Rc::new(SmoothScroll::new(
        WindowScroll {
            window: window.clone(),
            document: document.clone(),
        },
        config.header_offset,
    ));
    for anchor in &anchors {
        let scroll = scroll.clone();
        let anchor_href = anchor.clone();
        dom::on_event(anchor, CLICK, move |ev| {
            let href = anchor_href.get_attribute("href").unwrap_or_default();
            if scroll.activate(&href) {
                ev.prevent_default();
            }
        });
    }
    log::info!("[anchor] smooth scroll wired ({} links)", anchors.len());
}
