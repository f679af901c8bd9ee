use crate::constants::{CLICK, MENU_LINK_SELECTOR, SCROLL};
use crate::dom::{self, DomElement};
use site_core::{MobileNav, NavbarScroll, SiteConfig};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Whether the event target lies inside the toggle control or the menu.
fn click_inside(ev: &web::Event, toggle: &web::Element, menu: &web::Element) -> bool {
    let Some(node) = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok()) else {
        return false;
    };
    menu.contains(Some(&node)) || toggle.contains(Some(&node))
}

pub fn wire_mobile_nav(document: &web::Document, config: &SiteConfig) {
    let (Some(toggle_el), Some(menu_el)) = (
        dom::query(document, config.selectors.nav_toggle),
        dom::query(document, config.selectors.nav_menu),
    ) else {
        log::debug!("[nav] toggle or menu missing; mobile nav not wired");
        return;
    };

    let nav = Rc::new(MobileNav::new(
        DomElement(toggle_el.clone()),
        DomElement(menu_el.clone()),
        config.classes.active,
    ));

    let nav_toggle = nav.clone();
    dom::on_event(&toggle_el, CLICK, move |_| nav_toggle.toggle());

    let links = menu_el
        .query_selector_all(MENU_LINK_SELECTOR)
        .map(dom::elements)
        .unwrap_or_default();
    for link in &links {
        let nav_link = nav.clone();
        dom::on_event(link, CLICK, move |_| nav_link.link_activated());
    }

    let nav_outside = nav.clone();
    dom::on_event(document, CLICK, move |ev| {
        let inside = click_inside(&ev, &toggle_el, &menu_el);
        nav_outside.document_clicked(inside);
    });
    log::info!("[nav] mobile nav wired ({} links)", links.len());
}

pub fn wire_navbar_scroll(window: &web::Window, document: &web::Document, config: &SiteConfig) {
    let Some(navbar_el) = dom::query(document, config.selectors.main_nav) else {
        log::debug!("[nav] {} missing; scroll style not wired", config.selectors.main_nav);
        return;
    };
    let navbar = NavbarScroll::new(
        DomElement(navbar_el),
        config.scroll_threshold,
        config.classes.scrolled,
    );
    // Pages restored mid-scroll get the right style before the first event.
    navbar.update(window.scroll_y().unwrap_or(0.0));

    let window_scroll = window.clone();
    dom::on_passive_event(window, SCROLL, move |_| {
        navbar.update(window_scroll.scroll_y().unwrap_or(0.0));
    });
}
