use site_core::ClassList;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `web_sys::Element` seen through the core `ClassList` trait.
#[derive(Clone)]
pub struct DomElement(pub web::Element);

impl ClassList for DomElement {
    fn add(&self, class: &str) {
        _ = self.0.class_list().add_1(class);
    }

    fn remove(&self, class: &str) {
        _ = self.0.class_list().remove_1(class);
    }

    fn contains(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Collect the elements of a `NodeList`, skipping non-element nodes.
pub fn elements(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

/// Attach a listener that lives for the rest of the page.
pub fn on_event(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`on_event`] but registered as passive, so it never blocks scrolling.
pub fn on_passive_event(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    let closure =
        Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Run `f` once the document structure is parsed: immediately if it already
/// is, otherwise on `DOMContentLoaded`.
pub fn on_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let closure: Closure<dyn FnMut()> = Closure::once(f);
    _ = document.add_event_listener_with_callback(
        crate::constants::DOM_CONTENT_LOADED,
        closure.as_ref().unchecked_ref(),
    );
    closure.forget();
}
