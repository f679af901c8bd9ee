use crate::constants::{
    background_image_value, translate_y_value, CSS_BACKGROUND_IMAGE, CSS_TRANSFORM,
    CSS_WILL_CHANGE, LAYER_GEOMETRY, RESIZE, SCROLL,
};
use crate::dom;
use crate::frame::FrameScheduler;
use crate::media;
use site_core::{Parallax, ParallaxLayer, ParallaxMode, ParallaxSection, SiteConfig};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A parallax section and the background layer moved behind its content.
pub struct DomLayer {
    section: web::HtmlElement,
    layer: web::HtmlElement,
}

impl ParallaxLayer for DomLayer {
    fn viewport_rect(&self) -> (f64, f64) {
        let rect = self.section.get_bounding_client_rect();
        (rect.top(), rect.height())
    }

    fn translate_y(&self, px: f64) {
        _ = self
            .layer
            .style()
            .set_property(CSS_TRANSFORM, &translate_y_value(px));
    }
}

/// Find or create the background layer inside `section` and give it the
/// section's image. Created layers carry their own geometry; existing ones
/// are styled by the page.
fn build_layer(
    document: &web::Document,
    section: &web::HtmlElement,
    kind: ParallaxSection,
    layer_class: &str,
) -> Option<web::HtmlElement> {
    let existing = section
        .query_selector(&format!(".{}", layer_class))
        .ok()
        .flatten();
    let created = existing.is_none();
    let layer = match existing {
        Some(el) => el,
        None => {
            let el = document.create_element("div").ok()?;
            _ = el.class_list().add_1(layer_class);
            _ = section.prepend_with_node_1(&el);
            el
        }
    };
    let layer = layer.dyn_into::<web::HtmlElement>().ok()?;
    let style = layer.style();
    if created {
        for (property, value) in LAYER_GEOMETRY {
            _ = style.set_property(property, value);
        }
    }
    _ = style.set_property(CSS_BACKGROUND_IMAGE, &background_image_value(kind.image_url()));
    _ = style.set_property(CSS_WILL_CHANGE, CSS_TRANSFORM);
    Some(layer)
}

pub fn wire_parallax(window: &web::Window, document: &web::Document, config: &SiteConfig) {
    let caps = media::capabilities(window);
    let mode = ParallaxMode::detect(&caps, config);
    log::info!(
        "[parallax] mode={:?} width={} coarse={} hover_none={}",
        mode,
        caps.viewport_width,
        caps.coarse_pointer,
        caps.hover_none
    );
    if !mode.is_active() {
        return;
    }

    let mut parallax = Parallax::new(config.clone());
    for el in dom::query_all(document, config.selectors.parallax_sections) {
        let id = el.id();
        let Ok(section) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        parallax.attach(&id, |kind| {
            let layer = build_layer(document, &section, kind, config.classes.parallax_layer)?;
            Some(DomLayer { section, layer })
        });
    }
    if parallax.is_empty() {
        return;
    }
    log::info!("[parallax] layers={}", parallax.len());

    let parallax = Rc::new(parallax);
    parallax.render();

    let parallax_frame = parallax.clone();
    let scheduler = Rc::new(FrameScheduler::new(window.clone(), move || {
        parallax_frame.render();
    }));
    for event in [SCROLL, RESIZE] {
        let scheduler = scheduler.clone();
        dom::on_passive_event(window, event, move |_| scheduler.request());
    }
}
