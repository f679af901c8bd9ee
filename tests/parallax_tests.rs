// Host-side tests for mobile parallax: capability gating, section lookup,
// offset math and per-frame coalescing.

use site_core::{
    parallax_offset, Capabilities, FrameGate, Parallax, ParallaxLayer, ParallaxMode,
    ParallaxSection, SiteConfig, UnknownSection,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone)]
struct FakeLayer {
    top: Rc<Cell<f64>>,
    height: f64,
    applied: Rc<RefCell<Vec<f64>>>,
}

impl FakeLayer {
    fn new(top: f64, height: f64) -> Self {
        Self {
            top: Rc::new(Cell::new(top)),
            height,
            applied: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl ParallaxLayer for FakeLayer {
    fn viewport_rect(&self) -> (f64, f64) {
        (self.top.get(), self.height)
    }

    fn translate_y(&self, px: f64) {
        self.applied.borrow_mut().push(px);
    }
}

fn desktop() -> Capabilities {
    Capabilities {
        viewport_width: 1440.0,
        coarse_pointer: false,
        hover_none: false,
        reduced_motion: false,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn reduced_motion_disables_everywhere() {
    let config = SiteConfig::default();
    let caps = Capabilities {
        viewport_width: 375.0,
        coarse_pointer: true,
        hover_none: true,
        reduced_motion: true,
    };
    assert_eq!(ParallaxMode::detect(&caps, &config), ParallaxMode::Disabled);
}

#[test]
fn viewports_narrower_than_769_activate() {
    let config = SiteConfig::default();
    for width in [320.0, 768.0, 768.5, 768.99] {
        let caps = Capabilities {
            viewport_width: width,
            ..desktop()
        };
        assert_eq!(ParallaxMode::detect(&caps, &config), ParallaxMode::Active, "width={width}");
    }
    for width in [769.0, 1024.0] {
        let caps = Capabilities {
            viewport_width: width,
            ..desktop()
        };
        assert_eq!(ParallaxMode::detect(&caps, &config), ParallaxMode::Inactive, "width={width}");
    }
}

#[test]
fn touch_signals_activate_on_wide_viewports() {
    let config = SiteConfig::default();
    let coarse = Capabilities {
        coarse_pointer: true,
        ..desktop()
    };
    let no_hover = Capabilities {
        hover_none: true,
        ..desktop()
    };
    assert!(ParallaxMode::detect(&coarse, &config).is_active());
    assert!(ParallaxMode::detect(&no_hover, &config).is_active());
    assert!(!ParallaxMode::detect(&desktop(), &config).is_active());
}

#[test]
fn sections_parse_from_ids() {
    for section in ParallaxSection::ALL {
        assert_eq!(section.id().parse::<ParallaxSection>(), Ok(section));
        assert!(section.image_url().ends_with(".jpg"));
    }
    assert_eq!(
        "pricing".parse::<ParallaxSection>(),
        Err(UnknownSection("pricing".to_string()))
    );
    assert!("Hero".parse::<ParallaxSection>().is_err());

    assert_eq!(ParallaxSection::lookup("services"), Some(ParallaxSection::Services));
    assert_eq!(ParallaxSection::lookup("pricing"), None);
    assert_eq!(ParallaxSection::lookup(""), None);
}

#[test]
fn only_below_the_fold_sections_pre_offset() {
    assert!(!ParallaxSection::Hero.has_pre_offset());
    assert!(ParallaxSection::About.has_pre_offset());
    assert!(ParallaxSection::Contact.has_pre_offset());
}

#[test]
fn offset_scales_top_and_adds_pre_offset() {
    let config = SiteConfig::default();
    assert!(approx(parallax_offset(100.0, 600.0, false, &config), 20.0));
    assert!(approx(parallax_offset(100.0, 600.0, true, &config), 20.0 - 90.0));
    assert!(approx(parallax_offset(-500.0, 400.0, true, &config), -100.0 - 60.0));
    assert!(approx(parallax_offset(0.0, 400.0, false, &config), 0.0));
}

#[test]
fn unknown_ids_never_get_a_background_or_render() {
    let mut parallax = Parallax::new(SiteConfig::default());
    let hero = FakeLayer::new(0.0, 800.0);
    let stray = FakeLayer::new(100.0, 300.0);
    let built = RefCell::new(Vec::new());

    let attached = parallax.attach("hero", |kind| {
        built.borrow_mut().push(kind);
        Some(hero.clone())
    });
    assert_eq!(attached, Some(ParallaxSection::Hero));

    let attached = parallax.attach("newsletter", |kind| {
        built.borrow_mut().push(kind);
        Some(stray.clone())
    });
    assert_eq!(attached, None);
    // The layer builder assigns the background; it never ran for the stray id.
    assert_eq!(*built.borrow(), vec![ParallaxSection::Hero]);
    assert_eq!(parallax.len(), 1);

    assert_eq!(parallax.render(), 1);
    assert_eq!(hero.applied.borrow().len(), 1);
    assert!(stray.applied.borrow().is_empty());
}

#[test]
fn failed_layer_build_leaves_section_out() {
    let mut parallax: Parallax<FakeLayer> = Parallax::new(SiteConfig::default());
    assert_eq!(parallax.attach("about", |_| None), None);
    assert!(parallax.is_empty());
    assert_eq!(parallax.render(), 0);
}

#[test]
fn render_updates_every_layer_unconditionally() {
    let mut parallax = Parallax::new(SiteConfig::default());
    let hero = FakeLayer::new(-200.0, 800.0);
    // Far below the viewport; still recomputed.
    let contact = FakeLayer::new(3000.0, 500.0);
    parallax.attach("hero", |_| Some(hero.clone())).unwrap();
    parallax.attach("contact", |_| Some(contact.clone())).unwrap();

    assert_eq!(parallax.render(), 2);
    assert!(approx(hero.applied.borrow()[0], -40.0));
    assert!(approx(contact.applied.borrow()[0], 600.0 - 75.0));

    hero.top.set(-300.0);
    parallax.render();
    assert!(approx(hero.applied.borrow()[1], -60.0));
}

#[test]
fn frame_gate_schedules_once_until_frame_runs() {
    let mut gate = FrameGate::default();
    assert!(gate.request());
    assert!(!gate.request());
    assert!(!gate.request());

    gate.begin_frame();
    assert!(gate.request());
    assert!(!gate.request());
}

#[test]
fn scroll_burst_renders_once_per_frame() {
    let mut parallax = Parallax::new(SiteConfig::default());
    let about = FakeLayer::new(400.0, 600.0);
    parallax.attach("about", |_| Some(about.clone())).unwrap();

    // Stand-in for the browser: queued frame callbacks run on flush.
    let mut gate = FrameGate::default();
    let mut queued_frames = 0;
    for y in 0..25 {
        about.top.set(400.0 - y as f64 * 8.0);
        if gate.request() {
            queued_frames += 1;
        }
    }
    assert_eq!(queued_frames, 1);

    for _ in 0..queued_frames {
        gate.begin_frame();
        parallax.render();
    }
    assert_eq!(about.applied.borrow().len(), 1);
    // Rendered with the latest geometry.
    assert!(approx(about.applied.borrow()[0], (400.0 - 24.0 * 8.0) * 0.2 - 90.0));

    assert!(gate.request());
}
