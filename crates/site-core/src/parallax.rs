//! Manual parallax for mobile browsers.
//!
//! Mobile browsers ignore `background-attachment: fixed`, so each section
//! gets a dedicated background layer whose vertical translation is
//! recomputed from the section's viewport position on scroll and resize.
//! Updates are coalesced to at most one render per animation frame through
//! [`FrameGate`].

use crate::config::SiteConfig;
use std::str::FromStr;
use thiserror::Error;

/// Platform signals that decide whether parallax runs at all.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Capabilities {
    pub viewport_width: f64,
    pub coarse_pointer: bool,
    pub hover_none: bool,
    pub reduced_motion: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParallaxMode {
    /// The user asked for reduced motion.
    Disabled,
    /// Desktop-class viewport; CSS handles the effect.
    Inactive,
    Active,
}

impl ParallaxMode {
    pub fn detect(caps: &Capabilities, config: &SiteConfig) -> Self {
        if caps.reduced_motion {
            return ParallaxMode::Disabled;
        }
        let narrow = caps.viewport_width < config.mobile_breakpoint;
        if narrow || caps.coarse_pointer || caps.hover_none {
            ParallaxMode::Active
        } else {
            ParallaxMode::Inactive
        }
    }

    #[inline]
    pub fn is_active(self) -> bool {
        self == ParallaxMode::Active
    }
}

/// Page sections that carry a parallax background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParallaxSection {
    Hero,
    About,
    Services,
    Portfolio,
    Contact,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown parallax section `{0}`")]
pub struct UnknownSection(pub String);

impl ParallaxSection {
    pub const ALL: [ParallaxSection; 5] = [
        ParallaxSection::Hero,
        ParallaxSection::About,
        ParallaxSection::Services,
        ParallaxSection::Portfolio,
        ParallaxSection::Contact,
    ];

    /// Recognized section for an element id; unknown ids are logged and
    /// yield `None`.
    pub fn lookup(id: &str) -> Option<ParallaxSection> {
        match id.parse() {
            Ok(section) => Some(section),
            Err(e) => {
                log::debug!("[parallax] skipping: {}", e);
                None
            }
        }
    }

    /// Element id used in the page markup.
    pub fn id(self) -> &'static str {
        match self {
            ParallaxSection::Hero => "hero",
            ParallaxSection::About => "about",
            ParallaxSection::Services => "services",
            ParallaxSection::Portfolio => "portfolio",
            ParallaxSection::Contact => "contact",
        }
    }

    pub fn image_url(self) -> &'static str {
        match self {
            ParallaxSection::Hero => "assets/images/hero-bg.jpg",
            ParallaxSection::About => "assets/images/about-bg.jpg",
            ParallaxSection::Services => "assets/images/services-bg.jpg",
            ParallaxSection::Portfolio => "assets/images/portfolio-bg.jpg",
            ParallaxSection::Contact => "assets/images/contact-bg.jpg",
        }
    }

    /// Below-the-fold sections start shifted up so no empty background shows
    /// on first paint.
    pub fn has_pre_offset(self) -> bool {
        !matches!(self, ParallaxSection::Hero)
    }
}

impl FromStr for ParallaxSection {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParallaxSection::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical translation for a background layer, in CSS pixels.
///
/// `top` is the section's top relative to the viewport; the result moves
/// the background at `parallax_speed` of the content's rate.
#[inline]
pub fn parallax_offset(top: f64, height: f64, pre_offset: bool, config: &SiteConfig) -> f64 {
    let base = if pre_offset {
        height * config.parallax_pre_offset_ratio
    } else {
        0.0
    };
    top * config.parallax_speed + base
}

/// Pending-update flag coalescing scroll/resize bursts into one frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Mark an update as wanted. Returns true when the caller must schedule
    /// an animation frame; false when one is already queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called as the queued frame starts rendering.
    pub fn begin_frame(&mut self) {
        self.pending = false;
    }
}

/// A section element and its background layer.
pub trait ParallaxLayer {
    /// Section `(top, height)`, top relative to the viewport. Read together
    /// so the platform measures layout once per layer per frame.
    fn viewport_rect(&self) -> (f64, f64);
    /// Apply a vertical translation to the background layer.
    fn translate_y(&self, px: f64);
}

pub struct Parallax<L: ParallaxLayer> {
    config: SiteConfig,
    layers: Vec<(ParallaxSection, L)>,
}

impl<L: ParallaxLayer> Parallax<L> {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            layers: Vec::new(),
        }
    }

    /// Attach the element with the given id. `build` creates its background
    /// layer and runs only for recognized sections; if it yields no layer the
    /// element is left out of rendering.
    pub fn attach(
        &mut self,
        id: &str,
        build: impl FnOnce(ParallaxSection) -> Option<L>,
    ) -> Option<ParallaxSection> {
        let section = ParallaxSection::lookup(id)?;
        let layer = build(section)?;
        self.layers.push((section, layer));
        Some(section)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Recompute every registered layer. Returns how many were updated.
    pub fn render(&self) -> usize {
        for (section, layer) in &self.layers {
            let (top, height) = layer.viewport_rect();
            let offset = parallax_offset(
                top,
                height,
                section.has_pre_offset(),
                &self.config,
            );
            layer.translate_y(offset);
        }
        self.layers.len()
    }
}
