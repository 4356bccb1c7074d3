use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::section::SectionFrame;

/// Scroll offset above which the navigation bar compacts and the
/// back-to-top button appears.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// One in-page navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub anchor: String,
    pub label: String,
}

impl NavLink {
    #[must_use]
    pub fn new(anchor: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            label: label.into(),
        }
    }
}

/// Resolved in-page navigation: the host scrolls smoothly to the anchor and
/// pushes the hash onto the history without jumping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTarget {
    pub anchor: String,
    pub hash: String,
}

/// Chrome state for the fixed navigation bar and back-to-top button.
///
/// Two independent flags with explicit lifecycle: created on mount, dropped
/// on teardown, never shared between components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the compact-bar flag from the current scroll offset.
    pub fn on_scroll(&mut self, offset_px: f64) {
        self.scrolled = offset_px > SCROLL_THRESHOLD_PX;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    #[must_use]
    pub fn is_scrolled(self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn is_menu_open(self) -> bool {
        self.menu_open
    }

    /// The back-to-top button shares the compact-bar flag.
    #[must_use]
    pub fn back_to_top_visible(self) -> bool {
        self.scrolled
    }
}

/// Host-delivered page events, all processed on the render thread within a
/// single paint frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scrolled { offset_px: f64 },
    MenuToggled,
    NavClicked { anchor: String },
    BackToTopClicked,
    SectionEnteredViewport { anchor: String },
    SectionLeftViewport { anchor: String },
}

/// Effects the host applies after an event; `None` for pure state updates.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEffect {
    ScrollTo(NavTarget),
    ScrollToTop,
    PlayReveal { anchor: String },
}

/// The whole report page: nav chrome plus the anchored sections in
/// presentation order.
///
/// Sections live in an insertion-ordered registry so anchors resolve by id
/// while the document keeps its narrative order.
#[derive(Debug, Default)]
pub struct ReportPage {
    nav: NavState,
    links: Vec<NavLink>,
    sections: IndexMap<String, SectionFrame>,
}

impl ReportPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_links(mut self, links: Vec<NavLink>) -> Self {
        self.links = links;
        self
    }

    #[must_use]
    pub fn with_section(mut self, section: SectionFrame) -> Self {
        self.sections.insert(section.anchor().to_owned(), section);
        self
    }

    #[must_use]
    pub fn nav(&self) -> NavState {
        self.nav
    }

    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    #[must_use]
    pub fn section(&self, anchor: &str) -> Option<&SectionFrame> {
        self.sections.get(anchor)
    }

    /// Anchors in presentation order.
    pub fn anchors(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Resolves an in-page navigation click.
    ///
    /// A nav click always closes the mobile menu. A missing anchor is a
    /// silent no-op: no error surfaces, nothing scrolls.
    pub fn scroll_to_anchor(&mut self, anchor: &str) -> Option<NavTarget> {
        self.nav.close_menu();
        if !self.sections.contains_key(anchor) {
            debug!(anchor, "anchor not found, ignoring navigation");
            return None;
        }
        Some(NavTarget {
            anchor: anchor.to_owned(),
            hash: format!("#{anchor}"),
        })
    }

    /// Processes one host event and returns the effect to apply, if any.
    pub fn handle_event(&mut self, event: PageEvent) -> Option<PageEffect> {
        match event {
            PageEvent::Scrolled { offset_px } => {
                self.nav.on_scroll(offset_px);
                None
            }
            PageEvent::MenuToggled => {
                self.nav.toggle_menu();
                None
            }
            PageEvent::NavClicked { anchor } => {
                self.scroll_to_anchor(&anchor).map(PageEffect::ScrollTo)
            }
            PageEvent::BackToTopClicked => Some(PageEffect::ScrollToTop),
            PageEvent::SectionEnteredViewport { anchor } => {
                let section = self.sections.get_mut(&anchor)?;
                section.on_enter_viewport().then(|| PageEffect::PlayReveal { anchor })
            }
            PageEvent::SectionLeftViewport { anchor } => {
                if let Some(section) = self.sections.get_mut(&anchor) {
                    section.on_exit_viewport();
                }
                None
            }
        }
    }
}
