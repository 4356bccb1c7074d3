use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{Color, RenderFrame};

/// Capability of being rendered into a frame.
///
/// A section frame treats its body as opaque: it never inspects or
/// transforms the content, it only delegates rendering.
pub trait SectionBody {
    fn render(&self, viewport: Viewport) -> ChartResult<RenderFrame>;
}

/// One-way entrance-animation latch.
///
/// The reveal fires at most once per mount: the first viewport entry
/// transitions the latch and every later entry or exit is ignored. A fresh
/// mount gets a fresh latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only on the transition that reveals the section.
    pub fn on_enter_viewport(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Leaving the viewport never resets the latch.
    pub fn on_exit_viewport(&mut self) {}

    #[must_use]
    pub fn is_revealed(self) -> bool {
        self.revealed
    }
}

/// Timing of the entrance transition, applied by the host when the latch
/// fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealTransition {
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub offset_y_px: f64,
}

impl Default for RevealTransition {
    fn default() -> Self {
        Self {
            duration_secs: 0.6,
            delay_secs: 0.0,
            offset_y_px: 20.0,
        }
    }
}

/// Layout wrapper for one report topic: heading chrome plus an opaque
/// renderable body revealed once on first viewport entry.
pub struct SectionFrame {
    anchor: String,
    title: String,
    subtitle: Option<String>,
    icon: Option<String>,
    accent: Color,
    body: Box<dyn SectionBody>,
    latch: RevealLatch,
    transition: RevealTransition,
}

impl SectionFrame {
    #[must_use]
    pub fn new(
        anchor: impl Into<String>,
        title: impl Into<String>,
        accent: Color,
        body: Box<dyn SectionBody>,
    ) -> Self {
        Self {
            anchor: anchor.into(),
            title: title.into(),
            subtitle: None,
            icon: None,
            accent,
            body,
            latch: RevealLatch::new(),
            transition: RevealTransition::default(),
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    #[must_use]
    pub fn accent(&self) -> Color {
        self.accent
    }

    #[must_use]
    pub fn transition(&self) -> RevealTransition {
        self.transition
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.latch.is_revealed()
    }

    /// Forwards a viewport entry to the latch; `true` means the host should
    /// play the entrance transition now.
    pub fn on_enter_viewport(&mut self) -> bool {
        self.latch.on_enter_viewport()
    }

    pub fn on_exit_viewport(&mut self) {
        self.latch.on_exit_viewport();
    }

    /// Renders the body without inspecting it.
    pub fn render_body(&self, viewport: Viewport) -> ChartResult<RenderFrame> {
        self.body.render(viewport)
    }
}

impl std::fmt::Debug for SectionFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionFrame")
            .field("anchor", &self.anchor)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("icon", &self.icon)
            .field("revealed", &self.latch.is_revealed())
            .finish_non_exhaustive()
    }
}
