use serde::{Deserialize, Serialize};

use crate::api::TooltipContent;

/// Public hover state exposed to host applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub tooltip: Option<TooltipContent>,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
            tooltip: None,
        }
    }
}

/// Pointer/hover state for one chart surface.
///
/// The state is component-local: each chart owns its own instance, created on
/// mount and dropped on teardown. Pointer events only update flags; they
/// never mutate chart data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    cursor_x: f64,
    cursor_y: f64,
    hover: HoverState,
}

impl InteractionState {
    #[must_use]
    pub fn cursor(&self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.hover.visible = true;
        self.hover.x = x;
        self.hover.y = y;
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover.visible = false;
        self.hover.tooltip = None;
    }

    /// Installs the tooltip resolved for the current pointer position.
    ///
    /// `None` clears the tooltip without hiding the cursor marker, matching
    /// hover over a dead zone of the chart.
    pub fn set_tooltip(&mut self, tooltip: Option<TooltipContent>) {
        self.hover.tooltip = tooltip;
    }
}
