use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ArcPrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub arcs: Vec<ArcPrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            arcs: Vec::new(),
            polygons: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for arc in &self.arcs {
            arc.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    /// Shifts every primitive by `(dx, dy)`, used when composing charts
    /// side by side inside a larger frame.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for line in &mut self.lines {
            line.x1 += dx;
            line.y1 += dy;
            line.x2 += dx;
            line.y2 += dy;
        }
        for rect in &mut self.rects {
            rect.x += dx;
            rect.y += dy;
        }
        for arc in &mut self.arcs {
            arc.center_x += dx;
            arc.center_y += dy;
        }
        for polygon in &mut self.polygons {
            for (x, y) in &mut polygon.points {
                *x += dx;
                *y += dy;
            }
        }
        for text in &mut self.texts {
            text.x += dx;
            text.y += dy;
        }
    }

    /// Appends all primitives of `other`, keeping this frame's viewport.
    pub fn extend_from(&mut self, other: RenderFrame) {
        self.lines.extend(other.lines);
        self.rects.extend(other.rects);
        self.arcs.extend(other.arcs);
        self.polygons.extend(other.polygons);
        self.texts.extend(other.texts);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.arcs.is_empty()
            && self.polygons.is_empty()
            && self.texts.is_empty()
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.lines.len()
            + self.rects.len()
            + self.arcs.len()
            + self.polygons.len()
            + self.texts.len()
    }
}
