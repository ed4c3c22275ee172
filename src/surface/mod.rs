//! Freehand drawing surface.
//!
//! The input model (pointer/touch handling, coordinate mapping, the
//! "has drawn" flag) lives here and talks to the bitmap only through
//! [`Painter`]. Strokes are plain point-to-point segments; nothing is
//! retained beyond the pixels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod canvas;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// On-screen box of the canvas, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Internal bitmap resolution of the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitmapSize {
    pub width: u32,
    pub height: u32,
}

/// Stroke color and width. Caps and joins are always round.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { color: "white".to_string(), width: 4.0 }
    }
}

/// Translate a client-space position into bitmap space. Each axis is scaled
/// independently; a collapsed axis maps 1:1.
pub fn map_to_bitmap(client: Point, rect: DisplayRect, bitmap: BitmapSize) -> Point {
    let scale = |bitmap_len: u32, display_len: f64| {
        if display_len > 0.0 { f64::from(bitmap_len) / display_len } else { 1.0 }
    };
    Point {
        x: (client.x - rect.left) * scale(bitmap.width, rect.width),
        y: (client.y - rect.top) * scale(bitmap.height, rect.height),
    }
}

/// Minimal 2D drawing backend.
pub trait Painter {
    fn bitmap_size(&self) -> BitmapSize;
    fn display_rect(&self) -> DisplayRect;
    /// Current display size of the containing element, if attached.
    fn container_size(&self) -> Option<(f64, f64)>;
    /// Resize the bitmap. Implementations may wipe content and style.
    fn set_bitmap_size(&mut self, size: BitmapSize);
    fn apply_style(&mut self, style: &StrokeStyle);
    fn begin_path(&mut self, at: Point);
    /// Extend the open path with a straight segment and paint it.
    fn line_to(&mut self, to: Point);
    fn clear(&mut self);
}

pub struct DrawingSurface<P: Painter> {
    painter: P,
    style: StrokeStyle,
    show_controls: bool,
    drawing: bool,
    has_drawing: bool,
}

impl<P: Painter> DrawingSurface<P> {
    /// Wrap a painter and size its bitmap to the container.
    pub fn new(painter: P, style: StrokeStyle, show_controls: bool) -> Self {
        let mut surface = Self { painter, style, show_controls, drawing: false, has_drawing: false };
        surface.sync_size();
        surface
    }

    /// Match the bitmap to the container's display size and restore the
    /// stroke style the resize dropped. Returns `false` when detached.
    pub fn sync_size(&mut self) -> bool {
        let Some((width, height)) = self.painter.container_size() else {
            return false;
        };
        let size = BitmapSize {
            width: width.max(0.0).round() as u32,
            height: height.max(0.0).round() as u32,
        };
        self.painter.set_bitmap_size(size);
        self.painter.apply_style(&self.style);
        log::debug!("surface resized to {}x{}", size.width, size.height);
        true
    }

    fn to_bitmap(&self, client: Point) -> Point {
        map_to_bitmap(client, self.painter.display_rect(), self.painter.bitmap_size())
    }

    pub fn pointer_down(&mut self, client: Point) {
        self.drawing = true;
        let at = self.to_bitmap(client);
        self.painter.begin_path(at);
    }

    pub fn pointer_move(&mut self, client: Point) {
        if !self.drawing {
            return;
        }
        let to = self.to_bitmap(client);
        self.painter.line_to(to);
        self.has_drawing = true;
    }

    pub fn pointer_up(&mut self) {
        self.drawing = false;
    }

    pub fn pointer_leave(&mut self) {
        self.drawing = false;
    }

    /// Single-touch only; extra touches are ignored.
    pub fn touch_start(&mut self, touches: &[Point]) {
        if let Some(&first) = touches.first() {
            self.pointer_down(first);
        }
    }

    pub fn touch_move(&mut self, touches: &[Point]) {
        if let Some(&first) = touches.first() {
            self.pointer_move(first);
        }
    }

    pub fn touch_end(&mut self) {
        self.drawing = false;
    }

    pub fn clear(&mut self) {
        self.painter.clear();
        self.has_drawing = false;
    }

    /// Return to the freshly mounted state: blank bitmap, no active stroke.
    pub fn reset(&mut self) {
        self.clear();
        self.drawing = false;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn has_drawing(&self) -> bool {
        self.has_drawing
    }

    pub fn clear_control_visible(&self) -> bool {
        self.show_controls && self.has_drawing
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }
}
