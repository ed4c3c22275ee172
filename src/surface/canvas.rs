//! Browser binding for [`DrawingSurface`]: a `<canvas>` painter plus the DOM
//! listeners and resize subscription that feed it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Element, Event, EventTarget, HtmlCanvasElement, HtmlElement,
    MouseEvent, ResizeObserver, TouchEvent,
};

use super::{BitmapSize, DisplayRect, DrawingSurface, Painter, Point, StrokeStyle};
use crate::error::{FlashError, Result};

pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    /// `None` when the canvas cannot hand out a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl Painter for CanvasPainter {
    fn bitmap_size(&self) -> BitmapSize {
        BitmapSize { width: self.canvas.width(), height: self.canvas.height() }
    }

    fn display_rect(&self) -> DisplayRect {
        let r = self.canvas.get_bounding_client_rect();
        DisplayRect { left: r.left(), top: r.top(), width: r.width(), height: r.height() }
    }

    fn container_size(&self) -> Option<(f64, f64)> {
        let parent = self.canvas.parent_element()?;
        let r = parent.get_bounding_client_rect();
        Some((r.width(), r.height()))
    }

    fn set_bitmap_size(&mut self, size: BitmapSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn apply_style(&mut self, style: &StrokeStyle) {
        self.ctx.set_stroke_style_str(&style.color);
        self.ctx.set_line_width(style.width);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }

    fn begin_path(&mut self, at: Point) {
        self.ctx.begin_path();
        self.ctx.move_to(at.x, at.y);
    }

    fn line_to(&mut self, to: Point) {
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn clear(&mut self) {
        let size = self.bitmap_size();
        self.ctx.clear_rect(0.0, 0.0, f64::from(size.width), f64::from(size.height));
    }
}

#[derive(Clone, Debug, Default)]
pub struct SurfaceOptions {
    pub style: StrokeStyle,
    /// Show a small "Clear" button once something has been drawn.
    pub show_controls: bool,
}

type SharedSurface = Rc<RefCell<DrawingSurface<CanvasPainter>>>;

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// A drawing surface attached to the page. Dropping it unsubscribes every
/// listener, disconnects the resize observer and removes its elements.
pub struct MountedSurface {
    wrapper: HtmlElement,
    surface: Option<SharedSurface>,
    listeners: Vec<Listener>,
    observer: Option<(ResizeObserver, Closure<dyn FnMut()>)>,
}

impl MountedSurface {
    pub fn mount(parent: &Element, options: SurfaceOptions) -> Result<Self> {
        let doc = parent.owner_document().ok_or(FlashError::NoDocument)?;
        let wrapper: HtmlElement = doc.create_element("div")?.dyn_into().map_err(JsValue::from)?;
        wrapper.set_class_name("kc-surface");
        wrapper.set_attribute("style", "position:absolute; inset:0;")?;
        let canvas: HtmlCanvasElement =
            doc.create_element("canvas")?.dyn_into().map_err(JsValue::from)?;
        canvas.set_class_name("kc-surface-canvas");
        canvas.set_attribute("style", "display:block; width:100%; height:100%; touch-action:none;")?;
        wrapper.append_child(&canvas)?;

        let clear_button: Option<HtmlElement> = if options.show_controls {
            let b: HtmlElement = doc.create_element("button")?.dyn_into().map_err(JsValue::from)?;
            b.set_class_name("kc-surface-clear");
            b.set_text_content(Some("Clear"));
            b.style().set_property("display", "none")?;
            wrapper.append_child(&b)?;
            Some(b)
        } else {
            None
        };
        parent.append_child(&wrapper)?;

        let mut mounted = Self { wrapper, surface: None, listeners: Vec::new(), observer: None };

        let Some(painter) = CanvasPainter::new(canvas.clone()) else {
            log::warn!("canvas has no 2d context; drawing disabled");
            return Ok(mounted);
        };
        let surface: SharedSurface = Rc::new(RefCell::new(DrawingSurface::new(
            painter,
            options.style,
            options.show_controls,
        )));

        let target: &EventTarget = canvas.as_ref();
        mounted.listen(target, "mousedown", {
            let surface = surface.clone();
            move |evt: Event| {
                if let Some(m) = evt.dyn_ref::<MouseEvent>() {
                    surface.borrow_mut().pointer_down(client_point(m));
                }
            }
        })?;
        mounted.listen(target, "mousemove", {
            let surface = surface.clone();
            let button = clear_button.clone();
            move |evt: Event| {
                if let Some(m) = evt.dyn_ref::<MouseEvent>() {
                    let mut s = surface.borrow_mut();
                    s.pointer_move(client_point(m));
                    sync_clear_button(button.as_ref(), &s);
                }
            }
        })?;
        mounted.listen(target, "mouseup", {
            let surface = surface.clone();
            move |_: Event| surface.borrow_mut().pointer_up()
        })?;
        mounted.listen(target, "mouseleave", {
            let surface = surface.clone();
            move |_: Event| surface.borrow_mut().pointer_leave()
        })?;
        mounted.listen(target, "touchstart", {
            let surface = surface.clone();
            move |evt: Event| {
                evt.prevent_default();
                if let Some(t) = evt.dyn_ref::<TouchEvent>() {
                    surface.borrow_mut().touch_start(&touch_points(t));
                }
            }
        })?;
        mounted.listen(target, "touchmove", {
            let surface = surface.clone();
            let button = clear_button.clone();
            move |evt: Event| {
                evt.prevent_default();
                if let Some(t) = evt.dyn_ref::<TouchEvent>() {
                    let mut s = surface.borrow_mut();
                    s.touch_move(&touch_points(t));
                    sync_clear_button(button.as_ref(), &s);
                }
            }
        })?;
        mounted.listen(target, "touchend", {
            let surface = surface.clone();
            move |_: Event| surface.borrow_mut().touch_end()
        })?;
        if let Some(button) = clear_button.clone() {
            let target: EventTarget = button.clone().into();
            mounted.listen(&target, "click", {
                let surface = surface.clone();
                move |evt: Event| {
                    evt.stop_propagation();
                    let mut s = surface.borrow_mut();
                    s.clear();
                    sync_clear_button(Some(&button), &s);
                }
            })?;
        }

        let on_resize = Closure::wrap(Box::new({
            let surface = surface.clone();
            move || {
                surface.borrow_mut().sync_size();
            }
        }) as Box<dyn FnMut()>);
        let observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;
        observer.observe(&mounted.wrapper);
        mounted.observer = Some((observer, on_resize));
        mounted.surface = Some(surface);
        Ok(mounted)
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<()> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener { target: target.clone(), kind, callback });
        Ok(())
    }

    /// Wipe strokes and end any active drag, as if freshly mounted.
    pub fn reset(&self) {
        if let Some(surface) = &self.surface {
            surface.borrow_mut().reset();
        }
        if let Some(button) = self.wrapper.query_selector(".kc-surface-clear").ok().flatten() {
            if let Some(el) = button.dyn_ref::<HtmlElement>() {
                el.style().set_property("display", "none").ok();
            }
        }
    }

    pub fn has_drawing(&self) -> bool {
        self.surface.as_ref().is_some_and(|s| s.borrow().has_drawing())
    }

    pub fn is_interactive(&self) -> bool {
        self.surface.is_some()
    }

    pub fn element(&self) -> &HtmlElement {
        &self.wrapper
    }
}

impl Drop for MountedSurface {
    fn drop(&mut self) {
        if let Some((observer, _)) = &self.observer {
            observer.disconnect();
        }
        for l in &self.listeners {
            l.target
                .remove_event_listener_with_callback(l.kind, l.callback.as_ref().unchecked_ref())
                .ok();
        }
        self.wrapper.remove();
    }
}

fn client_point(evt: &MouseEvent) -> Point {
    Point { x: f64::from(evt.client_x()), y: f64::from(evt.client_y()) }
}

fn touch_points(evt: &TouchEvent) -> Vec<Point> {
    let list = evt.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Point { x: f64::from(t.client_x()), y: f64::from(t.client_y()) })
        .collect()
}

fn sync_clear_button(button: Option<&HtmlElement>, surface: &DrawingSurface<CanvasPainter>) {
    if let Some(b) = button {
        let display = if surface.clear_control_visible() { "block" } else { "none" };
        b.style().set_property("display", display).ok();
    }
}
