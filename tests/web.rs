// Browser tests (wasm-pack test --headless --chrome). Compiled only for wasm32.
#![cfg(target_arch = "wasm32")]

use kana_cards::surface::StrokeStyle;
use kana_cards::surface::canvas::{MountedSurface, SurfaceOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container(width: u32, height: u32) -> HtmlElement {
    let doc = web_sys::window().unwrap().document().unwrap();
    let el: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    el.set_attribute("style", &format!("position:relative;width:{width}px;height:{height}px"))
        .unwrap();
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn mount_sizes_canvas_to_container() {
    let parent = container(200, 120);
    let options = SurfaceOptions { style: StrokeStyle::default(), show_controls: true };
    let surface = MountedSurface::mount(&parent, options).unwrap();
    assert!(surface.is_interactive());
    let canvas: HtmlCanvasElement = surface
        .element()
        .query_selector("canvas")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(canvas.width(), 200);
    assert_eq!(canvas.height(), 120);
    assert!(!surface.has_drawing());
}

#[wasm_bindgen_test]
fn dropping_surface_removes_it() {
    let parent = container(50, 50);
    let surface = MountedSurface::mount(&parent, SurfaceOptions::default()).unwrap();
    assert_eq!(parent.child_element_count(), 1);
    drop(surface);
    assert_eq!(parent.child_element_count(), 0);
}
