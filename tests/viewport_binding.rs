#![cfg(target_arch = "wasm32")]

use mav_bracket_viewport::config::ViewportConfig;
use mav_bracket_viewport::controller::ViewportBinding;
use mav_bracket_viewport::globals::{RESET_VIEW, ZOOM_IN, ZOOM_OUT};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, PointerEvent, PointerEventInit, SvgElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

const SVG_NS: &str = "http://www.w3.org/2000/svg";

struct Fixture {
    window: Window,
    document: Document,
    stage: Element,
    svg: Element,
    config: ViewportConfig,
}

impl Fixture {
    fn new(tag: &str, view_box: Option<&str>) -> Self {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let stage = document.create_element("div").unwrap();
        stage.set_id(&format!("stage-{tag}"));
        let svg = document.create_element_ns(Some(SVG_NS), "svg").unwrap();
        svg.set_id(&format!("svg-{tag}"));
        if let Some(vb) = view_box {
            svg.set_attribute("viewBox", vb).unwrap();
        }
        stage.append_child(&svg).unwrap();
        document.body().unwrap().append_child(&stage).unwrap();
        let config = ViewportConfig {
            svg_id: format!("svg-{tag}"),
            stage_id: format!("stage-{tag}"),
            expose_globals: false,
            ..ViewportConfig::default()
        };
        Self {
            window,
            document,
            stage,
            svg,
            config,
        }
    }

    fn attach(&self) -> ViewportBinding {
        ViewportBinding::attach(&self.window, &self.document, self.config.clone())
            .unwrap()
            .expect("diagram present")
    }

    fn pointer(&self, kind: &str, x: i32, y: i32) {
        let init = PointerEventInit::new();
        init.set_pointer_id(1);
        init.set_client_x(x);
        init.set_client_y(y);
        let ev = PointerEvent::new_with_event_init_dict(kind, &init).unwrap();
        self.stage.dispatch_event(&ev).unwrap();
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.stage.remove();
    }
}

fn global(window: &Window, name: &str) -> JsValue {
    js_sys::Reflect::get(window, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn missing_diagram_attaches_nothing() {
    let fx = Fixture::new("missing", Some("0 0 500 400"));
    let config = ViewportConfig {
        svg_id: "no-such-bracket".to_string(),
        expose_globals: true,
        ..fx.config.clone()
    };
    let binding = ViewportBinding::attach(&fx.window, &fx.document, config).unwrap();
    assert!(binding.is_none());
    assert!(global(&fx.window, ZOOM_IN).is_undefined());
    fx.pointer("pointerdown", 0, 0);
    fx.pointer("pointermove", 40, 40);
    let style = fx.svg.unchecked_ref::<SvgElement>().style();
    assert_eq!(style.get_property_value("transform").unwrap(), "");
}

#[wasm_bindgen_test]
fn non_svg_diagram_is_ignored() {
    let fx = Fixture::new("div", None);
    let div = fx.document.create_element("div").unwrap();
    div.set_id("div-bracket");
    fx.stage.append_child(&div).unwrap();
    let config = ViewportConfig {
        svg_id: "div-bracket".to_string(),
        ..fx.config.clone()
    };
    assert!(
        ViewportBinding::attach(&fx.window, &fx.document, config)
            .unwrap()
            .is_none()
    );
}

#[wasm_bindgen_test]
fn attach_fits_and_writes_style() {
    let fx = Fixture::new("fit", Some("0 0 500 400"));
    let binding = fx.attach();
    let t = binding.controller().transform();
    assert_eq!((t.tx, t.ty), (0.0, 0.0));
    let style = fx.svg.unchecked_ref::<SvgElement>().style();
    assert!(style.get_property_value("transform").unwrap().contains("scale("));
    assert!(!style.get_property_value("transform-origin").unwrap().is_empty());
}

#[wasm_bindgen_test]
fn drag_translates_by_pointer_delta() {
    let fx = Fixture::new("drag", Some("0 0 500 400"));
    let binding = fx.attach();
    let c = binding.controller();
    let scale = c.transform().scale;

    fx.pointer("pointerdown", 100, 100);
    assert!(c.is_panning());
    fx.pointer("pointermove", 110, 104);
    fx.pointer("pointermove", 120, 115);
    fx.pointer("pointerup", 120, 115);
    assert!(!c.is_panning());

    let t = c.transform();
    assert_eq!((t.tx, t.ty), (20.0, 15.0));
    assert_eq!(t.scale, scale);

    fx.pointer("pointermove", 300, 300);
    assert_eq!(c.transform().tx, 20.0);
}

#[wasm_bindgen_test]
fn pointercancel_ends_pan() {
    let fx = Fixture::new("cancel", Some("0 0 500 400"));
    let binding = fx.attach();
    fx.pointer("pointerdown", 5, 5);
    fx.pointer("pointercancel", 5, 5);
    assert!(!binding.controller().is_panning());
}

#[wasm_bindgen_test]
fn zoom_and_reset() {
    let fx = Fixture::new("zoom", Some("0 0 500 400"));
    let binding = fx.attach();
    let c = binding.controller();
    let fitted = c.transform().scale;

    c.zoom_in();
    c.zoom_in();
    assert!((c.transform().scale - fitted * 1.44).abs() < 1e-9);
    c.zoom_out();
    c.zoom_out();
    assert!((c.transform().scale - fitted).abs() < 1e-9);

    fx.pointer("pointerdown", 0, 0);
    fx.pointer("pointermove", 30, -12);
    fx.pointer("pointerup", 30, -12);
    c.zoom_in();
    c.reset_view();
    let t = c.transform();
    assert_eq!((t.tx, t.ty), (0.0, 0.0));
    assert!((t.scale - fitted).abs() < 1e-9);
}

#[wasm_bindgen_test]
fn resize_refits() {
    let fx = Fixture::new("resize", Some("0 0 500 400"));
    let binding = fx.attach();
    let c = binding.controller();
    fx.pointer("pointerdown", 0, 0);
    fx.pointer("pointermove", 50, 50);
    fx.pointer("pointerup", 50, 50);
    fx.window
        .dispatch_event(&web_sys::Event::new("resize").unwrap())
        .unwrap();
    let t = c.transform();
    assert_eq!((t.tx, t.ty), (0.0, 0.0));
}

#[wasm_bindgen_test]
fn globals_installed_and_removed() {
    let fx = Fixture::new("globals", Some("0 0 500 400"));
    let config = ViewportConfig {
        expose_globals: true,
        ..fx.config.clone()
    };
    let binding = ViewportBinding::attach(&fx.window, &fx.document, config)
        .unwrap()
        .unwrap();
    let c = binding.controller();
    let before = c.transform().scale;

    let zoom_in: js_sys::Function = global(&fx.window, ZOOM_IN).dyn_into().unwrap();
    zoom_in.call0(&JsValue::NULL).unwrap();
    assert!((c.transform().scale - before * 1.2).abs() < 1e-9);
    assert!(global(&fx.window, ZOOM_OUT).is_function());
    assert!(global(&fx.window, RESET_VIEW).is_function());

    drop(binding);
    assert!(global(&fx.window, ZOOM_IN).is_undefined());
    assert!(global(&fx.window, RESET_VIEW).is_undefined());
}

#[wasm_bindgen_test]
fn dropped_binding_stops_listening() {
    let fx = Fixture::new("drop", Some("0 0 500 400"));
    let binding = fx.attach();
    let c = binding.controller();
    drop(binding);
    fx.pointer("pointerdown", 0, 0);
    assert!(!c.is_panning());
}

#[wasm_bindgen_test]
fn reset_without_view_box_clears_offset() {
    let fx = Fixture::new("noviewbox", None);
    let binding = fx.attach();
    let c = binding.controller();
    let scale = c.transform().scale;
    fx.pointer("pointerdown", 0, 0);
    fx.pointer("pointermove", 30, -12);
    fx.pointer("pointerup", 30, -12);
    assert_eq!(c.transform().tx, 30.0);

    c.reset_view();
    let t = c.transform();
    assert_eq!((t.tx, t.ty), (0.0, 0.0));
    assert_eq!(t.scale, scale);
    let style = fx.svg.unchecked_ref::<SvgElement>().style();
    assert!(style.get_property_value("transform").unwrap().contains("scale("));
}

#[wasm_bindgen_test]
fn drag_keeps_fractional_coordinates() {
    let fx = Fixture::new("fraction", Some("0 0 500 400"));
    let binding = fx.attach();
    let c = binding.controller();
    let fractional = |kind: &str, x: f64, y: f64| {
        let init = PointerEventInit::new();
        init.set_pointer_id(1);
        js_sys::Reflect::set(&init, &JsValue::from_str("clientX"), &JsValue::from_f64(x)).unwrap();
        js_sys::Reflect::set(&init, &JsValue::from_str("clientY"), &JsValue::from_f64(y)).unwrap();
        let ev = PointerEvent::new_with_event_init_dict(kind, &init).unwrap();
        fx.stage.dispatch_event(&ev).unwrap();
    };
    fractional("pointerdown", 10.25, 20.0);
    fractional("pointermove", 20.75, 24.5);
    fractional("pointerup", 20.75, 24.5);
    let t = c.transform();
    assert!((t.tx - 10.5).abs() < 1e-9);
    assert!((t.ty - 4.5).abs() < 1e-9);
}
