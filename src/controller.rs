use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, PointerEvent, SvgsvgElement, Window};

use crate::config::ViewportConfig;
use crate::globals::WindowGlobals;
use crate::model::{Size, Transform};
use crate::state::Viewport;
use crate::util::{cerror, clog, cwarn};

/// Couples the pan/zoom state to the bracket `<svg>` and the window.
pub struct ViewportController {
    svg: SvgsvgElement,
    window: Window,
    config: ViewportConfig,
    viewport: RefCell<Viewport>,
}

impl ViewportController {
    pub fn new(svg: SvgsvgElement, window: Window, config: ViewportConfig) -> Self {
        Self {
            svg,
            window,
            config,
            viewport: RefCell::new(Viewport::default()),
        }
    }

    pub fn transform(&self) -> Transform {
        self.viewport.borrow().transform
    }

    pub fn is_panning(&self) -> bool {
        self.viewport.borrow().is_panning()
    }

    pub fn zoom_in(&self) {
        self.viewport.borrow_mut().zoom_in(self.config.zoom_step);
        self.apply_or_log();
    }

    pub fn zoom_out(&self) {
        self.viewport.borrow_mut().zoom_out(self.config.zoom_step);
        self.apply_or_log();
    }

    /// Fits the whole bracket into the window and clears any panning offset.
    pub fn reset_view(&self) {
        if let Err(err) = self.fit() {
            cerror("viewport: reset failed", &err);
        }
    }

    pub fn pointer_down(&self, x: f64, y: f64) {
        self.viewport.borrow_mut().pointer_down(x, y);
    }

    pub fn pointer_move(&self, x: f64, y: f64) {
        let moved = self.viewport.borrow_mut().pointer_move(x, y);
        if moved {
            self.apply_or_log();
        }
    }

    pub fn pointer_up(&self) {
        self.viewport.borrow_mut().pointer_up();
    }

    pub(crate) fn fit(&self) -> Result<(), JsValue> {
        let Some(content) = self.content_size() else {
            self.debug("viewport: diagram has no viewBox, keeping scale");
            self.viewport.borrow_mut().reset_offset();
            return self.apply();
        };
        let window = self.window_size()?;
        let area = self.config.available_area(window);
        self.viewport.borrow_mut().fit(area, content);
        let scale = self.transform().scale;
        if !scale.is_finite() || scale <= 0.0 {
            cwarn(&format!(
                "viewport: fit produced scale {scale} (window {}x{}, viewBox {}x{})",
                window.width, window.height, content.width, content.height
            ));
        }
        self.apply()
    }

    fn apply(&self) -> Result<(), JsValue> {
        let css = self.transform().to_css();
        let style = self.svg.style();
        style.set_property("transform", &css)?;
        style.set_property("transform-origin", "0 0")?;
        Ok(())
    }

    fn apply_or_log(&self) {
        if let Err(err) = self.apply() {
            cerror("viewport: could not apply transform", &err);
        }
    }

    fn window_size(&self) -> Result<Size, JsValue> {
        let width = self.window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = self.window.inner_height()?.as_f64().unwrap_or(0.0);
        Ok(Size::new(width, height))
    }

    /// Intrinsic size from the `viewBox`, if one is set.
    fn content_size(&self) -> Option<Size> {
        self.svg
            .view_box()
            .base_val()
            .map(|r| Size::new(r.width() as f64, r.height() as f64))
    }

    fn debug(&self, msg: &str) {
        if self.config.debug {
            clog(msg);
        }
    }
}

// PointerEvent coordinates are fractional; web-sys only exposes the i32 view.
fn client_pos(e: &PointerEvent) -> (f64, f64) {
    let read = |key: &str, fallback: i32| {
        js_sys::Reflect::get(e, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(fallback as f64)
    };
    (read("clientX", e.client_x()), read("clientY", e.client_y()))
}

/// Event listeners wiring a [`ViewportController`] to the page. Dropping the
/// binding unregisters them.
pub struct ViewportBinding {
    controller: Rc<ViewportController>,
    window: Window,
    stage: Element,
    pointerdown_cb: Closure<dyn FnMut(PointerEvent)>,
    pointermove_cb: Closure<dyn FnMut(PointerEvent)>,
    pointerup_cb: Closure<dyn FnMut(PointerEvent)>,
    resize_cb: Closure<dyn FnMut(Event)>,
    globals: Option<WindowGlobals>,
}

impl ViewportBinding {
    /// Looks up the diagram and stage, fits the view and registers listeners.
    ///
    /// Returns `Ok(None)` without touching the page when the diagram is
    /// missing or is not an `<svg>` element.
    pub fn attach(
        window: &Window,
        document: &Document,
        config: ViewportConfig,
    ) -> Result<Option<Self>, JsValue> {
        let Some(svg) = document
            .get_element_by_id(&config.svg_id)
            .and_then(|el| el.dyn_into::<SvgsvgElement>().ok())
        else {
            if config.debug {
                clog(&format!("viewport: no #{} svg, nothing to do", config.svg_id));
            }
            return Ok(None);
        };
        let stage = document
            .get_element_by_id(&config.stage_id)
            .unwrap_or_else(|| svg.clone().into());
        let expose_globals = config.expose_globals;
        let controller = Rc::new(ViewportController::new(svg, window.clone(), config));

        let pointerdown_cb = {
            let controller = controller.clone();
            let stage = stage.clone();
            Closure::wrap(Box::new(move |e: PointerEvent| {
                let (x, y) = client_pos(&e);
                controller.pointer_down(x, y);
                // Synthetic or already released pointers cannot be captured.
                let _ = stage.set_pointer_capture(e.pointer_id());
            }) as Box<dyn FnMut(_)>)
        };
        let pointermove_cb = {
            let controller = controller.clone();
            Closure::wrap(Box::new(move |e: PointerEvent| {
                let (x, y) = client_pos(&e);
                controller.pointer_move(x, y);
            }) as Box<dyn FnMut(_)>)
        };
        let pointerup_cb = {
            let controller = controller.clone();
            Closure::wrap(Box::new(move |_e: PointerEvent| {
                controller.pointer_up();
            }) as Box<dyn FnMut(_)>)
        };
        let resize_cb = {
            let controller = controller.clone();
            Closure::wrap(Box::new(move |_e: Event| {
                controller.reset_view();
            }) as Box<dyn FnMut(_)>)
        };

        let mut binding = Self {
            controller,
            window: window.clone(),
            stage,
            pointerdown_cb,
            pointermove_cb,
            pointerup_cb,
            resize_cb,
            globals: None,
        };
        // On error `binding` drops here and unregisters whatever was added.
        binding.register()?;
        if expose_globals {
            binding.globals = Some(WindowGlobals::install(window, &binding.controller)?);
        }
        binding.controller.fit()?;
        binding.controller.debug("viewport: attached");
        Ok(Some(binding))
    }

    pub fn controller(&self) -> Rc<ViewportController> {
        self.controller.clone()
    }

    fn register(&self) -> Result<(), JsValue> {
        self.stage.add_event_listener_with_callback(
            "pointerdown",
            self.pointerdown_cb.as_ref().unchecked_ref(),
        )?;
        self.stage.add_event_listener_with_callback(
            "pointermove",
            self.pointermove_cb.as_ref().unchecked_ref(),
        )?;
        self.stage.add_event_listener_with_callback(
            "pointerup",
            self.pointerup_cb.as_ref().unchecked_ref(),
        )?;
        self.stage.add_event_listener_with_callback(
            "pointercancel",
            self.pointerup_cb.as_ref().unchecked_ref(),
        )?;
        self.window
            .add_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref())?;
        Ok(())
    }
}

impl Drop for ViewportBinding {
    fn drop(&mut self) {
        let _ = self.stage.remove_event_listener_with_callback(
            "pointerdown",
            self.pointerdown_cb.as_ref().unchecked_ref(),
        );
        let _ = self.stage.remove_event_listener_with_callback(
            "pointermove",
            self.pointermove_cb.as_ref().unchecked_ref(),
        );
        let _ = self.stage.remove_event_listener_with_callback(
            "pointerup",
            self.pointerup_cb.as_ref().unchecked_ref(),
        );
        let _ = self.stage.remove_event_listener_with_callback(
            "pointercancel",
            self.pointerup_cb.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref());
    }
}
