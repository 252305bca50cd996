use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::controller::ViewportController;

pub const ZOOM_IN: &str = "zoomIn";
pub const ZOOM_OUT: &str = "zoomOut";
pub const RESET_VIEW: &str = "resetView";

/// `window.zoomIn()`, `window.zoomOut()` and `window.resetView()` for
/// server-rendered toolbar buttons. Removed again on drop.
pub struct WindowGlobals {
    window: Window,
    entries: Vec<(&'static str, Closure<dyn Fn()>)>,
}

impl WindowGlobals {
    pub fn install(window: &Window, controller: &Rc<ViewportController>) -> Result<Self, JsValue> {
        let op = |f: fn(&ViewportController)| {
            let controller = controller.clone();
            Closure::wrap(Box::new(move || f(&controller)) as Box<dyn Fn()>)
        };
        let globals = Self {
            window: window.clone(),
            entries: vec![
                (ZOOM_IN, op(ViewportController::zoom_in)),
                (ZOOM_OUT, op(ViewportController::zoom_out)),
                (RESET_VIEW, op(ViewportController::reset_view)),
            ],
        };
        for (name, cb) in &globals.entries {
            js_sys::Reflect::set(&globals.window, &JsValue::from_str(name), cb.as_ref())?;
        }
        Ok(globals)
    }
}

impl Drop for WindowGlobals {
    fn drop(&mut self) {
        for (name, _) in &self.entries {
            let _ = js_sys::Reflect::delete_property(&self.window, &JsValue::from_str(name));
        }
    }
}
