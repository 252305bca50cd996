use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use mav_bracket_viewport::components::app::{App, AppProps};
use mav_bracket_viewport::config::ViewportConfig;
use mav_bracket_viewport::util::cerror;

// Toolbar mount point if the page has one, otherwise a hidden host so the
// pan/resize bindings still run.
fn mount_root(document: &Document, config: &ViewportConfig) -> Result<(Element, bool), JsValue> {
    if let Some(el) = document.get_element_by_id(&config.toolbar_id) {
        return Ok((el, true));
    }
    let host = document.create_element("div")?;
    host.set_attribute("hidden", "")?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&host)?;
    Ok((host, false))
}

fn main() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let config = ViewportConfig::load(&document);
    match mount_root(&document, &config) {
        Ok((root, show_toolbar)) => {
            yew::Renderer::<App>::with_root_and_props(root, AppProps { config, show_toolbar }).render();
        }
        Err(err) => cerror("viewport: no mount point", &err),
    }
}
