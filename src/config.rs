use serde::Deserialize;
use web_sys::Document;

use crate::model::Size;
use crate::util::cwarn;

/// Id of the `<script type="application/json">` element holding overrides,
/// as emitted by Django's `json_script` filter.
pub const CONFIG_ELEMENT_ID: &str = "viewport-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Id of the bracket `<svg>`.
    pub svg_id: String,
    /// Id of the element receiving pointer events.
    pub stage_id: String,
    /// Mount point for the toolbar; absent means no toolbar.
    pub toolbar_id: String,
    pub zoom_step: f64,
    /// Vertical band (px) kept free for page chrome when fitting.
    pub reserved_height: f64,
    /// Install `zoomIn`/`zoomOut`/`resetView` on `window`.
    pub expose_globals: bool,
    pub debug: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            svg_id: "svg".to_string(),
            stage_id: "stage".to_string(),
            toolbar_id: "bracket-toolbar".to_string(),
            zoom_step: 1.2,
            reserved_height: 160.0,
            expose_globals: true,
            debug: false,
        }
    }
}

impl ViewportConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// Reads overrides from the page, falling back to defaults.
    pub fn load(document: &Document) -> Self {
        let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let raw = el.text_content().unwrap_or_default();
        match Self::from_json(&raw) {
            Ok(mut cfg) => {
                if let Some(msg) = cfg.sanitize() {
                    cwarn(&msg);
                }
                cfg
            }
            Err(err) => {
                cwarn(&format!("viewport: ignoring #{CONFIG_ELEMENT_ID}: {err}"));
                Self::default()
            }
        }
    }

    /// Replaces values that would poison the transform with defaults and
    /// returns a warning describing what was replaced.
    pub fn sanitize(&mut self) -> Option<String> {
        if self.zoom_step.is_finite() && self.zoom_step > 0.0 {
            return None;
        }
        let bad = self.zoom_step;
        self.zoom_step = Self::default().zoom_step;
        Some(format!(
            "viewport: zoom_step {bad} is not a positive number, using {}",
            self.zoom_step
        ))
    }

    /// Area the diagram is fitted into for a given window size.
    pub fn available_area(&self, window: Size) -> Size {
        Size::new(window.width, window.height - self.reserved_height)
    }
}
