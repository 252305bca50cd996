/// Width/height pair in CSS pixels (window area) or SVG user units (viewBox).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Translation + uniform scale applied to the bracket diagram.
///
/// The transform origin is always the element's top-left corner, so
/// `tx`/`ty` are plain screen-pixel offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }
}

impl Transform {
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.tx += dx;
        self.ty += dy;
    }

    /// Value for the CSS `transform` property.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.tx, self.ty, self.scale
        )
    }
}
