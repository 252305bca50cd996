use super::drag::Drag;
use crate::model::{Size, Transform};

// Pan/zoom state for the bracket diagram; no DOM access.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    pub transform: Transform,
    pub drag: Drag,
}

impl Viewport {
    /// Multiplies the scale by `step`. Unbounded.
    pub fn zoom_in(&mut self, step: f64) {
        self.transform.scale *= step;
    }

    /// Divides the scale by `step`. Unbounded, repeated calls approach zero.
    pub fn zoom_out(&mut self, step: f64) {
        self.transform.scale /= step;
    }

    /// Fits `content` into `available`, keeping aspect ratio, and clears the
    /// translation. Degenerate sizes yield a non-finite or non-positive scale.
    pub fn fit(&mut self, available: Size, content: Size) {
        let rx = available.width / content.width;
        let ry = available.height / content.height;
        self.transform = Transform {
            scale: rx.min(ry),
            tx: 0.0,
            ty: 0.0,
        };
    }

    /// Clears the panning offset, keeping the scale.
    pub fn reset_offset(&mut self) {
        self.transform.tx = 0.0;
        self.transform.ty = 0.0;
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.drag.begin(x, y);
    }

    /// Returns true when the move panned the view.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        match self.drag.step(x, y) {
            Some((dx, dy)) => {
                self.transform.translate(dx, dy);
                true
            }
            None => false,
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    pub fn is_panning(&self) -> bool {
        self.drag.is_active()
    }
}
