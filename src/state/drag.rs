// Pointer drag state for panning the bracket.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Drag {
    #[default]
    Idle,
    Panning { last_x: f64, last_y: f64 },
}

impl Drag {
    pub fn begin(&mut self, x: f64, y: f64) {
        *self = Drag::Panning {
            last_x: x,
            last_y: y,
        };
    }

    /// Advances the drag to `(x, y)` and returns the delta since the last
    /// recorded position, or `None` when no drag is active.
    pub fn step(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        match self {
            Drag::Idle => None,
            Drag::Panning { last_x, last_y } => {
                let delta = (x - *last_x, y - *last_y);
                *last_x = x;
                *last_y = y;
                Some(delta)
            }
        }
    }

    pub fn end(&mut self) {
        *self = Drag::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Drag::Panning { .. })
    }
}
