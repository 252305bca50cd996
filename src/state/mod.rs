pub mod drag;
pub mod viewport;

pub use drag::Drag;
pub use viewport::Viewport;
