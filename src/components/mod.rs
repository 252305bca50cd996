pub mod app;
pub mod view_controls;
