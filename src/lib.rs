//! Pan/zoom navigation for a server-rendered tournament bracket `<svg>`.

pub mod components;
pub mod config;
pub mod controller;
pub mod globals;
pub mod model;
pub mod state;
pub mod util;
