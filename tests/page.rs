//! Page rendering integration tests.

#[path = "page/render.rs"]
mod render;
