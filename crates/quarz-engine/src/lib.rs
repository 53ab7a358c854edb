//! Quarz engine crate.
//!
//! This crate owns the platform + GPU runtime pieces the clock application
//! builds on: window/event loop, device & surface management, the draw-list
//! scene, per-shape renderers, text rasterization, and frame timing.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
