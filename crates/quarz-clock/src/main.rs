//! quarz — an analog/digital wall clock.
//!
//! Renders a clock face that resamples the host's local time and redraws
//! once per second, while the event loop keeps polling at a short quantum so
//! close and resize stay responsive.

mod app;
mod audio;
mod dial;
mod font;
mod sample;
mod theme;

use anyhow::Result;

use quarz_engine::device::GpuInit;
use quarz_engine::logging::{LoggingConfig, init_logging};
use quarz_engine::window::{Runtime, RuntimeConfig};

use crate::app::ClockApp;
use crate::theme::ClockTheme;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = ClockApp::new(ClockTheme::default())?;

    Runtime::run(RuntimeConfig::default(), GpuInit::default(), app)
}
