// SPDX-License-Identifier: AGPL-3.0-only

#![deny(unsafe_code)]

//! Comparison charts for layer benchmark results
//!
//! Each chart overlays the real-time factor of every backend for one layer
//! type, on log-log axes (layer size in base 2), with a dashed line marking
//! real time.
//!
//! ```no_run
//! use rtcompare_chart::{render_layers, ImageFormat};
//! use rtcompare_report::BackendSet;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let set = BackendSet::load("results")?;
//! render_layers(&set, Path::new("plots"), ImageFormat::Png)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

mod error;
mod layers;
mod render;

pub use error::{ChartError, Result};
pub use layers::{chart_path, chart_title, render_layers};
pub use render::{
    render_chart, render_comparison, y_range, ImageFormat, Series, CHART_SIZE, X_DESC, Y_DESC,
};
