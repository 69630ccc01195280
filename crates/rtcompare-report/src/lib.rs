#![deny(unsafe_code)]

//! Layer benchmark report parser
//!
//! This crate reads the text reports written by the layer benchmark, one per
//! math backend, and turns them into tables of real-time factors indexed by
//! layer type and layer size.
//!
//! # Format
//!
//! A report is a sequence of 4-line blocks:
//!
//! - **Line 1**: header; token 1 is the layer key (`dense`, `lstm`, ...),
//!   token 6 the layer size
//! - **Lines 2-3**: ignored
//! - **Line 4**: `<ratio>x real-time`
//!
//! # Example
//!
//! ```no_run
//! use rtcompare_report::{parse_report, LayerType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = parse_report("results/bench_xsimd.txt")?;
//!
//! println!("Dense @ 16: {:?}x", table.get(LayerType::Dense, 16));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod backend;
mod error;
mod layer;
pub mod parser;
mod table;

pub use backend::{Backend, BackendSet};
pub use error::{ReportError, Result};
pub use layer::{size_index, LayerType, LAYER_SIZES};
pub use parser::{parse_report, parse_str, Measurement};
pub use table::{ResultTable, Row};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Backend, BackendSet, LayerType, ResultTable, Result, LAYER_SIZES};
}
