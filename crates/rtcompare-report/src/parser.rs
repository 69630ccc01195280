//! Text parser for layer benchmark reports
//!
//! A report is a sequence of 4-line blocks, one per measurement:
//!
//! ```text
//! Benchmarking dense layer with input size 16 and output size 16, ...
//! <free text>
//! <free text>
//! 47.12x real-time
//! ```
//!
//! The layer key is token 1 and the layer size token 6 of the first line,
//! splitting on single spaces. The ratio is everything before the first `x`
//! of the fourth line.

use crate::error::{ReportError, Result};
use crate::layer::{size_index, LayerType};
use crate::table::ResultTable;
use std::fs;
use std::path::Path;

/// Lines per measurement block
pub const BLOCK_LINES: usize = 4;

/// Token index of the layer type key on a block header line
pub const LAYER_TOKEN: usize = 1;

/// Token index of the layer size on a block header line
pub const SIZE_TOKEN: usize = 6;

/// One measurement decoded from a block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Layer type under test
    pub layer: LayerType,
    /// Layer size
    pub size: usize,
    /// Position of `size` in [`LAYER_SIZES`](crate::LAYER_SIZES)
    pub size_idx: usize,
    /// Real-time factor
    pub ratio: f64,
}

/// Parse a report file into a fresh table
///
/// # Errors
///
/// Returns error if the file cannot be read, a block is malformed or
/// truncated, or a layer type or size is outside the known set.
pub fn parse_report<P: AsRef<Path>>(path: P) -> Result<ResultTable> {
    let path = path.as_ref();

    tracing::info!("Loading report from: {}", path.display());

    if !path.exists() {
        return Err(ReportError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)?;
    parse_str(&text)
}

/// Parse report text into a fresh table
///
/// Later blocks overwrite earlier ones for the same (layer, size) pair.
///
/// # Errors
///
/// Same as [`parse_report`], minus the I/O failures.
pub fn parse_str(text: &str) -> Result<ResultTable> {
    let mut table = ResultTable::new();
    let mut blocks = 0usize;

    for measurement in measurements(text) {
        let m = measurement?;
        table.set(m.layer, m.size_idx, m.ratio);
        blocks += 1;
    }

    tracing::debug!("Parsed {} block(s)", blocks);
    Ok(table)
}

/// Decode every block of a report, in file order
pub fn measurements(text: &str) -> impl Iterator<Item = Result<Measurement>> + '_ {
    let lines: Vec<&str> = text.lines().collect();
    let mut start = 0;

    std::iter::from_fn(move || {
        if start >= lines.len() {
            return None;
        }
        let block = &lines[start..lines.len().min(start + BLOCK_LINES)];
        let first_line = start + 1;
        start += BLOCK_LINES;
        Some(parse_block(block, first_line))
    })
}

/// Decode one block whose header sits on 1-based line `line`
fn parse_block(block: &[&str], line: usize) -> Result<Measurement> {
    if block.len() < BLOCK_LINES {
        return Err(ReportError::TruncatedBlock {
            line,
            expected: BLOCK_LINES,
            found: block.len(),
        });
    }

    let (layer, size, size_idx) = parse_header(block[0], line)?;
    let ratio = parse_ratio(block[BLOCK_LINES - 1], line + BLOCK_LINES - 1)?;

    tracing::debug!("{} @ {}: {}x", layer.key(), size, ratio);

    Ok(Measurement {
        layer,
        size,
        size_idx,
        ratio,
    })
}

/// Extract layer type, size and size position from a block header line
fn parse_header(text: &str, line: usize) -> Result<(LayerType, usize, usize)> {
    let tokens: Vec<&str> = text.split(' ').collect();

    if tokens.len() <= SIZE_TOKEN {
        return Err(ReportError::malformed_line(
            line,
            format!(
                "expected at least {} tokens, found {}",
                SIZE_TOKEN + 1,
                tokens.len()
            ),
        ));
    }

    let size_text = tokens[SIZE_TOKEN].trim();
    if !is_integer(size_text) {
        return Err(ReportError::malformed_line(
            line,
            format!("invalid layer size '{size_text}'"),
        ));
    }

    let key = tokens[LAYER_TOKEN];
    let layer =
        LayerType::from_key(key).ok_or_else(|| ReportError::unknown_layer_type(line, key))?;

    // negative or oversized integers are still integers, just not benchmarked sizes
    let (size, size_idx) = size_text
        .parse::<usize>()
        .ok()
        .and_then(|size| size_index(size).map(|idx| (size, idx)))
        .ok_or_else(|| ReportError::unknown_layer_size(line, size_text))?;

    Ok((layer, size, size_idx))
}

/// Optional sign followed by one or more ASCII digits
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Extract the real-time factor from a `<ratio>x ...` line
fn parse_ratio(text: &str, line: usize) -> Result<f64> {
    let value = text.split('x').next().unwrap_or_default().trim();

    value.parse().map_err(|_| {
        ReportError::malformed_line(line, format!("invalid real-time factor '{value}'"))
    })
}
