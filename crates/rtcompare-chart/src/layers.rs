// SPDX-License-Identifier: AGPL-3.0-only

//! One chart per layer type across all backends

use crate::error::Result;
use crate::render::{render_comparison, ImageFormat};
use rtcompare_report::{BackendSet, LayerType};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Chart title for a layer type, e.g. `LSTM Layer`
pub fn chart_title(layer: LayerType) -> String {
    format!("{} Layer", layer.display_name())
}

/// Output path for a layer type, e.g. `plots/lstm.png`
pub fn chart_path(plots_dir: &Path, layer: LayerType, format: ImageFormat) -> PathBuf {
    plots_dir.join(format!("{}.{}", layer.key(), format.extension()))
}

/// Render every layer type's comparison chart into `plots_dir`
///
/// Creates `plots_dir` if needed and returns the written paths in
/// [`LayerType::ALL`] order.
///
/// # Errors
///
/// Stops at the first chart that cannot be written.
pub fn render_layers(
    set: &BackendSet,
    plots_dir: &Path,
    format: ImageFormat,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(plots_dir)?;

    let mut written = Vec::with_capacity(LayerType::ALL.len());
    for layer in LayerType::ALL {
        let path = chart_path(plots_dir, layer, format);
        render_comparison(&chart_title(layer), &path, &set.rows(layer))?;
        written.push(path);
    }

    info!("Rendered {} charts into {}", written.len(), plots_dir.display());
    Ok(written)
}
