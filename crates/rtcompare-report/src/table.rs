//! Per-backend result table

use crate::layer::{size_index, LayerType, LAYER_SIZES};

/// One row of speed ratios, index-aligned with [`LAYER_SIZES`]
pub type Row = [f64; LAYER_SIZES.len()];

/// Real-time factor for every (layer type, layer size) pair of one backend
///
/// Entries never written by a report stay at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    rows: [Row; LayerType::ALL.len()],
}

impl ResultTable {
    /// Create an all-zero table
    pub const fn new() -> Self {
        Self {
            rows: [[0.0; LAYER_SIZES.len()]; LayerType::ALL.len()],
        }
    }

    /// Speed ratios for `layer`, one per entry of [`LAYER_SIZES`]
    #[must_use]
    pub const fn row(&self, layer: LayerType) -> &Row {
        &self.rows[layer.index()]
    }

    /// Speed ratio for `layer` at `size`, or `None` if `size` is not benchmarked
    #[must_use]
    pub fn get(&self, layer: LayerType, size: usize) -> Option<f64> {
        size_index(size).map(|idx| self.rows[layer.index()][idx])
    }

    /// Store a ratio, replacing any previous value
    ///
    /// # Panics
    ///
    /// Panics if `size_idx` is not below `LAYER_SIZES.len()`.
    pub fn set(&mut self, layer: LayerType, size_idx: usize, value: f64) {
        self.rows[layer.index()][size_idx] = value;
    }

    /// Iterate over `(layer, row)` in [`LayerType::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (LayerType, &Row)> {
        LayerType::ALL.into_iter().zip(self.rows.iter())
    }

    /// Check if no entry has been set to a non-zero value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|&v| v == 0.0)
    }
}

impl Default for ResultTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_zeroed() {
        let table = ResultTable::new();
        assert!(table.is_empty());
        for (_, row) in table.iter() {
            assert_eq!(row.len(), LAYER_SIZES.len());
            assert!(row.iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut table = ResultTable::new();
        table.set(LayerType::Gru, 3, 12.5);

        assert_eq!(table.get(LayerType::Gru, 32), Some(12.5));
        assert_eq!(table.get(LayerType::Lstm, 32), Some(0.0));
        assert_eq!(table.get(LayerType::Gru, 33), None);
        assert_eq!(table.row(LayerType::Gru)[3], 12.5);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut table = ResultTable::new();
        table.set(LayerType::Tanh, 0, 1.0);
        table.set(LayerType::Tanh, 0, 2.0);
        assert_eq!(table.get(LayerType::Tanh, 4), Some(2.0));
    }

    #[test]
    fn test_iter_order() {
        let table = ResultTable::default();
        let layers: Vec<_> = table.iter().map(|(layer, _)| layer).collect();
        assert_eq!(layers, LayerType::ALL);
    }
}
