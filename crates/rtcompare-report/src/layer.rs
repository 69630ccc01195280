//! Benchmarked layer types and sizes

use std::str::FromStr;

/// Layer sizes every benchmark run sweeps, in report order
pub const LAYER_SIZES: [usize; 7] = [4, 8, 16, 32, 64, 128, 256];

/// Position of `size` in [`LAYER_SIZES`]
#[must_use]
pub fn size_index(size: usize) -> Option<usize> {
    LAYER_SIZES.iter().position(|&s| s == size)
}

/// Layer type under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerType {
    /// Fully connected layer
    Dense,
    /// 1-D convolution
    Conv1D,
    /// Long short-term memory
    Lstm,
    /// Gated recurrent unit
    Gru,
    /// Tanh activation
    Tanh,
    /// ReLU activation
    Relu,
    /// Sigmoid activation
    Sigmoid,
}

impl LayerType {
    /// All layer types, in chart order
    pub const ALL: [Self; 7] = [
        Self::Dense,
        Self::Conv1D,
        Self::Lstm,
        Self::Gru,
        Self::Tanh,
        Self::Relu,
        Self::Sigmoid,
    ];

    /// Key used in reports and output file names
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dense => "dense",
            Self::Conv1D => "conv1d",
            Self::Lstm => "lstm",
            Self::Gru => "gru",
            Self::Tanh => "tanh",
            Self::Relu => "relu",
            Self::Sigmoid => "sigmoid",
        }
    }

    /// Human-readable name used in chart titles
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Dense => "Dense",
            Self::Conv1D => "Conv1D",
            Self::Lstm => "LSTM",
            Self::Gru => "GRU",
            Self::Tanh => "Tanh",
            Self::Relu => "ReLU",
            Self::Sigmoid => "Sigmoid",
        }
    }

    /// Look up a layer type by its report key (exact match)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layer| layer.key() == key)
    }

    /// Index of this layer type in [`LayerType::ALL`]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for LayerType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("unknown layer type: {s}"))
    }
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}
