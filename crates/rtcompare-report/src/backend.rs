//! Benchmarked math backends and their report files
//!
//! Each backend run of the layer benchmark writes one report:
//!
//! | Backend | Report | Legend |
//! |---------|--------|--------|
//! | xsimd | `bench_xsimd.txt` | RTNeural - xsimd |
//! | Eigen | `bench_eigen.txt` | RTNeural - Eigen |
//! | Eigen, approximate activations | `bench_eigen_approx.txt` | RTNeural - Eigen {approx} |
//! | STL | `bench_stl.txt` | RTNeural - STL |
//! | STL, approximate activations | `bench_stl_approx.txt` | RTNeural - STL {approx} |

use crate::layer::LayerType;
use crate::parser::parse_report;
use crate::table::{ResultTable, Row};
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Backend configuration a report was produced with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// xsimd SIMD library
    Xsimd,
    /// Eigen linear algebra
    Eigen,
    /// Eigen with approximate activation functions
    EigenApprox,
    /// Plain standard library
    Stl,
    /// Standard library with approximate activation functions
    StlApprox,
}

impl Backend {
    /// All backends, in legend order
    pub const ALL: [Self; 5] = [
        Self::Xsimd,
        Self::Eigen,
        Self::EigenApprox,
        Self::Stl,
        Self::StlApprox,
    ];

    /// Report file name
    pub const fn report_file(self) -> &'static str {
        match self {
            Self::Xsimd => "bench_xsimd.txt",
            Self::Eigen => "bench_eigen.txt",
            Self::EigenApprox => "bench_eigen_approx.txt",
            Self::Stl => "bench_stl.txt",
            Self::StlApprox => "bench_stl_approx.txt",
        }
    }

    /// Chart legend label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Xsimd => "RTNeural - xsimd",
            Self::Eigen => "RTNeural - Eigen",
            Self::EigenApprox => "RTNeural - Eigen {approx}",
            Self::Stl => "RTNeural - STL",
            Self::StlApprox => "RTNeural - STL {approx}",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Parsed reports of every backend
#[derive(Debug, Clone, PartialEq)]
pub struct BackendSet {
    tables: [ResultTable; Backend::ALL.len()],
}

impl BackendSet {
    /// Parse `<results_dir>/<report file>` for every backend
    ///
    /// # Errors
    ///
    /// Returns the first report error; no partial set is produced.
    pub fn load<P: AsRef<Path>>(results_dir: P) -> Result<Self> {
        let results_dir = results_dir.as_ref();

        let mut tables: [ResultTable; Backend::ALL.len()] = Default::default();
        for (backend, table) in Backend::ALL.into_iter().zip(tables.iter_mut()) {
            *table = parse_report(Self::report_path(results_dir, backend))?;
        }

        info!(
            "Loaded {} backend reports from {}",
            tables.len(),
            results_dir.display()
        );

        Ok(Self { tables })
    }

    /// Build a set from already parsed tables, in [`Backend::ALL`] order
    pub const fn from_tables(tables: [ResultTable; Backend::ALL.len()]) -> Self {
        Self { tables }
    }

    /// Location of a backend's report under `results_dir`
    pub fn report_path(results_dir: &Path, backend: Backend) -> PathBuf {
        results_dir.join(backend.report_file())
    }

    /// Table for one backend
    pub const fn table(&self, backend: Backend) -> &ResultTable {
        &self.tables[backend as usize]
    }

    /// `layer` row of every backend, in legend order
    pub fn rows(&self, layer: LayerType) -> [Row; Backend::ALL.len()] {
        std::array::from_fn(|i| *self.tables[i].row(layer))
    }

    /// Iterate over `(backend, table)` in legend order
    pub fn iter(&self) -> impl Iterator<Item = (Backend, &ResultTable)> {
        Backend::ALL.into_iter().zip(self.tables.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReportError;
    use std::fs;
    use tempfile::TempDir;

    fn report(layer: &str, size: usize, ratio: f64) -> String {
        format!(
            "Benchmarking {layer} layer with input size {size} and output size {size}\n\
             \n\
             Processed signal\n\
             {ratio}x real-time\n"
        )
    }

    #[test]
    fn test_report_files_are_distinct() {
        for (i, a) in Backend::ALL.iter().enumerate() {
            for b in &Backend::ALL[i + 1..] {
                assert_ne!(a.report_file(), b.report_file());
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_legend_order() {
        let labels: Vec<_> = Backend::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(
            labels,
            [
                "RTNeural - xsimd",
                "RTNeural - Eigen",
                "RTNeural - Eigen {approx}",
                "RTNeural - STL",
                "RTNeural - STL {approx}",
            ]
        );
    }

    #[test]
    fn test_load_all_backends() {
        let dir = TempDir::new().unwrap();
        for (i, backend) in Backend::ALL.into_iter().enumerate() {
            let ratio = (i + 1) as f64;
            fs::write(
                dir.path().join(backend.report_file()),
                report("lstm", 32, ratio),
            )
            .unwrap();
        }

        let set = BackendSet::load(dir.path()).unwrap();
        let rows = set.rows(LayerType::Lstm);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row[3], (i + 1) as f64);
        }
        assert_eq!(set.table(Backend::Stl).get(LayerType::Lstm, 32), Some(4.0));
        assert!(set.rows(LayerType::Dense).iter().flatten().all(|&v| v == 0.0));
    }

    #[test]
    fn test_load_missing_report() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(Backend::Xsimd.report_file()),
            report("dense", 4, 1.0),
        )
        .unwrap();

        let err = BackendSet::load(dir.path()).unwrap_err();
        match err {
            ReportError::FileNotFound { path } => {
                assert_eq!(path, dir.path().join("bench_eigen.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
