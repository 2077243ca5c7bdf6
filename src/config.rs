//! Assembly run configuration.
//!
//! Values come from built-in defaults, optionally a JSON file, and finally
//! command-line overrides.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AssemblyError, Result};

pub const DEFAULT_K: usize = 25;
pub const DEFAULT_MAX_CONTIGS: usize = 20;
/// Output file name used when only a dataset directory is given
pub const DEFAULT_OUTPUT_NAME: &str = "contig.fasta";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssemblyConfig {
    /// K-mer length
    pub k: usize,
    /// Upper bound on extracted contigs
    pub max_contigs: usize,
    /// FASTA output path; defaults to `<dataset>/contig.fasta`
    pub output: Option<PathBuf>,
    pub json_metadata: Option<PathBuf>,
    pub tsv_metadata: Option<PathBuf>,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            max_contigs: DEFAULT_MAX_CONTIGS,
            output: None,
            json_metadata: None,
            tsv_metadata: None,
        }
    }
}

impl AssemblyConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AssemblyError::Config(format!("cannot open {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(AssemblyError::Config("k must be at least 1".into()));
        }
        if self.max_contigs == 0 {
            return Err(AssemblyError::Config("max_contigs must be at least 1".into()));
        }
        Ok(())
    }

    /// Output path, falling back to `contig.fasta` inside `dataset_dir`
    pub fn output_path(&self, dataset_dir: Option<&Path>) -> PathBuf {
        match (&self.output, dataset_dir) {
            (Some(path), _) => path.clone(),
            (None, Some(dir)) => dir.join(DEFAULT_OUTPUT_NAME),
            (None, None) => PathBuf::from(DEFAULT_OUTPUT_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AssemblyConfig::default();
        assert_eq!(config.k, 25);
        assert_eq!(config.max_contigs, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.json");
        fs::write(&path, r#"{ "k": 31 }"#).unwrap();

        let config = AssemblyConfig::from_json_file(&path).unwrap();
        assert_eq!(config.k, 31);
        assert_eq!(config.max_contigs, DEFAULT_MAX_CONTIGS);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.json");
        fs::write(&path, r#"{ "max_contigs": 0 }"#).unwrap();
        assert!(matches!(
            AssemblyConfig::from_json_file(&path),
            Err(AssemblyError::Config(_))
        ));

        fs::write(&path, r#"{ "kmer": 3 }"#).unwrap();
        assert!(matches!(
            AssemblyConfig::from_json_file(&path),
            Err(AssemblyError::Serialization(_))
        ));

        assert!(AssemblyConfig::from_json_file(dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_output_path() {
        let mut config = AssemblyConfig::default();
        assert_eq!(
            config.output_path(Some(Path::new("data"))),
            PathBuf::from("data/contig.fasta")
        );
        config.output = Some(PathBuf::from("out.fa"));
        assert_eq!(config.output_path(Some(Path::new("data"))), PathBuf::from("out.fa"));
    }
}
