use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::AssemblyConfig;
use crate::error::{AssemblyError, Result};
use crate::pipeline::ReadSource;

#[derive(Parser, Debug)]
#[command(name = "dbg-assembler", version, about = "Greedy de Bruijn graph contig assembler", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble reads into contigs
    Assemble {
        /// Dataset directory with short_1.fasta, short_2.fasta and long.fasta
        #[arg(short, long, required_unless_present = "reads", conflicts_with = "reads")]
        input: Option<PathBuf>,

        /// Read FASTA(.gz) files, used instead of a dataset directory
        #[arg(short, long, num_args = 1..)]
        reads: Vec<PathBuf>,

        /// Output FASTA(.gz) file [default: <input>/contig.fasta]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// K-mer length [default: 25]
        #[arg(short)]
        k: Option<usize>,

        /// Maximum number of contigs to extract [default: 20]
        #[arg(long)]
        max_contigs: Option<usize>,

        /// JSON file with run settings; flags take precedence
        #[arg(long)]
        config: Option<PathBuf>,

        /// Optional path to write contig metadata as JSON
        #[arg(long)]
        json_metadata: Option<PathBuf>,

        /// Optional path to write contig metadata as TSV
        #[arg(long)]
        tsv_metadata: Option<PathBuf>,
    },

    /// Summary statistics for a contig FASTA file
    Stats {
        /// Input FASTA(.gz) file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format: json or tsv
        #[arg(long, default_value = "tsv")]
        format: String,
    },
}

/// Settings and read source for an `assemble` invocation
pub fn assemble_settings(command: &Commands) -> Result<(ReadSource, AssemblyConfig)> {
    let Commands::Assemble {
        input,
        reads,
        output,
        k,
        max_contigs,
        config,
        json_metadata,
        tsv_metadata,
    } = command
    else {
        return Err(AssemblyError::Config("not an assemble command".into()));
    };

    let mut settings = match config {
        Some(path) => AssemblyConfig::from_json_file(path)?,
        None => AssemblyConfig::default(),
    };
    if let Some(k) = k {
        settings.k = *k;
    }
    if let Some(max) = max_contigs {
        settings.max_contigs = *max;
    }
    if output.is_some() {
        settings.output = output.clone();
    }
    if json_metadata.is_some() {
        settings.json_metadata = json_metadata.clone();
    }
    if tsv_metadata.is_some() {
        settings.tsv_metadata = tsv_metadata.clone();
    }
    settings.validate()?;

    let source = match input {
        Some(dir) => ReadSource::Dataset(dir.clone()),
        None => ReadSource::Files(reads.clone()),
    };
    Ok((source, settings))
}
