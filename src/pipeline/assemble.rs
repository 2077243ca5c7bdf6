use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::AssemblyConfig;
use crate::error::Result;
use crate::graph::{Contig, DeBruijnGraph};
use crate::io::export::{write_json_metadata, write_tsv_metadata};
use crate::io::fasta::{read_dataset, read_fasta_files, FastaWriter};
use crate::stats::AssemblyStats;

/// Occurrence counts shown in the debug k-mer histogram
const HISTOGRAM_BINS: usize = 10;

/// Where the reads come from
#[derive(Debug, Clone)]
pub enum ReadSource {
    /// Directory holding `short_1.fasta`, `short_2.fasta` and `long.fasta`
    Dataset(PathBuf),
    /// Explicit FASTA(.gz) files, loaded in order
    Files(Vec<PathBuf>),
}

impl ReadSource {
    fn dataset_dir(&self) -> Option<&Path> {
        match self {
            ReadSource::Dataset(dir) => Some(dir.as_path()),
            ReadSource::Files(_) => None,
        }
    }

    pub fn load(&self) -> Result<Vec<String>> {
        match self {
            ReadSource::Dataset(dir) => read_dataset(dir),
            ReadSource::Files(paths) => read_fasta_files(paths),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssemblyReport {
    pub output: PathBuf,
    pub stats: AssemblyStats,
    pub elapsed: Duration,
}

/// Build the graph from `reads` and pull up to `config.max_contigs` contigs
/// from it, writing each to `writer` as soon as it is extracted.
pub fn assemble_into(
    reads: &[String],
    config: &AssemblyConfig,
    writer: &mut FastaWriter,
) -> Result<Vec<Contig>> {
    info!("Building de Bruijn graph from {} reads with k={}", reads.len(), config.k);
    let mut graph = DeBruijnGraph::build(config.k, reads)?;
    info!("Graph has {} distinct k-mers", graph.node_count());
    debug!("K-mer count distribution: {:?}", graph.count_histogram(HISTOGRAM_BINS));

    let mut contigs = Vec::new();
    for _ in 0..config.max_contigs {
        let contig = match graph.longest_contig() {
            Some(contig) => contig,
            None => {
                info!("Graph exhausted after {} contigs", contigs.len());
                break;
            }
        };
        info!(
            "contig_{}: {} bp from {} k-mers ({} k-mers left)",
            contig.id,
            contig.len(),
            contig.kmer_count,
            graph.node_count()
        );
        writer.write_contig(&contig)?;
        contigs.push(contig);
    }

    Ok(contigs)
}

/// Run a full assembly: load reads, extract contigs, write FASTA and any
/// requested metadata, and summarise.
pub fn assemble_reads(source: &ReadSource, config: &AssemblyConfig) -> Result<AssemblyReport> {
    let start = Instant::now();
    config.validate()?;

    let reads = source.load()?;
    info!("Loaded {} reads", reads.len());

    let output = config.output_path(source.dataset_dir());
    let mut writer = FastaWriter::new(&output)?;
    let contigs = assemble_into(&reads, config, &mut writer)?;
    writer.finish()?;
    info!("Wrote {} contigs to {}", contigs.len(), output.display());

    if contigs.is_empty() {
        warn!("No contigs were assembled");
    }

    if let Some(path) = &config.json_metadata {
        write_json_metadata(&contigs, path)?;
        info!("JSON metadata written to {}", path.display());
    }
    if let Some(path) = &config.tsv_metadata {
        write_tsv_metadata(&contigs, path)?;
        info!("TSV metadata written to {}", path.display());
    }

    let stats = AssemblyStats::from_contigs(&contigs);
    let lengths: Vec<usize> = contigs.iter().map(|c| c.len()).collect();
    info!("Contig lengths: {:?}", lengths);

    let elapsed = start.elapsed();
    info!("Finished in {:.2}s, N50 = {}", elapsed.as_secs_f64(), stats.n50);

    Ok(AssemblyReport { output, stats, elapsed })
}
