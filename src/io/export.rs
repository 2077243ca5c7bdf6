use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::assembler::Contig;

/// Per-contig summary written next to the FASTA output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContigMetadata {
    pub id: String,
    pub length: usize,
    pub kmer_count: usize,
    pub mean_coverage: f64,
}

impl From<&Contig> for ContigMetadata {
    fn from(contig: &Contig) -> Self {
        Self {
            id: format!("contig_{}", contig.id),
            length: contig.len(),
            kmer_count: contig.kmer_count,
            mean_coverage: contig.mean_coverage,
        }
    }
}

/// Export contig metadata as a pretty-printed JSON array
pub fn write_json_metadata<P: AsRef<Path>>(contigs: &[Contig], output_path: P) -> Result<()> {
    let records: Vec<ContigMetadata> = contigs.iter().map(ContigMetadata::from).collect();
    let mut writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Export contig metadata to a TSV file for analysis
pub fn write_tsv_metadata<P: AsRef<Path>>(contigs: &[Contig], output_path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);

    writeln!(writer, "contig_id\tlength\tkmer_count\tmean_coverage")?;
    for contig in contigs {
        let meta = ContigMetadata::from(contig);
        writeln!(
            writer,
            "{}\t{}\t{}\t{:.2}",
            meta.id, meta.length, meta.kmer_count, meta.mean_coverage
        )?;
    }

    writer.flush()?;
    Ok(())
}
