use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::graph::assembler::Contig;
use crate::io::fasta::read_fasta;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssemblyStats {
    pub total_contigs: usize,
    pub total_length: usize,
    pub average_length: f64,
    pub longest: usize,
    pub n50: usize,
}

/// N50 of a set of lengths.
///
/// The lengths are sorted longest first before scanning, so the result
/// does not depend on extraction order. Returns 0 for an empty set.
pub fn n50(lengths: &[usize]) -> usize {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let total: usize = sorted.iter().sum();

    let mut acc = 0;
    sorted
        .into_iter()
        .find(|&len| {
            acc += len;
            // acc >= total / 2 without rounding the half down
            acc * 2 >= total
        })
        .unwrap_or(0)
}

impl AssemblyStats {
    pub fn from_lengths(lengths: &[usize]) -> Self {
        let total_contigs = lengths.len();
        let total_length: usize = lengths.iter().sum();
        let average_length = if total_contigs > 0 {
            total_length as f64 / total_contigs as f64
        } else {
            0.0
        };

        Self {
            total_contigs,
            total_length,
            average_length,
            longest: lengths.iter().copied().max().unwrap_or(0),
            n50: n50(lengths),
        }
    }

    pub fn from_contigs(contigs: &[Contig]) -> Self {
        let lengths: Vec<usize> = contigs.iter().map(Contig::len).collect();
        Self::from_lengths(&lengths)
    }
}

/// Statistics for the sequences of a FASTA(.gz) file
pub fn calculate_stats<P: AsRef<Path>>(path: P) -> Result<AssemblyStats> {
    let lengths: Vec<usize> = read_fasta(path)?.iter().map(String::len).collect();
    Ok(AssemblyStats::from_lengths(&lengths))
}
