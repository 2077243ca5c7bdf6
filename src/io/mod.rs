//! FASTA input/output and metadata export.

pub mod export;
pub mod fasta;
