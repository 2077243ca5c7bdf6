//! Nucleotide sequence helpers used by graph construction.

pub mod kmer;

pub use kmer::{reverse_complement, Kmer};
