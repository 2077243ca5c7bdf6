//! Pipeline module - read loading, contig extraction and output

pub mod assemble;

pub use assemble::{assemble_reads, AssemblyReport, ReadSource};
