//! Greedy de Bruijn graph contig assembler.
//!
//! Reads and their reverse complements are cut into overlapping k-mers that
//! form a [`graph::DeBruijnGraph`]. Contigs are pulled out one at a time by
//! taking the deepest chain in the graph, spelling it, and deleting it, so
//! each extraction sees what the previous ones left behind.
//!
//! ```
//! use dbg_assembler::graph::DeBruijnGraph;
//!
//! let mut graph = DeBruijnGraph::build(3, &["ATCG"]).unwrap();
//! let contig = graph.longest_contig().unwrap();
//! assert_eq!(contig.sequence, "ATCG");
//! ```

pub mod cli_main;
pub mod config;
pub mod error;
pub mod graph;
pub mod io;
pub mod kmer;
pub mod pipeline;
pub mod stats;

pub use error::{AssemblyError, Result};
