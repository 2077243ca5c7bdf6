//! De Bruijn graph core: node store, construction, traversal and contig
//! extraction.

pub mod assembler;
pub mod dbg;
pub mod node;
pub mod traverser;

pub use assembler::Contig;
pub use dbg::DeBruijnGraph;
pub use node::{Node, NodeId, TraversalState};
