// src/graph/assembler.rs
use ahash::AHashSet;

use crate::graph::dbg::DeBruijnGraph;
use crate::graph::node::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub struct Contig {
    /// 0-based extraction index
    pub id: usize,
    pub sequence: String,
    /// Number of k-mers on the path the contig was spelled from
    pub kmer_count: usize,
    /// Mean occurrence count of those k-mers
    pub mean_coverage: f64,
}

impl Contig {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl DeBruijnGraph {
    /// Deepest chain in the current graph, as node ids from head to tail.
    ///
    /// Starts a fresh pass, computes the depth of every live node in id
    /// order and follows the best-child pointers from the first node with
    /// the greatest depth. Empty when the graph has no nodes.
    pub fn longest_path(&mut self) -> Vec<NodeId> {
        self.reset();

        let ids: Vec<NodeId> = self.node_ids().collect();
        let (mut max_depth, mut max_idx) = (0, None);
        for id in ids {
            let depth = self.depth(id);
            if depth > max_depth {
                max_depth = depth;
                max_idx = Some(id);
            }
        }

        // Depth strictly decreases along best-child pointers
        let mut path = Vec::with_capacity(max_depth);
        while let Some(id) = max_idx {
            path.push(id);
            max_idx = self.scratch[id].max_depth_child;
        }
        path
    }

    /// Spells a path: the first k-mer, then the last base of each following
    /// k-mer. `None` for an empty path or an unknown id.
    pub fn concat_path(&self, path: &[NodeId]) -> Option<String> {
        let (first, rest) = path.split_first()?;
        let mut contig = String::with_capacity(self.k + rest.len());
        contig.push_str(self.node(*first)?.kmer());
        for &id in rest {
            let last = self.node(id)?.kmer().chars().last()?;
            contig.push(last);
        }
        Some(contig)
    }

    /// Removes the path's nodes and every edge pointing at them.
    ///
    /// All surviving nodes are scanned, since any of them may hold an edge
    /// into the path.
    pub fn delete_path(&mut self, path: &[NodeId]) {
        let doomed: AHashSet<NodeId> = path.iter().copied().collect();

        for &id in &doomed {
            if let Some(node) = self.nodes.get_mut(id).and_then(Option::take) {
                self.kmer2idx.remove(node.kmer());
                self.scratch[id].reset();
                self.live -= 1;
            }
        }

        for node in self.nodes.iter_mut().flatten() {
            node.remove_children(&doomed);
        }
    }

    /// Extracts the longest contig and removes its path from the graph.
    ///
    /// Returns `None` once the graph is exhausted. Every call removes at
    /// least one node, so a graph of n nodes is exhausted after at most n
    /// calls.
    pub fn longest_contig(&mut self) -> Option<Contig> {
        let path = self.longest_path();
        let sequence = self.concat_path(&path)?;
        let total: u64 = path.iter().map(|&id| u64::from(self.count_of(id))).sum();
        let mean_coverage = total as f64 / path.len() as f64;

        self.delete_path(&path);

        let contig = Contig {
            id: self.extracted,
            sequence,
            kmer_count: path.len(),
            mean_coverage,
        };
        self.extracted += 1;
        Some(contig)
    }

    /// Extracts up to `max` contigs, stopping early when the graph runs out.
    pub fn extract_contigs(&mut self, max: usize) -> Vec<Contig> {
        let mut contigs = Vec::new();
        while contigs.len() < max {
            match self.longest_contig() {
                Some(contig) => contigs.push(contig),
                None => break,
            }
        }
        contigs
    }
}
