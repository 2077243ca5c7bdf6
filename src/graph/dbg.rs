// src/graph/dbg.rs
use ahash::AHashMap;

use crate::error::{AssemblyError, Result};
use crate::graph::node::{Node, NodeId, TraversalState};
use crate::kmer::kmer::{kmer_pairs, reverse_complement};

/// De Bruijn graph over fixed-length k-mers.
///
/// Nodes live in an arena indexed by [`NodeId`]. Ids are handed out in
/// first-seen order and never reused; a deleted node leaves an empty slot.
/// Per-pass traversal state is kept in a parallel vector so that the
/// persistent node records are never touched by a traversal.
#[derive(Debug, Clone)]
pub struct DeBruijnGraph {
    pub(crate) k: usize,
    pub(crate) nodes: Vec<Option<Node>>,
    pub(crate) scratch: Vec<TraversalState>,
    pub(crate) kmer2idx: AHashMap<String, NodeId>,
    pub(crate) live: usize,
    /// Contigs handed out so far, used as the next contig id
    pub(crate) extracted: usize,
}

impl DeBruijnGraph {
    /// Empty graph for k-mers of length `k`
    pub fn new(k: usize) -> Self {
        Self {
            k,
            nodes: Vec::new(),
            scratch: Vec::new(),
            kmer2idx: AHashMap::new(),
            live: 0,
            extracted: 0,
        }
    }

    /// Builds the graph from reads and their reverse complements.
    ///
    /// Fails without producing a graph when `reads` is empty, when `k` is zero
    /// or longer than the shortest read, or when a read holds a base outside
    /// {A, C, G, T}.
    pub fn build<S: AsRef<str>>(k: usize, reads: &[S]) -> Result<Self> {
        Self::check(k, reads)?;

        let mut graph = Self::new(k);
        for read in reads {
            let original = read.as_ref();
            let rc = reverse_complement(original)?;
            // Both strands have the same length, so their windows line up
            for ((src, dst), (rc_src, rc_dst)) in kmer_pairs(original, k).zip(kmer_pairs(&rc, k)) {
                graph.add_arc(src, dst);
                graph.add_arc(rc_src, rc_dst);
            }
        }
        Ok(graph)
    }

    fn check<S: AsRef<str>>(k: usize, reads: &[S]) -> Result<()> {
        if reads.is_empty() {
            return Err(AssemblyError::InvalidInput("no reads supplied".into()));
        }
        if k == 0 {
            return Err(AssemblyError::InvalidInput("k must be at least 1".into()));
        }
        // Non-empty checked above
        let shortest = reads.iter().map(|r| r.as_ref().len()).min().unwrap_or(0);
        if k > shortest {
            return Err(AssemblyError::InvalidInput(format!(
                "k = {} exceeds the shortest read length {}",
                k, shortest
            )));
        }
        Ok(())
    }

    /// Looks up or creates the node for `kmer` and counts this sighting.
    pub fn add_node(&mut self, kmer: &str) -> NodeId {
        let idx = match self.kmer2idx.get(kmer) {
            Some(&idx) => idx,
            None => {
                let idx = self.nodes.len();
                self.kmer2idx.insert(kmer.to_string(), idx);
                self.nodes.push(Some(Node::new(kmer)));
                self.scratch.push(TraversalState::default());
                self.live += 1;
                idx
            }
        };
        if let Some(node) = self.nodes[idx].as_mut() {
            node.increase();
        }
        idx
    }

    /// Records an edge between two k-mers overlapping by k-1 bases.
    pub fn add_arc(&mut self, source: &str, target: &str) -> (NodeId, NodeId) {
        let src = self.add_node(source);
        let dst = self.add_node(target);
        if let Some(node) = self.nodes[src].as_mut() {
            node.add_child(dst);
        }
        (src, dst)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    pub fn node_id(&self, kmer: &str) -> Option<NodeId> {
        self.kmer2idx.get(kmer).copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Live node ids in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|_| id))
    }

    /// Occurrence count of a node, zero for deleted or unknown ids
    pub fn count_of(&self, id: NodeId) -> u32 {
        self.node(id).map_or(0, Node::count)
    }

    /// Traversal state from the most recent pass
    pub fn state(&self, id: NodeId) -> Option<&TraversalState> {
        if self.contains(id) {
            self.scratch.get(id)
        } else {
            None
        }
    }

    /// Clears the traversal state of every node.
    pub fn reset(&mut self) {
        for state in &mut self.scratch {
            state.reset();
        }
    }

    /// Number of live nodes per occurrence count.
    ///
    /// Bin `i` holds nodes seen exactly `i` times; counts of `bins - 1` or
    /// more share the last bin.
    pub fn count_histogram(&self, bins: usize) -> Vec<usize> {
        let mut hist = vec![0; bins];
        if bins == 0 {
            return hist;
        }
        for node in self.nodes.iter().flatten() {
            let bin = (node.count() as usize).min(bins - 1);
            hist[bin] += 1;
        }
        hist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(graph: &DeBruijnGraph, kmer: &str) -> u32 {
        graph.count_of(graph.node_id(kmer).unwrap())
    }

    #[test]
    fn test_build_valid() {
        let graph = DeBruijnGraph::build(2, &["ATGC", "GCAT"]).unwrap();
        assert_eq!(graph.k(), 2);
        assert!(graph.node_count() > 0);
        assert!(graph.node_id("AT").is_some());
    }

    #[test]
    fn test_build_rejects_empty_input() {
        let reads: Vec<String> = Vec::new();
        assert!(matches!(
            DeBruijnGraph::build(2, &reads),
            Err(AssemblyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_build_rejects_long_k() {
        assert!(matches!(
            DeBruijnGraph::build(10, &["ATGC"]),
            Err(AssemblyError::InvalidInput(_))
        ));
        // The shortest read decides, not the first
        assert!(matches!(
            DeBruijnGraph::build(5, &["ATGCATGC", "ATG"]),
            Err(AssemblyError::InvalidInput(_))
        ));
        assert!(matches!(
            DeBruijnGraph::build(0, &["ATGC"]),
            Err(AssemblyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_build_rejects_invalid_base() {
        assert!(matches!(
            DeBruijnGraph::build(2, &["ATGC", "ATNG"]),
            Err(AssemblyError::InvalidCharacter { character: 'N', .. })
        ));
    }

    #[test]
    fn test_add_node_counts_every_sighting() {
        let mut graph = DeBruijnGraph::build(2, &["ATGC"]).unwrap();
        // AT is a forward source and the target of the reverse CA -> AT
        assert_eq!(count(&graph, "AT"), 2);

        let idx = graph.add_node("AT");
        assert_eq!(graph.count_of(idx), 3);

        let before = graph.node_count();
        let fresh = graph.add_node("GG");
        assert_eq!(fresh, before);
        assert_eq!(graph.node(fresh).unwrap().kmer(), "GG");
        assert_eq!(graph.count_of(fresh), 1);
    }

    #[test]
    fn test_add_arc() {
        let mut graph = DeBruijnGraph::new(2);
        let (at, tg) = graph.add_arc("AT", "TG");
        graph.add_arc("AT", "TG");
        assert_eq!(graph.node(at).unwrap().children(), &[tg]);
        assert_eq!(graph.count_of(at), 2);
        assert_eq!(graph.count_of(tg), 2);
    }

    #[test]
    fn test_kmer_count_accuracy() {
        // Four forward windows and four reverse windows touch AT
        let graph = DeBruijnGraph::build(2, &["ATATAT"]).unwrap();
        assert_eq!(count(&graph, "AT"), 8);
        assert_eq!(count(&graph, "TA"), 8);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_reverse_complement_handling() {
        let graph = DeBruijnGraph::build(2, &["ATGC"]).unwrap();
        for kmer in ["AT", "TG", "GC", "CA"] {
            assert!(graph.node_id(kmer).is_some(), "missing {}", kmer);
        }
        let gc = graph.node_id("GC").unwrap();
        let ca = graph.node_id("CA").unwrap();
        assert!(graph.node(gc).unwrap().children().contains(&ca));
    }

    #[test]
    fn test_read_of_length_k_adds_nothing() {
        let graph = DeBruijnGraph::build(4, &["ATGC"]).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.node_ids().count(), 0);
    }

    #[test]
    fn test_ids_are_sequential() {
        let graph = DeBruijnGraph::build(2, &["ATCG"]).unwrap();
        // Forward and reverse windows interleave per offset
        assert_eq!(graph.node_id("AT"), Some(0));
        assert_eq!(graph.node_id("TC"), Some(1));
        assert_eq!(graph.node_id("CG"), Some(2));
        assert_eq!(graph.node_id("GA"), Some(3));
        assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_count_histogram() {
        let graph = DeBruijnGraph::build(2, &["ATATAT", "CCGG"]).unwrap();
        let hist = graph.count_histogram(5);
        assert_eq!(hist.len(), 5);
        assert_eq!(hist.iter().sum::<usize>(), graph.node_count());
        // AT and TA are seen eight times, CG four times (CCGG is its own
        // reverse complement)
        assert_eq!(hist[4], 3);
        // CC and GG
        assert_eq!(hist[2], 2);
        assert!(graph.count_histogram(0).is_empty());
    }
}
