use ahash::AHashSet;

/// Dense index of a node in the graph arena
pub type NodeId = usize;

/// Persistent record for one distinct k-mer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kmer: String,
    /// Outgoing edges in first-seen order. Each target appears once.
    children: Vec<NodeId>,
    count: u32,
}

impl Node {
    pub fn new(kmer: impl Into<String>) -> Self {
        Self {
            kmer: kmer.into(),
            children: Vec::new(),
            count: 0,
        }
    }

    pub fn kmer(&self) -> &str {
        &self.kmer
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Adds an edge; returns false if it was already present.
    pub fn add_child(&mut self, child: NodeId) -> bool {
        if self.children.contains(&child) {
            return false;
        }
        self.children.push(child);
        true
    }

    pub fn increase(&mut self) {
        self.count += 1;
    }

    pub fn remove_children(&mut self, targets: &AHashSet<NodeId>) {
        self.children.retain(|c| !targets.contains(c));
    }
}

/// Scratch state of a node during one longest-path pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalState {
    pub visited: bool,
    /// Nodes on the longest chain starting here, this node included
    pub depth: usize,
    pub max_depth_child: Option<NodeId>,
}

impl TraversalState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
