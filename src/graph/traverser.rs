use std::cmp::Reverse;

use crate::graph::dbg::DeBruijnGraph;
use crate::graph::node::NodeId;

/// Work list entry for the post-order depth walk
enum Visit {
    Enter(NodeId),
    /// Children already sorted by descending count
    Exit(NodeId, Vec<NodeId>),
}

impl DeBruijnGraph {
    /// Children of `id`, highest occurrence count first.
    ///
    /// The sort is stable, so equally counted children keep the order in
    /// which their edges were first recorded.
    pub fn sorted_children(&self, id: NodeId) -> Vec<NodeId> {
        let mut children = match self.node(id) {
            Some(node) => node.children().to_vec(),
            None => return Vec::new(),
        };
        children.sort_by_key(|&c| Reverse(self.count_of(c)));
        children
    }

    /// Length in nodes of the longest chain starting at `start`.
    ///
    /// Records the depth and best child of every node finished along the
    /// way. A node is expanded at most once per pass: finished nodes report
    /// their stored depth, and a node still being expanded (a back edge of a
    /// cycle) reports 0 and is never picked as a best child. Among children
    /// of equal depth the first in [`sorted_children`] order wins.
    ///
    /// Uses an explicit stack, so chains of any length are safe.
    ///
    /// [`sorted_children`]: DeBruijnGraph::sorted_children
    pub fn depth(&mut self, start: NodeId) -> usize {
        if !self.contains(start) {
            return 0;
        }

        let mut stack = vec![Visit::Enter(start)];
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(id) => {
                    if self.scratch[id].visited {
                        continue;
                    }
                    self.scratch[id].visited = true;
                    let children = self.sorted_children(id);
                    let pending: Vec<Visit> = children.iter().rev().map(|&c| Visit::Enter(c)).collect();
                    stack.push(Visit::Exit(id, children));
                    stack.extend(pending);
                }
                Visit::Exit(id, children) => {
                    let (mut max_depth, mut max_child) = (0, None);
                    for child in children {
                        let depth = self.scratch[child].depth;
                        if depth > max_depth {
                            max_depth = depth;
                            max_child = Some(child);
                        }
                    }
                    let state = &mut self.scratch[id];
                    state.depth = max_depth + 1;
                    state.max_depth_child = max_child;
                }
            }
        }

        self.scratch[start].depth
    }
}
