use crate::{Cost, Graph, NodeID};

/// Index of a [`TreeNode`] inside its [`SearchTree`]
pub(crate) type TreeID = usize;

/// One candidate position of a running search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TreeNode {
    parent: Option<TreeID>,
    grid_node: NodeID,
    dist_so_far: Cost,
    est_dist_to_go: Cost,
    children: Vec<TreeID>,
}

impl TreeNode {
    #[cfg(test)]
    pub fn parent(&self) -> Option<TreeID> {
        self.parent
    }

    pub fn grid_node(&self) -> NodeID {
        self.grid_node
    }

    pub fn dist_so_far(&self) -> Cost {
        self.dist_so_far
    }

    #[cfg(test)]
    pub fn est_dist_to_go(&self) -> Cost {
        self.est_dist_to_go
    }

    #[cfg(test)]
    pub fn children(&self) -> &[TreeID] {
        &self.children
    }

    /// the key the open list is sorted by
    pub fn est_total_dist(&self) -> Cost {
        self.dist_so_far.saturating_add(self.est_dist_to_go)
    }
}

/// The search tree of a single search.
///
/// All TreeNodes live in one Slab and refer to each other by [`TreeID`]. Every Node keeps
/// `dist_so_far == parent.dist_so_far + entry_cost`, with `0` for the root.
#[derive(Debug)]
pub(crate) struct SearchTree<'g> {
    graph: &'g Graph,
    nodes: slab::Slab<TreeNode>,
}

impl<'g> SearchTree<'g> {
    pub fn new(graph: &'g Graph) -> SearchTree<'g> {
        SearchTree {
            graph,
            nodes: slab::Slab::new(),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Adds a Node for `grid_node` below `parent`, or a root if `parent` is `None`
    #[track_caller]
    pub fn insert(&mut self, parent: Option<TreeID>, grid_node: NodeID, est_dist_to_go: Cost) -> TreeID {
        let dist_so_far = self.dist_through(parent, grid_node);
        let id = self.nodes.insert(TreeNode {
            parent,
            grid_node,
            dist_so_far,
            est_dist_to_go,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(id);
        }
        id
    }

    /// Moves `id` (and everything below it) to `new_parent`.
    ///
    /// `dist_so_far` is recalculated for the entire moved subtree. `new_parent` must not be
    /// part of that subtree.
    #[track_caller]
    pub fn relocate(&mut self, id: TreeID, new_parent: TreeID) {
        debug_assert!(
            !self.is_in_subtree(new_parent, id),
            "TreeNode {} cannot be moved below itself",
            id
        );

        if let Some(old_parent) = self.nodes[id].parent {
            let siblings = &mut self.nodes[old_parent].children;
            if let Some(index) = siblings.iter().position(|&child| child == id) {
                siblings.swap_remove(index);
            }
        }

        self.nodes[id].parent = Some(new_parent);
        self.nodes[new_parent].children.push(id);

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &self.nodes[current];
            let dist_so_far = self.dist_through(node.parent, node.grid_node);

            let node = &mut self.nodes[current];
            node.dist_so_far = dist_so_far;
            stack.extend_from_slice(&node.children);
        }
    }

    /// The GridNodes from the root down to `id`
    #[track_caller]
    pub fn path(&self, id: TreeID) -> Vec<NodeID> {
        let mut steps = vec![];
        let mut current = Some(id);
        while let Some(id) = current {
            let node = &self.nodes[id];
            steps.push(node.grid_node);
            current = node.parent;
        }
        steps.reverse();
        steps
    }

    fn dist_through(&self, parent: Option<TreeID>, grid_node: NodeID) -> Cost {
        match parent {
            Some(parent) => self.nodes[parent]
                .dist_so_far
                .saturating_add(self.graph[grid_node].entry_cost()),
            None => 0,
        }
    }

    fn is_in_subtree(&self, mut id: TreeID, root: TreeID) -> bool {
        loop {
            if id == root {
                return true;
            }
            match self.nodes[id].parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }
}

use std::ops::Index;
impl Index<TreeID> for SearchTree<'_> {
    type Output = TreeNode;
    #[track_caller]
    fn index(&self, index: TreeID) -> &TreeNode {
        &self.nodes[index]
    }
}
