use super::tree::{SearchTree, TreeID};
use crate::{NodeID, NodeIDMap};

use std::collections::VecDeque;

/// Inserts `element` in front of the first entry with a value of at least its own.
///
/// Among equal values, the newest element comes first.
fn ordered_insert<T, V, F>(entries: &mut VecDeque<T>, element: T, get_value: F)
where
    V: Ord,
    F: Fn(&T) -> V,
{
    let value = get_value(&element);
    match entries.iter().position(|other| get_value(other) >= value) {
        Some(index) => entries.insert(index, element),
        None => entries.push_back(element),
    }
}

/// The frontier of a search: all TreeNodes that were discovered but not yet expanded,
/// ordered by [`est_total_dist`](super::tree::TreeNode::est_total_dist).
///
/// There is at most one live entry per GridNode.
#[derive(Clone, Debug, Default)]
pub(crate) struct OpenList {
    entries: VecDeque<TreeID>,
    live: NodeIDMap<TreeID>,
}

impl OpenList {
    pub fn new() -> OpenList {
        OpenList::default()
    }

    #[cfg(any(test, feature = "log"))]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a TreeNode, keeping the list sorted.
    ///
    /// ## Panics
    /// if the list already has an entry for the same GridNode
    #[track_caller]
    pub fn insert(&mut self, tree: &SearchTree, id: TreeID) {
        let grid_node = tree[id].grid_node();
        if let Some(existing) = self.live.insert(grid_node, id) {
            panic!(
                "Open list corrupted: GridNode {} is referenced by TreeNodes {} and {}",
                grid_node, existing, id
            );
        }
        ordered_insert(&mut self.entries, id, |&id| tree[id].est_total_dist());
    }

    /// The live entry for `grid_node`, if there is one
    pub fn find(&self, grid_node: NodeID) -> Option<TreeID> {
        self.live.get(&grid_node).copied()
    }

    /// Restores the order after the distance of an entry changed
    pub fn resort(&mut self, tree: &SearchTree) {
        self.entries
            .make_contiguous()
            .sort_by_key(|&id| tree[id].est_total_dist());
    }

    /// Removes and returns the entry with the lowest estimated total distance
    pub fn pop_lowest(&mut self, tree: &SearchTree) -> Option<TreeID> {
        let id = self.entries.pop_front()?;
        self.live.remove(&tree[id].grid_node());
        Some(id)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = TreeID> + '_ {
        self.entries.iter().copied()
    }
}
