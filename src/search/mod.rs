//! The search machinery shared by [`Graph::shortest_path`] and [`Graph::find_paths`].
//!
//! Both build a tree of [`TreeNode`](tree::TreeNode)s from the start Node, always expanding the
//! frontier entry with the lowest estimated total distance. When a cheaper way to an entry that
//! is still on the frontier is found, that entry is moved below the cheaper parent.

mod config;
pub use self::config::{Collect, FindPathsConfig, LimitPolicy};

mod open_list;
use self::open_list::OpenList;

mod tree;
use self::tree::{SearchTree, TreeID};

use crate::{node_id_set_with_cap, Cost, Graph, NodeID, NodeIDSet, Path};

/// All state of one search call
#[derive(Debug)]
struct Search<'g> {
    graph: &'g Graph,
    tree: SearchTree<'g>,
    open: OpenList,
    closed: NodeIDSet,
    root: TreeID,
    /// the Heuristic is the distance to this Node, or 0 if there is none
    target: Option<NodeID>,
    limit: Option<Cost>,
    limit_policy: LimitPolicy,
}

impl<'g> Search<'g> {
    fn new(
        graph: &'g Graph,
        start: NodeID,
        target: Option<NodeID>,
        limit: Option<Cost>,
        limit_policy: LimitPolicy,
    ) -> Search<'g> {
        let mut search = Search {
            graph,
            tree: SearchTree::new(graph),
            open: OpenList::new(),
            closed: node_id_set_with_cap(graph.len()),
            root: 0,
            target,
            limit,
            limit_policy,
        };
        let est_dist_to_go = search.heuristic(start);
        search.root = search.tree.insert(None, start, est_dist_to_go);
        search
    }

    fn heuristic(&self, id: NodeID) -> Cost {
        match self.target {
            Some(target) => self.graph[id].distance_to(&self.graph[target]),
            None => 0,
        }
    }

    /// Puts all exits of `current` on the frontier and closes `current`
    fn expand(&mut self, current: TreeID) {
        let graph = self.graph;
        let grid_node = self.tree[current].grid_node();
        let dist_so_far = self.tree[current].dist_so_far();
        search_trace!("expanding GridNode {} at distance {}", grid_node, dist_so_far);

        // closed first: an exit back onto itself is skipped
        self.closed.insert(grid_node);

        for &exit in graph[grid_node].exits() {
            if self.closed.contains(&exit) {
                continue;
            }
            let tentative = dist_so_far.saturating_add(graph[exit].entry_cost());

            if matches!(self.limit, Some(limit) if tentative > limit) {
                match self.limit_policy {
                    LimitPolicy::Skip => continue,
                    LimitPolicy::StopScan => break,
                }
            }

            if let Some(open_id) = self.open.find(exit) {
                if tentative < self.tree[open_id].dist_so_far() {
                    self.tree.relocate(open_id, current);
                    self.open.resort(&self.tree);
                    search_trace!("relocated GridNode {} below GridNode {}", exit, grid_node);
                }
            } else {
                let est_dist_to_go = self.heuristic(exit);
                let id = self.tree.insert(Some(current), exit, est_dist_to_go);
                self.open.insert(&self.tree, id);
            }
        }

        search_trace!("open: {} | closed: {}", self.open.len(), self.closed.len());
    }

    fn pop_lowest(&mut self) -> Option<TreeID> {
        self.open.pop_lowest(&self.tree)
    }

    fn path_to(&self, id: TreeID) -> Path<NodeID> {
        Path::new(self.tree.path(id), self.tree[id].dist_so_far())
    }
}

/// A* from `start` to `finish`. Exits beyond `limit` are skipped individually.
pub(crate) fn shortest_path(
    graph: &Graph,
    start: NodeID,
    finish: NodeID,
    limit: Option<Cost>,
) -> Option<Path<NodeID>> {
    let mut search = Search::new(graph, start, Some(finish), limit, LimitPolicy::Skip);

    let mut current = Some(search.root);
    while let Some(id) = current {
        if search.tree[id].grid_node() == finish {
            return Some(search.path_to(id));
        }
        search.expand(id);
        current = search.pop_lowest();
    }
    None
}

/// Expands everything reachable from `start` and records Paths as configured.
pub(crate) fn find_paths(graph: &Graph, start: NodeID, config: FindPathsConfig) -> Option<Vec<Path<NodeID>>> {
    let mut search = Search::new(graph, start, None, config.limit, config.limit_policy);
    let mut paths = vec![];

    let mut current = Some(search.root);
    while let Some(id) = current {
        search.expand(id);

        if id != search.root && config.collect.records(search.tree[id].dist_so_far(), config.limit) {
            paths.push(search.path_to(id));
        }
        current = search.pop_lowest();
    }

    if paths.is_empty() {
        None
    } else {
        Some(paths)
    }
}
