mod grid_node;
pub use self::grid_node::GridNode;

use crate::{
    neighbors::Neighborhood,
    search::{self, FindPathsConfig},
    Cost, NodeID, Path, Point, PointMap,
};

/// A directed Graph of weighted [`GridNode`]s.
///
/// The Graph owns its Nodes and hands out [`NodeID`]s to refer to them. All searches borrow the
/// Graph immutably, so it can not change while a search is running. Changes between searches
/// are fine: every search starts from scratch.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: slab::Slab<GridNode>,
}

impl Graph {
    /// Creates an empty Graph
    pub fn new() -> Graph {
        Graph {
            nodes: slab::Slab::new(),
        }
    }

    /// Creates an empty Graph with room for `capacity` Nodes
    pub fn with_capacity(capacity: usize) -> Graph {
        Graph {
            nodes: slab::Slab::with_capacity(capacity),
        }
    }

    /// Creates a Graph from a rectangular Grid.
    ///
    /// Every Point with a non-negative cost becomes a Node with that `entry_cost`. Points with
    /// a negative cost are left out. Every Node gets an exit to every neighboring Node, in the
    /// order produced by the [`Neighborhood`].
    ///
    /// Returns the Graph together with a lookup from Grid position to [`NodeID`].
    ///
    /// ## Examples
    /// ```
    /// use weighted_pathfinding::{prelude::*, Point};
    ///
    /// // -1 = no Node
    /// let grid = [
    ///     [1, 1, 1],
    ///     [1, -1, 5],
    ///     [1, 1, 1],
    /// ];
    /// let (width, height) = (grid[0].len(), grid.len());
    ///
    /// let (graph, ids) = Graph::from_grid(
    ///     (width, height),
    ///     |(x, y): Point| grid[y][x],
    ///     &ManhattanNeighborhood::new(width, height),
    /// );
    ///
    /// assert_eq!(graph.len(), 8);
    /// assert!(!ids.contains_key(&(1, 1)));
    /// assert_eq!(graph[ids[&(2, 1)]].entry_cost(), 5);
    /// assert_eq!(graph[ids[&(0, 0)]].exits(), &[ids[&(1, 0)], ids[&(0, 1)]]);
    /// ```
    pub fn from_grid<N: Neighborhood>(
        (width, height): (usize, usize),
        get_cost: impl Fn(Point) -> isize,
        neighborhood: &N,
    ) -> (Graph, PointMap<NodeID>) {
        let mut graph = Graph::with_capacity(width * height);
        let mut ids = PointMap::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                let cost = get_cost((x, y));
                if cost < 0 {
                    continue;
                }
                let id = graph.add_node(cost as Cost, (x as isize, y as isize));
                ids.insert((x, y), id);
            }
        }

        for (&pos, &id) in ids.iter() {
            for other in neighborhood.get_all_neighbors(pos) {
                if let Some(&other_id) = ids.get(&other) {
                    graph.add_exit(id, other_id);
                }
            }
        }

        (graph, ids)
    }

    /// The number of Nodes in the Graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Graph has no Nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a Node without any exits and returns its [`NodeID`]
    ///
    /// Path distances saturate at `Cost::MAX` instead of overflowing.
    pub fn add_node(&mut self, entry_cost: Cost, pos: (isize, isize)) -> NodeID {
        self.nodes.insert(GridNode::new(entry_cost, pos))
    }

    /// Removes a Node along with every exit leading to it.
    ///
    /// The [`NodeID`] may be handed out again by a later [`add_node`](Graph::add_node).
    #[track_caller]
    pub fn remove_node(&mut self, id: NodeID) -> GridNode {
        let node = self.nodes.remove(id);
        for (_, other) in self.nodes.iter_mut() {
            other.remove_exit(id);
        }
        node
    }

    /// Adds a directed exit from `src` to `target`.
    ///
    /// Returns `false` if that exit already existed. Exits are kept in insertion order.
    /// An exit from a Node onto itself is allowed, but never used by a search.
    #[track_caller]
    pub fn add_exit(&mut self, src: NodeID, target: NodeID) -> bool {
        assert!(
            self.nodes.contains(target),
            "Invalid NodeID {} as exit target",
            target
        );
        self[src].add_exit(target)
    }

    /// Removes the directed exit from `src` to `target`, returning `false` if there was none
    #[track_caller]
    pub fn remove_exit(&mut self, src: NodeID, target: NodeID) -> bool {
        self[src].remove_exit(target)
    }

    /// Adds exits from `a` to `b` and from `b` to `a`
    #[track_caller]
    pub fn connect(&mut self, a: NodeID, b: NodeID) {
        self.add_exit(a, b);
        self.add_exit(b, a);
    }

    /// Changes the Cost of stepping onto a Node
    #[track_caller]
    pub fn set_entry_cost(&mut self, id: NodeID, entry_cost: Cost) {
        self[id].set_entry_cost(entry_cost);
    }

    /// Returns the Node with the given [`NodeID`], if it exists
    pub fn node(&self, id: NodeID) -> Option<&GridNode> {
        self.nodes.get(id)
    }

    /// Iterates over all Nodes and their [`NodeID`]s
    pub fn iter(&self) -> slab::Iter<'_, GridNode> {
        self.nodes.iter()
    }

    /// Finds the cheapest Path from `start` to `finish` using the A* Algorithm.
    ///
    /// `limit` is the maximum Cost a Path may have. Paths that would exceed it are not explored.
    ///
    /// ## Returns
    /// The Path, if one was found, or `None` if `finish` cannot be reached within `limit`.
    /// The first Node in the Path is always `start` and the last is `finish`.
    ///
    /// ## Examples
    /// ```
    /// # use weighted_pathfinding::Graph;
    /// // a(1) --- b(4) --- d(1)
    /// //   \              /
    /// //    c(2) ------- /
    /// let mut graph = Graph::new();
    /// let a = graph.add_node(1, (0, 0));
    /// let b = graph.add_node(4, (1, 0));
    /// let c = graph.add_node(2, (0, 1));
    /// let d = graph.add_node(1, (2, 0));
    /// graph.connect(a, b);
    /// graph.connect(b, d);
    /// graph.connect(a, c);
    /// graph.connect(c, d);
    ///
    /// let path = graph.shortest_path(a, d, None).unwrap();
    /// assert_eq!(path, vec![a, c, d]);
    /// assert_eq!(path.distance(), 3);
    ///
    /// // too expensive
    /// assert_eq!(graph.shortest_path(a, d, Some(2)), None);
    ///
    /// // a Path from a Node to itself costs nothing
    /// assert_eq!(graph.shortest_path(a, a, Some(0)).unwrap().distance(), 0);
    /// ```
    pub fn shortest_path(&self, start: NodeID, finish: NodeID, limit: Option<Cost>) -> Option<Path<NodeID>> {
        timed!(
            "shortest_path",
            search::shortest_path(self, start, finish, limit)
        )
    }

    /// Runs [`shortest_path`](Graph::shortest_path) for several `(start, finish)` pairs.
    ///
    /// The searches are independent of each other. With the `parallel` feature enabled, they
    /// are run on the rayon Thread Pool. The results are in the same order as `queries`.
    pub fn shortest_paths(&self, queries: &[(NodeID, NodeID)], limit: Option<Cost>) -> Vec<Option<Path<NodeID>>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            queries
                .par_iter()
                .map(|&(start, finish)| self.shortest_path(start, finish, limit))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            queries
                .iter()
                .map(|&(start, finish)| self.shortest_path(start, finish, limit))
                .collect()
        }
    }

    /// Finds the cheapest Path from `start` to every Node reachable within `limit`.
    ///
    /// With `limit == None` every reachable Node is visited. The Paths are ordered by when their
    /// last Node was finalized, which means by increasing Cost. `start` itself is not included.
    ///
    /// Returns `None` if no other Node could be reached.
    ///
    /// **Note**: when one exit of a Node would exceed `limit`, the remaining exits of that Node
    /// are not examined either. Use [`find_paths`](Graph::find_paths) with
    /// [`LimitPolicy::Skip`](crate::LimitPolicy::Skip) to examine every exit.
    ///
    /// ## Examples
    /// ```
    /// # use weighted_pathfinding::Graph;
    /// let mut graph = Graph::new();
    /// let a = graph.add_node(1, (0, 0));
    /// let b = graph.add_node(1, (1, 0));
    /// let c = graph.add_node(1, (2, 0));
    /// graph.connect(a, b);
    /// graph.connect(b, c);
    ///
    /// let paths = graph.all_paths(a, None).unwrap();
    /// assert_eq!(paths.len(), 2);
    /// assert_eq!(paths[0], vec![a, b]);
    /// assert_eq!(paths[1], vec![a, b, c]);
    ///
    /// let paths = graph.all_paths(a, Some(1)).unwrap();
    /// assert_eq!(paths.len(), 1);
    ///
    /// assert_eq!(graph.all_paths(a, Some(0)), None);
    /// ```
    pub fn all_paths(&self, start: NodeID, limit: Option<Cost>) -> Option<Vec<Path<NodeID>>> {
        self.find_paths(start, FindPathsConfig::within(limit))
    }

    /// Finds the cheapest Path from `start` to every Node whose cheapest Path costs exactly
    /// `distance`.
    ///
    /// Returns `None` if there are no such Nodes.
    ///
    /// ## Examples
    /// ```
    /// # use weighted_pathfinding::Graph;
    /// let mut graph = Graph::new();
    /// let a = graph.add_node(1, (0, 0));
    /// let b = graph.add_node(2, (1, 0));
    /// let c = graph.add_node(1, (0, 1));
    /// let d = graph.add_node(1, (0, 2));
    /// graph.connect(a, b);
    /// graph.connect(a, c);
    /// graph.connect(c, d);
    ///
    /// let paths = graph.absolute_paths(a, 2).unwrap();
    /// assert_eq!(paths.len(), 2);
    /// assert!(paths.iter().all(|path| path.distance() == 2));
    ///
    /// assert_eq!(graph.absolute_paths(a, 3), None);
    /// ```
    pub fn absolute_paths(&self, start: NodeID, distance: Cost) -> Option<Vec<Path<NodeID>>> {
        self.find_paths(start, FindPathsConfig::exactly(distance))
    }

    /// Enumerates the cheapest Paths from `start` as configured by `config`.
    ///
    /// [`all_paths`](Graph::all_paths) and [`absolute_paths`](Graph::absolute_paths) are
    /// shorthands for the two common configurations.
    ///
    /// ## Examples
    /// ```
    /// # use weighted_pathfinding::{Graph, FindPathsConfig, LimitPolicy};
    /// let mut graph = Graph::new();
    /// let start = graph.add_node(1, (0, 0));
    /// let swamp = graph.add_node(9, (1, 0));
    /// let road = graph.add_node(1, (0, 1));
    /// graph.add_exit(start, swamp);
    /// graph.add_exit(start, road);
    ///
    /// // the swamp exceeds the limit, so the road is never looked at
    /// assert_eq!(graph.all_paths(start, Some(3)), None);
    ///
    /// let config = FindPathsConfig {
    ///     limit_policy: LimitPolicy::Skip,
    ///     ..FindPathsConfig::within(Some(3))
    /// };
    /// let paths = graph.find_paths(start, config).unwrap();
    /// assert_eq!(paths[0], vec![start, road]);
    /// ```
    pub fn find_paths(&self, start: NodeID, config: FindPathsConfig) -> Option<Vec<Path<NodeID>>> {
        timed!("find_paths", search::find_paths(self, start, config))
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for Graph {
    type Output = GridNode;
    #[track_caller]
    fn index(&self, index: NodeID) -> &GridNode {
        &self.nodes[index]
    }
}
impl IndexMut<NodeID> for Graph {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut GridNode {
        &mut self.nodes[index]
    }
}
