use crate::{Cost, NodeID};

/// A single traversable Node of a [`Graph`](crate::Graph).
///
/// Every Node charges its `entry_cost` whenever a Path steps onto it. The position is only
/// used to estimate remaining distances during a search and has no influence on the Cost of
/// a Path.
///
/// The exits are directed: an exit from `a` to `b` does not imply one from `b` to `a`.
/// Use [`Graph::connect`](crate::Graph::connect) to link two Nodes both ways.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridNode {
    entry_cost: Cost,
    pos: (isize, isize),
    exits: Vec<NodeID>,
}

impl GridNode {
    pub(crate) fn new(entry_cost: Cost, pos: (isize, isize)) -> GridNode {
        GridNode {
            entry_cost,
            pos,
            exits: Vec::new(),
        }
    }

    /// The Cost of stepping onto this Node
    pub fn entry_cost(&self) -> Cost {
        self.entry_cost
    }

    /// The position of this Node
    pub fn pos(&self) -> (isize, isize) {
        self.pos
    }

    /// The x coordinate of this Node
    pub fn x(&self) -> isize {
        self.pos.0
    }

    /// The y coordinate of this Node
    pub fn y(&self) -> isize {
        self.pos.1
    }

    /// The Nodes reachable in one step from this Node, in the order they were added
    pub fn exits(&self) -> &[NodeID] {
        &self.exits
    }

    /// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between the
    /// positions of two Nodes.
    ///
    /// This is the Heuristic of [`Graph::shortest_path`](crate::Graph::shortest_path). Since
    /// it ignores entry costs, it can overestimate the remaining Cost on Graphs where some
    /// Nodes are cheaper than 1, in which case the returned Path is not guaranteed to be optimal.
    ///
    /// ## Examples
    /// ```
    /// # use weighted_pathfinding::Graph;
    /// let mut graph = Graph::new();
    /// let a = graph.add_node(5, (-12, -8));
    /// let b = graph.add_node(5, (6, 7));
    ///
    /// assert_eq!(graph[a].distance_to(&graph[b]), 33);
    /// assert_eq!(graph[b].distance_to(&graph[a]), 33);
    /// ```
    pub fn distance_to(&self, other: &GridNode) -> Cost {
        self.pos.0.abs_diff(other.pos.0) + self.pos.1.abs_diff(other.pos.1)
    }

    pub(crate) fn set_entry_cost(&mut self, entry_cost: Cost) {
        self.entry_cost = entry_cost;
    }

    /// returns `false` if the exit already existed
    pub(crate) fn add_exit(&mut self, target: NodeID) -> bool {
        if self.exits.contains(&target) {
            return false;
        }
        self.exits.push(target);
        true
    }

    /// returns `false` if there was no such exit
    pub(crate) fn remove_exit(&mut self, target: NodeID) -> bool {
        match self.exits.iter().position(|&id| id == target) {
            Some(index) => {
                // exit order decides ties between equal Paths
                self.exits.remove(index);
                true
            }
            None => false,
        }
    }
}
