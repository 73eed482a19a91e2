//! A Module with the most common Neighborhoods

use crate::Point;
use std::fmt::Debug;

/// Defines which Tiles of a Grid are connected when building a [`Graph`](crate::Graph) with
/// [`Graph::from_grid`](crate::Graph::from_grid).
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`ManhattanNeighborhood`] for Agents that can move
/// up, down, left or right
/// - [`MooreNeighborhood`] for Agents that can move
/// up, down, left, right, as well as the 4 diagonals (up-right, ...)
pub trait Neighborhood: Clone + Debug {
    /// Provides a list of Neighbors of a Point
    ///
    /// Note that it is not necessary to check whether the Tile at a Point exists in the Graph.
    /// That check is done later.
    ///
    /// The order of the Neighbors becomes the order of the exits, which decides between
    /// Paths of equal Cost.
    fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>>;
}

fn neighbors_in(
    point: Point,
    (width, height): (usize, usize),
    offsets: &'static [(isize, isize)],
) -> Box<dyn Iterator<Item = Point>> {
    let iter = offsets
        .iter()
        .map(move |(dx, dy)| (point.0 as isize + dx, point.1 as isize + dy))
        .filter(move |(x, y)| *x >= 0 && *y >= 0 && (*x as usize) < width && (*y as usize) < height)
        .map(|(x, y)| (x as usize, y as usize));

    Box::new(iter)
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
/// This is the Metric used by [`GridNode::distance_to`](crate::GridNode::distance_to).
///
/// ```text
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ManhattanNeighborhood {
    width: usize,
    height: usize,
}

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood.
    ///
    /// `width` and `height` are the size of the Grid to move on.
    pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { width, height }
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>> {
        neighbors_in(
            point,
            (self.width, self.height),
            &[(0, -1), (1, 0), (0, 1), (-1, 0)],
        )
    }
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood),
/// [Maximum Metric](https://en.wikipedia.org/wiki/Chebyshev_distance) or Chebyshev Metric.
///
/// Note that the Heuristic of [`Graph::shortest_path`](crate::Graph::shortest_path) is the
/// Manhattan distance, which overestimates diagonal steps.
///
/// ```text
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MooreNeighborhood {
    width: usize,
    height: usize,
}

impl MooreNeighborhood {
    /// Creates a new MooreNeighborhood.
    ///
    /// `width` and `height` are the size of the Grid to move on.
    pub fn new(width: usize, height: usize) -> MooreNeighborhood {
        MooreNeighborhood { width, height }
    }
}

impl Neighborhood for MooreNeighborhood {
    fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>> {
        neighbors_in(
            point,
            (self.width, self.height),
            &[
                (0, -1),
                (1, -1),
                (1, 0),
                (1, 1),
                (0, 1),
                (-1, 1),
                (-1, 0),
                (-1, -1),
            ],
        )
    }
}

#[test]
fn test_manhattan_get_all_neighbors() {
    let neighborhood = ManhattanNeighborhood::new(5, 5);
    assert_eq!(
        neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
        vec![(0, 1), (1, 2), (0, 3)],
    );
}

#[test]
fn test_moore_get_all_neighbors() {
    let neighborhood = MooreNeighborhood::new(5, 5);
    assert_eq!(
        neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
        vec![(0, 1), (1, 1), (1, 2), (1, 3), (0, 3)],
    );
}

#[test]
fn test_corner_neighbors() {
    let neighborhood = ManhattanNeighborhood::new(2, 2);
    assert_eq!(
        neighborhood.get_all_neighbors((1, 1)).collect::<Vec<_>>(),
        vec![(1, 0), (0, 1)],
    );
}
