use crate::Cost;

use std::sync::Arc;

/// The result of a search: a sequence of Nodes and the total Cost of walking along them.
///
/// The first Node is where the Path starts, the last is where it ends. Its Cost is not
/// included in the `distance`, since the Path is already standing on it. This means that a
/// Path with a single Node has a distance of `0`.
///
/// Paths are immutable once created and cheap to clone.
///
/// Paths are ordered by `distance` alone, so two different Paths of the same Cost compare as
/// [`Ordering::Equal`](std::cmp::Ordering::Equal) while not being `==`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    path: Arc<[P]>,
    distance: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use weighted_pathfinding::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 42);
    ///
    /// assert_eq!(path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.distance(), 42);
    /// ```
    pub fn new(path: Vec<P>, distance: Cost) -> Path<P> {
        Path {
            path: path.into(),
            distance,
        }
    }

    /// The total Cost of the Path
    pub fn distance(&self) -> Cost {
        self.distance
    }

    /// The number of Nodes in the Path, including start and end
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path has no Nodes
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The first Node of the Path
    pub fn start(&self) -> Option<&P> {
        self.path.first()
    }

    /// The last Node of the Path
    pub fn end(&self) -> Option<&P> {
        self.path.last()
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path[..] == rhs[..]
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.path[..] == rhs[..]
    }
}

use std::cmp::Ordering;

/// Compares the `distance` only
impl<P: Eq> Ord for Path<P> {
    fn cmp(&self, other: &Path<P>) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}

impl<P: Eq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.distance)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}
