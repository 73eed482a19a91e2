//! A Module with some utilities for working with NodeIDs

use crate::Point;
use std::hash::{BuildHasherDefault, Hasher};

/// The Type used to reference a [`GridNode`](crate::GridNode) in a [`Graph`](crate::Graph)
pub type NodeID = usize;

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIDs with a faster Hasher
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V, BuildHasherDefault<NodeIDHasher>>;
/// A specialized [`HashSet`](hashbrown::HashSet) for NodeIDs with a faster Hasher
pub type NodeIDSet = hashbrown::HashSet<NodeID, BuildHasherDefault<NodeIDHasher>>;

/// A [`HashMap`](hashbrown::HashMap) keyed by Points on a Grid
pub type PointMap<V> = hashbrown::HashMap<Point, V>;

/// A [`Hasher`](Hasher) specialized on NodeIDs
///
/// NodeIDs are dense Slab indices, so the identity function is a perfectly good hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIDHasher(u64);

impl Hasher for NodeIDHasher {
    /// panics, since only NodeIDs are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with NodeIDs")
    }
    /// Writes a single NodeID into this hasher.
    fn write_usize(&mut self, id: NodeID) {
        self.0 = id as u64
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

/// create a new [`NodeIDMap`] with at least the given capacity
pub fn node_id_map_with_cap<V>(capacity: usize) -> NodeIDMap<V> {
    NodeIDMap::with_capacity_and_hasher(capacity, Default::default())
}
/// create a new [`NodeIDSet`] with at least the given capacity
pub fn node_id_set_with_cap(capacity: usize) -> NodeIDSet {
    NodeIDSet::with_capacity_and_hasher(capacity, Default::default())
}
