use crate::Cost;

/// Which of the reached Nodes [`Graph::find_paths`](crate::Graph::find_paths) returns Paths for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collect {
    /// every reached Node except the start
    All,
    /// only Nodes whose cheapest Path costs exactly the `limit`.
    /// Nothing is collected if there is no `limit`.
    Exact,
}

impl Collect {
    pub(crate) fn records(self, distance: Cost, limit: Option<Cost>) -> bool {
        match self {
            Collect::All => true,
            Collect::Exact => limit == Some(distance),
        }
    }
}

/// What happens when an exit of a Node would lead beyond the `limit`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitPolicy {
    /// ignore that exit and keep looking at the other exits of the Node
    Skip,
    /// ignore that exit and all exits of the Node after it
    StopScan,
}

/// Options for [`Graph::find_paths`](crate::Graph::find_paths)
///
/// Default options:
/// ```
/// # use weighted_pathfinding::{FindPathsConfig, Collect, LimitPolicy};
/// assert_eq!(
///     FindPathsConfig {
///         limit: None,
///         collect: Collect::All,
///         limit_policy: LimitPolicy::StopScan,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FindPathsConfig {
    /// The maximum Cost of any Path (defaults to `None`: no limit)
    pub limit: Option<Cost>,
    /// Which Paths to return (defaults to [`Collect::All`])
    pub collect: Collect,
    /// How exits beyond the `limit` are handled (defaults to [`LimitPolicy::StopScan`])
    ///
    /// Since the exits of a Node are not sorted by Cost, [`LimitPolicy::StopScan`] can miss
    /// Nodes that are within the `limit`. [`LimitPolicy::Skip`] always finds them.
    pub limit_policy: LimitPolicy,
}

impl FindPathsConfig {
    /// Paths to every reachable Node
    pub const ALL: FindPathsConfig = FindPathsConfig {
        limit: None,
        collect: Collect::All,
        limit_policy: LimitPolicy::StopScan,
    };

    /// Paths to every Node within `limit`, as used by [`Graph::all_paths`](crate::Graph::all_paths)
    ///
    /// ```
    /// # use weighted_pathfinding::{FindPathsConfig, Collect};
    /// let config = FindPathsConfig::within(Some(7));
    /// assert_eq!(config.limit, Some(7));
    /// assert_eq!(config.collect, Collect::All);
    /// ```
    pub fn within(limit: Option<Cost>) -> FindPathsConfig {
        FindPathsConfig {
            limit,
            ..FindPathsConfig::ALL
        }
    }

    /// Paths to every Node at exactly `distance`, as used by
    /// [`Graph::absolute_paths`](crate::Graph::absolute_paths)
    pub fn exactly(distance: Cost) -> FindPathsConfig {
        FindPathsConfig {
            limit: Some(distance),
            collect: Collect::Exact,
            ..FindPathsConfig::ALL
        }
    }
}

impl Default for FindPathsConfig {
    fn default() -> FindPathsConfig {
        FindPathsConfig::ALL
    }
}
