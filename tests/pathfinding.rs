use weighted_pathfinding::{prelude::*, Point};

use nanorand::{Rng, WyRand};

const ROWS: [[isize; 5]; 5] = [
    [1, 1, 1, 1, 1],
    [6, 0, 0, 0, 1],
    [1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0],
    [1, 1, 1, 1, 1],
];

/// The corridor map, built by hand: 0 = no Node, exits in the order left, right, up, down
fn corridor() -> (Graph, Vec<Vec<Option<NodeID>>>) {
    let mut graph = Graph::new();
    let mut ids = vec![vec![None; 5]; 5];
    for (y, row) in ROWS.iter().enumerate() {
        for (x, &cost) in row.iter().enumerate() {
            if cost != 0 {
                ids[x][y] = Some(graph.add_node(cost as Cost, (x as isize, y as isize)));
            }
        }
    }
    for y in 0..5 {
        for x in 0..5 {
            let Some(id) = ids[x][y] else { continue };
            let neighbors = [
                x.checked_sub(1).map(|x| (x, y)),
                Some((x + 1, y)).filter(|&(x, _)| x < 5),
                y.checked_sub(1).map(|y| (x, y)),
                Some((x, y + 1)).filter(|&(_, y)| y < 5),
            ];
            for (nx, ny) in neighbors.into_iter().flatten() {
                if let Some(other) = ids[nx][ny] {
                    graph.add_exit(id, other);
                }
            }
        }
    }
    (graph, ids)
}

fn nodes(ids: &[Vec<Option<NodeID>>], points: &[Point]) -> Vec<NodeID> {
    points.iter().map(|&(x, y)| ids[x][y].unwrap()).collect()
}

#[track_caller]
fn assert_path(path: Option<&Path<NodeID>>, expected: &[NodeID], distance: Cost) {
    let path = path.expect("no Path found");
    assert_eq!(path.len(), expected.len(), "Path has wrong number of nodes");
    assert_eq!(path.distance(), distance, "Path of incorrect distance");
    assert_eq!(path, &expected.to_vec());
}

#[test]
fn shortest_path_through_corridor() {
    let (graph, ids) = corridor();
    #[rustfmt::skip]
    let long_path = nodes(
        &ids,
        &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 4), (2, 4), (3, 4), (4, 4)],
    );
    let (start, finish) = (long_path[0], long_path[8]);

    let path = graph.shortest_path(start, finish, None);
    assert_path(path.as_ref(), &long_path, 13);

    for limit in 0..13 {
        let path = graph.shortest_path(start, finish, Some(limit));
        assert!(path.is_none(), "Path returned, in spite of limit {} being too low", limit);
    }

    for limit in 13..=18 {
        let path = graph.shortest_path(start, finish, Some(limit));
        assert_path(path.as_ref(), &long_path, 13);
    }
}

#[test]
fn shortest_path_to_self() {
    let (graph, _) = corridor();
    for (id, _) in graph.iter() {
        let path = graph.shortest_path(id, id, None).unwrap();
        assert_eq!(path, vec![id]);
        assert_eq!(path.distance(), 0);
    }
}

#[test]
fn absolute_paths() {
    let (graph, ids) = corridor();
    #[rustfmt::skip]
    let expected = [
        nodes(&ids, &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (4, 1), (4, 2), (3, 2), (2, 2)]),
        nodes(&ids, &[(0, 0), (0, 1), (0, 2), (0, 3)]),
        nodes(&ids, &[(0, 0), (0, 1), (0, 2), (1, 2)]),
    ];

    let paths = graph.absolute_paths(ids[0][0].unwrap(), 8).unwrap();
    assert_eq!(paths.len(), expected.len(), "Wrong # of paths returned");
    for (path, expected) in paths.iter().zip(expected.iter()) {
        assert_path(Some(path), expected, 8);
    }
}

#[test]
fn absolute_paths_at_every_distance() {
    let (graph, ids) = corridor();
    let start = ids[0][0].unwrap();

    assert!(graph.absolute_paths(start, 0).is_none());
    for distance in 1..=13 {
        let paths = graph.absolute_paths(start, distance).unwrap();
        assert!(paths.iter().all(|path| path.distance() == distance));
    }
    assert!(graph.absolute_paths(start, 14).is_none());
}

#[test]
fn all_paths_unlimited() {
    let (graph, ids) = corridor();
    let start = ids[0][0].unwrap();

    let paths = graph.all_paths(start, None).unwrap();
    assert_eq!(paths.len(), graph.len() - 1, "Wrong number of paths produced");
    assert_eq!(paths.len(), 17);

    for path in &paths {
        let end = *path.end().unwrap();
        let direct = graph.shortest_path(start, end, None).unwrap();
        assert_eq!(path.distance(), direct.distance());
    }
    assert!(paths.windows(2).all(|w| w[0].distance() <= w[1].distance()));
}

#[test]
fn all_paths_limited() {
    let (graph, ids) = corridor();
    let start = ids[0][0].unwrap();

    let paths = graph.all_paths(start, Some(7)).unwrap();
    let ends: Vec<NodeID> = paths.iter().map(|path| *path.end().unwrap()).collect();
    #[rustfmt::skip]
    let expected = nodes(
        &ids,
        &[(1, 0), (2, 0), (3, 0), (4, 0), (4, 1), (4, 2), (0, 1), (0, 2), (3, 2)],
    );
    assert_eq!(ends, expected);
    assert!(paths.iter().all(|path| path.distance() <= 7));
}

#[test]
fn from_grid_matches_hand_built() {
    let (width, height) = (5, 5);
    let (graph, ids) = Graph::from_grid(
        (width, height),
        |(x, y)| if ROWS[y][x] == 0 { -1 } else { ROWS[y][x] },
        &ManhattanNeighborhood::new(width, height),
    );
    let path = graph.shortest_path(ids[&(0, 0)], ids[&(4, 4)], None).unwrap();
    assert_eq!(path.distance(), 13);
    assert_eq!(path.len(), 9);
    assert_eq!(graph.all_paths(ids[&(0, 0)], None).unwrap().len(), 17);
    assert_eq!(graph.absolute_paths(ids[&(0, 0)], 8).unwrap().len(), 3);
}

/// Dijkstra without any of the machinery under test
fn reference_distances(graph: &Graph, start: NodeID) -> Vec<Option<Cost>> {
    let size = graph.iter().map(|(id, _)| id + 1).max().unwrap_or(0);
    let mut dist = vec![None; size];
    let mut done = vec![false; size];
    dist[start] = Some(0);
    loop {
        let next = (0..size)
            .filter(|&id| !done[id])
            .filter_map(|id| dist[id].map(|d: Cost| (d, id)))
            .min();
        let Some((d, id)) = next else { break };
        done[id] = true;
        for &exit in graph[id].exits() {
            let candidate = d + graph[exit].entry_cost();
            if dist[exit].map_or(true, |old| candidate < old) {
                dist[exit] = Some(candidate);
            }
        }
    }
    dist
}

#[track_caller]
fn assert_valid(graph: &Graph, path: &Path<NodeID>) {
    for step in path.windows(2) {
        assert!(graph[step[0]].exits().contains(&step[1]), "{} is not an exit of {}", step[1], step[0]);
    }
    let cost: Cost = path.iter().skip(1).map(|&id| graph[id].entry_cost()).sum();
    assert_eq!(path.distance(), cost);
}

fn random_graph(rng: &mut WyRand, size: usize) -> Graph {
    let mut graph = Graph::with_capacity(size);
    let ids: Vec<NodeID> = (0..size)
        .map(|_| {
            let pos = (rng.generate_range(0..20_usize) as isize - 10, rng.generate_range(0..20_usize) as isize - 10);
            graph.add_node(rng.generate_range(0..10_usize), pos)
        })
        .collect();
    for _ in 0..size * 3 {
        let a = ids[rng.generate_range(0..size)];
        let b = ids[rng.generate_range(0..size)];
        if a != b {
            graph.add_exit(a, b);
        }
    }
    graph
}

#[test]
fn all_paths_match_reference() {
    let mut rng = WyRand::new_seed(4);
    for _ in 0..50 {
        let graph = random_graph(&mut rng, 30);
        let start = rng.generate_range(0..graph.len());
        let reference = reference_distances(&graph, start);
        let reachable = reference.iter().filter(|d| d.is_some()).count() - 1;

        match graph.all_paths(start, None) {
            None => assert_eq!(reachable, 0),
            Some(paths) => {
                assert_eq!(paths.len(), reachable);
                for path in &paths {
                    assert_valid(&graph, path);
                    assert_eq!(path.start(), Some(&start));
                    assert_eq!(Some(path.distance()), reference[*path.end().unwrap()]);
                }
            }
        }
    }
}

#[test]
fn exact_paths_match_reference() {
    let mut rng = WyRand::new_seed(7);
    for _ in 0..50 {
        let graph = random_graph(&mut rng, 30);
        let start = rng.generate_range(0..graph.len());
        let distance = rng.generate_range(0..15_usize);
        let reference = reference_distances(&graph, start);

        let mut expected: Vec<NodeID> = (0..reference.len())
            .filter(|&id| id != start && reference[id] == Some(distance))
            .collect();
        expected.sort_unstable();

        let config = FindPathsConfig {
            limit_policy: LimitPolicy::Skip,
            ..FindPathsConfig::exactly(distance)
        };
        let mut found: Vec<NodeID> = graph
            .find_paths(start, config)
            .unwrap_or_default()
            .iter()
            .map(|path| *path.end().unwrap())
            .collect();
        found.sort_unstable();
        assert_eq!(found, expected);

        // the default policy can miss cheaper routes, but every Path it returns is real
        for path in graph.absolute_paths(start, distance).unwrap_or_default() {
            assert_valid(&graph, &path);
            assert_eq!(path.distance(), distance);
            assert_eq!(path.start(), Some(&start));
        }
    }
}

#[test]
fn shortest_paths_on_grids_are_optimal() {
    let mut rng = WyRand::new_seed(11);
    let (width, height) = (12, 12);
    for _ in 0..20 {
        // 0 = wall, otherwise costs 1 to 9, so the Manhattan distance never overestimates
        let costs: Vec<isize> = (0..width * height)
            .map(|_| rng.generate_range(0..10_usize) as isize)
            .collect();
        let (graph, ids) = Graph::from_grid(
            (width, height),
            |(x, y)| if costs[x + y * width] == 0 { -1 } else { costs[x + y * width] },
            &ManhattanNeighborhood::new(width, height),
        );
        let all: Vec<NodeID> = ids.values().copied().collect();
        if all.is_empty() {
            continue;
        }

        for _ in 0..10 {
            let start = all[rng.generate_range(0..all.len())];
            let finish = all[rng.generate_range(0..all.len())];
            let reference = reference_distances(&graph, start);

            match reference[finish] {
                None => assert!(graph.shortest_path(start, finish, None).is_none()),
                Some(best) => {
                    let path = graph.shortest_path(start, finish, None).unwrap();
                    assert_valid(&graph, &path);
                    assert_eq!(path.distance(), best);
                    assert_eq!(path.end(), Some(&finish));

                    assert!(graph.shortest_path(start, finish, Some(best)).is_some());
                    if best > 0 {
                        assert!(graph.shortest_path(start, finish, Some(best - 1)).is_none());
                    }
                }
            }
        }
    }
}

#[test]
fn batch_matches_single_searches() {
    let (graph, ids) = corridor();
    let all: Vec<NodeID> = ids.iter().flatten().flatten().copied().collect();
    let queries: Vec<(NodeID, NodeID)> = all.iter().flat_map(|&a| all.iter().map(move |&b| (a, b))).collect();

    let batch = graph.shortest_paths(&queries, Some(10));
    assert_eq!(batch.len(), queries.len());
    for (&(start, finish), result) in queries.iter().zip(batch) {
        assert_eq!(result, graph.shortest_path(start, finish, Some(10)));
    }
}
