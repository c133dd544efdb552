//! Graph traversals over city identifiers.
//!
//! These functions assume both endpoints belong to `network` and that
//! `start != goal`; [`crate::routing::RoutePlanner`] handles name resolution
//! and the trivial cases before delegating here.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::network::{CityId, Cost, RouteNetwork};

/// Bounds applied to exhaustive route enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerationLimits {
    /// Stop after this many routes have been captured.
    pub max_routes: Option<usize>,
    /// Never extend a partial route beyond this many flights.
    pub max_hops: Option<usize>,
}

impl EnumerationLimits {
    /// Enumerate every simple path. Exponential on dense networks.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_routes(mut self, max_routes: usize) -> Self {
        self.max_routes = Some(max_routes);
        self
    }

    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = Some(max_hops);
        self
    }
}

/// Routes produced by [`enumerate_routes`].
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    /// Captured routes sorted by ascending cost; ties keep discovery order.
    pub routes: Vec<(Vec<CityId>, Cost)>,
    /// `true` when the search stopped at `max_routes`; more routes may exist.
    pub truncated: bool,
}

/// Depth-first search for any route.
///
/// The visited set is shared by the whole search: a city proven to be a dead
/// end is never entered again, even through a different parent. Only the
/// successful branch remains on the returned path.
pub fn find_route_dfs(network: &RouteNetwork, start: CityId, goal: CityId) -> Option<Vec<CityId>> {
    let mut visited = vec![false; network.city_count()];
    let mut path = vec![start];
    let mut frontier = vec![network.flights_from(start)];
    visited[start.index()] = true;

    while let Some(flights) = frontier.last_mut() {
        match flights.find(|flight| !visited[flight.target.index()]) {
            Some(flight) => {
                let next = flight.target;
                visited[next.index()] = true;
                path.push(next);
                if next == goal {
                    return Some(path);
                }
                frontier.push(network.flights_from(next));
            }
            None => {
                // Dead end: drop it from the path but keep it marked visited.
                frontier.pop();
                path.pop();
            }
        }
    }

    None
}

/// Breadth-first search for the route with the fewest flights.
pub fn find_route_bfs(network: &RouteNetwork, start: CityId, goal: CityId) -> Option<Vec<CityId>> {
    let mut parents: Vec<Option<CityId>> = vec![None; network.city_count()];
    let mut visited = vec![false; network.city_count()];
    let mut queue = VecDeque::new();

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for flight in network.flights_from(current) {
            let next = flight.target;
            if visited[next.index()] {
                continue;
            }

            visited[next.index()] = true;
            parents[next.index()] = Some(current);
            if next == goal {
                return Some(reconstruct_path(&parents, start, goal));
            }
            queue.push_back(next);
        }
    }

    None
}

/// Dijkstra's algorithm for the cheapest route and its total cost.
///
/// Correct only because flight costs are non-negative, which lets the search
/// stop as soon as the goal is popped.
pub fn find_route_dijkstra(
    network: &RouteNetwork,
    start: CityId,
    goal: CityId,
) -> Option<(Vec<CityId>, Cost)> {
    let mut distances: Vec<Option<Cost>> = vec![None; network.city_count()];
    let mut parents: Vec<Option<CityId>> = vec![None; network.city_count()];
    let mut queue = BinaryHeap::new();

    distances[start.index()] = Some(0);
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        match distances[entry.node.index()] {
            Some(best) if best < entry.cost => continue,
            None => continue,
            Some(_) => {}
        }

        if entry.node == goal {
            return Some((reconstruct_path(&parents, start, goal), entry.cost));
        }

        for flight in network.flights_from(entry.node) {
            let next = flight.target;
            let candidate = entry.cost.saturating_add(flight.cost);
            let improves = distances[next.index()].map_or(true, |best| candidate < best);
            if improves {
                distances[next.index()] = Some(candidate);
                parents[next.index()] = Some(entry.node);
                queue.push(QueueEntry::new(next, candidate));
            }
        }
    }

    None
}

/// Enumerate every simple path from `start` to `goal`, cheapest first.
///
/// Unlike [`find_route_dfs`], a city is unmarked when the search backs out
/// of it, so it may appear on several enumerated routes. Worst-case cost is
/// exponential in the number of cities; use `limits` on anything but small
/// networks. The search stops the moment `max_routes` routes are captured.
pub fn enumerate_routes(
    network: &RouteNetwork,
    start: CityId,
    goal: CityId,
    limits: &EnumerationLimits,
) -> Enumeration {
    let mut result = Enumeration::default();
    if limits.max_routes == Some(0) {
        result.truncated = true;
        return result;
    }

    let mut on_path = vec![false; network.city_count()];
    let mut path = vec![start];
    let mut frontier: Vec<(_, Cost)> = vec![(network.flights_from(start), 0)];
    on_path[start.index()] = true;

    while let Some((flights, cost)) = frontier.last_mut() {
        let hops = path.len() - 1;
        let next = if limits.max_hops.map_or(true, |max| hops < max) {
            flights.find(|flight| !on_path[flight.target.index()])
        } else {
            None
        };

        match next {
            Some(flight) if flight.target == goal => {
                let mut route = path.clone();
                route.push(goal);
                result.routes.push((route, cost.saturating_add(flight.cost)));
                if limits.max_routes.is_some_and(|max| result.routes.len() >= max) {
                    result.truncated = true;
                    break;
                }
            }
            Some(flight) => {
                let next_cost = cost.saturating_add(flight.cost);
                on_path[flight.target.index()] = true;
                path.push(flight.target);
                frontier.push((network.flights_from(flight.target), next_cost));
            }
            None => {
                frontier.pop();
                if let Some(city) = path.pop() {
                    on_path[city.index()] = false;
                }
            }
        }
    }

    result.routes.sort_by_key(|(_, cost)| *cost);
    result
}

/// Sum of the flight costs along `path`, or `None` if a leg has no direct flight.
pub fn path_cost(network: &RouteNetwork, path: &[CityId]) -> Option<Cost> {
    path.windows(2).try_fold(0, |total: Cost, leg| {
        network
            .flight_cost_between(leg[0], leg[1])
            .map(|cost| total.saturating_add(cost))
    })
}

/// Walk parent pointers back from `goal` and return the path start-first.
pub(crate) fn reconstruct_path(
    parents: &[Option<CityId>],
    start: CityId,
    goal: CityId,
) -> Vec<CityId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node.index()];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: CityId,
    cost: Cost,
}

impl QueueEntry {
    fn new(node: CityId, cost: Cost) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; equal
        // costs pop the earlier-inserted city first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A -> B -> D, A -> C -> D, C -> B, with the cheap path through C.
    fn diamond() -> (RouteNetwork, [CityId; 4]) {
        let mut network = RouteNetwork::new();
        for city in ["A", "B", "C", "D"] {
            network.add_city(city);
        }
        network.add_flight("A", "B", 10).unwrap();
        network.add_flight("A", "C", 1).unwrap();
        network.add_flight("B", "D", 10).unwrap();
        network.add_flight("C", "D", 2).unwrap();
        network.add_flight("C", "B", 1).unwrap();
        let ids = ["A", "B", "C", "D"].map(|name| network.city_id(name).unwrap());
        (network, ids)
    }

    #[test]
    fn queue_entry_pops_cheapest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new(CityId(0), 7));
        heap.push(QueueEntry::new(CityId(1), 3));
        heap.push(QueueEntry::new(CityId(2), 3));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.node).collect();
        assert_eq!(order, vec![CityId(1), CityId(2), CityId(0)]);
    }

    #[test]
    fn dfs_follows_edge_order() {
        let (network, [a, _, c, d]) = diamond();
        // Newest flight out of A is A -> C, and out of C is C -> B.
        let path = find_route_dfs(&network, a, d).unwrap();
        let names: Vec<_> = path.iter().map(|id| network.city_name(*id).unwrap()).collect();
        assert_eq!(names, vec!["A", "C", "B", "D"]);
        assert_eq!(path.first(), Some(&a));
        assert!(path.contains(&c));
    }

    #[test]
    fn dfs_never_revisits_dead_ends() {
        let mut network = RouteNetwork::new();
        for city in ["S", "X", "Y", "G"] {
            network.add_city(city);
        }
        // X is a dead end reachable from both S and Y.
        network.add_flight("S", "Y", 1).unwrap();
        network.add_flight("S", "X", 1).unwrap();
        network.add_flight("Y", "G", 1).unwrap();
        network.add_flight("Y", "X", 1).unwrap();
        let [s, g] = ["S", "G"].map(|name| network.city_id(name).unwrap());

        let path = find_route_dfs(&network, s, g).unwrap();
        let names: Vec<_> = path.iter().map(|id| network.city_name(*id).unwrap()).collect();
        assert_eq!(names, vec!["S", "Y", "G"]);
    }

    #[test]
    fn bfs_minimises_hops() {
        let (network, [a, _, _, d]) = diamond();
        let path = find_route_bfs(&network, a, d).unwrap();
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn dijkstra_minimises_cost() {
        let (network, [a, _, c, d]) = diamond();
        let (path, cost) = find_route_dijkstra(&network, a, d).unwrap();
        assert_eq!(path, vec![a, c, d]);
        assert_eq!(cost, 3);
    }

    #[test]
    fn unreachable_goal_yields_none() {
        let (network, [a, _, _, d]) = diamond();
        assert!(find_route_dfs(&network, d, a).is_none());
        assert!(find_route_bfs(&network, d, a).is_none());
        assert!(find_route_dijkstra(&network, d, a).is_none());
        assert!(enumerate_routes(&network, d, a, &EnumerationLimits::unbounded())
            .routes
            .is_empty());
    }

    #[test]
    fn enumeration_is_sorted_by_cost() {
        let (network, [a, _, _, d]) = diamond();
        let result = enumerate_routes(&network, a, d, &EnumerationLimits::unbounded());
        let costs: Vec<_> = result.routes.iter().map(|(_, cost)| *cost).collect();
        assert_eq!(costs, vec![3, 12, 20]);
        assert!(!result.truncated);
    }

    #[test]
    fn enumeration_respects_hop_limit() {
        let (network, [a, _, _, d]) = diamond();
        let limits = EnumerationLimits::unbounded().with_max_hops(2);
        let result = enumerate_routes(&network, a, d, &limits);
        assert_eq!(result.routes.len(), 2);
        assert!(result.routes.iter().all(|(path, _)| path.len() <= 3));
    }

    #[test]
    fn enumeration_respects_route_limit() {
        let (network, [a, _, _, d]) = diamond();
        let limits = EnumerationLimits::unbounded().with_max_routes(1);
        let result = enumerate_routes(&network, a, d, &limits);
        assert_eq!(result.routes.len(), 1);
        assert!(result.truncated);
    }

    #[test]
    fn route_limit_stops_before_dead_end_cluster() {
        let mut network = RouteNetwork::new();
        network.add_city("S");
        network.add_city("G");
        let cluster: Vec<String> = (0..14).map(|i| format!("B{i}")).collect();
        for name in &cluster {
            network.add_city(name);
        }
        for from in &cluster {
            for to in &cluster {
                if from != to {
                    network.add_flight(from, to, 1).unwrap();
                }
            }
        }
        // Added last, so S -> G is the first flight tried out of S.
        network.add_flight("S", "B0", 1).unwrap();
        network.add_flight("S", "G", 5).unwrap();
        let [s, g] = ["S", "G"].map(|name| network.city_id(name).unwrap());

        let limits = EnumerationLimits::unbounded().with_max_routes(1);
        let result = enumerate_routes(&network, s, g, &limits);
        assert_eq!(result.routes, vec![(vec![s, g], 5)]);
        assert!(result.truncated);
    }

    #[test]
    fn zero_route_limit_captures_nothing() {
        let (network, [a, _, _, d]) = diamond();
        let limits = EnumerationLimits::unbounded().with_max_routes(0);
        let result = enumerate_routes(&network, a, d, &limits);
        assert!(result.routes.is_empty());
        assert!(result.truncated);
    }

    #[test]
    fn long_chain_enumerates_without_recursion() {
        let mut network = RouteNetwork::new();
        let names: Vec<String> = (0..100_000).map(|i| format!("C{i}")).collect();
        for name in &names {
            network.add_city(name);
        }
        for leg in names.windows(2) {
            network.add_flight(&leg[0], &leg[1], 1).unwrap();
        }
        let start = network.city_id(&names[0]).unwrap();
        let goal = network.city_id(&names[names.len() - 1]).unwrap();

        let result = enumerate_routes(&network, start, goal, &EnumerationLimits::unbounded());
        assert_eq!(result.routes.len(), 1);
        assert_eq!(result.routes[0].0.len(), names.len());
        assert_eq!(result.routes[0].1, 99_999);
        assert!(!result.truncated);
    }

    #[test]
    fn path_cost_rejects_missing_legs() {
        let (network, [a, b, c, d]) = diamond();
        assert_eq!(path_cost(&network, &[a, c, b, d]), Some(12));
        assert_eq!(path_cost(&network, &[a, d]), None);
        assert_eq!(path_cost(&network, &[b]), Some(0));
    }

    #[test]
    fn reconstruct_walks_parents() {
        let parents = vec![None, Some(CityId(0)), Some(CityId(1))];
        assert_eq!(
            reconstruct_path(&parents, CityId(0), CityId(2)),
            vec![CityId(0), CityId(1), CityId(2)]
        );
    }
}
