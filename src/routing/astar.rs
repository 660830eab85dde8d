use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use log::debug;

use crate::{
    Error, NodeId, WayId,
    model::RouteGraph,
    routing::plan::RoutePlan,
};

#[derive(Copy, Clone)]
struct State {
    /// Estimated total cost through this node (g + goal estimate)
    f: f64,
    /// Cost from the start when this entry was pushed
    g: f64,
    /// Push sequence number, breaks f ties first-in-first-out
    seq: u64,
    node: NodeId,
}

// Min-heap by f (reversed from standard Rust BinaryHeap), with the
// insertion sequence as a deterministic tie-break. Costs are finite,
// so total_cmp gives a proper total order.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// A* search from `start` to `goal` over a built graph.
///
/// The goal estimate is the same distance-plus-climb formula the edge
/// weights were built with, applied between a node and the goal.
/// Returns the node sequence and the way name of every hop, or
/// `Ok(None)` when the goal is unreachable, a normal outcome for
/// disconnected regions.
///
/// Search state lives entirely in this call, so any number of plans
/// may run against one shared graph.
///
/// # Errors
///
/// Fails when `start` or `goal` is not a node of the graph.
pub fn plan(graph: &RouteGraph, start: NodeId, goal: NodeId) -> Result<Option<RoutePlan>, Error> {
    let start_node = graph.node(start).ok_or(Error::UnknownNode(start))?;
    let goal_node = graph.node(goal).ok_or(Error::UnknownNode(goal))?;

    if start == goal {
        return Ok(Some(RoutePlan::single(start)));
    }

    let mut g_cost: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, (NodeId, WayId)> = HashMap::new();
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    let estimate = graph.estimate(start_node, goal_node);
    debug!("Goal estimate from {start} to {goal}: {estimate:.1}");

    g_cost.insert(start, 0.0);
    heap.push(State {
        f: estimate,
        g: 0.0,
        seq,
        node: start,
    });

    while let Some(State { g, node, .. }) = heap.pop() {
        if node == goal {
            debug!("Path found with cost {g:.1}");
            return Ok(Some(RoutePlan::reconstruct(
                graph, &parents, start, goal, g,
            )));
        }

        // Stale entry: a cheaper path to this node was relaxed after
        // the push, skip re-expansion.
        if g_cost.get(&node).is_some_and(|&best| g > best) {
            continue;
        }

        let Some(current) = graph.node(node) else {
            continue;
        };
        for edge in &current.edges {
            let Some(next) = graph.node(edge.target) else {
                continue;
            };
            let candidate = g + edge.cost;

            let relaxed = match g_cost.entry(edge.target) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(candidate);
                    true
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if candidate < *entry.get() {
                        *entry.get_mut() = candidate;
                        true
                    } else {
                        false
                    }
                }
            };
            if relaxed {
                parents.insert(edge.target, (node, edge.way));
                seq += 1;
                heap.push(State {
                    f: candidate + graph.estimate(next, goal_node),
                    g: candidate,
                    seq,
                    node: edge.target,
                });
            }
        }
    }

    debug!("No path from {start} to {goal}");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{NodeRecord, WayRecord, build_graph};

    fn node(id: NodeId, lat: f64, lon: f64) -> NodeRecord {
        NodeRecord { id, lat, lon }
    }

    fn way(id: WayId, name: &str, members: &[NodeId]) -> WayRecord {
        WayRecord {
            id,
            tags: [
                ("highway".to_string(), "footway".to_string()),
                ("name".to_string(), name.to_string()),
            ]
            .into_iter()
            .collect(),
            member_nodes: members.to_vec(),
        }
    }

    /// Diamond around a hill: the direct branch crosses a 60 m rise,
    /// the detour stays level but is geometrically longer.
    fn diamond() -> RouteGraph {
        let nodes = [
            node(1, 43.900, -78.850), // start
            node(2, 43.905, -78.850), // hilltop, on the short branch
            node(3, 43.905, -78.870), // flat detour
            node(4, 43.910, -78.850), // goal
        ];
        let ways = [
            way(10, "Hill Rd", &[1, 2, 4]),
            way(11, "Valley Rd", &[1, 3, 4]),
        ];
        let lookup = |lat: f64, lon: f64| {
            // Only the hilltop node sits above the plain.
            let hilltop = (lat - 43.905).abs() < 1e-9 && (lon + 78.850).abs() < 1e-9;
            Some(if hilltop { 60 } else { 0 })
        };
        build_graph(&nodes, &ways, lookup).unwrap()
    }

    #[test]
    fn detour_beats_the_hill() {
        let graph = diamond();
        let plan = plan(&graph, 1, 4).unwrap().unwrap();

        assert_eq!(plan.nodes, vec![1, 3, 4]);
        assert_eq!(plan.way_names, vec!["Valley Rd", "Valley Rd"]);
    }

    #[test]
    fn plan_to_self_is_a_single_node_at_zero_cost() {
        let graph = diamond();
        let plan = plan(&graph, 2, 2).unwrap().unwrap();

        assert_eq!(plan.nodes, vec![2]);
        assert!(plan.way_names.is_empty());
        assert_eq!(plan.total_cost, 0.0);
    }

    #[test]
    fn unknown_endpoint_is_an_error() {
        let graph = diamond();
        assert!(matches!(plan(&graph, 1, 99), Err(Error::UnknownNode(99))));
        assert!(matches!(plan(&graph, 99, 1), Err(Error::UnknownNode(99))));
    }

    #[test]
    fn disconnected_goal_reports_no_path() {
        let nodes = [
            node(1, 43.90, -78.85),
            node(2, 43.91, -78.85),
            node(3, 43.90, -78.80),
            node(4, 43.91, -78.80),
        ];
        let ways = [way(10, "West St", &[1, 2]), way(11, "East St", &[3, 4])];
        let graph = build_graph(&nodes, &ways, |_, _| Some(0)).unwrap();

        assert!(plan(&graph, 1, 3).unwrap().is_none());
    }

    #[test]
    fn equal_cost_alternatives_resolve_deterministically() {
        // Two mirror-image routes around a square, identical cost.
        let nodes = [
            node(1, 43.900, -78.850),
            node(2, 43.900, -78.840),
            node(3, 43.910, -78.850),
            node(4, 43.910, -78.840),
        ];
        let ways = [
            way(10, "North Loop", &[1, 3, 4]),
            way(11, "South Loop", &[1, 2, 4]),
        ];
        let graph = build_graph(&nodes, &ways, |_, _| Some(0)).unwrap();

        let first = plan(&graph, 1, 4).unwrap().unwrap();
        for _ in 0..10 {
            let again = plan(&graph, 1, 4).unwrap().unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn total_cost_matches_the_sum_of_traversed_edges() {
        let graph = diamond();
        let plan = plan(&graph, 1, 4).unwrap().unwrap();

        let mut sum = 0.0;
        for pair in plan.nodes.windows(2) {
            let edge = graph
                .node(pair[0])
                .unwrap()
                .edges
                .iter()
                .find(|e| e.target == pair[1])
                .unwrap();
            sum += edge.cost;
        }
        assert!((plan.total_cost - sum).abs() < 1e-9);
    }
}
