use hashbrown::HashMap;

use crate::loading::UNNAMED_WAY;
use crate::model::RouteGraph;
use crate::{NodeId, WayId};

/// A planned route from start to goal.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Visited nodes in travel order; first is the start, last the goal
    pub nodes: Vec<NodeId>,
    /// Name of the way used for each hop, one entry per edge taken
    pub way_names: Vec<String>,
    /// Sum of the traversed edge weights
    pub total_cost: f64,
}

impl RoutePlan {
    /// The degenerate plan for `start == goal`.
    pub(crate) fn single(node: NodeId) -> Self {
        Self {
            nodes: vec![node],
            way_names: Vec::new(),
            total_cost: 0.0,
        }
    }

    /// Walks the parent table backwards from the goal, then reverses
    /// both sequences into travel order. The start node has no parent
    /// entry, which terminates the walk.
    pub(crate) fn reconstruct(
        graph: &RouteGraph,
        parents: &HashMap<NodeId, (NodeId, WayId)>,
        start: NodeId,
        goal: NodeId,
        total_cost: f64,
    ) -> Self {
        let mut nodes = vec![goal];
        let mut way_names = Vec::new();

        let mut current = goal;
        while current != start {
            let Some(&(prev, way)) = parents.get(&current) else {
                break;
            };
            way_names.push(
                graph
                    .way(way)
                    .map_or_else(|| UNNAMED_WAY.to_string(), |w| w.name.clone()),
            );
            nodes.push(prev);
            current = prev;
        }
        nodes.reverse();
        way_names.reverse();

        Self {
            nodes,
            way_names,
            total_cost,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Rough travel time in minutes, assuming 5 km/h on flat ground.
    /// Elevation penalties inflate the estimate on hilly routes.
    pub fn walking_minutes(&self) -> f64 {
        self.total_cost * 60.0 / 5000.0
    }

    /// Way names with consecutive repeats collapsed, suitable for
    /// turn-by-turn display.
    pub fn turn_by_turn(&self) -> Vec<&str> {
        let mut directions: Vec<&str> = Vec::new();
        for name in &self.way_names {
            if directions.last() != Some(&name.as_str()) {
                directions.push(name);
            }
        }
        directions
    }
}
