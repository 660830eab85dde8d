//! Routable graph structures
//!
//! Nodes own their outgoing edges; edges and ways refer to each other
//! by id rather than by reference, so the graph has no ownership
//! cycles and can be shared read-only between searches.

use geo::Point;
use hashbrown::HashMap;

use crate::model::CostModel;
use crate::{NodeId, WayId};

/// A point on the routable network.
#[derive(Debug, Clone)]
pub struct Node {
    /// Id of the node in the source map data
    pub id: NodeId,
    /// Node coordinates (x = longitude, y = latitude), degrees
    pub position: Point<f64>,
    /// Elevation at this point, in the unit of the elevation source
    pub elevation: i32,
    /// Outgoing edges, appended during graph construction only
    pub edges: Vec<Edge>,
    /// Distinct names of the ways leaving this node, space separated.
    /// Computed once by the builder; empty for nodes no edge leaves.
    pub way_label: String,
}

/// A directed traversal from its owning node to `target`.
#[derive(Debug, Clone)]
pub struct Edge {
    /// The way this segment belongs to, for labeling the route
    pub way: WayId,
    /// Destination node
    pub target: NodeId,
    /// Precomputed weight: distance plus elevation penalty, never
    /// recomputed during search
    pub cost: f64,
}

/// A named street or path. Ways label and draw routes; the search
/// itself runs over the directed edges derived from them.
#[derive(Debug, Clone)]
pub struct Way {
    /// Display name, `"unnamed way"` when the source had no name tag
    pub name: String,
    /// Highway category (footway, residential, ...)
    pub category: String,
    /// Member nodes in geometric order along the way
    pub member_nodes: Vec<NodeId>,
}

/// The full routable map: nodes keyed by id, ways keyed by id, and
/// the cost model the edge weights were built with.
///
/// Built once and never mutated afterwards, so independent plan
/// calls may share one instance freely.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    nodes: HashMap<NodeId, Node>,
    ways: HashMap<WayId, Way>,
    cost_model: CostModel,
}

impl RouteGraph {
    pub(crate) fn new(
        nodes: HashMap<NodeId, Node>,
        ways: HashMap<WayId, Way>,
        cost_model: CostModel,
    ) -> Self {
        Self {
            nodes,
            ways,
            cost_model,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn way(&self, id: WayId) -> Option<&Way> {
        self.ways.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn ways(&self) -> impl Iterator<Item = &Way> {
        self.ways.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn way_count(&self) -> usize {
        self.ways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    /// Combined distance and climb cost between two nodes, using the
    /// scales the graph was built with. Edge weights were produced by
    /// this formula; the planner reuses it as its goal estimate.
    pub fn estimate(&self, from: &Node, to: &Node) -> f64 {
        self.cost_model.distance_cost(from.position, to.position)
            + CostModel::elevation_cost(from.elevation, to.elevation)
    }
}
