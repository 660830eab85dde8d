use geo::Point;
use hashbrown::HashMap;
use itertools::Itertools;
use log::{info, warn};

use super::records::{NodeRecord, WayRecord};
use crate::{
    Error, NodeId, WayId,
    model::{CostModel, Edge, Node, RouteGraph, Way},
};

/// One member of a way, resolved against the node set. Carries copies
/// of the fields edge-weight computation needs, so edges can be
/// appended to the node map while iterating the chain.
type ChainLink = (NodeId, Point<f64>, i32);

/// Builds a routable graph from parsed map features.
///
/// `elevation` maps `(lat, lon)` to the elevation at that point, or
/// `None` when the coordinate falls outside the covered grid; such
/// nodes get elevation 0. Ways without a highway tag are discarded.
/// Ways are traversable in both directions unless tagged `oneway=yes`.
///
/// # Errors
///
/// Fails on an empty node set, on malformed coordinates, and on ways
/// referencing node ids missing from the node set. A graph with
/// dangling member references would be structurally invalid, so the
/// builder never produces a partial result.
pub fn build_graph<F>(
    node_records: &[NodeRecord],
    way_records: &[WayRecord],
    elevation: F,
) -> Result<RouteGraph, Error>
where
    F: Fn(f64, f64) -> Option<i32>,
{
    let cost_model = CostModel::for_latitude(reference_latitude(node_records)?);

    let mut nodes: HashMap<NodeId, Node> = HashMap::with_capacity(node_records.len());
    for record in node_records {
        if !coordinate_is_valid(record.lat, record.lon) {
            return Err(Error::InvalidCoordinate {
                node: record.id,
                lat: record.lat,
                lon: record.lon,
            });
        }
        let elev = elevation(record.lat, record.lon).unwrap_or(0);
        nodes.insert(
            record.id,
            Node {
                id: record.id,
                position: Point::new(record.lon, record.lat),
                elevation: elev,
                edges: Vec::new(),
                way_label: String::new(),
            },
        );
    }

    let mut ways: HashMap<WayId, Way> = HashMap::new();
    let mut edge_count = 0usize;
    for record in way_records.iter().filter(|w| w.is_routable()) {
        if record.member_nodes.len() < 2 {
            warn!(
                "Way {} ({}) has fewer than two member nodes, skipping",
                record.id,
                record.display_name()
            );
            continue;
        }

        let chain = resolve_members(&nodes, record)?;
        edge_count += append_edges(&mut nodes, &cost_model, record.id, chain.iter());
        if !record.is_oneway() {
            edge_count += append_edges(&mut nodes, &cost_model, record.id, chain.iter().rev());
        }

        ways.insert(
            record.id,
            Way {
                name: record.display_name().to_string(),
                category: record.category().unwrap_or_default().to_string(),
                member_nodes: record.member_nodes.clone(),
            },
        );
    }

    label_nodes(&mut nodes, &ways);

    info!(
        "Built graph with {} nodes, {} ways, {} edges",
        nodes.len(),
        ways.len(),
        edge_count
    );
    Ok(RouteGraph::new(nodes, ways, cost_model))
}

/// Reference latitude for the degree-to-meter scales: the top edge of
/// the region's bounding box.
fn reference_latitude(node_records: &[NodeRecord]) -> Result<f64, Error> {
    node_records
        .iter()
        .map(|r| r.lat)
        .fold(None, |top: Option<f64>, lat| {
            Some(top.map_or(lat, |t| t.max(lat)))
        })
        .ok_or(Error::EmptyNetwork)
}

fn coordinate_is_valid(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && lat.abs() <= 90.0 && lon.abs() <= 180.0
}

/// Resolves a way's member ids against the node set, failing on the
/// first dangling reference.
fn resolve_members(
    nodes: &HashMap<NodeId, Node>,
    record: &WayRecord,
) -> Result<Vec<ChainLink>, Error> {
    record
        .member_nodes
        .iter()
        .map(|id| {
            nodes
                .get(id)
                .map(|n| (n.id, n.position, n.elevation))
                .ok_or(Error::UnknownMemberNode {
                    way: record.id,
                    node: *id,
                })
        })
        .collect()
}

/// Appends one edge per consecutive pair of the chain, each owned by
/// the pair's first node, weighted once by the cost model. Returns the
/// number of edges added.
fn append_edges<'a, I>(
    nodes: &mut HashMap<NodeId, Node>,
    cost_model: &CostModel,
    way: WayId,
    chain: I,
) -> usize
where
    I: Iterator<Item = &'a ChainLink> + Clone,
{
    let mut added = 0;
    for (&(src, src_pos, src_elev), &(dst, dst_pos, dst_elev)) in chain.tuple_windows() {
        let cost = cost_model.distance_cost(src_pos, dst_pos)
            + CostModel::elevation_cost(src_elev, dst_elev);
        if let Some(node) = nodes.get_mut(&src) {
            node.edges.push(Edge {
                way,
                target: dst,
                cost,
            });
            added += 1;
        }
    }
    added
}

/// Precomputes each node's display label from the distinct names of
/// the ways its outgoing edges belong to, in edge order.
fn label_nodes(nodes: &mut HashMap<NodeId, Node>, ways: &HashMap<WayId, Way>) {
    let labels: Vec<(NodeId, String)> = nodes
        .values()
        .map(|node| {
            let mut names: Vec<&str> = Vec::new();
            for edge in &node.edges {
                if let Some(way) = ways.get(&edge.way)
                    && !names.contains(&way.name.as_str())
                {
                    names.push(&way.name);
                }
            }
            (node.id, names.join(" "))
        })
        .collect();

    for (id, label) in labels {
        if let Some(node) = nodes.get_mut(&id) {
            node.way_label = label;
        }
    }
}
