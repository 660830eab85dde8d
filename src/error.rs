use thiserror::Error;

use crate::{NodeId, WayId};

#[derive(Error, Debug)]
pub enum Error {
    #[error("No point features provided, cannot build a network")]
    EmptyNetwork,
    #[error("Node {node} has a malformed coordinate ({lat}, {lon})")]
    InvalidCoordinate { node: NodeId, lat: f64, lon: f64 },
    #[error("Way {way} references node {node} which is not in the node set")]
    UnknownMemberNode { way: WayId, node: NodeId },
    #[error("Node {0} is not part of the graph")]
    UnknownNode(NodeId),
}
