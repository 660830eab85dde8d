// Re-export key components
pub use crate::loading::{NodeRecord, WayRecord, build_graph};
pub use crate::model::{CostModel, Edge, Node, RouteGraph, Way};
pub use crate::routing::{RoutePlan, plan};

pub use crate::Error;
pub use crate::{NodeId, WayId};
