use hashbrown::HashMap;
use serde::Deserialize;

use crate::{NodeId, WayId};

/// Fallback display name for ways without a name tag.
pub(crate) const UNNAMED_WAY: &str = "unnamed way";

/// A parsed point feature.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub lat: f64,
    pub lon: f64,
}

/// A parsed way feature with its raw tags and ordered member nodes.
#[derive(Debug, Clone, Deserialize)]
pub struct WayRecord {
    pub id: WayId,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    pub member_nodes: Vec<NodeId>,
}

impl WayRecord {
    /// A way is routable when it carries a highway tag; anything else
    /// (boundaries, waterways, building outlines) is ignored entirely.
    pub fn is_routable(&self) -> bool {
        self.tags.contains_key("highway")
    }

    /// The highway category, when present.
    pub fn category(&self) -> Option<&str> {
        self.tags.get("highway").map(String::as_str)
    }

    /// Display name, falling back to a placeholder for unnamed ways.
    pub fn display_name(&self) -> &str {
        self.tags.get("name").map_or(UNNAMED_WAY, String::as_str)
    }

    /// Only an explicit `oneway=yes` restricts traversal direction.
    pub fn is_oneway(&self) -> bool {
        self.tags.get("oneway").is_some_and(|v| v == "yes")
    }
}
