//! Data model for the routable street network
//!
//! Contains the cost model for edge weights and the graph structures
//! produced by loading and consumed by routing.

pub mod cost;
pub mod graph;

pub use cost::CostModel;
pub use graph::{Edge, Node, RouteGraph, Way};
