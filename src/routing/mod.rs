//! Route search over a built graph

mod astar;
mod plan;

pub use astar::plan;
pub use plan::RoutePlan;
