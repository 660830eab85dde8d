//! Graph construction from already-parsed map features
//!
//! The caller owns file parsing; this module turns the resulting
//! feature records plus an elevation lookup into a [`RouteGraph`].
//!
//! [`RouteGraph`]: crate::model::RouteGraph

mod builder;
mod records;

pub use builder::build_graph;
pub use records::{NodeRecord, WayRecord};

pub(crate) use records::UNNAMED_WAY;
