//! Elevation-aware route planning for pedestrian street networks
//!
//! `hillpath` assembles a routable graph from already-parsed street
//! features and a point-elevation lookup, then answers shortest-path
//! queries with A*. Edge weights combine planar geographic distance
//! with an asymmetric elevation penalty: walking downhill is free,
//! climbing costs the square of the net rise. The result is a walking
//! route that trades a longer flat detour against a steep shortcut.
//!
//! Parsing of raw map data (OSM XML, elevation rasters) and any
//! display of the planned route are left to the caller; the crate
//! consumes feature records and produces ordered node sequences.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// Identifier of a graph node, matching the source map's node id.
pub type NodeId = i64;
/// Identifier of a way (named street or path).
pub type WayId = i64;
