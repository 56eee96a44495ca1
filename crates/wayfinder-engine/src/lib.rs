//! Shortest-path engine for wayfinder graphs.
//!
//! Computes single-source minimum distances over a borrowed
//! [`GraphStore`](wayfinder_core::store::GraphStore) and turns them into routes:
//! - [`dijkstra`]: heap-driven relaxation with lazy deletion of stale entries
//! - [`path`]: predecessor-walk path reconstruction
//! - [`route`]: validated source/target queries, the presentation layer's entry point
//! - [`cancel`]: cooperative cancellation between heap extractions

pub mod cancel;
pub mod dijkstra;
pub mod path;
pub mod route;
pub mod types;

pub use types::{EngineError, Route, RouteResult, SearchStats, ShortestPaths};
