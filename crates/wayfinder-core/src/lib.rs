//! Core types, graph storage, and configuration for wayfinder.
//!
//! This crate provides the foundational data structures used across all wayfinder crates:
//! - [`types`]: Vertex and weight aliases, error types
//! - [`store`]: The [`GraphStore`](store::GraphStore) trait read by the engine
//! - [`graph`]: In-memory adjacency-map implementation of `GraphStore`
//! - [`shared`]: Lock-guarded graph for queries running beside mutations
//! - [`config`]: Configuration loading from `.wayfinder/wayfinder.json`

pub mod config;
pub mod graph;
pub mod shared;
pub mod store;
pub mod types;
