#![forbid(unsafe_code)]

//! Graph container used by `tiergraph-layered`.
//!
//! Nodes and edges are addressed by string ids and iterate in insertion order, which keeps every
//! algorithm built on top of this container deterministic.

mod graph;

pub use graph::{EdgeKey, Graph, GraphOptions, alg};
