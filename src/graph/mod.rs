// src/graph/mod.rs
//! File-level import graph and change impact analysis.

pub mod builder;
pub mod impact;
pub mod import_graph;
pub mod imports;
pub mod resolver;

pub use builder::{build_graph, GraphBuilder};
pub use impact::{compute_impact, ImpactAnalyzer};
pub use import_graph::{GraphSnapshot, ImportGraph, NodeId};
pub use resolver::FileIndex;
