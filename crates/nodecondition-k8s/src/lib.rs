//! Kubernetes node access for kubectl-node-condition
//!
//! This crate provides the `NodeSource` capability, the fetch step built on
//! it, and a `kube`-backed implementation that talks to a real cluster.

mod client;
mod config;
mod source;

pub use client::KubeClient;
pub use config::ConnectionConfig;
pub use source::{NodeSource, fetch_nodes};

// Re-export types that are used in our public API
pub use nodecondition_types::{Condition, Node, NodeConditionError, Result};
