//! Rendering for kubectl-node-condition
//!
//! This crate turns fetched nodes into either a per-node ASCII table or a
//! single JSON document keyed by node name and condition reason.

mod document;
mod format;
mod table;
mod transform;

pub use document::{RenderDocument, build_document, write_document};
pub use format::OutputFormat;
pub use table::write_tables;
pub use transform::{ConditionFields, ConditionMap, transform_conditions};

// Re-export types used in our public API
pub use nodecondition_types::{Condition, Node, NodeConditionError, Result};
