//! Shared types for kubectl-node-condition
//!
//! This crate contains the node snapshot model and the error taxonomy used
//! across the fetch and render crates.

use thiserror::Error;

// ============================================================================
// Node Types
// ============================================================================

/// A read-only snapshot of a cluster node and its conditions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    /// Conditions in the order the API reported them
    pub conditions: Vec<Condition>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            conditions: Vec::new(),
        }
    }

    /// Append a condition, keeping source order
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }
}

/// A single node condition entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    pub reason: String,
    /// Raw tri-state status ("True", "False", "Unknown")
    pub status: String,
    pub message: String,
    /// Display string for the last transition, passed through untouched
    pub last_transition_time: String,
}

impl Condition {
    pub fn new(
        reason: impl Into<String>,
        status: impl Into<String>,
        message: impl Into<String>,
        last_transition_time: impl Into<String>,
    ) -> Self {
        Self {
            reason: reason.into(),
            status: status.into(),
            message: message.into(),
            last_transition_time: last_transition_time.into(),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Error, Debug)]
pub enum NodeConditionError {
    #[error("failed to connect to cluster: {0}")]
    Connection(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("no nodes named {0}")]
    NotFound(String),

    #[error("unknown output type {0}")]
    InvalidFormat(String),

    #[error("failed to serialize node conditions: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NodeConditionError>;
