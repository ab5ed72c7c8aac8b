use std::io::Write;
use std::str::FromStr;

use nodecondition_types::{Node, NodeConditionError, Result};

use crate::document::write_document;
use crate::table::write_tables;

/// Output format selected by `--output`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Per-node ASCII tables, streamed node by node
    #[default]
    Cli,
    /// One JSON document covering every node
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Json => "json",
        }
    }

    /// Render `nodes` to `out` in this format
    pub fn render<W: Write>(&self, out: &mut W, nodes: &[Node]) -> Result<()> {
        match self {
            Self::Cli => write_tables(out, nodes),
            Self::Json => write_document(out, nodes),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = NodeConditionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cli" => Ok(Self::Cli),
            "json" => Ok(Self::Json),
            other => Err(NodeConditionError::InvalidFormat(other.to_string())),
        }
    }
}
