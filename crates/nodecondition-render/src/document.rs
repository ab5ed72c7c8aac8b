use std::collections::BTreeMap;
use std::io::Write;

use nodecondition_types::{Node, Result};

use crate::transform::{ConditionMap, transform_conditions};

/// Node name -> condition reason -> display fields
pub type RenderDocument = BTreeMap<String, ConditionMap>;

/// Build the structured document covering every node
pub fn build_document(nodes: &[Node]) -> RenderDocument {
    nodes
        .iter()
        .map(|node| (node.name.clone(), transform_conditions(&node.conditions)))
        .collect()
}

/// Write all nodes as one single-line JSON document
///
/// The document is serialized in full before anything reaches `out`, and no
/// trailing newline is added.
pub fn write_document<W: Write>(out: &mut W, nodes: &[Node]) -> Result<()> {
    let document = build_document(nodes);
    let json = serde_json::to_string(&document)?;
    out.write_all(json.as_bytes())?;
    Ok(())
}
