use nodecondition_types::{Node, NodeConditionError, Result};

/// Anything that can list cluster nodes
///
/// `name` narrows the listing to an exact node name. Implementations return
/// nodes in the order the backing API produced them.
pub trait NodeSource {
    fn list_nodes(&self, name: Option<&str>) -> impl Future<Output = Result<Vec<Node>>> + Send;
}

/// Fetch the nodes to report on
///
/// An empty `node_name` lists every node. A non-empty name that matches
/// nothing fails with `NotFound`.
pub async fn fetch_nodes<S: NodeSource>(source: &S, node_name: &str) -> Result<Vec<Node>> {
    let filter = (!node_name.is_empty()).then_some(node_name);
    let nodes = source.list_nodes(filter).await?;
    tracing::debug!(filter = ?filter, count = nodes.len(), "Listed nodes");

    if nodes.is_empty() {
        if let Some(name) = filter {
            return Err(NodeConditionError::NotFound(name.to_string()));
        }
    }

    Ok(nodes)
}
