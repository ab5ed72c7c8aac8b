//! Fetch, transform and render for a single invocation

use std::io::Write;

use nodecondition_k8s::{NodeSource, fetch_nodes};
use nodecondition_render::OutputFormat;
use nodecondition_types::Result;

/// A validated request: which nodes, rendered how
#[derive(Clone, Debug)]
pub struct Invocation {
    /// Exact node name, or empty for every node
    pub node_name: String,
    pub format: OutputFormat,
}

impl Invocation {
    /// Validate the output selector before any cluster work happens
    pub fn new(node_name: Option<String>, output: &str) -> Result<Self> {
        Ok(Self {
            node_name: node_name.unwrap_or_default(),
            format: output.parse()?,
        })
    }

    /// Fetch the nodes and render them with the selected format
    ///
    /// Nothing is written to `out` when the fetch fails.
    pub async fn execute<S: NodeSource, W: Write>(&self, source: &S, out: &mut W) -> Result<()> {
        let nodes = fetch_nodes(source, &self.node_name).await?;
        tracing::debug!(
            format = self.format.as_str(),
            nodes = nodes.len(),
            "Rendering node conditions"
        );
        self.format.render(out, &nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use nodecondition_types::{Condition, Node, NodeConditionError};

    struct FakeSource {
        nodes: Vec<Node>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(nodes: Vec<Node>) -> Self {
            Self {
                nodes,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl NodeSource for FakeSource {
        async fn list_nodes(&self, name: Option<&str>) -> Result<Vec<Node>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .nodes
                .iter()
                .filter(|n| name.is_none_or(|name| n.name == name))
                .cloned()
                .collect())
        }
    }

    fn cluster() -> FakeSource {
        FakeSource::new(vec![
            Node::new("n1")
                .with_condition(Condition::new("Ready", "True", "kubelet ready", "T1"))
                .with_condition(Condition::new("Ready", "False", "kubelet lost", "T2")),
            Node::new("worker-0")
                .with_condition(Condition::new("KubeletHasSufficientMemory", "False", "", "T3")),
        ])
    }

    #[tokio::test]
    async fn test_missing_node_writes_nothing() {
        let invocation = Invocation::new(Some("worker-1".to_string()), "cli").unwrap();
        let mut out = Vec::new();

        let err = invocation.execute(&cluster(), &mut out).await.unwrap_err();

        assert!(matches!(err, NodeConditionError::NotFound(_)));
        assert!(err.to_string().contains("worker-1"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Invocation::new(None, "yaml").unwrap_err();
        assert!(matches!(err, NodeConditionError::InvalidFormat(_)));
        assert!(err.to_string().contains("yaml"));
    }

    #[tokio::test]
    async fn test_json_covers_fetched_nodes() {
        let invocation = Invocation::new(None, "json").unwrap();
        let source = cluster();
        let mut out = Vec::new();

        invocation.execute(&source, &mut out).await.unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["n1", "worker-0"]);
        assert_eq!(
            value["n1"],
            serde_json::json!({
                "Ready": {"status": "False", "message": "kubelet lost", "lastTransitionTime": "T2"}
            })
        );
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cli_filtered_to_one_node() {
        let invocation = Invocation::new(Some("worker-0".to_string()), "cli").unwrap();
        let mut out = Vec::new();

        invocation.execute(&cluster(), &mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("worker-0\n========\n\n"));
        assert!(!output.contains("n1\n"));
        assert!(output.contains("KubeletHasSufficientMemory"));
    }

    #[tokio::test]
    async fn test_default_format_is_cli() {
        let invocation = Invocation::new(None, OutputFormat::default().as_str()).unwrap();
        let mut out = Vec::new();

        invocation.execute(&cluster(), &mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("n1\n==\n\n+"));
        assert!(output.contains("worker-0\n========\n"));
    }
}
