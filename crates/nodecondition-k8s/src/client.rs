//! Kubernetes client for kubectl-node-condition

use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::{Node as KubeNode, NodeCondition};
use kube::Api;
use kube::api::ListParams;
use kube::config::Kubeconfig;

use nodecondition_types::{Condition, Node, NodeConditionError, Result};

use crate::config::ConnectionConfig;
use crate::source::NodeSource;

/// Rendering of a missing transition time (the zero timestamp)
const ZERO_TIME: &str = "0001-01-01 00:00:00 +0000 UTC";

/// Kubernetes client wrapper
pub struct KubeClient {
    client: kube::Client,
}

impl KubeClient {
    /// Connect using the kubeconfig and overrides in `config`
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        let kubeconfig = match &config.kubeconfig {
            Some(path) => Kubeconfig::read_from(path),
            None => Kubeconfig::read(),
        }
        .map_err(|e| {
            NodeConditionError::Connection(format!(
                "failed to read kubeconfig. Is kubectl configured? {}",
                e
            ))
        })?;

        let client_config =
            kube::Config::from_custom_kubeconfig(kubeconfig, &config.kubeconfig_options())
                .await
                .map_err(|e| NodeConditionError::Connection(e.to_string()))?;

        tracing::debug!(cluster_url = %client_config.cluster_url, "Resolved cluster");

        let client = kube::Client::try_from(client_config).map_err(map_kube_error)?;

        Ok(Self { client })
    }
}

impl NodeSource for KubeClient {
    async fn list_nodes(&self, name: Option<&str>) -> Result<Vec<Node>> {
        let nodes: Api<KubeNode> = Api::all(self.client.clone());

        let mut params = ListParams::default();
        if let Some(name) = name {
            params = params.fields(&format!("metadata.name={}", name));
        }

        let list = nodes.list(&params).await.map_err(map_kube_error)?;

        Ok(list.items.into_iter().map(node_to_info).collect())
    }
}

/// API rejections keep their own variant; everything else is a transport failure
fn map_kube_error(err: kube::Error) -> NodeConditionError {
    match &err {
        kube::Error::Api(_) => NodeConditionError::Api(err.to_string()),
        _ => NodeConditionError::Connection(err.to_string()),
    }
}

/// Convert a k8s Node to our snapshot
fn node_to_info(node: KubeNode) -> Node {
    let mut info = Node::new(node.metadata.name.unwrap_or_default());

    if let Some(conditions) = node.status.and_then(|s| s.conditions) {
        info.conditions = conditions.into_iter().map(condition_to_info).collect();
    }

    info
}

fn condition_to_info(condition: NodeCondition) -> Condition {
    Condition::new(
        condition.reason.unwrap_or_default(),
        condition.status,
        condition.message.unwrap_or_default(),
        condition
            .last_transition_time
            .map(|t| format_transition_time(&t.0))
            .unwrap_or_else(|| ZERO_TIME.to_string()),
    )
}

/// Fixed, locale-independent timestamp text, e.g. `2024-03-01 08:15:00 +0000 UTC`
///
/// Fractional seconds appear only when non-zero, without trailing zeros.
fn format_transition_time(time: &DateTime<Utc>) -> String {
    let mut text = time.format("%Y-%m-%d %H:%M:%S").to_string();

    let nanos = time.timestamp_subsec_nanos() % 1_000_000_000;
    if nanos != 0 {
        let fraction = format!("{:09}", nanos);
        text.push('.');
        text.push_str(fraction.trim_end_matches('0'));
    }

    text.push_str(" +0000 UTC");
    text
}
