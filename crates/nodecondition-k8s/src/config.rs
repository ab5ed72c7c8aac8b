use std::path::PathBuf;

use kube::config::KubeConfigOptions;

/// Connection settings resolved once from the command line
#[derive(Clone, Debug, Default)]
pub struct ConnectionConfig {
    /// Explicit kubeconfig path; falls back to `KUBECONFIG` / `~/.kube/config`
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub cluster: Option<String>,
    pub user: Option<String>,
}

impl ConnectionConfig {
    pub(crate) fn kubeconfig_options(&self) -> KubeConfigOptions {
        KubeConfigOptions {
            context: self.context.clone(),
            cluster: self.cluster.clone(),
            user: self.user.clone(),
        }
    }
}
