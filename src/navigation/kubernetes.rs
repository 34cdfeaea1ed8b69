//! `/v2/kubernetes`

use super::ListQuery;
use crate::errors::DoError;
use crate::models::{
    KubernetesClusterCreateRequest, KubernetesClusterResponse, KubernetesClusterUpdateRequest,
    KubernetesClustersResponse, KubernetesOptionsResponse, NodePoolRequest, NodePoolResponse,
    NodePoolsResponse,
};

request_builder!(
    /// `/v2/kubernetes`
    KubernetesRequestBuilder
);

impl KubernetesRequestBuilder {
    child!(clusters, "clusters" => ClustersRequestBuilder);
    child!(
        /// Versions, regions and node sizes available for new clusters.
        options, "options" => KubernetesOptionsRequestBuilder
    );
}

request_builder!(
    /// `/v2/kubernetes/options`
    KubernetesOptionsRequestBuilder
);

impl KubernetesOptionsRequestBuilder {
    pub async fn get(&self) -> Result<KubernetesOptionsResponse, DoError> {
        self.inner.get().await
    }
}

request_builder!(
    /// `/v2/kubernetes/clusters`
    ClustersRequestBuilder
);

impl ClustersRequestBuilder {
    item!(by_cluster_id(cluster_id: &str) => ClusterItemRequestBuilder);

    pub async fn get(&self) -> Result<KubernetesClustersResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<KubernetesClustersResponse, DoError> {
        self.inner.get_with(query).await
    }

    pub async fn post(
        &self,
        body: &KubernetesClusterCreateRequest,
    ) -> Result<KubernetesClusterResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/kubernetes/clusters/{cluster_id}`
    ClusterItemRequestBuilder
);

impl ClusterItemRequestBuilder {
    child!(kubeconfig, "kubeconfig" => KubeconfigRequestBuilder);
    child!(node_pools, "node_pools" => NodePoolsRequestBuilder);

    pub async fn get(&self) -> Result<KubernetesClusterResponse, DoError> {
        self.inner.get().await
    }

    pub async fn put(
        &self,
        body: &KubernetesClusterUpdateRequest,
    ) -> Result<KubernetesClusterResponse, DoError> {
        self.inner.put(body).await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}

request_builder!(
    /// `/v2/kubernetes/clusters/{cluster_id}/kubeconfig`
    KubeconfigRequestBuilder
);

impl KubeconfigRequestBuilder {
    /// Kubeconfig YAML for the cluster.
    pub async fn get(&self) -> Result<Vec<u8>, DoError> {
        self.inner.get_bytes("application/yaml").await
    }
}

request_builder!(
    /// `/v2/kubernetes/clusters/{cluster_id}/node_pools`
    NodePoolsRequestBuilder
);

impl NodePoolsRequestBuilder {
    item!(by_node_pool_id(node_pool_id: &str) => NodePoolItemRequestBuilder);

    pub async fn get(&self) -> Result<NodePoolsResponse, DoError> {
        self.inner.get().await
    }

    pub async fn post(&self, body: &NodePoolRequest) -> Result<NodePoolResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/kubernetes/clusters/{cluster_id}/node_pools/{node_pool_id}`
    NodePoolItemRequestBuilder
);

impl NodePoolItemRequestBuilder {
    pub async fn get(&self) -> Result<NodePoolResponse, DoError> {
        self.inner.get().await
    }

    pub async fn put(&self, body: &NodePoolRequest) -> Result<NodePoolResponse, DoError> {
        self.inner.put(body).await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}
