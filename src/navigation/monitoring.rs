//! `/v2/monitoring`: alert policies and droplet metrics.

use super::{BandwidthQuery, ListQuery, MetricsQuery};
use crate::errors::DoError;
use crate::models::{
    AlertPoliciesResponse, AlertPolicyRequest, AlertPolicyResponse, MetricsResponse,
};

request_builder!(
    /// `/v2/monitoring`
    MonitoringRequestBuilder
);

impl MonitoringRequestBuilder {
    child!(alerts, "alerts" => AlertsRequestBuilder);
    child!(metrics, "metrics" => MetricsRequestBuilder);
}

request_builder!(
    /// `/v2/monitoring/alerts`
    AlertsRequestBuilder
);

impl AlertsRequestBuilder {
    item!(by_alert_uuid(alert_uuid: &str) => AlertItemRequestBuilder);

    pub async fn get(&self) -> Result<AlertPoliciesResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<AlertPoliciesResponse, DoError> {
        self.inner.get_with(query).await
    }

    pub async fn post(&self, body: &AlertPolicyRequest) -> Result<AlertPolicyResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/monitoring/alerts/{alert_uuid}`
    AlertItemRequestBuilder
);

impl AlertItemRequestBuilder {
    pub async fn get(&self) -> Result<AlertPolicyResponse, DoError> {
        self.inner.get().await
    }

    pub async fn put(&self, body: &AlertPolicyRequest) -> Result<AlertPolicyResponse, DoError> {
        self.inner.put(body).await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}

request_builder!(
    /// `/v2/monitoring/metrics`
    MetricsRequestBuilder
);

impl MetricsRequestBuilder {
    child!(droplet, "droplet" => DropletMetricsRequestBuilder);
}

request_builder!(
    /// `/v2/monitoring/metrics/droplet`
    DropletMetricsRequestBuilder
);

impl DropletMetricsRequestBuilder {
    child!(cpu, "cpu" => MetricRequestBuilder);
    child!(memory_total, "memory_total" => MetricRequestBuilder);
    child!(memory_available, "memory_available" => MetricRequestBuilder);
    child!(load_1, "load_1" => MetricRequestBuilder);
    child!(bandwidth, "bandwidth" => BandwidthMetricRequestBuilder);
}

request_builder!(
    /// A single droplet metric series.
    MetricRequestBuilder
);

impl MetricRequestBuilder {
    pub async fn get_with(&self, query: &MetricsQuery) -> Result<MetricsResponse, DoError> {
        self.inner.get_with(query).await
    }
}

request_builder!(
    /// `/v2/monitoring/metrics/droplet/bandwidth`
    BandwidthMetricRequestBuilder
);

impl BandwidthMetricRequestBuilder {
    pub async fn get_with(&self, query: &BandwidthQuery) -> Result<MetricsResponse, DoError> {
        self.inner.get_with(query).await
    }
}
