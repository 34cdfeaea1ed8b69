//! `/v2/firewalls`

use super::ListQuery;
use crate::errors::DoError;
use crate::models::{
    FirewallDropletsRequest, FirewallRequest, FirewallResponse, FirewallRulesRequest,
    FirewallTagsRequest, FirewallsResponse,
};
use crate::request::HttpMethod;

request_builder!(
    /// `/v2/firewalls`
    FirewallsRequestBuilder
);

impl FirewallsRequestBuilder {
    item!(by_firewall_id(firewall_id: &str) => FirewallItemRequestBuilder);

    pub async fn get(&self) -> Result<FirewallsResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<FirewallsResponse, DoError> {
        self.inner.get_with(query).await
    }

    pub async fn post(&self, body: &FirewallRequest) -> Result<FirewallResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/firewalls/{firewall_id}`
    FirewallItemRequestBuilder
);

impl FirewallItemRequestBuilder {
    child!(droplets, "droplets" => FirewallDropletsRequestBuilder);
    child!(tags, "tags" => FirewallTagsRequestBuilder);
    child!(rules, "rules" => FirewallRulesRequestBuilder);

    pub async fn get(&self) -> Result<FirewallResponse, DoError> {
        self.inner.get().await
    }

    /// Replace the whole firewall definition.
    pub async fn put(&self, body: &FirewallRequest) -> Result<FirewallResponse, DoError> {
        self.inner.put(body).await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}

request_builder!(
    /// `/v2/firewalls/{firewall_id}/droplets`
    FirewallDropletsRequestBuilder
);

impl FirewallDropletsRequestBuilder {
    pub async fn post(&self, body: &FirewallDropletsRequest) -> Result<(), DoError> {
        self.inner.send_no_content(HttpMethod::Post, body).await
    }

    pub async fn delete(&self, body: &FirewallDropletsRequest) -> Result<(), DoError> {
        self.inner.send_no_content(HttpMethod::Delete, body).await
    }
}

request_builder!(
    /// `/v2/firewalls/{firewall_id}/tags`
    FirewallTagsRequestBuilder
);

impl FirewallTagsRequestBuilder {
    pub async fn post(&self, body: &FirewallTagsRequest) -> Result<(), DoError> {
        self.inner.send_no_content(HttpMethod::Post, body).await
    }

    pub async fn delete(&self, body: &FirewallTagsRequest) -> Result<(), DoError> {
        self.inner.send_no_content(HttpMethod::Delete, body).await
    }
}

request_builder!(
    /// `/v2/firewalls/{firewall_id}/rules`
    FirewallRulesRequestBuilder
);

impl FirewallRulesRequestBuilder {
    pub async fn post(&self, body: &FirewallRulesRequest) -> Result<(), DoError> {
        self.inner.send_no_content(HttpMethod::Post, body).await
    }

    pub async fn delete(&self, body: &FirewallRulesRequest) -> Result<(), DoError> {
        self.inner.send_no_content(HttpMethod::Delete, body).await
    }
}
