//! `/v2/vpcs`

use super::ListQuery;
use crate::errors::DoError;
use crate::models::{VpcCreateRequest, VpcMembersResponse, VpcResponse, VpcUpdateRequest, VpcsResponse};

request_builder!(
    /// `/v2/vpcs`
    VpcsRequestBuilder
);

impl VpcsRequestBuilder {
    item!(by_vpc_id(vpc_id: &str) => VpcItemRequestBuilder);

    pub async fn get(&self) -> Result<VpcsResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<VpcsResponse, DoError> {
        self.inner.get_with(query).await
    }

    pub async fn post(&self, body: &VpcCreateRequest) -> Result<VpcResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/vpcs/{vpc_id}`
    VpcItemRequestBuilder
);

impl VpcItemRequestBuilder {
    child!(members, "members" => VpcMembersRequestBuilder);

    pub async fn get(&self) -> Result<VpcResponse, DoError> {
        self.inner.get().await
    }

    pub async fn put(&self, body: &VpcUpdateRequest) -> Result<VpcResponse, DoError> {
        self.inner.put(body).await
    }

    pub async fn patch(&self, body: &VpcUpdateRequest) -> Result<VpcResponse, DoError> {
        self.inner.patch(body).await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}

request_builder!(
    /// `/v2/vpcs/{vpc_id}/members`
    VpcMembersRequestBuilder
);

impl VpcMembersRequestBuilder {
    pub async fn get(&self) -> Result<VpcMembersResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<VpcMembersResponse, DoError> {
        self.inner.get_with(query).await
    }
}
