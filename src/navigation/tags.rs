//! `/v2/tags`

use super::ListQuery;
use crate::errors::DoError;
use crate::models::{TagCreateRequest, TagResourcesRequest, TagResponse, TagsResponse};
use crate::request::HttpMethod;

request_builder!(
    /// `/v2/tags`
    TagsRequestBuilder
);

impl TagsRequestBuilder {
    item!(
        /// Tags are addressed by name.
        by_tag_id(tag_name: &str) => TagItemRequestBuilder
    );

    pub async fn get(&self) -> Result<TagsResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<TagsResponse, DoError> {
        self.inner.get_with(query).await
    }

    pub async fn post(&self, body: &TagCreateRequest) -> Result<TagResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/tags/{tag_name}`
    TagItemRequestBuilder
);

impl TagItemRequestBuilder {
    child!(resources, "resources" => TagResourcesRequestBuilder);

    pub async fn get(&self) -> Result<TagResponse, DoError> {
        self.inner.get().await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}

request_builder!(
    /// `/v2/tags/{tag_name}/resources`
    TagResourcesRequestBuilder
);

impl TagResourcesRequestBuilder {
    pub async fn post(&self, body: &TagResourcesRequest) -> Result<(), DoError> {
        self.inner.send_no_content(HttpMethod::Post, body).await
    }

    pub async fn delete(&self, body: &TagResourcesRequest) -> Result<(), DoError> {
        self.inner.send_no_content(HttpMethod::Delete, body).await
    }
}
