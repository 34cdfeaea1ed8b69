//! `/v2/droplets` and droplet actions.

use super::{DropletsQuery, ListQuery, TagSelector};
use crate::errors::DoError;
use crate::models::{
    ActionResponse, ActionsResponse, DropletAction, DropletCreateRequest, DropletCreateResponse,
    DropletResponse, DropletsResponse,
};

request_builder!(
    /// `/v2/droplets`
    DropletsRequestBuilder
);

impl DropletsRequestBuilder {
    item!(by_droplet_id(droplet_id: u64) => DropletItemRequestBuilder);

    child!(
        /// Actions applied to every droplet carrying a tag.
        actions, "actions" => DropletsBulkActionsRequestBuilder
    );

    pub async fn get(&self) -> Result<DropletsResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &DropletsQuery) -> Result<DropletsResponse, DoError> {
        self.inner.get_with(query).await
    }

    /// Create one droplet (`name`) or several (`names`).
    pub async fn post(&self, body: &DropletCreateRequest) -> Result<DropletCreateResponse, DoError> {
        self.inner.post(body).await
    }

    /// Delete every droplet tagged `tag_name`.
    pub async fn delete_by_tag(&self, tag_name: impl Into<String>) -> Result<(), DoError> {
        let selector = TagSelector {
            tag_name: tag_name.into(),
        };
        self.inner.delete_with(&selector).await
    }
}

request_builder!(
    /// `/v2/droplets/actions`
    DropletsBulkActionsRequestBuilder
);

impl DropletsBulkActionsRequestBuilder {
    pub async fn post(
        &self,
        body: &DropletAction,
        selector: &TagSelector,
    ) -> Result<ActionsResponse, DoError> {
        self.inner.post_with(body, selector).await
    }
}

request_builder!(
    /// `/v2/droplets/{droplet_id}`
    DropletItemRequestBuilder
);

impl DropletItemRequestBuilder {
    child!(actions, "actions" => DropletActionsRequestBuilder);

    pub async fn get(&self) -> Result<DropletResponse, DoError> {
        self.inner.get().await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}

request_builder!(
    /// `/v2/droplets/{droplet_id}/actions`
    DropletActionsRequestBuilder
);

impl DropletActionsRequestBuilder {
    item!(by_action_id(action_id: u64) => DropletActionItemRequestBuilder);

    pub async fn get(&self) -> Result<ActionsResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<ActionsResponse, DoError> {
        self.inner.get_with(query).await
    }

    /// Start an action such as a reboot or resize.
    pub async fn post(&self, body: &DropletAction) -> Result<ActionResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/droplets/{droplet_id}/actions/{action_id}`
    DropletActionItemRequestBuilder
);

impl DropletActionItemRequestBuilder {
    pub async fn get(&self) -> Result<ActionResponse, DoError> {
        self.inner.get().await
    }
}
