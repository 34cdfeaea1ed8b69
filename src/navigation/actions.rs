//! `/v2/actions`

use super::ListQuery;
use crate::errors::DoError;
use crate::models::{ActionResponse, ActionsResponse};

request_builder!(
    /// `/v2/actions`: every action on the account.
    ActionsRequestBuilder
);

impl ActionsRequestBuilder {
    item!(by_action_id(action_id: u64) => ActionItemRequestBuilder);

    pub async fn get(&self) -> Result<ActionsResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<ActionsResponse, DoError> {
        self.inner.get_with(query).await
    }
}

request_builder!(
    /// `/v2/actions/{action_id}`
    ActionItemRequestBuilder
);

impl ActionItemRequestBuilder {
    pub async fn get(&self) -> Result<ActionResponse, DoError> {
        self.inner.get().await
    }
}
