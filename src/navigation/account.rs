//! `/v2/account`

use super::ListQuery;
use crate::errors::DoError;
use crate::models::{
    AccountResponse, SshKeyCreateRequest, SshKeyResponse, SshKeyUpdateRequest, SshKeysResponse,
};

request_builder!(
    /// `/v2/account`
    AccountRequestBuilder
);

impl AccountRequestBuilder {
    child!(keys, "keys" => KeysRequestBuilder);

    /// Show the account the token belongs to.
    pub async fn get(&self) -> Result<AccountResponse, DoError> {
        self.inner.get().await
    }
}

request_builder!(
    /// `/v2/account/keys`
    KeysRequestBuilder
);

impl KeysRequestBuilder {
    item!(
        /// Select a key by numeric id or fingerprint.
        by_key_id(key_id: &str) => KeyItemRequestBuilder
    );

    pub async fn get(&self) -> Result<SshKeysResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<SshKeysResponse, DoError> {
        self.inner.get_with(query).await
    }

    pub async fn post(&self, body: &SshKeyCreateRequest) -> Result<SshKeyResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/account/keys/{key_id}`
    KeyItemRequestBuilder
);

impl KeyItemRequestBuilder {
    pub async fn get(&self) -> Result<SshKeyResponse, DoError> {
        self.inner.get().await
    }

    pub async fn put(&self, body: &SshKeyUpdateRequest) -> Result<SshKeyResponse, DoError> {
        self.inner.put(body).await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}
