//! `/v2/domains` and DNS records.

use super::{ListQuery, RecordsQuery};
use crate::errors::DoError;
use crate::models::{
    DomainCreateRequest, DomainRecordRequest, DomainRecordResponse, DomainRecordsResponse,
    DomainResponse, DomainsResponse,
};

request_builder!(
    /// `/v2/domains`
    DomainsRequestBuilder
);

impl DomainsRequestBuilder {
    item!(by_domain_name(domain_name: &str) => DomainItemRequestBuilder);

    pub async fn get(&self) -> Result<DomainsResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<DomainsResponse, DoError> {
        self.inner.get_with(query).await
    }

    pub async fn post(&self, body: &DomainCreateRequest) -> Result<DomainResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/domains/{domain_name}`
    DomainItemRequestBuilder
);

impl DomainItemRequestBuilder {
    child!(records, "records" => RecordsRequestBuilder);

    pub async fn get(&self) -> Result<DomainResponse, DoError> {
        self.inner.get().await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}

request_builder!(
    /// `/v2/domains/{domain_name}/records`
    RecordsRequestBuilder
);

impl RecordsRequestBuilder {
    item!(by_record_id(record_id: u64) => RecordItemRequestBuilder);

    pub async fn get(&self) -> Result<DomainRecordsResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &RecordsQuery) -> Result<DomainRecordsResponse, DoError> {
        self.inner.get_with(query).await
    }

    pub async fn post(&self, body: &DomainRecordRequest) -> Result<DomainRecordResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/domains/{domain_name}/records/{record_id}`
    RecordItemRequestBuilder
);

impl RecordItemRequestBuilder {
    pub async fn get(&self) -> Result<DomainRecordResponse, DoError> {
        self.inner.get().await
    }

    pub async fn put(&self, body: &DomainRecordRequest) -> Result<DomainRecordResponse, DoError> {
        self.inner.put(body).await
    }

    /// Update only the fields set on `body`.
    pub async fn patch(&self, body: &DomainRecordRequest) -> Result<DomainRecordResponse, DoError> {
        self.inner.patch(body).await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}
