//! `/v2/databases`: managed database clusters.

use super::DatabasesQuery;
use crate::errors::DoError;
use crate::models::{
    DatabaseClusterCreateRequest, DatabaseClusterResponse, DatabaseClustersResponse,
    DatabaseCreateRequest, DatabaseResponse, DatabaseUserCreateRequest, DatabaseUserResponse,
    DatabaseUsersResponse, DatabasesResponse,
};

request_builder!(
    /// `/v2/databases`
    DatabasesRequestBuilder
);

impl DatabasesRequestBuilder {
    item!(by_database_cluster_uuid(cluster_uuid: &str) => DatabaseClusterItemRequestBuilder);

    pub async fn get(&self) -> Result<DatabaseClustersResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &DatabasesQuery) -> Result<DatabaseClustersResponse, DoError> {
        self.inner.get_with(query).await
    }

    pub async fn post(
        &self,
        body: &DatabaseClusterCreateRequest,
    ) -> Result<DatabaseClusterResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/databases/{cluster_uuid}`
    DatabaseClusterItemRequestBuilder
);

impl DatabaseClusterItemRequestBuilder {
    child!(dbs, "dbs" => DbsRequestBuilder);
    child!(users, "users" => UsersRequestBuilder);

    pub async fn get(&self) -> Result<DatabaseClusterResponse, DoError> {
        self.inner.get().await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}

request_builder!(
    /// `/v2/databases/{cluster_uuid}/dbs`
    DbsRequestBuilder
);

impl DbsRequestBuilder {
    item!(by_database_name(database_name: &str) => DbItemRequestBuilder);

    pub async fn get(&self) -> Result<DatabasesResponse, DoError> {
        self.inner.get().await
    }

    pub async fn post(&self, body: &DatabaseCreateRequest) -> Result<DatabaseResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/databases/{cluster_uuid}/dbs/{database_name}`
    DbItemRequestBuilder
);

impl DbItemRequestBuilder {
    pub async fn get(&self) -> Result<DatabaseResponse, DoError> {
        self.inner.get().await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}

request_builder!(
    /// `/v2/databases/{cluster_uuid}/users`
    UsersRequestBuilder
);

impl UsersRequestBuilder {
    item!(by_username(username: &str) => UserItemRequestBuilder);

    pub async fn get(&self) -> Result<DatabaseUsersResponse, DoError> {
        self.inner.get().await
    }

    pub async fn post(
        &self,
        body: &DatabaseUserCreateRequest,
    ) -> Result<DatabaseUserResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/databases/{cluster_uuid}/users/{username}`
    UserItemRequestBuilder
);

impl UserItemRequestBuilder {
    pub async fn get(&self) -> Result<DatabaseUserResponse, DoError> {
        self.inner.get().await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}
