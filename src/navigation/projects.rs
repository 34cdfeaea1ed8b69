//! `/v2/projects`

use super::ListQuery;
use crate::errors::DoError;
use crate::models::{
    ProjectAssignRequest, ProjectCreateRequest, ProjectResourcesResponse, ProjectResponse,
    ProjectUpdateRequest, ProjectsResponse,
};

request_builder!(
    /// `/v2/projects`
    ProjectsRequestBuilder
);

impl ProjectsRequestBuilder {
    item!(by_project_id(project_id: &str) => ProjectItemRequestBuilder);

    child!(
        /// The account's default project.
        default_project, "default" => ProjectItemRequestBuilder
    );

    pub async fn get(&self) -> Result<ProjectsResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<ProjectsResponse, DoError> {
        self.inner.get_with(query).await
    }

    pub async fn post(&self, body: &ProjectCreateRequest) -> Result<ProjectResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/projects/{project_id}` or `/v2/projects/default`
    ProjectItemRequestBuilder
);

impl ProjectItemRequestBuilder {
    child!(resources, "resources" => ProjectResourcesRequestBuilder);

    pub async fn get(&self) -> Result<ProjectResponse, DoError> {
        self.inner.get().await
    }

    pub async fn put(&self, body: &ProjectUpdateRequest) -> Result<ProjectResponse, DoError> {
        self.inner.put(body).await
    }

    pub async fn patch(&self, body: &ProjectUpdateRequest) -> Result<ProjectResponse, DoError> {
        self.inner.patch(body).await
    }

    /// Only empty, non-default projects can be deleted.
    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}

request_builder!(
    /// `/v2/projects/{project_id}/resources`
    ProjectResourcesRequestBuilder
);

impl ProjectResourcesRequestBuilder {
    pub async fn get(&self) -> Result<ProjectResourcesResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<ProjectResourcesResponse, DoError> {
        self.inner.get_with(query).await
    }

    /// Move resources, given by URN, into the project.
    pub async fn post(
        &self,
        body: &ProjectAssignRequest,
    ) -> Result<ProjectResourcesResponse, DoError> {
        self.inner.post(body).await
    }
}
