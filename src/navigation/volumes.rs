//! `/v2/volumes`: block storage.

use super::VolumesQuery;
use crate::errors::DoError;
use crate::models::{
    ActionResponse, VolumeAction, VolumeCreateRequest, VolumeResponse, VolumesResponse,
};

request_builder!(
    /// `/v2/volumes`
    VolumesRequestBuilder
);

impl VolumesRequestBuilder {
    item!(by_volume_id(volume_id: &str) => VolumeItemRequestBuilder);

    pub async fn get(&self) -> Result<VolumesResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &VolumesQuery) -> Result<VolumesResponse, DoError> {
        self.inner.get_with(query).await
    }

    pub async fn post(&self, body: &VolumeCreateRequest) -> Result<VolumeResponse, DoError> {
        self.inner.post(body).await
    }
}

request_builder!(
    /// `/v2/volumes/{volume_id}`
    VolumeItemRequestBuilder
);

impl VolumeItemRequestBuilder {
    child!(actions, "actions" => VolumeActionsRequestBuilder);

    pub async fn get(&self) -> Result<VolumeResponse, DoError> {
        self.inner.get().await
    }

    /// Fails with 409 while the volume is attached.
    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}

request_builder!(
    /// `/v2/volumes/{volume_id}/actions`
    VolumeActionsRequestBuilder
);

impl VolumeActionsRequestBuilder {
    /// Attach, detach or resize the volume.
    pub async fn post(&self, body: &VolumeAction) -> Result<ActionResponse, DoError> {
        self.inner.post(body).await
    }
}
