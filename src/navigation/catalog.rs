//! Read-only catalogs: regions, sizes and images.

use super::{ImagesQuery, ListQuery};
use crate::errors::DoError;
use crate::models::{ImageResponse, ImagesResponse, RegionsResponse, SizesResponse};

request_builder!(
    /// `/v2/regions`
    RegionsRequestBuilder
);

impl RegionsRequestBuilder {
    pub async fn get(&self) -> Result<RegionsResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<RegionsResponse, DoError> {
        self.inner.get_with(query).await
    }
}

request_builder!(
    /// `/v2/sizes`
    SizesRequestBuilder
);

impl SizesRequestBuilder {
    pub async fn get(&self) -> Result<SizesResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<SizesResponse, DoError> {
        self.inner.get_with(query).await
    }
}

request_builder!(
    /// `/v2/images`
    ImagesRequestBuilder
);

impl ImagesRequestBuilder {
    item!(
        /// Select an image by numeric id or public slug.
        by_image_id(image_id: &str) => ImageItemRequestBuilder
    );

    pub async fn get(&self) -> Result<ImagesResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ImagesQuery) -> Result<ImagesResponse, DoError> {
        self.inner.get_with(query).await
    }
}

request_builder!(
    /// `/v2/images/{image_id}`
    ImageItemRequestBuilder
);

impl ImageItemRequestBuilder {
    pub async fn get(&self) -> Result<ImageResponse, DoError> {
        self.inner.get().await
    }

    pub async fn delete(&self) -> Result<(), DoError> {
        self.inner.delete().await
    }
}
