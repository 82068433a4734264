//! Watermark endpoints.

use serde_json::Value;

use crate::error::PublitioError;
use crate::rest::PublitioClient;
use crate::rest::endpoints::watermarks;
use crate::types::{Params, UploadSource};

impl PublitioClient {
    /// Create (upload) a new watermark.
    ///
    /// Unlike file uploads the content is required; watermarks cannot be
    /// created empty.
    pub async fn create_watermark(
        &self,
        source: UploadSource,
        params: Params,
    ) -> Result<Value, PublitioError> {
        let (params, file) = source.resolve(params).await?;
        self.api_post(watermarks::CREATE, &params, file).await
    }

    /// Get a list of all watermarks.
    pub async fn list_watermarks(&self) -> Result<Value, PublitioError> {
        self.api_get(watermarks::LIST, &Params::new()).await
    }

    /// Get properties of the watermark with ID `watermark_id`.
    pub async fn show_watermark(&self, watermark_id: &str) -> Result<Value, PublitioError> {
        self.api_get(&watermarks::show(watermark_id), &Params::new())
            .await
    }

    /// Update properties of the watermark with ID `watermark_id`.
    ///
    /// The watermark endpoint expects the updated properties as a form
    /// body, not query parameters.
    pub async fn update_watermark(
        &self,
        watermark_id: &str,
        params: Params,
    ) -> Result<Value, PublitioError> {
        self.api_put(&watermarks::update(watermark_id), &Params::new(), Some(&params))
            .await
    }

    /// Permanently delete the watermark with ID `watermark_id`.
    pub async fn delete_watermark(&self, watermark_id: &str) -> Result<Value, PublitioError> {
        self.api_delete(&watermarks::delete(watermark_id)).await
    }
}
