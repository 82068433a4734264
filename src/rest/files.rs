//! File and file version endpoints.

use serde_json::Value;

use crate::error::PublitioError;
use crate::rest::PublitioClient;
use crate::rest::endpoints::{files, versions};
use crate::types::{Params, UploadSource};

impl PublitioClient {
    /// Create (upload) a new file.
    ///
    /// Pass [`UploadSource::RemoteUrl`] to have the server fetch the
    /// content itself instead of uploading it. `source` may be `None` when
    /// the `file_url` parameter is already present in `params`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use publitio_api_client::{Params, PublitioClient, UploadSource};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PublitioClient::new("api_key", "api_secret");
    ///     let created = client
    ///         .create_file(
    ///             Some(UploadSource::path("photos/sunset.jpg")),
    ///             Params::new().set("public_id", "sunset"),
    ///         )
    ///         .await?;
    ///     println!("{created:#}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_file(
        &self,
        source: Option<UploadSource>,
        params: Params,
    ) -> Result<Value, PublitioError> {
        let (params, file) = match source {
            Some(source) => source.resolve(params).await?,
            None => (params, None),
        };
        self.api_post(files::CREATE, &params, file).await
    }

    /// Get a list of all files.
    pub async fn list_files(&self, params: Params) -> Result<Value, PublitioError> {
        self.api_get(files::LIST, &params).await
    }

    /// Get info about the file with ID `file_id`.
    pub async fn show_file(&self, file_id: &str) -> Result<Value, PublitioError> {
        self.api_get(&files::show(file_id), &Params::new()).await
    }

    /// Update properties of the file with ID `file_id`.
    pub async fn update_file(&self, file_id: &str, params: Params) -> Result<Value, PublitioError> {
        self.api_put(&files::update(file_id), &params, None).await
    }

    /// Permanently delete the file with ID `file_id`.
    pub async fn delete_file(&self, file_id: &str) -> Result<Value, PublitioError> {
        self.api_delete(&files::delete(file_id)).await
    }

    /// Get the HTML5 media player for the file with ID `file_id`.
    pub async fn get_file_player(
        &self,
        file_id: &str,
        params: Params,
    ) -> Result<Value, PublitioError> {
        self.api_get(&files::player(file_id), &params).await
    }

    /// Create a new version of the file with ID `file_id`.
    pub async fn create_version(
        &self,
        file_id: &str,
        params: Params,
    ) -> Result<Value, PublitioError> {
        self.api_post(&versions::create(file_id), &params, None).await
    }

    /// Get all versions of the file with ID `file_id`.
    pub async fn list_versions(
        &self,
        file_id: &str,
        params: Params,
    ) -> Result<Value, PublitioError> {
        self.api_get(&versions::list(file_id), &params).await
    }

    /// Get info about the file version with ID `version_id`.
    pub async fn show_version(&self, version_id: &str) -> Result<Value, PublitioError> {
        self.api_get(&versions::show(version_id), &Params::new()).await
    }

    /// Update properties of the file version with ID `version_id`.
    pub async fn update_version(&self, version_id: &str) -> Result<Value, PublitioError> {
        self.api_put(&versions::update(version_id), &Params::new(), None)
            .await
    }

    /// Reattempt converting the file version with ID `version_id`.
    ///
    /// Useful when a previous conversion failed.
    pub async fn reconvert_version(&self, version_id: &str) -> Result<Value, PublitioError> {
        self.api_put(&versions::reconvert(version_id), &Params::new(), None)
            .await
    }

    /// Permanently delete the file version with ID `version_id`.
    pub async fn delete_version(&self, version_id: &str) -> Result<Value, PublitioError> {
        self.api_delete(&versions::delete(version_id)).await
    }
}
