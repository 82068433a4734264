//! Folder endpoints.

use serde_json::Value;

use crate::error::PublitioError;
use crate::rest::PublitioClient;
use crate::rest::endpoints::folders;
use crate::types::Params;

impl PublitioClient {
    /// Create a new folder.
    ///
    /// Usually you will want to pass a `name` parameter.
    pub async fn create_folder(&self, params: Params) -> Result<Value, PublitioError> {
        self.api_post(folders::CREATE, &params, None).await
    }

    /// Get a list of all folders.
    pub async fn list_folders(&self, params: Params) -> Result<Value, PublitioError> {
        self.api_get(folders::LIST, &params).await
    }

    /// Get info about the folder with ID `folder_id`.
    pub async fn show_folder(&self, folder_id: &str) -> Result<Value, PublitioError> {
        self.api_get(&folders::show(folder_id), &Params::new()).await
    }

    /// Update properties of the folder with ID `folder_id`.
    pub async fn update_folder(
        &self,
        folder_id: &str,
        params: Params,
    ) -> Result<Value, PublitioError> {
        self.api_put(&folders::update(folder_id), &params, None).await
    }

    /// Permanently delete the folder with ID `folder_id`.
    pub async fn delete_folder(&self, folder_id: &str) -> Result<Value, PublitioError> {
        self.api_delete(&folders::delete(folder_id)).await
    }

    /// Get the entire folder tree.
    pub async fn folders_tree(&self) -> Result<Value, PublitioError> {
        self.api_get(folders::TREE, &Params::new()).await
    }
}
