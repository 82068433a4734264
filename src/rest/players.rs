//! Player and adtag endpoints.
//!
//! Adtags are nested under the player resource upstream
//! (`players/adtags/...`) and are managed here alongside players.

use serde_json::Value;

use crate::error::PublitioError;
use crate::rest::PublitioClient;
use crate::rest::endpoints::{adtags, players};
use crate::types::Params;

impl PublitioClient {
    /// Create a new HTML5 media player.
    ///
    /// Usually you will want to pass a `name` parameter.
    pub async fn create_player(&self, params: Params) -> Result<Value, PublitioError> {
        self.api_post(players::CREATE, &params, None).await
    }

    /// Get a list of all players.
    pub async fn list_players(&self) -> Result<Value, PublitioError> {
        self.api_get(players::LIST, &Params::new()).await
    }

    /// Get info about the player with ID `player_id`.
    pub async fn show_player(&self, player_id: &str) -> Result<Value, PublitioError> {
        self.api_get(&players::show(player_id), &Params::new()).await
    }

    /// Update properties of the player with ID `player_id`.
    pub async fn update_player(
        &self,
        player_id: &str,
        params: Params,
    ) -> Result<Value, PublitioError> {
        self.api_put(&players::update(player_id), &params, None).await
    }

    /// Delete the player with ID `player_id`.
    pub async fn delete_player(&self, player_id: &str) -> Result<Value, PublitioError> {
        self.api_delete(&players::delete(player_id)).await
    }

    /// Create a new adtag.
    ///
    /// Usually you will want to pass `name` and `tag` parameters.
    pub async fn create_adtag(&self, params: Params) -> Result<Value, PublitioError> {
        self.api_post(adtags::CREATE, &params, None).await
    }

    /// Get a list of all adtags.
    pub async fn list_adtags(&self) -> Result<Value, PublitioError> {
        self.api_get(adtags::LIST, &Params::new()).await
    }

    /// Get info about the adtag with ID `adtag_id`.
    pub async fn show_adtag(&self, adtag_id: &str) -> Result<Value, PublitioError> {
        self.api_get(&adtags::show(adtag_id), &Params::new()).await
    }

    /// Update properties of the adtag with ID `adtag_id`.
    ///
    /// The adtag endpoint expects the updated properties as a form body,
    /// not query parameters.
    pub async fn update_adtag(
        &self,
        adtag_id: &str,
        params: Params,
    ) -> Result<Value, PublitioError> {
        self.api_put(&adtags::update(adtag_id), &Params::new(), Some(&params))
            .await
    }

    /// Permanently delete the adtag with ID `adtag_id`.
    pub async fn delete_adtag(&self, adtag_id: &str) -> Result<Value, PublitioError> {
        self.api_delete(&adtags::delete(adtag_id)).await
    }
}
