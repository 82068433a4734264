//! Publitio REST API endpoint paths.
//!
//! Paths follow the upstream pattern `<resource>/<action>[/<id>]` and are
//! joined onto the configured API base URL by the dispatcher.

/// Base URL for the JSON REST API.
pub const API_URL: &str = "https://api.publit.io/v1/";

/// Base URL for derived media retrieval.
pub const MEDIA_URL: &str = "https://media.publit.io/";

/// File endpoints.
pub mod files {
    /// Create (upload) a file.
    pub const CREATE: &str = "files/create";
    /// List files.
    pub const LIST: &str = "files/list";

    /// Show a file.
    pub fn show(file_id: &str) -> String {
        format!("files/show/{file_id}")
    }

    /// Update a file.
    pub fn update(file_id: &str) -> String {
        format!("files/update/{file_id}")
    }

    /// Delete a file.
    pub fn delete(file_id: &str) -> String {
        format!("files/delete/{file_id}")
    }

    /// Get the HTML5 player for a file.
    pub fn player(file_id: &str) -> String {
        format!("files/player/{file_id}")
    }
}

/// File version endpoints.
pub mod versions {
    /// Create a version of a file.
    pub fn create(file_id: &str) -> String {
        format!("files/versions/create/{file_id}")
    }

    /// List the versions of a file.
    pub fn list(file_id: &str) -> String {
        format!("files/versions/list/{file_id}")
    }

    /// Show a file version.
    pub fn show(version_id: &str) -> String {
        format!("files/versions/show/{version_id}")
    }

    /// Update a file version.
    pub fn update(version_id: &str) -> String {
        format!("files/versions/update/{version_id}")
    }

    /// Reattempt converting a file version.
    pub fn reconvert(version_id: &str) -> String {
        format!("files/versions/reconvert/{version_id}")
    }

    /// Delete a file version.
    pub fn delete(version_id: &str) -> String {
        format!("files/versions/delete/{version_id}")
    }
}

/// Folder endpoints.
pub mod folders {
    /// Create a folder.
    pub const CREATE: &str = "folders/create";
    /// List folders.
    pub const LIST: &str = "folders/list";
    /// Get the entire folder tree.
    pub const TREE: &str = "folders/tree";

    /// Show a folder.
    pub fn show(folder_id: &str) -> String {
        format!("folders/show/{folder_id}")
    }

    /// Update a folder.
    pub fn update(folder_id: &str) -> String {
        format!("folders/update/{folder_id}")
    }

    /// Delete a folder.
    pub fn delete(folder_id: &str) -> String {
        format!("folders/delete/{folder_id}")
    }
}

/// Player endpoints.
pub mod players {
    /// Create a player.
    pub const CREATE: &str = "players/create";
    /// List players.
    pub const LIST: &str = "players/list";

    /// Show a player.
    pub fn show(player_id: &str) -> String {
        format!("players/show/{player_id}")
    }

    /// Update a player.
    pub fn update(player_id: &str) -> String {
        format!("players/update/{player_id}")
    }

    /// Delete a player.
    pub fn delete(player_id: &str) -> String {
        format!("players/delete/{player_id}")
    }
}

/// Adtag endpoints (nested under players).
pub mod adtags {
    /// Create an adtag.
    pub const CREATE: &str = "players/adtags/create";
    /// List adtags.
    pub const LIST: &str = "players/adtags/list";

    /// Show an adtag.
    pub fn show(adtag_id: &str) -> String {
        format!("players/adtags/show/{adtag_id}")
    }

    /// Update an adtag.
    pub fn update(adtag_id: &str) -> String {
        format!("players/adtags/update/{adtag_id}")
    }

    /// Delete an adtag.
    pub fn delete(adtag_id: &str) -> String {
        format!("players/adtags/delete/{adtag_id}")
    }
}

/// Watermark endpoints.
pub mod watermarks {
    /// Create (upload) a watermark.
    pub const CREATE: &str = "watermarks/create";
    /// List watermarks.
    pub const LIST: &str = "watermarks/list";

    /// Show a watermark.
    pub fn show(watermark_id: &str) -> String {
        format!("watermarks/show/{watermark_id}")
    }

    /// Update a watermark.
    pub fn update(watermark_id: &str) -> String {
        format!("watermarks/update/{watermark_id}")
    }

    /// Delete a watermark.
    pub fn delete(watermark_id: &str) -> String {
        format!("watermarks/delete/{watermark_id}")
    }
}
