//! Common request types shared across endpoint methods.

use std::collections::BTreeMap;
use std::path::PathBuf;

use bytes::Bytes;
use serde::Serialize;

use crate::error::PublitioError;

/// Query parameters for an endpoint call.
///
/// A thin ordered map of parameter name to value. Endpoint methods accept
/// whatever parameters the corresponding REST endpoint supports; see
/// <https://publit.io/docs> for the per-endpoint lists.
///
/// # Example
///
/// ```rust
/// use publitio_api_client::Params;
///
/// let params = Params::new().set("limit", 10).set("order", "date");
/// assert_eq!(params.get("limit"), Some("10"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params {
    entries: BTreeMap<String, String>,
}

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, returning the map for chaining.
    ///
    /// Setting the same name twice keeps the last value.
    pub fn set(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.entries.insert(name.into(), value.to_string());
        self
    }

    /// Value of a parameter, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// True if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of parameters set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over name/value pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.entries.insert(name.into(), value.to_string());
    }
}

/// A single multipart file part, as accepted by the dispatcher.
pub(crate) struct FilePart {
    pub(crate) filename: String,
    pub(crate) content: Bytes,
}

/// Source of the file content for upload endpoints.
///
/// Uploads from memory or disk are sent as multipart form data under the
/// `file` field. A remote URL reference is forwarded as the `file_url`
/// query parameter instead and the server fetches the content itself.
#[derive(Debug, Clone)]
pub enum UploadSource {
    /// Raw file content, with the filename reported to the server.
    Bytes {
        /// Filename reported in the multipart part
        filename: String,
        /// The file content
        content: Bytes,
    },
    /// A local file, read at call time.
    Path(PathBuf),
    /// A remote URL the server downloads the content from.
    RemoteUrl(String),
}

impl UploadSource {
    /// Upload raw bytes under the given filename.
    pub fn bytes(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self::Bytes {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Upload a local file.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Let the server fetch the content from a remote URL.
    pub fn remote_url(url: impl Into<String>) -> Self {
        Self::RemoteUrl(url.into())
    }

    /// Split into the query parameters and multipart content contributed
    /// to the request.
    pub(crate) async fn resolve(
        self,
        params: Params,
    ) -> Result<(Params, Option<FilePart>), PublitioError> {
        match self {
            Self::Bytes { filename, content } => {
                Ok((params, Some(FilePart { filename, content })))
            }
            Self::Path(path) => {
                let filename = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "file".to_string());
                let content = tokio::fs::read(&path).await?.into();
                Ok((params, Some(FilePart { filename, content })))
            }
            Self::RemoteUrl(url) => Ok((params.set("file_url", url), None)),
        }
    }
}
