//! Publitio REST API client implementation.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use url::Url;

use crate::auth::{
    Credentials, NonceProvider, RandomNonce, build_auth_payload, merge_user_payload,
};
use crate::error::PublitioError;
use crate::rest::endpoints::{API_URL, MEDIA_URL};
use crate::types::{FilePart, Params};

/// The Publitio REST API client.
///
/// Handles request signing and dispatch for every endpoint method. Each
/// method issues exactly one network request and returns the server's
/// decoded JSON verbatim; an API-level error arriving as well-formed JSON
/// is returned like any success value and left to the caller to interpret.
///
/// # Example
///
/// ```rust,no_run
/// use publitio_api_client::{Params, PublitioClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PublitioClient::new("api_key", "api_secret");
///     let file = client.show_file("xkjnWvPz").await?;
///     println!("{file:#}");
///     Ok(())
/// }
/// ```
///
/// For tests, point the client at a mock server:
///
/// ```rust,no_run
/// use publitio_api_client::PublitioClient;
///
/// let client = PublitioClient::builder("api_key", "api_secret")
///     .api_url("http://127.0.0.1:8080")
///     .build();
/// ```
#[derive(Clone)]
pub struct PublitioClient {
    http_client: ClientWithMiddleware,
    api_url: String,
    media_url: String,
    credentials: Credentials,
    nonce_provider: Arc<dyn NonceProvider>,
}

/// True if the server is known to respond with this status code.
///
/// Dispatch refuses to interpret the body of anything else.
pub fn status_code_is_known(status: StatusCode) -> bool {
    let code = status.as_u16();
    status.is_success() || (400..=406).contains(&code) || matches!(code, 410 | 422 | 429 | 500 | 503)
}

/// Optional request body accepted by the dispatcher.
enum RequestBody {
    None,
    /// URL-encoded form fields
    Form(Params),
    /// A single multipart part named `file`
    File(FilePart),
}

impl PublitioClient {
    /// Create a new client with default settings.
    ///
    /// Use [`PublitioClient::builder()`] to override base URLs, the user
    /// agent, or the nonce provider.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::builder(api_key, api_secret).build()
    }

    /// Create a new client from existing credentials, for example from
    /// [`Credentials::from_env`].
    pub fn from_credentials(credentials: Credentials) -> Self {
        PublitioClientBuilder::from_credentials(credentials).build()
    }

    /// Create a new client builder.
    pub fn builder(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> PublitioClientBuilder {
        PublitioClientBuilder::new(api_key, api_secret)
    }

    /// Make a signed GET request.
    pub(crate) async fn api_get(&self, path: &str, params: &Params) -> Result<Value, PublitioError> {
        self.request(Method::GET, path, params, RequestBody::None).await
    }

    /// Make a signed PUT request, optionally with a form body.
    pub(crate) async fn api_put(
        &self,
        path: &str,
        params: &Params,
        form: Option<&Params>,
    ) -> Result<Value, PublitioError> {
        let body = match form {
            Some(fields) => RequestBody::Form(fields.clone()),
            None => RequestBody::None,
        };
        self.request(Method::PUT, path, params, body).await
    }

    /// Make a signed POST request, optionally with multipart file content.
    pub(crate) async fn api_post(
        &self,
        path: &str,
        params: &Params,
        file: Option<FilePart>,
    ) -> Result<Value, PublitioError> {
        let body = match file {
            Some(part) => RequestBody::File(part),
            None => RequestBody::None,
        };
        self.request(Method::POST, path, params, body).await
    }

    /// Make a signed DELETE request.
    pub(crate) async fn api_delete(&self, path: &str) -> Result<Value, PublitioError> {
        self.request(Method::DELETE, path, &Params::new(), RequestBody::None)
            .await
    }

    /// Execute one signed request and decode the response.
    ///
    /// Exactly one network request per call; there is no retry loop. The
    /// status code is classified before the body is read: anything outside
    /// the known set fails as [`PublitioError::UnknownStatusCode`]. A known
    /// status whose body is not valid JSON fails as
    /// [`PublitioError::MalformedResponse`] with the raw text attached.
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        body: RequestBody,
    ) -> Result<Value, PublitioError> {
        let mut url = self.api_endpoint(path)?;
        let query = serde_urlencoded::to_string(self.signed_query(params))?;
        url.set_query(Some(&query));

        tracing::debug!(%method, path, "dispatching API request");

        let request = self.http_client.request(method, url);
        let request = match body {
            RequestBody::None => request,
            RequestBody::Form(fields) => request.form(&fields),
            RequestBody::File(part) => {
                let file = reqwest::multipart::Part::bytes(part.content.to_vec())
                    .file_name(part.filename);
                request.multipart(reqwest::multipart::Form::new().part("file", file))
            }
        };

        let response = request.send().await?;
        Self::parse_response(response).await
    }

    /// Plain unauthenticated GET against the media surface.
    ///
    /// Any non-success response is a transformation failure carrying the
    /// HTTP reason phrase.
    pub(crate) async fn media_get(&self, url: &str) -> Result<Bytes, PublitioError> {
        tracing::debug!(url, "retrieving transformed media");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_owned)
                .unwrap_or_else(|| status.as_u16().to_string());
            return Err(PublitioError::TransformationFailed { reason });
        }
        Ok(response.bytes().await?)
    }

    pub(crate) fn media_url(&self) -> &str {
        &self.media_url
    }

    /// Join a path onto the configured API base URL.
    fn api_endpoint(&self, path: &str) -> Result<Url, PublitioError> {
        Ok(Url::parse(&self.api_url)?.join(path)?)
    }

    /// Build the signed query for one request: fresh auth fields overlaid
    /// with the caller's parameters.
    fn signed_query(&self, params: &Params) -> Params {
        let auth = build_auth_payload(&self.credentials, self.nonce_provider.as_ref());
        merge_user_payload(auth, params)
    }

    /// Decode a response whose status code is in the known set.
    async fn parse_response(response: reqwest::Response) -> Result<Value, PublitioError> {
        let status = response.status();
        if !status_code_is_known(status) {
            return Err(PublitioError::UnknownStatusCode(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|_| PublitioError::MalformedResponse { body })
    }
}

impl std::fmt::Debug for PublitioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublitioClient")
            .field("api_url", &self.api_url)
            .field("media_url", &self.media_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Builder for [`PublitioClient`].
pub struct PublitioClientBuilder {
    api_url: String,
    media_url: String,
    credentials: Credentials,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
}

impl PublitioClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::from_credentials(Credentials::new(api_key, api_secret))
    }

    /// Create a new builder from existing credentials.
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self {
            api_url: API_URL.to_string(),
            media_url: MEDIA_URL.to_string(),
            credentials,
            nonce_provider: None,
            user_agent: None,
        }
    }

    /// Set the API base URL (useful for testing with a mock server).
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = normalize_base_url(url.into());
        self
    }

    /// Set the media base URL (useful for testing with a mock server).
    pub fn media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url = normalize_base_url(url.into());
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> PublitioClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("publitio-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("publitio-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        PublitioClient {
            http_client,
            api_url: self.api_url,
            media_url: self.media_url,
            credentials: self.credentials,
            nonce_provider: self
                .nonce_provider
                .unwrap_or_else(|| Arc::new(RandomNonce::new())),
        }
    }
}

/// Base URLs must end in a slash for path joins to land under them.
fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_codes() {
        for code in (200u16..300)
            .chain(400..=406)
            .chain([410, 422, 429, 500, 503])
        {
            let status = StatusCode::from_u16(code).unwrap();
            assert!(status_code_is_known(status), "{code} should be known");
        }
    }

    #[test]
    fn test_unknown_status_codes() {
        for code in [100u16, 301, 304, 307, 407, 408, 409, 418, 501, 502, 504, 599] {
            let status = StatusCode::from_u16(code).unwrap();
            assert!(!status_code_is_known(status), "{code} should be unknown");
        }
    }

    #[test]
    fn test_base_url_gains_trailing_slash() {
        assert_eq!(normalize_base_url("http://localhost:8080".into()), "http://localhost:8080/");
        assert_eq!(normalize_base_url("http://localhost:8080/".into()), "http://localhost:8080/");
    }

    #[test]
    fn test_api_endpoint_joins_under_base() {
        let client = PublitioClient::builder("key", "secret")
            .api_url("http://localhost:8080/v1")
            .build();
        let url = client.api_endpoint("files/list").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/files/list");
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let client = PublitioClient::new("key", "super_secret");
        let debug_str = format!("{client:?}");
        assert!(!debug_str.contains("super_secret"));
    }
}
