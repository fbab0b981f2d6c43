//! The dispatch engine
//!
//! `Dispatcher` owns the shared `reqwest::Client` and resolves request
//! descriptors through one classification routine. It holds no per-call
//! state: clones are cheap and every entry point is safe to invoke
//! concurrently.

use crate::metrics::{MetricsSink, TracingSink};
use crate::multipart;
use crate::response::classify;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use restcall_core::{ApiError, ApiRequest, Method, UploadRequest};
use std::sync::Arc;
use tracing::debug;

/// Default bearer token placed on upload requests when the caller does not
/// override it. Kept for compatibility with existing backends that expect
/// the placeholder.
const DEFAULT_BEARER_TOKEN: &str = "token";

/// Stateless engine executing typed request descriptors
///
/// # Example
///
/// ```rust,ignore
/// use restcall_core::GetRequest;
/// use restcall_http::Dispatcher;
///
/// let dispatcher = Dispatcher::new();
/// let request: GetRequest<User> = GetRequest::new("https://api.example.com/user/1");
/// let user = dispatcher.fetch(request).await?;
/// ```
#[derive(Clone)]
pub struct Dispatcher {
    client: Client,
    metrics: Arc<dyn MetricsSink>,
    bearer_token: String,
}

impl Dispatcher {
    /// Engine with a default `reqwest::Client` and the tracing metrics sink
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Engine reusing a caller-supplied client
    ///
    /// The client is shared and reused across calls; build it once per
    /// process rather than per call.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            metrics: Arc::new(TracingSink),
            bearer_token: DEFAULT_BEARER_TOKEN.to_string(),
        }
    }

    /// Replace the metrics sink
    pub fn with_metrics(mut self, sink: Arc<dyn MetricsSink>) -> Self {
        self.metrics = sink;
        self
    }

    /// Override the bearer token sent on upload requests
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = token.into();
        self
    }

    /// Execute a descriptor and await its typed outcome
    pub async fn fetch<R>(&self, request: R) -> Result<R::Response, ApiError>
    where
        R: ApiRequest,
    {
        let url = Url::parse(request.endpoint()).map_err(|_| ApiError::InvalidUrl)?;

        let mut builder = self.client.request(reqwest_method(request.method()), url.clone());
        if let Some(body) = request.body() {
            builder = builder.body(body.to_vec());
        }
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        debug!(url = %url, method = request.method().as_str(), "dispatching request");
        self.execute(url, builder).await
    }

    /// Callback-style fetch: returns immediately, invokes `on_result`
    /// exactly once from a spawned task
    ///
    /// The callback runs on a tokio worker; callers must treat the
    /// invocation as cross-context. Requires a running tokio runtime.
    pub fn fetch_with_callback<R, F>(&self, request: R, on_result: F)
    where
        R: ApiRequest + Send + 'static,
        R::Response: Send,
        F: FnOnce(Result<R::Response, ApiError>) + Send + 'static,
    {
        let dispatcher = self.clone();
        tokio::spawn(async move {
            on_result(dispatcher.fetch(request).await);
        });
    }

    /// Execute a multipart upload descriptor and await its typed outcome
    ///
    /// Uploads always POST. A fresh boundary is generated per call and the
    /// file bytes are appended raw into the form body.
    pub async fn upload<R>(&self, request: R) -> Result<R::Response, ApiError>
    where
        R: UploadRequest,
    {
        let url = Url::parse(request.endpoint()).map_err(|_| ApiError::InvalidUrl)?;

        let boundary = multipart::fresh_boundary();
        let body = multipart::encode_form(
            &boundary,
            request.file_name(),
            request.mime_type(),
            request.file_data(),
        );

        let builder = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}"))
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.bearer_token))
            .body(body);

        debug!(url = %url, file_name = request.file_name(), "dispatching upload");
        self.execute(url, builder).await
    }

    /// Callback-style upload, the multipart counterpart of
    /// [`fetch_with_callback`](Self::fetch_with_callback)
    pub fn upload_with_callback<R, F>(&self, request: R, on_result: F)
    where
        R: UploadRequest + Send + 'static,
        R::Response: Send,
        F: FnOnce(Result<R::Response, ApiError>) + Send + 'static,
    {
        let dispatcher = self.clone();
        tokio::spawn(async move {
            on_result(dispatcher.upload(request).await);
        });
    }

    /// Shared tail of every entry point: send, record, classify
    async fn execute<T>(&self, url: Url, builder: reqwest::RequestBuilder) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::RequestFailed(Box::new(err)))?;

        let status = response.status().as_u16();
        self.metrics.record(url.as_str(), status);

        let body = response
            .bytes()
            .await
            .map_err(|err| ApiError::RequestFailed(Box::new(err)))?;

        classify(status, &body)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}
