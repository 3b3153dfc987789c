//! Request execution with tracing instrumentation.
//!
//! [`WebClient`] is the shared base client every resource wrapper composes:
//! generic verb methods parameterized by a `{param}` path template, executed
//! against the base URL and settings of a [`RequestSpec`].

use serde::Serialize;
use tracing::{instrument, Span};
use url::Url;

use crate::error::{ApiError, ClientError};
use crate::method::RestMethod;
use crate::response::CheckedResponse;
use crate::spec::RequestSpec;

/// Substitutes `{param}` placeholders in a path template.
fn substitute_params(template: &str, params: &[(&str, &str)]) -> String {
    let mut path = template.to_string();
    for (key, value) in params {
        path = path.replace(&format!("{{{key}}}"), value);
    }
    path
}

/// Async HTTP client shared by the endpoint wrappers.
///
/// Wraps `reqwest::Client` (connection pooling, rustls) configured from a
/// [`RequestSpec`]. A `WebClient` holds no mutable state; one instance per
/// resource wrapper is the intended usage.
///
/// Unlike a general-purpose client, a non-2xx status is not an error here:
/// the response is returned as-is so negative-path tests can assert on
/// failure statuses. The status check happens in
/// [`CheckedResponse::expect_status`].
///
/// ## Examples
///
/// ```rust,ignore
/// use reqwest::StatusCode;
/// use webapi::{RequestSpec, WebClient};
///
/// let client = WebClient::new(spec)?;
/// let response = client
///     .get("/comments/{commentId}", &[("commentId", "3")])
///     .await?
///     .expect_status(StatusCode::OK)?;
/// ```
#[derive(Debug)]
pub struct WebClient {
    client: reqwest::Client,
    spec: RequestSpec,
}

impl WebClient {
    /// Creates a client from a request specification.
    ///
    /// ## Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(spec: RequestSpec) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(spec.timeout())
            .default_headers(spec.default_headers().clone())
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { client, spec })
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        self.spec.base_url()
    }

    /// Issues a GET to `template` with `{param}` substitution.
    pub async fn get(
        &self,
        template: &str,
        params: &[(&str, &str)],
    ) -> Result<CheckedResponse, ApiError> {
        self.execute(RestMethod::Get, template, params, None::<&()>)
            .await
    }

    /// Issues a POST to `template` with `body` serialized as JSON.
    pub async fn post<B>(&self, template: &str, body: &B) -> Result<CheckedResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(RestMethod::Post, template, &[], Some(body))
            .await
    }

    /// Issues a PUT to `template` with `{param}` substitution and `body`
    /// serialized as JSON.
    pub async fn put<B>(
        &self,
        template: &str,
        body: &B,
        params: &[(&str, &str)],
    ) -> Result<CheckedResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(RestMethod::Put, template, params, Some(body))
            .await
    }

    /// Issues a DELETE to `template` with `{param}` substitution.
    pub async fn delete(
        &self,
        template: &str,
        params: &[(&str, &str)],
    ) -> Result<CheckedResponse, ApiError> {
        self.execute(RestMethod::Delete, template, params, None::<&()>)
            .await
    }

    /// Builds, sends, and buffers one request.
    #[instrument(
        name = "api_request",
        skip(self, body),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    async fn execute<B>(
        &self,
        method: RestMethod,
        template: &str,
        params: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<CheckedResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        Span::current().record("http.method", method.to_string().as_str());

        let path = substitute_params(template, params);
        let full_url = self
            .spec
            .base_url()
            .join(&path)
            .map_err(|e| ClientError::InvalidUrl(format!("{path}: {e}")))?;

        Span::current().record("http.url", full_url.as_str());

        let mut request = self.client.request(method.to_reqwest(), full_url);
        request = self.spec.apply_auth(request)?;
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ClientError::Request)?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        let headers = response.headers().clone();
        let bytes = response.bytes().await.map_err(ClientError::Request)?;

        Ok(CheckedResponse::new(status, headers, bytes))
    }
}
