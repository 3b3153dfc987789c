//! Request specifications.
//!
//! A [`RequestSpec`] is the reusable bundle of base URL, default headers,
//! timeout, and auth settings that a [`WebClient`](crate::client::WebClient)
//! is built from. Specs are immutable once built; endpoint wrappers hold
//! them for the lifetime of the wrapper.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use url::Url;

use crate::error::{ApiError, ClientError};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How outgoing requests authenticate.
#[derive(Debug, Clone, Default)]
pub enum AuthScheme {
    /// No authentication.
    #[default]
    None,
    /// `Authorization: Bearer <token>` header.
    Bearer(String),
    /// API key sent in a named header.
    ApiKey {
        /// The header name carrying the key.
        header: String,
        /// The key value.
        key: String,
    },
}

/// A reusable request specification.
///
/// ## Examples
///
/// ```rust,ignore
/// use url::Url;
/// use webapi::{AuthScheme, RequestSpec};
///
/// let spec = RequestSpec::builder(Url::parse("https://api.example.com")?)
///     .default_header("Accept", "application/json")?
///     .auth(AuthScheme::Bearer("test-token".to_string()))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RequestSpec {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    auth: AuthScheme,
}

impl RequestSpec {
    /// Creates a new builder with the given base URL.
    pub fn builder(base_url: Url) -> RequestSpecBuilder {
        RequestSpecBuilder::new(base_url)
    }

    /// Returns the base URL all requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the headers attached to every request.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Applies the configured auth scheme to a request builder.
    ///
    /// ## Errors
    ///
    /// Returns an error if an `ApiKey` header name is malformed.
    pub(crate) fn apply_auth(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        match &self.auth {
            AuthScheme::None => Ok(request),
            AuthScheme::Bearer(token) => {
                let header_value = format!("Bearer {token}");
                Ok(request.header(AUTHORIZATION, header_value))
            }
            AuthScheme::ApiKey { header, key } => {
                let name = HeaderName::try_from(header.as_str())
                    .map_err(|e| ClientError::InvalidHeader(format!("{header}: {e}")))?;
                Ok(request.header(name, key.as_str()))
            }
        }
    }
}

/// Builder for configuring a [`RequestSpec`].
#[derive(Debug)]
pub struct RequestSpecBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    auth: AuthScheme,
}

impl RequestSpecBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            auth: AuthScheme::None,
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ClientError::InvalidHeader(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ClientError::InvalidHeader(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the authentication scheme.
    pub fn auth(mut self, auth: AuthScheme) -> Self {
        self.auth = auth;
        self
    }

    /// Builds the immutable [`RequestSpec`].
    pub fn build(self) -> RequestSpec {
        RequestSpec {
            base_url: self.base_url,
            timeout: self.timeout,
            default_headers: self.default_headers,
            auth: self.auth,
        }
    }
}
