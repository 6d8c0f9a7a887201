//! Client layer: the transport core every service module sends its requests through.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{ApiKey, ApiResponse};

#[cfg(test)]
pub(crate) mod fake;

/// Production PossiNote API address.
pub const DEFAULT_BASE_URL: &str = "https://notifyapi.possitech.net/api/v1";

const AUTHENTICATION_MESSAGE: &str = "Invalid API key";
const PAYMENT_REQUIRED_MESSAGE: &str = "Payment required";
const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded";
const VALIDATION_MESSAGE: &str = "Validation error";
const UNKNOWN_REMOTE_MESSAGE: &str = "Unknown error";
const NO_RESPONSE_MESSAGE: &str = "Network error: No response received";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) authorization: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

/// Why a request produced no HTTP response.
#[derive(Debug)]
pub(crate) enum TransportFailure {
    /// The request could not be built or handed to the network.
    NotDispatched(BoxError),
    /// The request went out but no complete response came back.
    NoResponse(BoxError),
}

pub(crate) trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method, request.url)
                .header(AUTHORIZATION, request.authorization)
                .header(CONTENT_TYPE, "application/json");
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            if let Some(body) = request.body.as_ref() {
                builder = builder.json(body);
            }

            let prepared = builder
                .build()
                .map_err(|err| TransportFailure::NotDispatched(Box::new(err)))?;
            let response = self.client.execute(prepared).await.map_err(|err| {
                if err.is_builder() {
                    TransportFailure::NotDispatched(Box::new(err))
                } else {
                    TransportFailure::NoResponse(Box::new(err))
                }
            })?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|err| TransportFailure::NoResponse(Box::new(err)))?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PossinoteClient`] and the service modules.
///
/// Every failed request surfaces as exactly one of the first five variants. Match on the
/// variant to branch on the kind of failure; [`PossinoteError::code`] gives the numeric
/// code and [`PossinoteError::raw_response`] the body the server sent, if any.
pub enum PossinoteError {
    /// HTTP 401: the API key was rejected.
    #[error("{message}")]
    Authentication {
        message: String,
        response: Option<String>,
    },

    /// HTTP 402: the account cannot pay for the request.
    #[error("{message}")]
    PaymentRequired {
        message: String,
        response: Option<String>,
    },

    /// HTTP 429: too many requests.
    #[error("{message}")]
    RateLimit {
        message: String,
        response: Option<String>,
    },

    /// HTTP 400: the remote API rejected the request payload.
    #[error("{message}")]
    Validation {
        message: String,
        response: Option<String>,
    },

    /// Any other failure: unexpected HTTP status, no response, undecodable body, or a
    /// request that could not be dispatched.
    ///
    /// `status` is `None` when no HTTP response was received.
    #[error("{message}")]
    Api {
        message: String,
        status: Option<u16>,
        response: Option<String>,
        #[source]
        source: Option<BoxError>,
    },

    /// The client builder was given settings it cannot use. Never returned by a request.
    #[error("{message}")]
    InvalidConfig {
        message: String,
        #[source]
        source: BoxError,
    },
}

impl PossinoteError {
    /// Human-readable message, identical to the `Display` output.
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message, .. }
            | Self::PaymentRequired { message, .. }
            | Self::RateLimit { message, .. }
            | Self::Validation { message, .. }
            | Self::Api { message, .. }
            | Self::InvalidConfig { message, .. } => message,
        }
    }

    /// Numeric error code: the fixed status for the dedicated kinds, the HTTP status for
    /// [`PossinoteError::Api`] when a response was received, `None` otherwise.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::PaymentRequired { .. } => Some(402),
            Self::RateLimit { .. } => Some(429),
            Self::Validation { .. } => Some(400),
            Self::Api { status, .. } => *status,
            Self::InvalidConfig { .. } => None,
        }
    }

    /// Raw response body attached to the error, when the server sent a non-blank one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::Authentication { response, .. }
            | Self::PaymentRequired { response, .. }
            | Self::RateLimit { response, .. }
            | Self::Validation { response, .. }
            | Self::Api { response, .. } => response.as_deref(),
            Self::InvalidConfig { .. } => None,
        }
    }

    fn from_status(status: u16, body: String) -> Self {
        let response = if body.trim().is_empty() {
            None
        } else {
            Some(body)
        };
        let remote = response
            .as_deref()
            .and_then(crate::transport::remote_error_message);

        match status {
            401 => Self::Authentication {
                message: AUTHENTICATION_MESSAGE.to_owned(),
                response,
            },
            402 => Self::PaymentRequired {
                message: remote.unwrap_or_else(|| PAYMENT_REQUIRED_MESSAGE.to_owned()),
                response,
            },
            429 => Self::RateLimit {
                message: RATE_LIMIT_MESSAGE.to_owned(),
                response,
            },
            400 => Self::Validation {
                message: remote.unwrap_or_else(|| VALIDATION_MESSAGE.to_owned()),
                response,
            },
            _ => Self::Api {
                message: format!(
                    "API request failed with status {status}: {}",
                    remote.as_deref().unwrap_or(UNKNOWN_REMOTE_MESSAGE)
                ),
                status: Some(status),
                response,
                source: None,
            },
        }
    }

    fn from_transport(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::NoResponse(source) => Self::Api {
                message: NO_RESPONSE_MESSAGE.to_owned(),
                status: None,
                response: None,
                source: Some(source),
            },
            TransportFailure::NotDispatched(source) => Self::not_dispatched(source),
        }
    }

    fn not_dispatched(source: BoxError) -> Self {
        Self::Api {
            message: format!("Request failed: {source}"),
            status: None,
            response: None,
            source: Some(source),
        }
    }

    fn invalid_config(source: BoxError) -> Self {
        Self::InvalidConfig {
            message: format!("Invalid client configuration: {source}"),
            source,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Authentication { .. } => "authentication",
            Self::PaymentRequired { .. } => "payment_required",
            Self::RateLimit { .. } => "rate_limit",
            Self::Validation { .. } => "validation",
            Self::Api { .. } => "api",
            Self::InvalidConfig { .. } => "invalid_config",
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`PossinoteClient`].
///
/// Use this when you need a different base address (staging, local mocks), a request
/// timeout, or a custom user-agent.
pub struct PossinoteClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PossinoteClientBuilder {
    /// Create a builder with the production base address and no timeout/user-agent override.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base address. Endpoint paths are appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`PossinoteClient`].
    ///
    /// Fails with [`PossinoteError::InvalidConfig`] when the base address is not an
    /// absolute URL or the HTTP client cannot be created.
    pub fn build(self) -> Result<PossinoteClient, PossinoteError> {
        Url::parse(&self.base_url).map_err(|err| PossinoteError::invalid_config(Box::new(err)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| PossinoteError::invalid_config(Box::new(err)))?;

        Ok(PossinoteClient {
            authorization: self.api_key.bearer(),
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Transport core for the PossiNote API.
///
/// Owns the base address and the `Authorization: Bearer <key>` header value, both fixed at
/// construction. Cloning is cheap and clones share the underlying HTTP connection pool,
/// which is how the service modules hold on to it.
///
/// Any non-2xx response is returned as a [`PossinoteError`], never as an `Ok` envelope.
pub struct PossinoteClient {
    authorization: String,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for PossinoteClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PossinoteClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PossinoteClient {
    /// Create a client for the production API.
    ///
    /// For more customization, use [`PossinoteClient::builder`].
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            authorization: api_key.into().bearer(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: impl Into<ApiKey>) -> PossinoteClientBuilder {
        PossinoteClientBuilder::new(api_key)
    }

    /// Base address the endpoint paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and decode the response envelope.
    ///
    /// `endpoint` is a path such as `/sms/send`; `query` is appended as flat key/value
    /// pairs.
    ///
    /// Errors:
    /// - 401, 402, 429 and 400 map to their dedicated [`PossinoteError`] variants,
    /// - any other non-2xx status, a missing response, an undecodable body, or a request
    ///   that cannot be dispatched map to [`PossinoteError::Api`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
        query: &[(String, String)],
    ) -> Result<ApiResponse<T>, PossinoteError> {
        let url = self.endpoint_url(endpoint)?;
        self.send(method, endpoint, url, body, query).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        url: Url,
        body: Option<serde_json::Value>,
        query: &[(String, String)],
    ) -> Result<ApiResponse<T>, PossinoteError> {
        tracing::debug!(%method, endpoint, "sending PossiNote request");

        let request = HttpRequest {
            method,
            url,
            authorization: self.authorization.clone(),
            query: query.to_vec(),
            body,
        };

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(failure) => {
                let err = PossinoteError::from_transport(failure);
                tracing::debug!(
                    endpoint,
                    kind = err.kind(),
                    error = %err,
                    "PossiNote request failed"
                );
                return Err(err);
            }
        };

        let status = response.status;
        if !(200..=299).contains(&status) {
            let err = PossinoteError::from_status(status, response.body);
            tracing::debug!(
                endpoint,
                status,
                kind = err.kind(),
                error = %err,
                "PossiNote request failed"
            );
            return Err(err);
        }

        tracing::debug!(endpoint, status, "PossiNote request succeeded");
        match crate::transport::decode_envelope(&response.body) {
            Ok(envelope) => Ok(envelope),
            Err(err) => Err(PossinoteError::Api {
                message: format!("Failed to decode response: {err}"),
                status: Some(status),
                response: Some(response.body),
                source: Some(Box::new(err)),
            }),
        }
    }

    /// `GET endpoint` with optional query parameters.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<ApiResponse<T>, PossinoteError> {
        self.request(Method::GET, endpoint, None, query).await
    }

    /// `POST endpoint` with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, PossinoteError> {
        let body = encode_body(body)?;
        self.request(Method::POST, endpoint, Some(body), &[]).await
    }

    /// `PUT endpoint` with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, PossinoteError> {
        let body = encode_body(body)?;
        self.request(Method::PUT, endpoint, Some(body), &[]).await
    }

    /// `DELETE endpoint`.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<ApiResponse<T>, PossinoteError> {
        self.request(Method::DELETE, endpoint, None, &[]).await
    }

    /// `DELETE collection/{id}`, with `id` escaped as a single path segment.
    ///
    /// An empty, `.` or `..` id is rejected as [`PossinoteError::Api`] without sending
    /// anything.
    pub async fn delete_resource<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<ApiResponse<T>, PossinoteError> {
        let url = self.resource_url(collection, id)?;
        self.send(Method::DELETE, collection, url, None, &[]).await
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, PossinoteError> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|err| PossinoteError::not_dispatched(Box::new(err)))
    }

    fn resource_url(&self, collection: &str, id: &str) -> Result<Url, PossinoteError> {
        if matches!(id, "" | "." | "..") {
            return Err(PossinoteError::not_dispatched(
                format!("invalid resource id {id:?}").into(),
            ));
        }

        let mut url = self.endpoint_url(collection)?;
        url.path_segments_mut()
            .map_err(|()| {
                PossinoteError::not_dispatched("base URL cannot take path segments".into())
            })?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, PossinoteError> {
    serde_json::to_value(body).map_err(|err| PossinoteError::not_dispatched(Box::new(err)))
}

#[cfg(test)]
impl PossinoteClient {
    pub(crate) fn with_transport(api_key: &str, transport: fake::FakeTransport) -> Self {
        Self {
            authorization: ApiKey::new(api_key).bearer(),
            base_url: "https://example.invalid/api/v1".to_owned(),
            http: Arc::new(transport),
        }
    }
}
