//! Client layer: merges configuration with per-call input and dispatches requests.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    ApiKey, MessageId, MessageListOptions, RawBody, Recipients, SendMessage, SenderName,
    ValidationError,
};
use crate::transport::{
    Endpoint, encode_list_messages_query, encode_message_query, encode_send_message_form,
};

const DEFAULT_BASE_URL: &str = "https://api.semaphore.co/api/v4/";

const ENV_API_KEY: &str = "SEMAPHORE_API_KEY";
const ENV_SENDER_NAME: &str = "SEMAPHORE_SENDER_NAME";
const ENV_BASE_URL: &str = "SEMAPHORE_BASE_URL";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: Url,
    form: Option<Vec<(String, String)>>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(&'a self, request: HttpRequest)
    -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let mut builder = self.client.request(request.method, request.url);
            if let Some(form) = request.form.as_ref() {
                builder = builder.form(form);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SemaphoreClient`].
///
/// Validation failures are raised before anything is sent. Everything else comes from
/// the HTTP exchange and is surfaced as-is, without retries.
pub enum SemaphoreError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The configured base URL cannot be parsed or cannot hold endpoint paths.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A required environment variable is not set.
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`SemaphoreClient`].
///
/// Use this to change the default sender name, the base URL, or HTTP client settings.
pub struct SemaphoreClientBuilder {
    api_key: ApiKey,
    sender_name: SenderName,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SemaphoreClientBuilder {
    /// Create a builder with the `SEMAPHORE` sender name and the production base URL.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            sender_name: SenderName::default(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Create a builder from `SEMAPHORE_API_KEY` (required), `SEMAPHORE_SENDER_NAME` and
    /// `SEMAPHORE_BASE_URL` (both optional).
    pub fn from_env() -> Result<Self, SemaphoreError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SemaphoreError> {
        let api_key = lookup(ENV_API_KEY).ok_or(SemaphoreError::MissingEnv(ENV_API_KEY))?;
        let mut builder = Self::new(ApiKey::new(api_key)?);
        if let Some(sender_name) = lookup(ENV_SENDER_NAME) {
            builder = builder.sender_name(SenderName::new(sender_name)?);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            builder = builder.base_url(base_url);
        }
        Ok(builder)
    }

    /// Sender name used by sends that do not carry their own.
    pub fn sender_name(mut self, sender_name: SenderName) -> Self {
        self.sender_name = sender_name;
        self
    }

    /// Override the API root that endpoint paths are resolved against.
    ///
    /// Keep the trailing slash: `https://host/api/v4` resolves `account` to
    /// `https://host/api/account`.
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

    /// Build a [`SemaphoreClient`].
    pub fn build(self) -> Result<SemaphoreClient, SemaphoreError> {
        let base_url = parse_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SemaphoreError::Transport(Box::new(err)))?;

        Ok(SemaphoreClient::with_transport(
            self.api_key,
            self.sender_name,
            base_url,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, SemaphoreError> {
    let invalid = |source| SemaphoreError::InvalidBaseUrl {
        url: raw.to_owned(),
        source,
    };
    let url = Url::parse(raw).map_err(invalid)?;
    if url.cannot_be_a_base() {
        return Err(invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase));
    }
    Ok(url)
}

#[derive(Clone)]
/// High-level Semaphore client.
///
/// Configuration (API key, default sender name, base URL) is fixed at construction.
/// Every operation is one independent request whose body is returned untouched, so a
/// client can be cloned and shared freely across tasks.
///
/// The API key travels as an `apikey` query parameter on every request. Endpoints that
/// build their own query include it there instead; sends also repeat it in the form body.
pub struct SemaphoreClient {
    api_key: ApiKey,
    sender_name: SenderName,
    base_url: Url,
    default_query: Vec<(String, String)>,
    http: Arc<dyn HttpTransport>,
}

impl SemaphoreClient {
    /// Create a client with the default sender name and base URL.
    ///
    /// For more customization, use [`SemaphoreClient::builder`].
    pub fn new(api_key: ApiKey) -> Result<Self, SemaphoreError> {
        Self::builder(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> SemaphoreClientBuilder {
        SemaphoreClientBuilder::new(api_key)
    }

    fn with_transport(
        api_key: ApiKey,
        sender_name: SenderName,
        base_url: Url,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        let default_query = encode_message_query(&api_key);
        Self {
            api_key,
            sender_name,
            base_url,
            default_query,
            http,
        }
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Sender name applied to sends without an override.
    pub fn sender_name(&self) -> &SenderName {
        &self.sender_name
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the account balance (`GET account`).
    ///
    /// Same request as [`SemaphoreClient::account`].
    pub async fn balance(&self) -> Result<RawBody, SemaphoreError> {
        self.dispatch(Endpoint::Account, Vec::new(), None).await
    }

    /// Fetch account details (`GET account`).
    pub async fn account(&self) -> Result<RawBody, SemaphoreError> {
        self.dispatch(Endpoint::Account, Vec::new(), None).await
    }

    /// Send a message (`POST messages`).
    ///
    /// The recipients go out in the shape they were given: a comma-separated string stays
    /// one `number` field, a list becomes `number[0]`, `number[1]`, ...
    pub async fn send_message(&self, request: SendMessage) -> Result<RawBody, SemaphoreError> {
        let form = encode_send_message_form(&self.api_key, &self.sender_name, &request);
        self.dispatch(Endpoint::SendMessage, Vec::new(), Some(form))
            .await
    }

    /// Validate and send a message under the configured sender name.
    ///
    /// Errors:
    /// - [`SemaphoreError::Validation`] when more than 1000 recipients are given; nothing
    ///   is sent in that case.
    pub async fn send(
        &self,
        recipients: impl Into<Recipients>,
        message: impl Into<String>,
    ) -> Result<RawBody, SemaphoreError> {
        let request = SendMessage::new(recipients, message)?;
        self.send_message(request).await
    }

    /// Fetch a single sent message (`GET messages/{id}`).
    pub async fn message(&self, id: &MessageId) -> Result<RawBody, SemaphoreError> {
        self.dispatch(
            Endpoint::Message { id },
            encode_message_query(&self.api_key),
            None,
        )
        .await
    }

    /// List sent messages (`GET messages`), one page at a time.
    pub async fn messages(&self, options: &MessageListOptions) -> Result<RawBody, SemaphoreError> {
        self.dispatch(
            Endpoint::ListMessages,
            encode_list_messages_query(&self.api_key, options),
            None,
        )
        .await
    }

    /// Users associated with the account (`GET account/users`).
    pub async fn users(&self) -> Result<RawBody, SemaphoreError> {
        self.dispatch(Endpoint::Users, Vec::new(), None).await
    }

    /// Sender names registered on the account (`GET account/sendernames`).
    pub async fn sender_names(&self) -> Result<RawBody, SemaphoreError> {
        self.dispatch(Endpoint::SenderNames, Vec::new(), None).await
    }

    /// Account transactions (`GET account/transactions`).
    pub async fn transactions(&self) -> Result<RawBody, SemaphoreError> {
        self.dispatch(Endpoint::Transactions, Vec::new(), None)
            .await
    }

    async fn dispatch(
        &self,
        endpoint: Endpoint<'_>,
        query: Vec<(String, String)>,
        form: Option<Vec<(String, String)>>,
    ) -> Result<RawBody, SemaphoreError> {
        let mut url =
            endpoint
                .resolve(&self.base_url)
                .map_err(|source| SemaphoreError::InvalidBaseUrl {
                    url: self.base_url.to_string(),
                    source,
                })?;

        // An endpoint query replaces the default one rather than adding to it.
        let query = if query.is_empty() {
            &self.default_query
        } else {
            &query
        };
        url.query_pairs_mut().extend_pairs(query);

        let method = endpoint.method();
        debug!(method = %method, path = url.path(), "dispatching Semaphore request");

        let response = self
            .http
            .execute(HttpRequest { method, url, form })
            .await
            .map_err(SemaphoreError::Transport)?;

        debug!(status = response.status, "received Semaphore response");

        if !(200..=299).contains(&response.status) {
            warn!(status = response.status, "Semaphore returned a non-success status");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SemaphoreError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(RawBody::new(response.body))
    }
}
