use std::{sync::Arc, time::Duration};

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client as ReqwestClient, Response,
};
use tokio::{
    sync::{Semaphore, SemaphorePermit},
    task::JoinHandle,
    time::interval,
};

use crate::{
    channels::ChannelsResource,
    error::Error,
    options::{RequestOption, RequestParts},
    result::Result,
};

/// Base URL every request path is resolved against.
const HELIX_BASE_URL: &str = "https://api.twitch.tv/helix";

/// Request budget replenished by the limiter. Helix grants 800 points per
/// minute per bearer token; a bucket of 13 refilled once a second stays
/// inside that.
const BUCKET_SIZE: usize = 13;

/// A rate-limited Helix API client.
///
/// The client owns the connection pool, injects the `Client-Id` header and
/// bearer token into every request, and resolves request paths against the
/// configured base URL. It must be constructed inside a Tokio runtime.
#[derive(Debug)]
pub struct Client {
    http: ReqwestClient,
    base_url: String,
    limiter: RateLimit,
}

#[derive(Debug)]
pub(crate) struct RateLimit {
    pub(crate) permits: Arc<Semaphore>,
    pub(crate) replenisher: JoinHandle<()>,
}

impl RateLimit {
    fn new(bucket: usize) -> Self {
        let permits = Arc::new(Semaphore::new(bucket));
        let clone = permits.clone();

        let replenisher = tokio::spawn(async move {
            let mut interval = interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if clone.available_permits() < bucket {
                    clone.add_permits(1);
                }
            }
        });

        RateLimit {
            permits,
            replenisher,
        }
    }

    pub(crate) async fn acquire(&self) -> Result<SemaphorePermit<'_>> {
        self.permits.acquire().await.map_err(Into::into)
    }
}

impl Drop for RateLimit {
    fn drop(&mut self) {
        self.replenisher.abort();
    }
}

impl Client {
    /// Creates a client with the given application client ID and the default
    /// Helix base URL. Use [`Client::builder`] to attach a bearer token.
    ///
    /// # Errors
    ///
    /// This function will return an error if the client ID is not a valid
    /// header value or the HTTP client cannot be constructed.
    pub fn new(client_id: &str) -> Result<Client> {
        Client::builder(client_id).build()
    }

    /// Returns a [`ClientBuilder`] for the given application client ID.
    pub fn builder(client_id: &str) -> ClientBuilder {
        ClientBuilder {
            client_id: client_id.to_string(),
            token: None,
            base_url: HELIX_BASE_URL.to_string(),
        }
    }

    /// Access to the channels resource and its follow sub-resources.
    pub fn channels(&self) -> ChannelsResource<'_> {
        ChannelsResource::new(self)
    }

    /// Issues one GET request to `path` with all `options` applied in order.
    ///
    /// Non-success statuses are classified as [`Error::Status`] after the
    /// body has been drained, so the pooled connection is returned on every
    /// exit path.
    pub(crate) async fn get(&self, path: &str, options: &[RequestOption]) -> Result<Response> {
        let parts = RequestParts::from_options(options);

        let permit = self.limiter.acquire().await?;
        let url = format!("{}{path}", self.base_url);
        let response = {
            let mut builder = self.http.get(&url).query(&parts.query);
            for (name, value) in &parts.headers {
                builder = builder.header(name, value);
            }
            log::info!("request for {url} dispatched");
            builder.send().await?
        };

        // reduce the permit count
        permit.forget();

        log::debug!("response status: {}", response.status());

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(Error::Status { status, message })
        }
    }
}

/// Configures and constructs a [`Client`].
///
/// # Example
///
/// ```no_run
/// # async fn client() -> twitch_helix::Result<()> {
/// use twitch_helix::Client;
///
/// let client = Client::builder("hof5gwx0su6owfnys0yan9c87zr6t")
///     .token("2gbdx6oar67tqtcmt49t3wpcgycthx")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    client_id: String,
    token: Option<String>,
    base_url: String,
}

impl ClientBuilder {
    /// Sets the user access token sent as `Authorization: Bearer` with every
    /// request. Obtaining and refreshing tokens is up to the caller.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Overrides the base URL requests are resolved against. Useful for
    /// pointing the client at a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }

    /// Constructs the [`Client`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the client ID or token is not a
    /// valid header value, or if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let mut headers = HeaderMap::new();
        let client_id = HeaderValue::from_str(&self.client_id)
            .map_err(|err| Error::Config(format!("client id: {err}")))?;
        headers.insert("Client-Id", client_id);

        if let Some(token) = &self.token {
            let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|err| Error::Config(format!("token: {err}")))?;
            headers.insert(AUTHORIZATION, bearer);
        }

        let http = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Client {
            http,
            base_url: self.base_url,
            limiter: RateLimit::new(BUCKET_SIZE),
        })
    }
}
