//! The channels a user follows.
//!
//! This is documented as `Get Followed Channels` in the
//! [API reference](<https://dev.twitch.tv/docs/api/reference/#get-followed-channels>).
//!
//! The endpoint is paginated: each page carries a cursor that the next
//! request passes back through [`after`](FollowedListCall::after); an empty
//! cursor means the last page was reached.

use reqwest::header::HeaderMap;

use crate::{
    client::Client,
    models::{envelope::Envelope, follow::Followed},
    options::RequestOption,
    result::Result,
};

/// Access to the followed-channels endpoint of a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct FollowedResource<'a> {
    client: &'a Client,
}

impl<'a> FollowedResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a request to list the broadcasters a user follows.
    pub fn list(&self) -> FollowedListCall<'a> {
        FollowedListCall {
            client: self.client,
            opts: Vec::new(),
        }
    }
}

/// An accumulated `Get Followed Channels` request, executed by
/// [`send`](FollowedListCall::send).
///
/// # Example
///
/// ```no_run
/// # async fn followed() -> anyhow::Result<()> {
/// use twitch_helix::Client;
///
/// let client = Client::builder("hof5gwx0su6owfnys0yan9c87zr6t")
///     .token("2gbdx6oar67tqtcmt49t3wpcgycthx")
///     .build()?;
///
/// let page = client
///     .channels()
///     .followed()
///     .list()
///     .user_id("123456")
///     .first(50)
///     .send()
///     .await?;
///
/// println!("follows {} channels, next page: {:?}", page.data.len(), page.cursor);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FollowedListCall<'a> {
    client: &'a Client,
    opts: Vec<RequestOption>,
}

/// One decoded page of a [`FollowedListCall`].
#[derive(Debug)]
pub struct FollowedListResponse {
    /// Response headers, including the rate-limit headers.
    pub headers: HeaderMap,
    /// The followed broadcasters on this page. May be empty.
    pub data: Vec<Followed>,
    /// Cursor for the next page, empty when no further pages exist.
    pub cursor: String,
}

impl FollowedListCall<'_> {
    /// Checks whether the user follows this one broadcaster. Without it the
    /// response contains every broadcaster the user follows.
    pub fn broadcaster_id(mut self, id: impl Into<String>) -> Self {
        self.opts
            .push(RequestOption::set_query("broadcaster_id", id));
        self
    }

    /// The user whose followed channels are listed.
    pub fn user_id(mut self, id: impl Into<String>) -> Self {
        self.opts.push(RequestOption::set_query("user_id", id));
        self
    }

    /// The page size. The server accepts 1 to 100 and defaults to 20; values
    /// outside that range are passed through and rejected by the server.
    pub fn first(mut self, n: u32) -> Self {
        self.opts
            .push(RequestOption::set_query("first", n.to_string()));
        self
    }

    /// The cursor used to get the next page of results.
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.opts.push(RequestOption::set_query("after", cursor));
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// This function will return an error if the request cannot be sent, if
    /// the API answers with a non-success status, or if the response body is
    /// not a well-formed envelope.
    pub async fn send(self) -> Result<FollowedListResponse> {
        self.send_with([]).await
    }

    /// Executes the request with extra per-invocation options.
    ///
    /// Extras apply after the options accumulated on the builder, so an
    /// extra "set" option overrides a stored one under the same name.
    ///
    /// # Errors
    ///
    /// See [`send`](FollowedListCall::send).
    pub async fn send_with<I>(self, extra: I) -> Result<FollowedListResponse>
    where
        I: IntoIterator<Item = RequestOption>,
    {
        let mut opts = self.opts;
        opts.extend(extra);

        let response = self.client.get("/channels/followed", &opts).await?;
        let headers = response.headers().clone();
        let envelope: Envelope<Followed> = Envelope::read(response).await?;

        Ok(FollowedListResponse {
            headers,
            cursor: envelope.cursor(),
            data: envelope.data,
        })
    }
}
