//! The users that follow a broadcaster.
//!
//! This is documented as `Get Channel Followers` in the
//! [API reference](<https://dev.twitch.tv/docs/api/reference/#get-channel-followers>).
//!
//! Listing another broadcaster's followers yields only the total unless the
//! token carries the `moderator:read:followers` scope; scope handling is up
//! to whoever supplies the token.

use reqwest::header::HeaderMap;

use crate::{
    client::Client,
    models::{envelope::Envelope, follow::Follower},
    options::RequestOption,
    result::Result,
};

/// Access to the channel-followers endpoint of a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct FollowersResource<'a> {
    client: &'a Client,
}

impl<'a> FollowersResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a request to list the users that follow a broadcaster.
    pub fn list(&self) -> FollowersListCall<'a> {
        FollowersListCall {
            client: self.client,
            opts: Vec::new(),
        }
    }
}

/// An accumulated `Get Channel Followers` request, executed by
/// [`send`](FollowersListCall::send).
#[derive(Debug)]
pub struct FollowersListCall<'a> {
    client: &'a Client,
    opts: Vec<RequestOption>,
}

/// One decoded page of a [`FollowersListCall`].
#[derive(Debug)]
pub struct FollowersListResponse {
    /// Response headers, including the rate-limit headers.
    pub headers: HeaderMap,
    /// The followers on this page. May be empty.
    pub data: Vec<Follower>,
    /// Cursor for the next page, empty when no further pages exist.
    pub cursor: String,
}

impl FollowersListCall<'_> {
    /// The broadcaster whose followers are listed.
    pub fn broadcaster_id(mut self, id: impl Into<String>) -> Self {
        self.opts
            .push(RequestOption::set_query("broadcaster_id", id));
        self
    }

    /// Checks whether this one user follows the broadcaster. Without it the
    /// response contains every follower of the broadcaster.
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
    pub async fn send(self) -> Result<FollowersListResponse> {
        self.send_with([]).await
    }

    /// Executes the request with extra per-invocation options.
    ///
    /// Extras apply after the options accumulated on the builder, so an
    /// extra "set" option overrides a stored one under the same name.
    ///
    /// # Errors
    ///
    /// See [`send`](FollowersListCall::send).
    pub async fn send_with<I>(self, extra: I) -> Result<FollowersListResponse>
    where
        I: IntoIterator<Item = RequestOption>,
    {
        let mut opts = self.opts;
        opts.extend(extra);

        let response = self.client.get("/channels/followers", &opts).await?;
        let headers = response.headers().clone();
        let envelope: Envelope<Follower> = Envelope::read(response).await?;

        Ok(FollowersListResponse {
            headers,
            cursor: envelope.cursor(),
            data: envelope.data,
        })
    }
}
