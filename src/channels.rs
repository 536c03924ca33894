//! Channel information queries.
//!
//! This is documented as `Get Channel Information` in the
//! [API reference](<https://dev.twitch.tv/docs/api/reference/#get-channel-information>).
//!
//! The endpoint is not paginated; it answers with one record per requested
//! broadcaster ID. The follow relationships around a channel live in the
//! [`followed`](crate::followed) and [`followers`](crate::followers)
//! sub-resources, reachable from here.

use reqwest::header::HeaderMap;

use crate::{
    client::Client,
    followed::FollowedResource,
    followers::FollowersResource,
    models::{channel::Channel, envelope::Envelope},
    options::RequestOption,
    result::Result,
};

/// Access to the channels endpoints of a [`Client`].
///
/// # Example
///
/// ```no_run
/// # async fn channels() -> anyhow::Result<()> {
/// use twitch_helix::Client;
///
/// let client = Client::new("hof5gwx0su6owfnys0yan9c87zr6t")?;
/// let response = client
///     .channels()
///     .list()
///     .broadcaster_ids(["141981764"])
///     .send()
///     .await?;
///
/// for channel in &response.data {
///     println!("{} plays {}", channel.display_name(), channel.game_name());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChannelsResource<'a> {
    client: &'a Client,
}

impl<'a> ChannelsResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a request to list channel information for specific
    /// broadcasters.
    pub fn list(&self) -> ChannelsListCall<'a> {
        ChannelsListCall {
            client: self.client,
            opts: Vec::new(),
        }
    }

    /// The channels a user follows.
    pub fn followed(&self) -> FollowedResource<'a> {
        FollowedResource::new(self.client)
    }

    /// The users that follow a broadcaster.
    pub fn followers(&self) -> FollowersResource<'a> {
        FollowersResource::new(self.client)
    }
}

/// An accumulated `Get Channel Information` request, executed by
/// [`send`](ChannelsListCall::send).
#[derive(Debug)]
pub struct ChannelsListCall<'a> {
    client: &'a Client,
    opts: Vec<RequestOption>,
}

/// The decoded answer to a [`ChannelsListCall`].
#[derive(Debug)]
pub struct ChannelsListResponse {
    /// Response headers, including the rate-limit headers.
    pub headers: HeaderMap,
    /// One record per found broadcaster ID.
    pub data: Vec<Channel>,
}

impl ChannelsListCall<'_> {
    /// Filters the results to the given broadcaster IDs, at most 100 per
    /// request. Each ID becomes one repeated `broadcaster_id` query
    /// parameter, in iteration order; the count limit is enforced by the
    /// server, not here.
    pub fn broadcaster_ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for id in ids {
            self.opts
                .push(RequestOption::add_query("broadcaster_id", id));
        }
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// This function will return an error if the request cannot be sent, if
    /// the API answers with a non-success status, or if the response body is
    /// not a well-formed envelope.
    pub async fn send(self) -> Result<ChannelsListResponse> {
        self.send_with([]).await
    }

    /// Executes the request with extra per-invocation options.
    ///
    /// Extras apply after the options accumulated on the builder, so an
    /// extra "set" option overrides a stored one under the same name.
    ///
    /// # Errors
    ///
    /// See [`send`](ChannelsListCall::send).
    pub async fn send_with<I>(self, extra: I) -> Result<ChannelsListResponse>
    where
        I: IntoIterator<Item = RequestOption>,
    {
        let mut opts = self.opts;
        opts.extend(extra);

        let response = self.client.get("/channels", &opts).await?;
        let headers = response.headers().clone();
        let envelope: Envelope<Channel> = Envelope::read(response).await?;

        Ok(ChannelsListResponse {
            headers,
            data: envelope.data,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{options::RequestOption, Client};

    #[tokio::test]
    async fn broadcaster_ids_accumulate_one_add_option_per_element() {
        let client = Client::new("test-client-id").unwrap();
        let call = client
            .channels()
            .list()
            .broadcaster_ids(["1", "2"])
            .broadcaster_ids(["3"]);

        assert_eq!(
            call.opts,
            vec![
                RequestOption::add_query("broadcaster_id", "1"),
                RequestOption::add_query("broadcaster_id", "2"),
                RequestOption::add_query("broadcaster_id", "3"),
            ]
        );
    }
}
