use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A broadcaster that a user follows, as returned by the
/// [`Get Followed Channels`](<https://dev.twitch.tv/docs/api/reference/#get-followed-channels>)
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followed {
    /// The followed broadcaster's user ID.
    broadcaster_id: String,

    /// The followed broadcaster's login name.
    broadcaster_login: String,

    /// The followed broadcaster's display name.
    broadcaster_name: String,

    /// When the user started following the broadcaster.
    followed_at: DateTime<Utc>,
}

impl Followed {
    /// Returns the followed broadcaster's user ID.
    pub fn broadcaster_id(&self) -> &str {
        &self.broadcaster_id
    }

    /// Returns the followed broadcaster's login name.
    pub fn broadcaster_login(&self) -> &str {
        &self.broadcaster_login
    }

    /// Returns the followed broadcaster's display name.
    pub fn broadcaster_name(&self) -> &str {
        &self.broadcaster_name
    }

    /// Returns when the user started following the broadcaster.
    pub fn followed_at(&self) -> DateTime<Utc> {
        self.followed_at
    }
}

/// A user that follows a broadcaster, as returned by the
/// [`Get Channel Followers`](<https://dev.twitch.tv/docs/api/reference/#get-channel-followers>)
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follower {
    /// The following user's ID.
    user_id: String,

    /// The following user's login name.
    user_login: String,

    /// The following user's display name.
    user_name: String,

    /// When the user started following the broadcaster.
    followed_at: DateTime<Utc>,
}

impl Follower {
    /// Returns the following user's ID.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the following user's login name.
    pub fn user_login(&self) -> &str {
        &self.user_login
    }

    /// Returns the following user's display name.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Returns when the user started following the broadcaster.
    pub fn followed_at(&self) -> DateTime<Utc> {
        self.followed_at
    }
}
