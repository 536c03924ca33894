use serde::{Deserialize, Serialize};

/// Information about a channel, as returned by the `Get Channel Information`
/// endpoint. Maps to the fields referenced in the
/// [API documentation](<https://dev.twitch.tv/docs/api/reference/#get-channel-information>).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// The broadcaster's user ID.
    #[serde(rename = "broadcaster_id")]
    id: String,

    /// The broadcaster's login name.
    #[serde(rename = "broadcaster_login")]
    login: String,

    /// The broadcaster's display name.
    #[serde(rename = "broadcaster_name")]
    display_name: String,

    /// The ID of the game the broadcaster is playing. Empty if none was set.
    game_id: String,

    /// The name of the game the broadcaster is playing. Empty if none was set.
    game_name: String,

    /// The stream title. Empty if none was set.
    title: String,

    /// The broadcast delay in seconds. Only populated for the broadcaster's
    /// own channel.
    delay: u32,

    /// Tags applied to the channel.
    tags: Vec<String>,

    /// Content classification labels applied to the channel.
    content_classification_labels: Vec<String>,

    /// Whether the channel features branded content.
    is_branded_content: bool,
}

impl Channel {
    /// Returns the broadcaster's user ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the broadcaster's login name.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Returns the broadcaster's display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the ID of the game being played, if any was set.
    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    /// Returns the name of the game being played, if any was set.
    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    /// Returns the stream title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the broadcast delay in seconds.
    pub fn delay(&self) -> u32 {
        self.delay
    }

    /// Returns the tags applied to the channel.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the content classification labels applied to the channel.
    pub fn content_classification_labels(&self) -> &[String] {
        &self.content_classification_labels
    }

    /// Returns whether the channel features branded content.
    pub fn is_branded_content(&self) -> bool {
        self.is_branded_content
    }
}
