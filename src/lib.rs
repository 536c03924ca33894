#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::return_self_not_must_use
)]
//! # twitch-helix
//!
//! twitch-helix is a convenient typed wrapper library around the Twitch
//! Helix API's channel and follow endpoints.
//!
//! Every endpoint follows the same shape: a resource hands out a call
//! builder, chain methods accumulate query parameters as [`RequestOption`]s,
//! and `send` performs exactly one GET and decodes the uniform
//! `{data, pagination}` envelope into typed records.
//!
//! While respecting:
//! - the Helix request budget, via a token-bucket rate limiter.
//! - `Client-Id` and bearer-token headers on every request.
//!
//! ## Example: Printing the channels a user follows.
//!
//! ```no_run
//! use twitch_helix::Client;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Client::builder("hof5gwx0su6owfnys0yan9c87zr6t")
//!         .token("2gbdx6oar67tqtcmt49t3wpcgycthx")
//!         .build()?;
//!
//!     let mut page = client
//!         .channels()
//!         .followed()
//!         .list()
//!         .user_id("123456")
//!         .first(100)
//!         .send()
//!         .await?;
//!
//!     for followed in &page.data {
//!         println!("follows {} since {}", followed.broadcaster_name(), followed.followed_at());
//!     }
//!
//!     // an empty cursor means this was the last page
//!     if !page.cursor.is_empty() {
//!         page = client
//!             .channels()
//!             .followed()
//!             .list()
//!             .user_id("123456")
//!             .after(&page.cursor)
//!             .send()
//!             .await?;
//!         println!("next page holds {} channels", page.data.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`RequestOption`]: crate::options::RequestOption

/// Channels resource: channel information and the follow sub-resources.
pub mod channels;

/// Client module contains the [`Client`] that issues rate-limited requests.
pub mod client;

/// Contains the [`Error`] type every fallible operation returns.
///
/// [`Error`]: crate::error::Error
pub mod error;

/// Followed resource: the channels a user follows.
pub mod followed;

/// Followers resource: the users that follow a broadcaster.
pub mod followers;

/// Composable request mutations, for extra per-invocation options.
pub mod options;

pub(crate) mod models;

pub(crate) mod result;

pub use client::Client;
pub use error::Error;
pub use models::channel::Channel;
pub use models::follow::{Followed, Follower};
pub use result::Result;
