//! Rust SDK for the MySportsFeeds sports statistics API.
//!
//! Fetches named feeds (schedules, box scores, player stats, standings, ...)
//! across the three supported API protocol versions. Requests authenticate
//! with HTTP BASIC credentials; raw payloads can be persisted to a local
//! file store so a later `304 Not Modified` response is served from disk.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mysportsfeeds::{Client, FeedRequest, Format};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mysportsfeeds::Error> {
//!     let mut client = Client::builder("1.2")
//!         .store_location("results")
//!         .build()?;
//!     client.authenticate("your-username", "your-password")?;
//!
//!     let data = client
//!         .get_data(
//!             FeedRequest::new("nba", "player_gamelogs", Format::Json)
//!                 .season("2016-2017-regular")
//!                 .param("player", "stephen-curry")
//!                 .param("playerstats", "FGA,FGM"),
//!         )
//!         .await?;
//!
//!     println!("{:?}", data.as_json());
//!     Ok(())
//! }
//! ```

mod catalog;
mod client;
mod error;
mod store;
mod types;
mod url;
mod version;

pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use types::*;
pub use version::{ApiVersion, VersionConfig, SDK_VERSION};
