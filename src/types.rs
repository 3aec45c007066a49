//! Request and response types for the MySportsFeeds SDK.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Output format for a feed request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// JSON document, decoded into a generic value.
    #[default]
    Json,
    /// XML, returned as raw text.
    Xml,
    /// CSV, returned as raw text.
    Csv,
}

impl Format {
    /// The format as it appears in URLs and filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Csv => "csv",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            "csv" => Ok(Format::Csv),
            other => Err(Error::InvalidFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// A single feed request.
///
/// Query parameters are kept as an ordered list and serialized into the URL
/// in the order given.
///
/// # Example
///
/// ```rust
/// use mysportsfeeds::{FeedRequest, Format};
///
/// let request = FeedRequest::new("nba", "player_gamelogs", Format::Json)
///     .season("2016-2017-regular")
///     .param("player", "stephen-curry");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FeedRequest {
    /// League identifier, e.g. `nba`.
    pub league: String,
    /// Season identifier, e.g. `2016-2017-regular`. Only the league-scoped
    /// `current_season` feed may omit it.
    pub season: Option<String>,
    /// Feed name, validated against the active version's catalog.
    pub feed: String,
    /// Requested output format.
    pub format: Format,
    /// Additional query parameters, in serialization order.
    pub params: Vec<(String, String)>,
}

impl FeedRequest {
    /// Create a new feed request.
    pub fn new(league: impl Into<String>, feed: impl Into<String>, format: Format) -> Self {
        Self {
            league: league.into(),
            feed: feed.into(),
            format,
            ..Default::default()
        }
    }

    /// Set the season.
    pub fn season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    /// Append a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Look up a query parameter by key.
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A decoded feed payload.
///
/// JSON bodies are parsed into a generic document; XML and CSV bodies are
/// passed through as text. CSV is deliberately opaque - the API serves it as
/// a download format and the SDK does not split it into rows.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedData {
    /// Parsed JSON document.
    Json(Value),
    /// Raw XML text.
    Xml(String),
    /// Raw CSV text.
    Csv(String),
}

impl FeedData {
    /// The parsed JSON document, if this is a JSON payload.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            FeedData::Json(value) => Some(value),
            _ => None,
        }
    }

    /// The raw text, if this is an XML or CSV payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeedData::Json(_) => None,
            FeedData::Xml(text) | FeedData::Csv(text) => Some(text),
        }
    }
}

/// BASIC auth credentials, held for the lifetime of the client.
#[derive(Clone)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
