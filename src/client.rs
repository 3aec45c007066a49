//! Client facade and the per-request feed pipeline.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, info, warn};

use crate::catalog;
use crate::error::{Error, Result};
use crate::store::{output_filename, FileStore};
use crate::types::{Credentials, FeedData, FeedRequest, Format};
use crate::url::build_url;
use crate::version::{build_user_agent, ApiVersion, VersionConfig};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for constructing a [`Client`].
pub struct ClientBuilder {
    version: String,
    verbose: bool,
    store_location: Option<PathBuf>,
    timeout: Duration,
    base_url: Option<String>,
    danger_accept_invalid_certs: bool,
}

impl ClientBuilder {
    /// Create a new client builder for the given API version
    /// (`"1.0"`, `"1.1"` or `"1.2"`).
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            verbose: false,
            store_location: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_url: None,
            danger_accept_invalid_certs: false,
        }
    }

    /// Emit request diagnostics at info level instead of debug.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Persist raw feed payloads under the given directory.
    ///
    /// Without a store, a not-modified response has no local copy to serve
    /// and [`get_data`](Client::get_data) fails with [`Error::NotFound`].
    pub fn store_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.store_location = Some(location.into());
        self
    }

    /// Set the request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the API base endpoint. Intended for tests.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    /// Skip TLS certificate verification. Testing only; certificates are
    /// verified by default.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.danger_accept_invalid_certs = accept;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let version: ApiVersion = self.version.parse()?;

        if let Some(location) = &self.store_location {
            if location.as_os_str().is_empty() {
                return Err(Error::InvalidStoreConfig(
                    "must specify a location for stored data".into(),
                ));
            }
        }

        let config = version.config();

        let base_url = match self.base_url {
            Some(url) => {
                if !url.starts_with("https://") {
                    warn!(
                        base_url = %url,
                        "API base URL is not using HTTPS. This is insecure."
                    );
                }
                url
            }
            None => config.base_url.to_string(),
        };

        if self.danger_accept_invalid_certs {
            warn!("TLS certificate verification is disabled. Use for testing only.");
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .gzip(config.accept_gzip)
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs)
            .user_agent(build_user_agent())
            .build()
            .map_err(Error::Request)?;

        Ok(Client {
            service: FeedService {
                version,
                config,
                base_url,
                http,
                verbose: self.verbose,
                store: self.store_location.map(FileStore::new),
                credentials: None,
            },
        })
    }
}

/// The MySportsFeeds SDK client.
///
/// Selects an API version at construction and exposes the authenticate and
/// get-data entry points.
///
/// # Example
///
/// ```rust,no_run
/// use mysportsfeeds::{Client, FeedRequest, Format};
///
/// #[tokio::main]
/// async fn main() -> Result<(), mysportsfeeds::Error> {
///     let mut client = Client::builder("1.2")
///         .store_location("results")
///         .build()?;
///     client.authenticate("your-username", "your-password")?;
///
///     let data = client
///         .get_data(
///             FeedRequest::new("nba", "player_gamelogs", Format::Json)
///                 .season("2016-2017-regular")
///                 .param("player", "stephen-curry")
///                 .param("playerstats", "FGA,FGM"),
///         )
///         .await?;
///
///     println!("{:?}", data.as_json());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Client {
    service: FeedService,
}

impl Client {
    /// Create a new client builder for the given API version.
    pub fn builder(version: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(version)
    }

    /// The API version this client was constructed for.
    pub fn version(&self) -> ApiVersion {
        self.service.version
    }

    /// Establish BASIC auth credentials for subsequent requests.
    ///
    /// Credentials live for the lifetime of the client and are never
    /// persisted.
    pub fn authenticate(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<()> {
        if !self.service.version.supports_basic_auth() {
            return Err(Error::AuthNotSupported {
                version: self.service.version.to_string(),
            });
        }

        self.service.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        Ok(())
    }

    /// Request a feed, persisting the raw payload if a store is configured.
    ///
    /// On a fresh response the body is stored (when a store is configured)
    /// and decoded; on a not-modified response the previously stored body is
    /// loaded and decoded instead.
    pub async fn get_data(&self, request: FeedRequest) -> Result<FeedData> {
        self.service.get_data(request).await
    }
}

/// Per-version feed service: validates a request, builds the URL, performs
/// one HTTP round trip and dispatches between fresh and not-modified data.
#[derive(Debug)]
struct FeedService {
    version: ApiVersion,
    config: VersionConfig,
    base_url: String,
    http: reqwest::Client,
    verbose: bool,
    store: Option<FileStore>,
    credentials: Option<Credentials>,
}

impl FeedService {
    async fn get_data(&self, mut request: FeedRequest) -> Result<FeedData> {
        let credentials = self.credentials.as_ref().ok_or(Error::AuthRequired)?;

        if !self.config.feeds.contains(&request.feed.as_str()) {
            return Err(Error::InvalidFeed {
                feed: request.feed,
            });
        }

        let league_only = catalog::is_league_only(&request.feed);
        if !league_only && request.season.is_none() {
            return Err(Error::MissingSeason {
                feed: request.feed,
            });
        }

        // force=false discourages refetching unchanged data; an explicit
        // force param from the caller wins.
        if request.param_value("force").is_none() {
            request.params.push(("force".into(), "false".into()));
        }

        let season = if league_only {
            None
        } else {
            request.season.as_deref()
        };
        let url = build_url(
            &self.base_url,
            &request.league,
            season,
            &request.feed,
            request.format,
            &request.params,
        );

        if self.verbose {
            info!(url = %url, params = ?request.params, "making API request");
        } else {
            debug!(url = %url, params = ?request.params, "making API request");
        }

        let response = self
            .http
            .get(&url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout
                } else {
                    Error::Request(e)
                }
            })?;

        let status = response.status();

        if status == StatusCode::NOT_MODIFIED {
            if self.verbose {
                info!(url = %url, "data hasn't changed since last call");
            } else {
                debug!(url = %url, "data hasn't changed since last call");
            }
            return self.load_stored(&request);
        }

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await.map_err(Error::Request)?;

        if let Some(store) = &self.store {
            store.save(&output_filename(&request), &body)?;
        }

        decode(request.format, body)
    }

    /// Serve a not-modified response from the store.
    fn load_stored(&self, request: &FeedRequest) -> Result<FeedData> {
        let filename = output_filename(request);
        let store = self.store.as_ref().ok_or_else(|| Error::NotFound {
            filename: filename.clone(),
        })?;

        let body = store.load(&filename)?;
        decode(request.format, body)
    }
}

/// Decode a raw feed body: JSON into a generic document, XML and CSV as
/// opaque text.
fn decode(format: Format, body: String) -> Result<FeedData> {
    match format {
        Format::Json => Ok(FeedData::Json(serde_json::from_str(&body)?)),
        Format::Xml => Ok(FeedData::Xml(body)),
        Format::Csv => Ok(FeedData::Csv(body)),
    }
}
