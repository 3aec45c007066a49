//! Local file store for raw feed payloads.
//!
//! Payloads are keyed by a filename derived from the request identity, so a
//! later not-modified response can be served from the last saved body. There
//! is no expiry and no locking; usage is assumed single-writer.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::FeedRequest;

/// Derive the storage filename for a feed request.
///
/// `{feed}-{league}-{season}[-{gameid}][-{fordate}].{format}` with the league
/// lowercased. Only `gameid` and `fordate` participate in the name; requests
/// differing in any other parameter share a filename and overwrite each
/// other. That collision is inherited API behavior, kept deliberately.
pub(crate) fn output_filename(request: &FeedRequest) -> String {
    let mut filename = format!("{}-{}", request.feed, request.league.to_lowercase());

    if let Some(season) = &request.season {
        filename.push('-');
        filename.push_str(season);
    }

    if let Some(gameid) = request.param_value("gameid") {
        filename.push('-');
        filename.push_str(gameid);
    }

    if let Some(fordate) = request.param_value("fordate") {
        filename.push('-');
        filename.push_str(fordate);
    }

    filename.push('.');
    filename.push_str(request.format.as_str());

    filename
}

/// File-backed payload store rooted at a single directory.
#[derive(Debug, Clone)]
pub(crate) struct FileStore {
    location: PathBuf,
}

impl FileStore {
    pub(crate) fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Write a feed body verbatim, creating the directory if needed.
    ///
    /// An existing file for the same filename is overwritten.
    pub(crate) fn save(&self, filename: &str, body: &str) -> Result<()> {
        fs::create_dir_all(&self.location)?;

        let path = self.location.join(filename);
        fs::write(&path, body)?;
        debug!(path = %path.display(), bytes = body.len(), "saved feed payload");

        Ok(())
    }

    /// Read a previously saved feed body.
    pub(crate) fn load(&self, filename: &str) -> Result<String> {
        let path = self.location.join(filename);
        match fs::read_to_string(&path) {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::NotFound {
                filename: filename.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}
