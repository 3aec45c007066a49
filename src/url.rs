//! Versioned feed URL construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::types::Format;

/// Characters escaped in query keys and values.
///
/// The WHATWG query set plus the pair delimiters, so a caller-supplied value
/// cannot break the `key=value` structure. Commas stay literal - stat filter
/// lists like `FGA,FGM` are common and the API accepts them unencoded.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'=')
    .add(b'+');

/// Characters escaped in path segments.
const PATH: &AsciiSet = &QUERY.add(b'/').add(b'?').add(b'`').add(b'{').add(b'}');

/// Build the request URL for a feed.
///
/// `base/league/season/feed.format`, with the season segment omitted when
/// `season` is `None` (the league-only feed). Query parameters are appended
/// in iteration order.
pub(crate) fn build_url(
    base: &str,
    league: &str,
    season: Option<&str>,
    feed: &str,
    format: Format,
    params: &[(String, String)],
) -> String {
    let mut url = format!("{}/{}", base, encode_path(league));

    if let Some(season) = season {
        url.push('/');
        url.push_str(&encode_path(season));
    }

    url.push('/');
    url.push_str(&encode_path(feed));
    url.push('.');
    url.push_str(format.as_str());

    let query: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", encode_query(key), encode_query(value)))
        .collect();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }

    url
}

fn encode_path(segment: &str) -> String {
    utf8_percent_encode(segment, PATH).to_string()
}

fn encode_query(component: &str) -> String {
    utf8_percent_encode(component, QUERY).to_string()
}
