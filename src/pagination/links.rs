//! `Link` header parsing
//!
//! The API sends pagination cursors as one or two segments of the form
//! `<URL>; rel="next"` separated by a comma, e.g.:
//!
//! ```text
//! <https://api.cesium.com/v1/assets?page=2>; rel="next", <https://api.cesium.com/v1/assets?page=1>; rel="prev"
//! ```
//!
//! Only the `next` and `prev` relations exist on this API; anything else
//! in the header is a malformed response, never a silent no-op.

use reqwest::header::{HeaderMap, LINK};
use tracing::debug;

use crate::error::{Error, Result};

/// Cursor URLs extracted from a `Link` response header.
///
/// Immutable once constructed; carries no identity beyond the single
/// response it annotates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationLinks {
    /// URL of the next page, if one exists
    pub next: Option<String>,
    /// URL of the previous page, if one exists
    pub prev: Option<String>,
}

/// The two relation names the API is allowed to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rel {
    Next,
    Prev,
}

impl PaginationLinks {
    /// Parse the raw value of a `Link` header.
    ///
    /// A first segment that cannot yield a URL/relation pair is a hard
    /// failure; a missing second segment is not. Pure and deterministic.
    pub fn from_header(link_header: &str) -> Result<Self> {
        let mut links = Self::default();
        let mut segments = link_header.split(',').map(str::trim);

        let first = segments
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| invalid_header(link_header))?;
        links.assign(parse_segment(first, link_header)?);

        for segment in segments {
            links.assign(parse_segment(segment, link_header)?);
        }

        Ok(links)
    }

    /// Look up the `Link` header in a response and parse it if present.
    ///
    /// Absence of the header means pagination is unavailable and yields
    /// `Ok(None)`; a present but malformed header is still an error.
    pub fn from_headers(headers: &HeaderMap) -> Result<Option<Self>> {
        let Some(value) = headers.get(LINK) else {
            debug!("`Link` header is NOT present in the response");
            return Ok(None);
        };
        debug!("`Link` header is present in the response");
        let raw = value
            .to_str()
            .map_err(|_| Error::malformed("`Link` header value is not valid UTF-8"))?;
        Self::from_header(raw).map(Some)
    }

    fn assign(&mut self, (url, rel): (String, Rel)) {
        match rel {
            Rel::Next => self.next = Some(url),
            Rel::Prev => self.prev = Some(url),
        }
    }
}

/// Parse one `<URL>; rel="REL"` segment into its URL and relation.
fn parse_segment(segment: &str, link_header: &str) -> Result<(String, Rel)> {
    let (url_token, rel_token) = segment
        .split_once("; ")
        .ok_or_else(|| invalid_header(link_header))?;

    let url = url_token
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| invalid_header(link_header))?;

    let rel = rel_token
        .strip_prefix("rel=\"")
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| invalid_header(link_header))?;

    let rel = match rel {
        "next" => Rel::Next,
        "prev" => Rel::Prev,
        other => {
            return Err(Error::malformed(format!(
                "unknown pagination relation `{other}` in `Link` header: {link_header}"
            )))
        }
    };

    Ok((url.to_string(), rel))
}

fn invalid_header(link_header: &str) -> Error {
    Error::malformed(format!("`Link` header value is invalid: {link_header}"))
}
