//! Absolute webhook URL construction.
//!
//! Destination URIs come from configuration and are untrusted; building an
//! endpoint must report failure instead of panicking so a misconfigured
//! destination can be skipped at dispatch time.

use thiserror::Error;
use url::Url;

/// Why a webhook endpoint could not be built from a configured base URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriError {
    #[error("base uri is not set")]
    EmptyBase,
    #[error("base uri `{0}` is not an absolute uri")]
    NotAbsolute(String),
    #[error("base uri `{base}` is invalid: {source}")]
    Invalid {
        base: String,
        source: url::ParseError,
    },
}

/// Build an absolute URI from a base and ordered path segments.
///
/// Path separators are normalized so the result never contains double
/// slashes. Segments are appended verbatim: percent-encoding supplied by
/// the caller is preserved, and characters that are not valid in a path
/// are percent-encoded rather than rejected.
pub fn try_create_uri(base: &str, segments: &[&str]) -> Result<Url, UriError> {
    if base.trim().is_empty() {
        return Err(UriError::EmptyBase);
    }

    let mut url = Url::parse(base).map_err(|source| match source {
        url::ParseError::RelativeUrlWithoutBase => UriError::NotAbsolute(base.to_string()),
        source => UriError::Invalid {
            base: base.to_string(),
            source,
        },
    })?;

    if url.cannot_be_a_base() {
        return Err(UriError::NotAbsolute(base.to_string()));
    }

    let mut path = url.path().trim_end_matches('/').to_string();
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    url.set_path(&path);

    Ok(url)
}
