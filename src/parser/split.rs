use crate::compat::ToString;
use crate::error::{ParseError, Result};
use crate::helpers::{SCHEME_DELIMITER, find_scheme_delimiter, split_host_path};
use crate::parsed_url::Url;

/// Split `input` at the first `"://"` into (`scheme`, `rest`).
///
/// Returns `None` when there is no delimiter or the scheme in front of it
/// is empty.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     miniurl::parse_scheme("https://foo.com/go"),
///     Some(("https", "foo.com/go"))
/// );
/// assert_eq!(miniurl::parse_scheme("foo.com"), None);
/// assert_eq!(miniurl::parse_scheme("://foo.com"), None);
/// ```
pub fn parse_scheme(input: &str) -> Option<(&str, &str)> {
    let pos = find_scheme_delimiter(input)?;
    if pos == 0 {
        return None;
    }
    Some((&input[..pos], &input[pos + SCHEME_DELIMITER.len()..]))
}

/// Parse `input` into its scheme, host and path.
///
/// # Errors
///
/// Returns [`ParseError::MissingScheme`] if `input` has no non-empty scheme
/// followed by `"://"`.
pub fn parse_url(input: &str) -> Result<Url> {
    let (scheme, rest) = parse_scheme(input).ok_or(ParseError::MissingScheme)?;
    let (host, path) = split_host_path(rest);

    Ok(Url {
        scheme: scheme.to_string(),
        host: host.to_string(),
        path: path.to_string(),
    })
}

/// Check that `input` would parse, without allocating.
///
/// # Errors
///
/// Same conditions as [`parse_url`].
pub fn validate_url(input: &str) -> Result<()> {
    parse_scheme(input)
        .map(|_| ())
        .ok_or(ParseError::MissingScheme)
}
