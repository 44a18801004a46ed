//! Split URL strings into scheme, host and path, and put them back together.
//!
//! ```
//! use miniurl::Url;
//!
//! let mut url = Url::parse("http://foo.com:80/go").unwrap();
//! assert_eq!(url.hostname(), "foo.com");
//! assert_eq!(url.port(), "80");
//!
//! url.scheme = "https".into();
//! url.path = "nogo".into();
//! assert_eq!(url.to_string(), "https://foo.com:80/nogo");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod error;
mod helpers;
mod parsed_url;
mod parser;
mod scheme;
mod types;
mod url_base;
#[doc(hidden)]
pub use url_base::UrlBase;

// Public API
pub use error::ParseError;
pub use parsed_url::{Url, format};
pub use parser::{Parseable, parse_scheme};
pub use types::SchemeType;

pub type Result<T> = core::result::Result<T, ParseError>;

/// Parse a URL string, shorthand for [`Url::parse`]
///
/// # Errors
///
/// Returns [`ParseError::MissingScheme`] if the input has no scheme
/// followed by `"://"`.
pub fn parse(input: &str) -> Result<Url> {
    parser::parse::<Url>(input)
}
