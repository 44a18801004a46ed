mod split;

pub use split::{parse_scheme, parse_url, validate_url};

use crate::error::Result;

/// Trait for types that can be parsed from URL strings
pub trait Parseable: Sized {
    /// Parse from input string
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not a valid URL for `Self`.
    fn parse(input: &str) -> Result<Self>;
}

/// Parse a URL string into a URL type
///
/// # Errors
///
/// Propagates the error of `T::parse`.
pub fn parse<T: Parseable>(input: &str) -> Result<T> {
    T::parse(input)
}
