use crate::checkers::{is_valid_host, is_valid_hostname, is_valid_scheme, parse_port};
use crate::compat::{String, ToString};
use crate::error::{ParseError, Result};
use crate::helpers::{find_port_delimiter, split_host_port};
use crate::parser::Parseable;
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;
use crate::url_base::UrlBase;

/// A URL split into scheme, host and path.
///
/// `"https://foo.com:80/go"` is held as scheme `"https"`, host
/// `"foo.com:80"` and path `"go"`. The fields are plain strings and may be
/// edited directly; [`Display`](core::fmt::Display) renders whatever they
/// currently hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Url {
    pub scheme: String,
    pub host: String,
    pub path: String,
}

impl Url {
    /// Build a URL from its parts, stored as given
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
        }
    }

    /// Parse a URL string
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingScheme`] if the input has no scheme
    /// followed by `"://"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use miniurl::Url;
    ///
    /// let url = Url::parse("https://foo.com/go").unwrap();
    /// assert_eq!(url.scheme, "https");
    /// assert_eq!(url.host, "foo.com");
    /// assert_eq!(url.path, "go");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        crate::parser::parse_url(input)
    }

    /// Check if a URL string can be parsed without actually parsing it
    ///
    /// ```
    /// use miniurl::Url;
    ///
    /// assert!(Url::can_parse("http://example.com"));
    /// assert!(!Url::can_parse("example.com"));
    /// ```
    pub fn can_parse(input: &str) -> bool {
        crate::parser::validate_url(input).is_ok()
    }

    /// Get the scheme type
    pub fn scheme_type(&self) -> SchemeType {
        get_scheme_type(&self.scheme)
    }

    /// Get the port as a number, if it is a valid one
    pub fn port_number(&self) -> Option<u16> {
        parse_port(self.port())
    }

    /// Get the explicit port, falling back to the scheme's default port
    pub fn port_or_known_default(&self) -> Option<u16> {
        self.port_number().or_else(|| {
            let scheme_type = self.scheme_type();
            if scheme_type.is_special() {
                scheme_type.default_port()
            } else {
                None
            }
        })
    }
}

impl UrlBase for Url {
    fn href(&self) -> String {
        self.to_string()
    }

    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn hostname(&self) -> &str {
        split_host_port(&self.host).0
    }

    fn port(&self) -> &str {
        split_host_port(&self.host).1.unwrap_or("")
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn has_host(&self) -> bool {
        !self.host.is_empty()
    }

    fn has_port(&self) -> bool {
        find_port_delimiter(&self.host).is_some()
    }

    fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    fn set_scheme(&mut self, scheme: &str) -> bool {
        let scheme = scheme.strip_suffix(':').unwrap_or(scheme);
        if !is_valid_scheme(scheme) {
            return false;
        }
        self.scheme = scheme.to_string();
        true
    }

    fn set_host(&mut self, host: &str) -> bool {
        if !is_valid_host(host) {
            return false;
        }
        self.host = host.to_string();
        true
    }

    fn set_hostname(&mut self, hostname: &str) -> bool {
        if !is_valid_hostname(hostname) {
            return false;
        }
        let end = find_port_delimiter(&self.host).unwrap_or(self.host.len());
        self.host.replace_range(..end, hostname);
        true
    }

    fn set_port(&mut self, port: &str) -> bool {
        if !port.is_empty() && parse_port(port).is_none() {
            return false;
        }

        // Drop the old ":port" (if any), then append the new one
        if let Some(colon_pos) = find_port_delimiter(&self.host) {
            self.host.truncate(colon_pos);
        }
        if !port.is_empty() {
            self.host.push(':');
            self.host.push_str(port);
        }
        true
    }

    fn set_path(&mut self, path: &str) {
        let path = path.strip_prefix('/').unwrap_or(path);
        self.path = path.to_string();
    }
}

impl Url {
    // Public API methods that delegate to UrlBase trait implementation
    // This allows callers to use these methods without importing UrlBase

    /// Render the URL back to a string (e.g., "https://foo.com/go")
    pub fn href(&self) -> String {
        <Self as UrlBase>::href(self)
    }

    /// Get the hostname without port (e.g., "foo.com")
    pub fn hostname(&self) -> &str {
        <Self as UrlBase>::hostname(self)
    }

    /// Get the port as string (e.g., "8080"), or empty string if absent
    pub fn port(&self) -> &str {
        <Self as UrlBase>::port(self)
    }

    /// Check if the URL has a host
    pub fn has_host(&self) -> bool {
        <Self as UrlBase>::has_host(self)
    }

    /// Check if the host carries a port delimiter
    pub fn has_port(&self) -> bool {
        <Self as UrlBase>::has_port(self)
    }

    /// Check if the URL has a path
    pub fn has_path(&self) -> bool {
        <Self as UrlBase>::has_path(self)
    }

    /// Set the scheme (with or without a trailing `:`)
    pub fn set_scheme(&mut self, scheme: &str) -> bool {
        <Self as UrlBase>::set_scheme(self, scheme)
    }

    /// Set the host (hostname + port)
    pub fn set_host(&mut self, host: &str) -> bool {
        <Self as UrlBase>::set_host(self, host)
    }

    /// Set the hostname
    pub fn set_hostname(&mut self, hostname: &str) -> bool {
        <Self as UrlBase>::set_hostname(self, hostname)
    }

    /// Set the port
    pub fn set_port(&mut self, port: &str) -> bool {
        <Self as UrlBase>::set_port(self, port)
    }

    /// Set the path
    pub fn set_path(&mut self, path: &str) {
        <Self as UrlBase>::set_path(self, path);
    }
}

impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !self.scheme.is_empty() {
            f.write_str(&self.scheme)?;
            f.write_str("://")?;
        }
        if !self.host.is_empty() {
            f.write_str(&self.host)?;
        }
        if !self.path.is_empty() {
            f.write_str("/")?;
            f.write_str(&self.path)?;
        }
        Ok(())
    }
}

impl core::str::FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl Parseable for Url {
    fn parse(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}

/// Render a URL, or `""` when there is none.
///
/// ```
/// use miniurl::{Url, format};
///
/// assert_eq!(format(None), "");
/// assert_eq!(format(Some(&Url::new("https", "foo.com", ""))), "https://foo.com");
/// ```
pub fn format(url: Option<&Url>) -> String {
    url.map_or_else(String::new, ToString::to_string)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const HOST_TESTS: &[(&str, &str, &str)] = &[
        // (host, hostname, port)
        ("foo.com:80", "foo.com", "80"),
        ("foo.com:", "foo.com", ""),
        ("foo.com", "foo.com", ""),
        ("1.2.3.4:90", "1.2.3.4", "90"),
        ("1.2.3.4", "1.2.3.4", ""),
        ("", "", ""),
    ];

    #[test]
    fn test_hostname_and_port() {
        for &(host, hostname, port) in HOST_TESTS {
            let url = Url::new("", host, "");
            assert_eq!(url.hostname(), hostname, "hostname of {host:?}");
            assert_eq!(url.port(), port, "port of {host:?}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Url::default().to_string(), "");
        assert_eq!(Url::new("https", "", "").to_string(), "https://");
        assert_eq!(Url::new("https", "foo.com", "").to_string(), "https://foo.com");
        assert_eq!(
            Url::new("https", "foo.com", "go").to_string(),
            "https://foo.com/go"
        );
        // Each part is emitted on its own
        assert_eq!(Url::new("", "foo.com", "go").to_string(), "foo.com/go");
        assert_eq!(Url::new("", "", "go").to_string(), "/go");
    }

    #[test]
    fn test_format_none() {
        assert_eq!(format(None), "");
        assert_eq!(format(Some(&Url::default())), "");
    }

    #[test]
    fn test_from_str() {
        let url: Url = "https://foo.com/go".parse().unwrap();
        assert_eq!(url, Url::new("https", "foo.com", "go"));
        assert_eq!("foo.com".parse::<Url>(), Err(ParseError::MissingScheme));
        assert_eq!(Url::try_from("ftp://x/y").unwrap().path, "y");
    }

    #[test]
    fn test_scheme_type_and_default_port() {
        let url = Url::parse("HTTPS://foo.com/go").unwrap();
        assert_eq!(url.scheme_type(), SchemeType::Https);
        assert_eq!(url.port_number(), None);
        assert_eq!(url.port_or_known_default(), Some(443));

        let url = Url::parse("http://foo.com:8080").unwrap();
        assert_eq!(url.port_number(), Some(8080));
        assert_eq!(url.port_or_known_default(), Some(8080));

        let url = Url::parse("gopher://foo.com").unwrap();
        assert_eq!(url.scheme_type(), SchemeType::NotSpecial);
        assert_eq!(url.port_or_known_default(), None);

        // Well-known but portless
        let url = Url::parse("file:///etc/hosts").unwrap();
        assert!(url.scheme_type().is_special());
        assert_eq!(url.port_or_known_default(), None);
    }

    #[test]
    fn test_port_number_invalid_falls_back() {
        let url = Url::new("http", "foo.com:http", "");
        assert_eq!(url.port(), "http");
        assert_eq!(url.port_number(), None);
        assert_eq!(url.port_or_known_default(), Some(80));
    }

    #[test]
    fn test_has_checks() {
        let url = Url::parse("https://foo.com:/go").unwrap();
        assert!(url.has_host());
        assert!(url.has_port()); // Empty port still has the delimiter
        assert!(url.has_path());

        let url = Url::parse("https://").unwrap();
        assert!(!url.has_host());
        assert!(!url.has_port());
        assert!(!url.has_path());
    }

    #[test]
    fn test_url_base_getters() {
        fn parts<U: UrlBase>(url: &U) -> (&str, &str, &str) {
            (url.scheme(), url.host(), url.path())
        }

        let url = Url::parse("https://foo.com:80/go").unwrap();
        assert_eq!(parts(&url), ("https", "foo.com:80", "go"));
    }

    #[test]
    fn test_set_hostname_keeps_port() {
        let mut url = Url::parse("http://foo.com:80/go").unwrap();
        assert!(url.set_hostname("bar.org"));
        assert_eq!(url.host, "bar.org:80");

        let mut url = Url::parse("http://foo.com/go").unwrap();
        assert!(url.set_hostname("bar.org"));
        assert_eq!(url.host, "bar.org");
    }

    #[test]
    fn test_set_hostname_rejects_delimiters() {
        let mut url = Url::parse("http://foo.com:80/go").unwrap();
        assert!(!url.set_hostname("bar:99"));
        assert!(!url.set_hostname("a/b"));
        assert_eq!(url.host, "foo.com:80");
        assert_eq!(url.port_number(), Some(80));
    }

    #[test]
    fn test_set_port() {
        let mut url = Url::parse("http://foo.com/go").unwrap();
        assert!(url.set_port("8080"));
        assert_eq!(url.host, "foo.com:8080");

        assert!(url.set_port("90"));
        assert_eq!(url.host, "foo.com:90");

        assert!(!url.set_port("99999"));
        assert!(!url.set_port("abc"));
        assert_eq!(url.host, "foo.com:90");

        assert!(url.set_port(""));
        assert_eq!(url.host, "foo.com");
        assert_eq!(url.href(), "http://foo.com/go");
    }
}
