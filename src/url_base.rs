use crate::compat::String;

/// Base trait for URL types
/// Provides the accessor/mutator interface implemented by `Url`
#[doc(hidden)] // Internal trait, not part of public API docs
pub trait UrlBase {
    // Getters

    /// Render the URL back to a string
    fn href(&self) -> String;

    /// Get the scheme, without `"://"` (e.g., "https")
    fn scheme(&self) -> &str;

    /// Get the host, port included (e.g., "example.com:8080")
    fn host(&self) -> &str;

    /// Get the host up to the first `:`
    fn hostname(&self) -> &str;

    /// Get the text after the first `:` of the host, or empty
    fn port(&self) -> &str;

    /// Get the path, without its leading `/`
    fn path(&self) -> &str;

    // Has checks

    /// Check if the host is non-empty
    fn has_host(&self) -> bool;

    /// Check if the host carries a `:port` suffix (possibly empty)
    fn has_port(&self) -> bool;

    /// Check if the path is non-empty
    fn has_path(&self) -> bool;

    // Setters

    /// Set the scheme. A trailing `:` is dropped; empty schemes and schemes
    /// containing `:` or `/` are refused.
    fn set_scheme(&mut self, scheme: &str) -> bool;

    /// Replace the whole host (hostname + port).
    /// Refused if it contains `/` or more than one `:`.
    fn set_host(&mut self, host: &str) -> bool;

    /// Replace the hostname, keeping the port. Refused if it contains `:` or `/`.
    fn set_hostname(&mut self, hostname: &str) -> bool;

    /// Set the port; an empty string removes it
    fn set_port(&mut self, port: &str) -> bool;

    /// Set the path; one leading `/` is dropped
    fn set_path(&mut self, path: &str);
}
