/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
/// A leading `+` is rejected even though `u16::from_str` would accept it.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

/// Check a scheme for a setter: non-empty, with no `:` or `/`.
pub fn is_valid_scheme(scheme: &str) -> bool {
    !scheme.is_empty() && memchr::memchr2(b':', b'/', scheme.as_bytes()).is_none()
}

/// Check a hostname for a setter: no `:` (would start a port) and no `/`
/// (would start the path).
pub fn is_valid_hostname(hostname: &str) -> bool {
    memchr::memchr2(b':', b'/', hostname.as_bytes()).is_none()
}

/// Check a whole host for a setter: no `/` and at most one `:`.
pub fn is_valid_host(host: &str) -> bool {
    let bytes = host.as_bytes();
    memchr::memchr(b'/', bytes).is_none() && memchr::memchr_iter(b':', bytes).count() <= 1
}
