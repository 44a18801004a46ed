/// Separator between the scheme and the rest of the URL
pub const SCHEME_DELIMITER: &str = "://";

/// Byte offset of the first `"://"` in `input`
pub fn find_scheme_delimiter(input: &str) -> Option<usize> {
    memchr::memmem::find(input.as_bytes(), SCHEME_DELIMITER.as_bytes())
}

/// Byte offset of the first `:` in a host
pub fn find_port_delimiter(host: &str) -> Option<usize> {
    memchr::memchr(b':', host.as_bytes())
}

/// Split what follows `"://"` into host and path at the first `/`.
/// The separator itself is dropped. A `/` in first position is not a
/// separator: `"/etc"` yields host `"/etc"` and an empty path.
pub fn split_host_path(rest: &str) -> (&str, &str) {
    match memchr::memchr(b'/', rest.as_bytes()) {
        Some(pos) if pos > 0 => (&rest[..pos], &rest[pos + 1..]),
        _ => (rest, ""),
    }
}

/// Split a host into hostname and port at the first `:`.
/// Returns (`hostname`, `port_without_colon`)
pub fn split_host_port(host: &str) -> (&str, Option<&str>) {
    find_port_delimiter(host).map_or((host, None), |pos| {
        (&host[..pos], Some(&host[pos + 1..]))
    })
}
