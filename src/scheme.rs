use crate::types::SchemeType;

/// Classify a scheme string, ignoring ASCII case.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    const KNOWN: [(&str, SchemeType); 6] = [
        ("http", SchemeType::Http),
        ("https", SchemeType::Https),
        ("ws", SchemeType::Ws),
        ("wss", SchemeType::Wss),
        ("ftp", SchemeType::Ftp),
        ("file", SchemeType::File),
    ];

    KNOWN
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(scheme))
        .map_or(SchemeType::NotSpecial, |&(_, scheme_type)| scheme_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_type() {
        assert_eq!(get_scheme_type("http"), SchemeType::Http);
        assert_eq!(get_scheme_type("HTTPS"), SchemeType::Https);
        assert_eq!(get_scheme_type("Ws"), SchemeType::Ws);
        assert_eq!(get_scheme_type("file"), SchemeType::File);
        assert_eq!(get_scheme_type("custom"), SchemeType::NotSpecial);
        assert_eq!(get_scheme_type("htt"), SchemeType::NotSpecial);
        assert_eq!(get_scheme_type(""), SchemeType::NotSpecial);
    }
}
