use reqwest::Url;

/// Pulls the hostname out of a URL-shaped input, dropping scheme, port and
/// path. Inputs without a host component (bare hostnames, or host:port
/// without a scheme) yield None and the caller uses them verbatim.
pub fn extract_host(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    url.host_str().map(|host| host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_host_from_url() {
        assert_eq!(
            extract_host("https://example.com/some/path"),
            Some("example.com".to_string())
        );
        assert_eq!(
            extract_host("http://example.com:8080/x"),
            Some("example.com".to_string())
        );
        assert_eq!(
            extract_host("ftp://files.example.com"),
            Some("files.example.com".to_string())
        );
    }

    #[test]
    fn test_inputs_without_host_component() {
        assert_eq!(extract_host("example.com"), None);
        assert_eq!(extract_host("localhost:9000"), None);
        assert_eq!(extract_host(""), None);
    }
}
