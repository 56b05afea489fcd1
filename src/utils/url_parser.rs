/// Host (and port, if any) of a URL, for display. Empty when the URL does not parse.
pub fn hostname_from_url(u: &str) -> String {
    let Ok(url) = reqwest::Url::parse(u.trim()) else {
        return String::new();
    };
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        _ => String::new(),
    }
}
