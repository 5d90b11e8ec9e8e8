use reqwest::Url;

/// Placeholder origin for locations that are only a query string.
const RELATIVE_BASE: &str = "http://localhost/";

/// Returns the decoded value of query parameter `name` in `location`.
///
/// `location` is either an absolute URL or a query string such as
/// `?user=me&uuid=42`. Empty values count as absent.
pub fn query_param(location: &str, name: &str) -> Option<String> {
    let url = parse_location(location)?;
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn parse_location(location: &str) -> Option<Url> {
    let location = location.trim();
    if let Ok(url) = Url::parse(location) {
        return Some(url);
    }
    let query = location.trim_start_matches('?');
    Url::parse(&format!("{RELATIVE_BASE}?{query}")).ok()
}
