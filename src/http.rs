use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;

const UA: &str = "gasola/0.1 (delivery ordering front-end)";

/// Client used by every lookup service. Nominatim rejects requests
/// without an identifying User-Agent, so all outbound calls carry one.
pub fn client() -> reqwest::Result<Client> {
    Client::builder()
        .default_headers(default_headers())
        .build()
}

fn default_headers() -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(USER_AGENT, HeaderValue::from_static(UA));
    map
}
