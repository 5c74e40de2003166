use crate::utils::error::{Result, SuggestError};
use url::form_urlencoded;
use url::Url;

/// Position-suggest endpoint the query segment is appended to.
pub const DEFAULT_API_ENDPOINT: &str = "http://api.goeuro.com/api/v2/position/suggest/en/";

/// Builds the request URL for one city query. The city name is
/// form-encoded (UTF-8 bytes, space becomes `+`) so it is safe as a
/// single path segment. A bad endpoint is a configuration problem and
/// is reported against `api_endpoint`, not the city.
pub fn build_suggest_url(endpoint: &str, city: &str) -> Result<Url> {
    Url::parse(endpoint).map_err(|e| SuggestError::InvalidConfigValueError {
        field: "api_endpoint".to_string(),
        value: endpoint.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    let encoded: String = form_urlencoded::byte_serialize(city.as_bytes()).collect();
    let raw = if endpoint.ends_with('/') {
        format!("{endpoint}{encoded}")
    } else {
        format!("{endpoint}/{encoded}")
    };
    Url::parse(&raw).map_err(|e| SuggestError::EncodingError {
        city: city.to_string(),
        reason: e.to_string(),
    })
}
