use url::form_urlencoded;

use crate::domain::QueryParameters;

/// Percent-encodes one query-string component.
///
/// Spaces become `%20` rather than `+`, so the output decodes the same way
/// under both form and plain percent decoding.
pub fn encode_query_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Serializes parameters as `name=value` pairs joined by `&`, in iteration
/// order.
pub fn serialize_query_params(params: &QueryParameters) -> String {
    params
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                encode_query_component(name),
                encode_query_component(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends the serialized parameters to `url`; the URL is returned unchanged
/// when there are none.
pub fn append_query(url: &str, params: &QueryParameters) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    format!("{}?{}", url, serialize_query_params(params))
}
