use urlencoding::encode;

/// Encode key/value pairs as `k=v&k2=v2`, percent-encoding both sides.
pub fn build_query_string(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
