use reqwest::Url;

const SESSION_ID_PARAM: &str = "session_id";

/// Extract the checkout session id from the provider's success redirect,
/// e.g. `https://app.example.com/payment-success?session_id=cs_123`.
///
/// Returns `None` for unparseable URLs and missing or empty parameters.
pub fn session_id_from_return_url(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;

    url.query_pairs()
        .find(|(key, _)| key == SESSION_ID_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
