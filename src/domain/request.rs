use url::Url;

/// Build the URL that lists a configuration, including its publish sets.
///
/// The id is treated as an opaque string and appended as-is.
pub fn build_list_url(base_url: &Url, configuration_id: &str) -> String {
    let base = base_url.as_str().trim_end_matches('/');
    let request_url = format!("{}/configurations/{}", base, configuration_id);

    tracing::info!("Request URL: {}", request_url);
    request_url
}
