use crate::net::Response;
use url::Url;

// Loads an URL with the given client and returns the fully buffered response.
// Non-2xx statuses are not errors at this level; callers inspect `status`.
pub async fn fetch(client: &reqwest::Client, url: Url) -> Result<Response, reqwest::Error> {
    log::debug!("GET {url}");
    let res = client.get(url).send().await?;

    // Fetch results
    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let status_text = res.status().canonical_reason().unwrap_or("Unknown").to_string();
    let headers = res.headers().clone();

    // Fetch body. We don't do streaming
    let body = res.bytes().await?.to_vec();
    log::debug!("{final_url} -> {status} {status_text} ({} bytes)", body.len());

    Ok(Response {
        url: final_url,
        status,
        status_text,
        headers,
        body,
    })
}
