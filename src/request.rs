use reqwest::Client;

use crate::{info_time, Config, Error, Result};

/// Client that sends the configured User-Agent with every request.
pub(crate) fn build_client(config: &Config) -> Result<Client> {
    let client = Client::builder().user_agent(&config.user_agent).build()?;
    Ok(client)
}

/// Requests the overview page and returns its HTML.
/// Any non-success status is an error, there is no retry.
pub(crate) async fn request_overview_html(client: &Client, config: &Config) -> Result<String> {
    let url = config.overview_url()?;
    info_time!("Requesting {url}");

    let res = client.get(url.clone()).send().await?;
    let status = res.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            status,
            url: url.into(),
        });
    }
    let html = res.text().await?;
    Ok(html)
}
