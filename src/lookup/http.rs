use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client;

use super::{interpret_body, Lookup, LookupError, LookupFuture};
use crate::config::EndpointConfig;

/// Lookup over plain HTTP GET against the spreadsheet endpoint
#[derive(Debug, Clone)]
pub struct HttpLookup {
    client: Client,
    base_url: String,
    encode_query: bool,
}

impl HttpLookup {
    pub fn new(config: &EndpointConfig) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            encode_query: config.encode_query,
        })
    }

    pub fn url_for(&self, query: &str) -> String {
        build_url(&self.base_url, query, self.encode_query)
    }
}

impl Lookup for HttpLookup {
    fn fetch(&self, query: &str) -> LookupFuture {
        let client = self.client.clone();
        let url = self.url_for(query);

        Box::pin(async move {
            tracing::debug!("GET {}", url);

            let response = client
                .get(&url)
                .header(ACCEPT, "application/json")
                .send()
                .await
                .map_err(|e| {
                    tracing::warn!("Lookup request failed: {}", e);
                    LookupError::transport(e)
                })?;

            // Status is not inspected: the endpoint reports failures in the body.
            let status = response.status();
            let body = response.bytes().await.map_err(|e| {
                tracing::warn!("Failed to read lookup response ({}): {}", status, e);
                LookupError::transport(e)
            })?;

            interpret_body(&body).inspect_err(|e| {
                if let LookupError::Transport(detail) = e {
                    tracing::warn!("Undecodable lookup response ({}): {}", status, detail);
                }
            })
        })
    }
}

/// Append the query to the endpoint URL, percent-encoding it when asked to.
pub fn build_url(base_url: &str, query: &str, encode: bool) -> String {
    if encode {
        format!("{}{}", base_url, urlencoding::encode(query))
    } else {
        format!("{}{}", base_url, query)
    }
}
