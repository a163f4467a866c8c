use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::WeatherConfig;
use crate::constants::GEO_JSON;
use crate::error::WeatherError;

/// HTTP client bound to one NWS API origin
#[derive(Debug, Clone)]
pub struct NwsClient {
    http: Client,
    base: Url,
}

impl NwsClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let mut base = Url::parse(&config.base_url)
            .map_err(|e| WeatherError::invalid_url(&config.base_url, e))?;
        // Relative joins keep a path prefix only when the base ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GEO_JSON));

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base })
    }

    /// Resolves `path` under the base URL, keeping any path prefix the base has.
    /// Absolute URLs pass through unchanged.
    pub fn resolve(&self, path: &str) -> Result<Url, WeatherError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| WeatherError::invalid_url(path, e))
    }

    /// Issues a GET and returns the response body as text
    pub async fn get_text(&self, path: &str) -> Result<String, WeatherError> {
        let url = self.resolve(path)?;
        tracing::debug!("GET {}", url);

        let response = self.http.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Issues a GET and deserializes the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, WeatherError> {
        let body = self.get_text(path).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
