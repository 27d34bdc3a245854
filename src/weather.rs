use serde_json::Value;

use crate::error::Result;

/// Environment variable holding the provider API key.
pub const WEATHER_API_KEY_VAR: &str = "WEATHER_API_KEY";

const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Default forecast horizon in days.
pub const DEFAULT_FORECAST_DAYS: u32 = 14;

/// HTTP client for the third-party weather provider.
///
/// Both lookups perform a single GET round trip and return the decoded JSON
/// body verbatim. Provider-reported errors (bad city, bad key) arrive as
/// ordinary payloads and are passed through unchanged; only transport and
/// body-decode failures surface as crate errors. No retries, no caching.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl WeatherClient {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
        }
    }

    /// Read the API key once from `WEATHER_API_KEY`.
    ///
    /// An unset variable is not an error here; the provider reports the
    /// authentication failure in its response payload when a request is made.
    #[must_use]
    pub fn from_env() -> Self {
        let key = std::env::var(WEATHER_API_KEY_VAR).unwrap_or_default();
        Self::new(key)
    }

    /// Override the provider base URL (tests point this at a mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the current weather report for a city.
    pub async fn current(&self, city: &str) -> Result<Value> {
        tracing::debug!(city = %city, "fetching current weather");
        let response = self
            .http
            .get(format!("{}/current.json", self.base_url))
            .query(&[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")])
            .send()
            .await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch the forecast for a city over the next `days` days.
    pub async fn forecast(&self, city: &str, days: u32) -> Result<Value> {
        tracing::debug!(city = %city, days, "fetching forecast");
        let days = days.to_string();
        let response = self
            .http
            .get(format!("{}/forecast.json", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", city),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch the forecast over the default 14-day horizon.
    pub async fn forecast_default(&self, city: &str) -> Result<Value> {
        self.forecast(city, DEFAULT_FORECAST_DAYS).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn current_sends_expected_query_and_passes_body_through() {
        let server = MockServer::start().await;
        let payload = serde_json::json!({
            "location": {"name": "London"},
            "current": {"temp_c": 11.0, "condition": {"text": "Overcast"}}
        });

        Mock::given(method("GET"))
            .and(path("/current.json"))
            .and(query_param("key", "test-key"))
            .and(query_param("q", "London"))
            .and(query_param("aqi", "no"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
            .expect(1)
            .mount(&server)
            .await;

        let client = WeatherClient::new("test-key").with_base_url(server.uri());
        let result = client.current("London").await.unwrap();
        assert_eq!(result, payload);
        server.verify().await;
    }

    #[tokio::test]
    async fn forecast_sends_days_and_alerts_parameters() {
        let server = MockServer::start().await;
        let payload = serde_json::json!({
            "location": {"name": "Tokyo"},
            "forecast": {"forecastday": []}
        });

        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .and(query_param("q", "Tokyo"))
            .and(query_param("days", "14"))
            .and(query_param("aqi", "no"))
            .and(query_param("alerts", "no"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
            .expect(1)
            .mount(&server)
            .await;

        let client = WeatherClient::new("test-key").with_base_url(server.uri());
        let result = client.forecast_default("Tokyo").await.unwrap();
        assert_eq!(result, payload);
        server.verify().await;
    }

    #[tokio::test]
    async fn provider_error_payload_passes_through_on_non_200() {
        let server = MockServer::start().await;
        let error_body = serde_json::json!({
            "error": {"code": 1006, "message": "No matching location found."}
        });

        Mock::given(method("GET"))
            .and(path("/current.json"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
            .mount(&server)
            .await;

        let client = WeatherClient::new("test-key").with_base_url(server.uri());
        let result = client.current("Nowheresville").await.unwrap();
        assert_eq!(result, error_body);
    }

    #[tokio::test]
    async fn connection_failure_surfaces_as_transport_error() {
        // Nothing listens on this port.
        let client = WeatherClient::new("test-key").with_base_url("http://127.0.0.1:1");
        let err = client.current("London").await.unwrap_err();
        assert!(matches!(err, crate::Error::Transport(_)));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let client = WeatherClient::new("super-secret");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn from_env_reads_key_once() {
        temp_env::with_var(WEATHER_API_KEY_VAR, Some("env-key"), || {
            let client = WeatherClient::from_env();
            assert_eq!(client.api_key, "env-key");
        });
        temp_env::with_var_unset(WEATHER_API_KEY_VAR, || {
            // Absence is not validated; the key is simply empty.
            let client = WeatherClient::from_env();
            assert_eq!(client.api_key, "");
        });
    }
}
