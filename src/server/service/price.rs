//! Outbound price feed client with retry.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::server::error::feed::PriceFeedError;

/// Total attempts before the last failure is surfaced.
const MAX_ATTEMPTS: u32 = 3;

/// Default base delay for exponential backoff between attempts.
const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

/// Client for the external fuel price index.
///
/// Issues a fixed weekly-frequency query and retries transient failures with
/// exponential backoff. The response body is proxied through unmodified, so
/// it stays a raw JSON value rather than a typed model.
pub struct PriceFeedService {
    client: Client,
    base_url: String,
    api_key: String,
    backoff_base: Duration,
}

impl PriceFeedService {
    /// Creates a new price feed client.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client with connect/read timeouts configured
    /// - `base_url` - The price index endpoint
    /// - `api_key` - API key appended to every request
    pub fn new(client: &Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client: client.clone(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            backoff_base: DEFAULT_BACKOFF_BASE,
        }
    }

    /// Overrides the backoff base delay.
    ///
    /// Tests shrink the delay so retry sequences complete in milliseconds.
    #[cfg(test)]
    pub fn with_backoff_base(mut self, backoff_base: Duration) -> Self {
        self.backoff_base = backoff_base;
        self
    }

    /// Fetches the latest weekly price dataset.
    ///
    /// Makes up to 3 attempts. After a failed attempt `n` (0-based) the client
    /// sleeps `base * 2^n` before retrying; the final attempt's failure is
    /// returned without a further retry.
    ///
    /// # Returns
    /// - `Ok(Value)` - The upstream JSON payload, passed through unmodified
    /// - `Err(PriceFeedError::RateLimited)` - Upstream answered 429
    /// - `Err(PriceFeedError::UpstreamStatus)` - Upstream answered another error status
    /// - `Err(PriceFeedError::Unavailable)` - Network failure or unreadable body
    pub async fn fetch_prices(&self) -> Result<Value, PriceFeedError> {
        let mut attempt = 0;

        loop {
            match self.request_prices().await {
                Ok(prices) => return Ok(prices),
                Err(err) => {
                    attempt += 1;
                    if attempt >= MAX_ATTEMPTS {
                        tracing::error!("Price feed failed after {} attempts: {}", attempt, err);
                        return Err(err);
                    }

                    let delay = self.backoff_base * 2u32.pow(attempt - 1);
                    tracing::warn!(
                        "Price feed attempt {} failed: {}; retrying in {:?}",
                        attempt,
                        err,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Performs a single request against the price index.
    async fn request_prices(&self) -> Result<Value, PriceFeedError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("frequency", "weekly"),
                ("data[0]", "value"),
                ("sort[0][column]", "period"),
                ("sort[0][direction]", "desc"),
                ("length", "1000"),
            ])
            .send()
            .await
            .map_err(|err| PriceFeedError::Unavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 429 {
                return Err(PriceFeedError::RateLimited);
            }
            return Err(PriceFeedError::UpstreamStatus(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| PriceFeedError::Unavailable(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn service(server: &MockServer) -> PriceFeedService {
        let client = Client::new();
        PriceFeedService::new(&client, &format!("{}/prices", server.uri()), "test-key")
            .with_backoff_base(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn sends_fixed_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/prices"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("frequency", "weekly"))
            .and(query_param("data[0]", "value"))
            .and(query_param("sort[0][column]", "period"))
            .and(query_param("sort[0][direction]", "desc"))
            .and(query_param("length", "1000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": {}})))
            .expect(1)
            .mount(&server)
            .await;

        let prices = service(&server).fetch_prices().await.unwrap();

        assert_eq!(prices, json!({"response": {}}));
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/prices"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/prices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let prices = service(&server).fetch_prices().await.unwrap();

        assert_eq!(prices, json!({"ok": true}));
    }

    #[tokio::test]
    async fn surfaces_third_failure_without_fourth_attempt() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/prices"))
            .respond_with(ResponseTemplate::new(500))
            .expect(3)
            .mount(&server)
            .await;

        let result = service(&server).fetch_prices().await;

        assert!(matches!(result, Err(PriceFeedError::UpstreamStatus(500))));
    }

    #[tokio::test]
    async fn classifies_upstream_rate_limit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/prices"))
            .respond_with(ResponseTemplate::new(429))
            .expect(3)
            .mount(&server)
            .await;

        let result = service(&server).fetch_prices().await;

        assert!(matches!(result, Err(PriceFeedError::RateLimited)));
    }

    #[tokio::test]
    async fn classifies_network_failure_as_unavailable() {
        let client = Client::new();
        let service = PriceFeedService::new(&client, "http://127.0.0.1:1/prices", "test-key")
            .with_backoff_base(Duration::from_millis(1));

        let result = service.fetch_prices().await;

        assert!(matches!(result, Err(PriceFeedError::Unavailable(_))));
    }
}
