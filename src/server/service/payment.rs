//! Payment intent creation against the Stripe API.

use reqwest::Client;
use serde_json::Value;

use crate::{
    model::payment::PaymentIntentDto,
    server::{
        error::{payment::PaymentError, AppError},
        model::user::User,
    },
};

/// Client for creating Stripe payment intents.
///
/// A single call-through with no retry: replaying a payment intent request
/// can double-charge, so failures surface to the caller instead.
pub struct StripeService {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl StripeService {
    /// Creates a new Stripe client.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client with timeouts configured
    /// - `base_url` - The Stripe API root
    /// - `secret_key` - Secret API key used as bearer auth
    pub fn new(client: &Client, base_url: &str, secret_key: &str) -> Self {
        Self {
            client: client.clone(),
            base_url: base_url.to_string(),
            secret_key: secret_key.to_string(),
        }
    }

    /// Creates a payment intent for the given amount.
    ///
    /// The intent is tagged with the user's id and email in metadata so
    /// payments reconcile back to accounts. Amounts are minor currency units
    /// (cents).
    ///
    /// # Arguments
    /// - `amount` - Amount in cents, strictly positive
    /// - `user` - The authenticated payer
    ///
    /// # Returns
    /// - `Ok(PaymentIntentDto)` - The intent's client secret for the frontend
    /// - `Err(AppError::BadRequest)` - Non-positive amount
    /// - `Err(AppError::PaymentErr)` - Processor rejected the request or answered garbage
    /// - `Err(AppError::ReqwestErr)` - Network failure reaching the processor
    pub async fn create_intent(
        &self,
        amount: i64,
        user: &User,
    ) -> Result<PaymentIntentDto, AppError> {
        if amount <= 0 {
            return Err(AppError::BadRequest(
                "Amount must be greater than 0".to_string(),
            ));
        }

        let form = [
            ("amount", amount.to_string()),
            ("currency", "usd".to_string()),
            ("metadata[user_id]", user.id.to_string()),
            ("metadata[user_email]", user.email.clone()),
        ];

        let response = self
            .client
            .post(format!("{}/v1/payment_intents", self.base_url))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.json::<Value>().await?;

        if !status.is_success() {
            let message = body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("Payment processor error")
                .to_string();
            return Err(PaymentError::Processor(message).into());
        }

        let client_secret = body
            .get("client_secret")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                PaymentError::InvalidResponse("payment intent without client_secret".to_string())
            })?
            .to_string();

        Ok(PaymentIntentDto { client_secret })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::UserRole;
    use chrono::Utc;
    use serde_json::json;
    use wiremock::{
        matchers::{body_string_contains, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn payer() -> User {
        User {
            id: 7,
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            password_hash: "digest".to_string(),
            role: UserRole::Trucker,
            created_at: Utc::now(),
        }
    }

    fn service(server: &MockServer) -> StripeService {
        let client = Client::new();
        StripeService::new(&client, &server.uri(), "sk_test_123")
    }

    #[tokio::test]
    async fn returns_client_secret_on_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .and(header("authorization", "Bearer sk_test_123"))
            .and(body_string_contains("amount=2500"))
            .and(body_string_contains("currency=usd"))
            .and(body_string_contains("metadata%5Buser_id%5D=7"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "pi_1", "client_secret": "pi_1_secret"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let intent = service(&server).create_intent(2500, &payer()).await.unwrap();

        assert_eq!(intent.client_secret, "pi_1_secret");
    }

    #[tokio::test]
    async fn surfaces_processor_error_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .respond_with(ResponseTemplate::new(400).set_body_json(
                json!({"error": {"message": "Amount must be at least 50 cents"}}),
            ))
            .expect(1)
            .mount(&server)
            .await;

        let result = service(&server).create_intent(10, &payer()).await;

        match result {
            Err(AppError::PaymentErr(PaymentError::Processor(message))) => {
                assert_eq!(message, "Amount must be at least 50 cents");
            }
            other => panic!("expected processor error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn does_not_retry_processor_failures() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": {}})))
            .expect(1)
            .mount(&server)
            .await;

        let result = service(&server).create_intent(2500, &payer()).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn rejects_non_positive_amount() {
        let server = MockServer::start().await;

        let result = service(&server).create_intent(0, &payer()).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
