use crate::config;
use crate::models::{BuyerCount, CheckoutSession, IntakeSubmission, PaymentLookupKey, PaymentRecord};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(gloo_net::Error),
}

/// Joins an endpoint path onto the API base URL.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn payment_details_url(base: &str, key: &PaymentLookupKey) -> String {
    match key {
        PaymentLookupKey::SessionId(id) => format!(
            "{}?session_id={}",
            endpoint(base, "payment-details"),
            urlencoding::encode(id)
        ),
        PaymentLookupKey::ExternalReference(reference) => format!(
            "{}?external_reference={}&collection_status=approved",
            endpoint(base, "payment-details-mercadopago"),
            urlencoding::encode(reference)
        ),
    }
}

async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response.json::<R>().await.map_err(ApiError::Decode)
}

/// POSTs `body` as JSON. One attempt; any non-2xx status is an error.
pub async fn post_json<B, R>(url: &str, body: &B) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let response = Request::post(url).json(body)?.send().await?;
    read_json(response).await
}

pub async fn get_json<R: DeserializeOwned>(url: &str) -> Result<R, ApiError> {
    let response = Request::get(url)
        .header("Content-Type", "application/json")
        .send()
        .await?;
    read_json(response).await
}

pub async fn create_checkout_session(submission: &IntakeSubmission) -> Result<CheckoutSession, ApiError> {
    post_json(&endpoint(config::get_api_url(), "create-checkout-session"), submission).await
}

pub async fn fetch_buyer_count() -> Result<BuyerCount, ApiError> {
    get_json(&endpoint(config::get_api_url(), "clientes-count")).await
}

pub async fn fetch_payment_details(key: &PaymentLookupKey) -> Result<PaymentRecord, ApiError> {
    get_json(&payment_details_url(config::get_api_url(), key)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_ignores_duplicate_slashes() {
        assert_eq!(endpoint("/api", "clientes-count"), "/api/clientes-count");
        assert_eq!(endpoint("/api/", "/clientes-count"), "/api/clientes-count");
        assert_eq!(
            endpoint("https://plannerrun.com/api", "create-checkout-session"),
            "https://plannerrun.com/api/create-checkout-session"
        );
    }

    #[test]
    fn session_lookup_url() {
        let key = PaymentLookupKey::SessionId("cs_test_a1".to_string());
        assert_eq!(
            payment_details_url("/api", &key),
            "/api/payment-details?session_id=cs_test_a1"
        );
    }

    #[test]
    fn external_reference_lookup_filters_approved() {
        let key = PaymentLookupKey::ExternalReference("ref 42&x".to_string());
        assert_eq!(
            payment_details_url("/api", &key),
            "/api/payment-details-mercadopago?external_reference=ref%2042%26x&collection_status=approved"
        );
    }
}
