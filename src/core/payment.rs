use crate::{
    api::{
        extract_checkout_url,
        FlashcardService,
    },
    core::PaymentPlan,
    persistence::LocalStorage,
};

pub const LOGIN_REQUIRED_PROMPT: &str = "You need to be logged in to buy Pro. Log in now?";
pub const LINK_WITHOUT_URL_ALERT: &str =
    "Payment link created, but no checkout URL was found. See the details for the response.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeStep {
    LoginRequired,
    Checkout { token: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Redirect(String),
    /// The link was created but no known key held a URL. Carries the
    /// response body, pretty-printed.
    LinkWithoutUrl(String),
    Failed(String),
}

impl PaymentOutcome {
    pub fn alert(&self) -> Option<String> {
        match self {
            PaymentOutcome::LinkWithoutUrl(_) => Some(LINK_WITHOUT_URL_ALERT.to_string()),
            PaymentOutcome::Failed(message) => {
                Some(format!("Failed to create payment link: {}", message))
            }
            PaymentOutcome::Redirect(_) => None,
        }
    }

    pub fn details(&self) -> Option<String> {
        match self {
            PaymentOutcome::LinkWithoutUrl(response) => Some(response.clone()),
            _ => None,
        }
    }
}

pub fn upgrade_step(storage: &LocalStorage) -> UpgradeStep {
    match storage.token() {
        Some(token) => UpgradeStep::Checkout { token },
        None => UpgradeStep::LoginRequired,
    }
}

pub async fn create_checkout<S: FlashcardService>(
    service: &S,
    token: &str,
    plan: &PaymentPlan,
) -> PaymentOutcome {
    match service.create_payment_link(token, plan).await {
        Ok(body) => match extract_checkout_url(&body) {
            Some(url) => {
                log::info!("Redirecting to checkout: {}", url);
                PaymentOutcome::Redirect(url)
            }
            None => {
                log::info!("Payment link response: {}", body);
                let response =
                    serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
                PaymentOutcome::LinkWithoutUrl(response)
            }
        },
        Err(e) => {
            log::error!("Failed to create payment link: {}", e);
            PaymentOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::core::testing::{
        Call,
        FakeService,
    };

    fn logged_in() -> LocalStorage {
        let storage = LocalStorage::in_memory();
        storage.set_user(Some("tok"), None).unwrap();
        storage
    }

    #[test]
    fn no_token_asks_for_login() {
        assert_eq!(upgrade_step(&LocalStorage::in_memory()), UpgradeStep::LoginRequired);

        let empty_token = LocalStorage::in_memory();
        empty_token.set_item(crate::persistence::ACCESS_TOKEN_KEY, "").unwrap();
        assert_eq!(upgrade_step(&empty_token), UpgradeStep::LoginRequired);

        assert_eq!(upgrade_step(&logged_in()), UpgradeStep::Checkout { token: "tok".into() });
    }

    #[tokio::test]
    async fn redirects_to_found_url() {
        let service = FakeService {
            payment: Some(Ok(json!({
                "success": true,
                "intasend_response": {"url": "https://payment.intasend.com/pay/abc"}
            }))),
            ..Default::default()
        };

        let outcome = create_checkout(&service, "tok", &PaymentPlan::default()).await;

        assert_eq!(outcome, PaymentOutcome::Redirect("https://payment.intasend.com/pay/abc".into()));
        assert_eq!(service.calls(), vec![Call::PaymentLink { token: "tok".into(), amount: 2000 }]);
    }

    #[tokio::test]
    async fn missing_url_alerts_with_the_response_as_details() {
        let service = FakeService {
            payment: Some(Ok(json!({"success": true, "intasend_response": {"id": "X1"}}))),
            ..Default::default()
        };

        let outcome = create_checkout(&service, "tok", &PaymentPlan::default()).await;

        assert!(matches!(outcome, PaymentOutcome::LinkWithoutUrl(_)));
        assert_eq!(outcome.alert().as_deref(), Some(LINK_WITHOUT_URL_ALERT));
        let details = outcome.details().unwrap();
        assert!(details.contains("\"id\": \"X1\""), "{details}");
    }

    #[tokio::test]
    async fn failure_is_alerted() {
        let service = FakeService { payment: Some(Err("Amount is required")), ..Default::default() };

        let outcome = create_checkout(&service, "tok", &PaymentPlan::default()).await;

        assert_eq!(
            outcome.alert().as_deref(),
            Some("Failed to create payment link: Amount is required")
        );
    }
}
