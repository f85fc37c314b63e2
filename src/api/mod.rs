pub mod checkout;
pub mod types;

use reqwest::{
    Client,
    StatusCode,
};
use serde::{
    de::DeserializeOwned,
    Serialize,
};
use serde_json::Value;
pub use checkout::extract_checkout_url;
pub use types::{
    LoginRequest,
    LoginResponse,
    SaveResponse,
    SignupRequest,
    SignupResponse,
};
use types::{
    GenerateRequest,
    GenerateResponse,
    SaveRequest,
};

use crate::core::{
    http::{
        api_error,
        bearer_headers,
        http_client,
    },
    AppConfig,
    Flashcard,
    FlipwiseError,
    PaymentPlan,
};

pub const SIGNUP_PATH: &str = "/api/signup";
pub const LOGIN_PATH: &str = "/api/login";
pub const GENERATE_PATH: &str = "/api/generate-flashcards";
pub const SAVE_PATH: &str = "/api/save-flashcards";
pub const PAYMENT_LINK_PATH: &str = "/api/create-paymentlink";

/// The remote Flipwise endpoints. The flows are written against this trait
/// so they can run without a server.
#[allow(async_fn_in_trait)]
pub trait FlashcardService {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, FlipwiseError>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, FlipwiseError>;

    async fn generate_flashcards(&self, text: &str) -> Result<Vec<Flashcard>, FlipwiseError>;

    async fn save_flashcards(
        &self,
        token: &str,
        flashcards: &[Flashcard],
    ) -> Result<SaveResponse, FlipwiseError>;

    /// Returns the raw body; where the checkout URL lives depends on the
    /// payment gateway.
    async fn create_payment_link(
        &self,
        token: &str,
        plan: &PaymentPlan,
    ) -> Result<Value, FlipwiseError>;
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, FlipwiseError> {
        Ok(Self {
            client: http_client(config.request_timeout_secs)?,
            base_url: config.server_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<(StatusCode, Value), FlipwiseError> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.headers(bearer_headers(token)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let value = match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            // An error page that isn't JSON still gets reported through the
            // per-endpoint fallback message.
            Err(_) if !status.is_success() => Value::Null,
            Err(e) => return Err(e.into()),
        };

        log::debug!("POST {} -> {}", path, status);
        Ok((status, value))
    }

    async fn post_expecting<B, T>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
        fallback: &str,
    ) -> Result<T, FlipwiseError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (status, value) = self.post_json(path, body, token).await?;
        if !status.is_success() {
            return Err(api_error(status.as_u16(), &value, fallback));
        }
        Ok(serde_json::from_value(value)?)
    }
}

impl FlashcardService for ApiClient {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, FlipwiseError> {
        self.post_expecting(SIGNUP_PATH, request, None, "Signup failed").await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, FlipwiseError> {
        self.post_expecting(LOGIN_PATH, request, None, "Login failed").await
    }

    async fn generate_flashcards(&self, text: &str) -> Result<Vec<Flashcard>, FlipwiseError> {
        let response: GenerateResponse = self
            .post_expecting(
                GENERATE_PATH,
                &GenerateRequest { text },
                None,
                "Failed to generate flashcards",
            )
            .await?;
        Ok(response.flashcards)
    }

    async fn save_flashcards(
        &self,
        token: &str,
        flashcards: &[Flashcard],
    ) -> Result<SaveResponse, FlipwiseError> {
        self.post_expecting(
            SAVE_PATH,
            &SaveRequest { flashcards },
            Some(token),
            "Failed to save flashcards",
        )
        .await
    }

    async fn create_payment_link(
        &self,
        token: &str,
        plan: &PaymentPlan,
    ) -> Result<Value, FlipwiseError> {
        let (status, value) = self.post_json(PAYMENT_LINK_PATH, plan, Some(token)).await?;
        if !status.is_success() {
            let fallback = value.to_string();
            return Err(api_error(status.as_u16(), &value, &fallback));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{
            AsyncReadExt,
            AsyncWriteExt,
        },
        net::{
            TcpListener,
            TcpStream,
        },
        task::JoinHandle,
    };

    use super::*;

    /// Answers a single request with `status` and `body`, and hands back the
    /// raw request it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (ApiClient, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            request
        });

        (local_client(&format!("http://{addr}")), server)
    }

    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    // Proxy settings from the environment must not catch loopback traffic.
    fn local_client(base_url: &str) -> ApiClient {
        ApiClient {
            client: Client::builder().no_proxy().build().unwrap(),
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let config =
            AppConfig { server_url: "http://localhost:5000/".into(), ..AppConfig::default() };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url(GENERATE_PATH), "http://localhost:5000/api/generate-flashcards");
    }

    #[test]
    fn payment_plan_serializes_to_wire_shape() {
        let json = serde_json::to_value(PaymentPlan::default()).unwrap();
        assert_eq!(json["amount"], 2000);
        assert_eq!(json["currency"], "KES");
        assert_eq!(json["title"], "Flipwise Pro - 1 month");
    }

    #[tokio::test]
    async fn generate_posts_notes_and_returns_cards() {
        let (client, server) = serve_once(
            "200 OK",
            r#"{"flashcards":[{"question":"What is ATP?","answer":"Cell energy"}]}"#,
        )
        .await;

        let cards = client.generate_flashcards("mitochondria").await.unwrap();

        assert_eq!(cards, vec![Flashcard::new("What is ATP?", "Cell energy")]);
        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/generate-flashcards "), "{request}");
        assert!(request.ends_with(r#"{"text":"mitochondria"}"#), "{request}");
    }

    #[tokio::test]
    async fn html_error_page_uses_the_endpoint_fallback() {
        let (client, server) =
            serve_once("502 Bad Gateway", "<html><body>Bad Gateway</body></html>").await;

        let err = client.generate_flashcards("notes").await.unwrap_err();

        assert!(
            matches!(&err, FlipwiseError::Api { status: 502, message } if message == "Failed to generate flashcards"),
            "{err:?}"
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn server_error_field_wins_over_the_fallback() {
        let (client, server) =
            serve_once("401 Unauthorized", r#"{"error":"Invalid email or password"}"#).await;

        let request = LoginRequest { email: "a@b.c".into(), password: "x".into() };
        let err = client.login(&request).await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid email or password");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn non_json_success_body_is_a_json_error() {
        let (client, server) = serve_once("200 OK", "all good").await;

        let err = client.generate_flashcards("notes").await.unwrap_err();

        assert!(matches!(err, FlipwiseError::Json(_)), "{err:?}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn success_without_flashcards_is_an_error() {
        let (client, server) = serve_once("200 OK", r#"{"message":"ok"}"#).await;

        let err = client.generate_flashcards("notes").await.unwrap_err();

        assert!(matches!(err, FlipwiseError::Json(_)), "{err:?}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn save_sends_the_bearer_token() {
        let (client, server) =
            serve_once("201 Created", r#"{"message":"Flashcards saved successfully","saved_count":2}"#)
                .await;

        let saved = client
            .save_flashcards("jwt-123", &[Flashcard::new("a", "1"), Flashcard::new("b", "2")])
            .await
            .unwrap();

        assert_eq!(saved.saved_count, Some(2));
        let request = server.await.unwrap().to_ascii_lowercase();
        assert!(request.contains("\r\nauthorization: bearer jwt-123\r\n"), "{request}");
    }

    #[tokio::test]
    async fn unreachable_server_reports_without_the_url() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = local_client(&format!("http://{addr}"));
        let err = client.generate_flashcards("notes").await.unwrap_err();

        let message = err.to_string();
        assert!(matches!(err, FlipwiseError::Reqwest(_)), "{err:?}");
        assert!(message.starts_with("Network error: "), "{message}");
        assert!(!message.contains("127.0.0.1"), "{message}");
    }
}
