use std::sync::Mutex;

use serde_json::Value;

use crate::{
    api::{
        FlashcardService,
        LoginRequest,
        LoginResponse,
        SaveResponse,
        SignupRequest,
        SignupResponse,
    },
    core::{
        Flashcard,
        FlipwiseError,
        PaymentPlan,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Signup(SignupRequest),
    Login(LoginRequest),
    Generate(String),
    Save { token: String, count: usize },
    PaymentLink { token: String, amount: u64 },
}

/// Scripted stand-in for the server. Every unset response fails with a 500.
#[derive(Default)]
pub struct FakeService {
    pub calls: Mutex<Vec<Call>>,
    pub signup: Option<Result<(Option<&'static str>, Option<u64>), &'static str>>,
    pub login: Option<Result<LoginResponse, &'static str>>,
    pub generate: Option<Result<Vec<Flashcard>, &'static str>>,
    pub save: Option<Result<&'static str, &'static str>>,
    pub payment: Option<Result<Value, &'static str>>,
}

impl FakeService {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn server_error(message: &str) -> FlipwiseError {
    FlipwiseError::Api { status: 500, message: message.to_string() }
}

impl FlashcardService for FakeService {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, FlipwiseError> {
        self.record(Call::Signup(request.clone()));
        match &self.signup {
            Some(Ok((token, user_id))) => Ok(SignupResponse {
                access_token: token.map(str::to_string),
                user_id: *user_id,
                message: Some("User created successfully".into()),
            }),
            Some(Err(e)) => Err(server_error(e)),
            None => Err(server_error("Signup failed")),
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, FlipwiseError> {
        self.record(Call::Login(request.clone()));
        match &self.login {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(e)) => Err(server_error(e)),
            None => Err(server_error("Login failed")),
        }
    }

    async fn generate_flashcards(&self, text: &str) -> Result<Vec<Flashcard>, FlipwiseError> {
        self.record(Call::Generate(text.to_string()));
        match &self.generate {
            Some(Ok(cards)) => Ok(cards.clone()),
            Some(Err(e)) => Err(server_error(e)),
            None => Err(server_error("Failed to generate flashcards")),
        }
    }

    async fn save_flashcards(
        &self,
        token: &str,
        flashcards: &[Flashcard],
    ) -> Result<SaveResponse, FlipwiseError> {
        self.record(Call::Save { token: token.to_string(), count: flashcards.len() });
        match &self.save {
            Some(Ok(message)) => Ok(SaveResponse {
                message: Some(message.to_string()),
                saved_count: Some(flashcards.len()),
            }),
            Some(Err(e)) => Err(server_error(e)),
            None => Err(server_error("Failed to save flashcards")),
        }
    }

    async fn create_payment_link(
        &self,
        token: &str,
        plan: &PaymentPlan,
    ) -> Result<Value, FlipwiseError> {
        self.record(Call::PaymentLink { token: token.to_string(), amount: plan.amount });
        match &self.payment {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(e)) => Err(server_error(e)),
            None => Err(server_error("Payment gateway not configured on server")),
        }
    }
}

pub fn cards(n: usize) -> Vec<Flashcard> {
    (1..=n).map(|i| Flashcard::new(format!("Q{i}"), format!("A{i}"))).collect()
}
