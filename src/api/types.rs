use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    Flashcard,
    User,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    pub access_token: Option<String>,
    pub user_id: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: Option<String>,
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    pub flashcards: Vec<Flashcard>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SaveRequest<'a> {
    pub flashcards: &'a [Flashcard],
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub saved_count: Option<usize>,
}
