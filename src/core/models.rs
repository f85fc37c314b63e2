use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { question: question.into(), answer: answer.into() }
    }
}

/// Whatever the server tells us about the logged-in user. Signup only hands
/// back an id, login fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
}

impl User {
    pub fn with_id(id: u64) -> Self {
        Self { id, ..Default::default() }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("there")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub amount: u64,
    pub currency: String,
    pub title: String,
    pub description: String,
}

impl Default for PaymentPlan {
    fn default() -> Self {
        Self {
            amount: 2000,
            currency: "KES".to_string(),
            title: "Flipwise Pro - 1 month".to_string(),
            description: "Monthly subscription to Flipwise Pro".to_string(),
        }
    }
}

/// Cards shown when generation fails so the card area is never left empty.
pub fn fallback_flashcards() -> Vec<Flashcard> {
    vec![
        Flashcard::new(
            "What is the capital of France?",
            "Paris is the capital and most populous city of France.",
        ),
        Flashcard::new("What is 2 + 2?", "4"),
    ]
}
