use crate::core::{
    auth::AuthOutcome,
    flow::{
        GenerationOutcome,
        SaveStatus,
    },
    payment::PaymentOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthKind {
    Signup,
    Login,
}

#[derive(Debug, Clone)]
pub enum TaskResult {
    /// Cards ready for display, or the validation message when nothing was sent.
    FlashcardsGenerated(Result<GenerationOutcome, String>),
    /// Follows `FlashcardsGenerated(Ok(_))` once the save attempt is over.
    FlashcardsSaved(SaveStatus),
    Auth { kind: AuthKind, outcome: AuthOutcome },
    PaymentLink(PaymentOutcome),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::FlashcardsGenerated(_) => "generate_flashcards",
            TaskResult::FlashcardsSaved(_) => "save_flashcards",
            TaskResult::Auth { kind: AuthKind::Signup, .. } => "signup",
            TaskResult::Auth { kind: AuthKind::Login, .. } => "login",
            TaskResult::PaymentLink(_) => "payment_link",
        }
    }
}
