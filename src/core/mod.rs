pub mod auth;
pub mod config;
pub mod deck;
pub mod errors;
pub mod flow;
pub mod http;
pub mod models;
pub mod payment;
pub mod tasks;

#[cfg(test)]
pub(crate) mod testing;

pub use config::AppConfig;
pub use deck::{
    CardDeck,
    CardDisplay,
};
pub use errors::FlipwiseError;
pub use models::{
    fallback_flashcards,
    Flashcard,
    PaymentPlan,
    Session,
    User,
};
