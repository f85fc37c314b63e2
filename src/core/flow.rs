//! Notes in, cards out. Generation failures never leave the card area empty
//! and saving is best-effort.

use crate::{
    api::FlashcardService,
    core::{
        fallback_flashcards,
        CardDeck,
        Flashcard,
        FlipwiseError,
    },
    persistence::LocalStorage,
};

pub const EMPTY_NOTES_PROMPT: &str = "Please enter some study notes first!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved { message: Option<String> },
    /// No session token in storage, or the fallback cards are showing.
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub deck: CardDeck,
    /// Set when generation failed and `deck` holds the fallback cards.
    pub alert: Option<String>,
}

pub fn validate_notes(notes: &str) -> Result<(), FlipwiseError> {
    if notes.trim().is_empty() {
        return Err(FlipwiseError::Validation(EMPTY_NOTES_PROMPT.to_string()));
    }
    Ok(())
}

/// Generates cards for `notes`, hands them to `on_generated` for display and
/// only then saves them.
///
/// Only a validation failure comes back as `Err`; in that case nothing was
/// sent to the server and `on_generated` is never called.
pub async fn generate_flashcards<S, F>(
    service: &S,
    storage: &LocalStorage,
    notes: &str,
    on_generated: F,
) -> Result<SaveStatus, FlipwiseError>
where
    S: FlashcardService,
    F: FnOnce(GenerationOutcome),
{
    validate_notes(notes)?;

    match service.generate_flashcards(notes).await {
        Ok(flashcards) => {
            log::info!("Generated {} flashcards", flashcards.len());
            on_generated(GenerationOutcome { deck: CardDeck::new(flashcards.clone()), alert: None });
            Ok(save_flashcards(service, storage, &flashcards).await)
        }
        Err(e) => {
            log::error!("Flashcard generation failed: {}", e);
            on_generated(GenerationOutcome {
                deck: CardDeck::new(fallback_flashcards()),
                alert: Some(format!("Error generating flashcards: {}", e)),
            });
            Ok(SaveStatus::Skipped)
        }
    }
}

/// Saves under the stored session, if there is one. Failures are logged and
/// reported in the status, never raised.
pub async fn save_flashcards<S: FlashcardService>(
    service: &S,
    storage: &LocalStorage,
    flashcards: &[Flashcard],
) -> SaveStatus {
    let Some(token) = storage.token() else {
        log::info!("Not logged in, flashcards not saved automatically.");
        return SaveStatus::Skipped;
    };

    match service.save_flashcards(&token, flashcards).await {
        Ok(response) => {
            log::info!(
                "Flashcards saved successfully: {} ({} cards)",
                response.message.as_deref().unwrap_or("(no message)"),
                response.saved_count.unwrap_or(flashcards.len())
            );
            SaveStatus::Saved { message: response.message }
        }
        Err(e) => {
            log::error!("Failed to save flashcards: {}", e);
            SaveStatus::Failed(e.to_string())
        }
    }
}
