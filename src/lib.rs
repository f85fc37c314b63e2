//! Desktop client for the Flipwise flashcard service. Study notes go in and
//! flip cards come back, saved to the account when a session exists.

pub mod api;
pub mod core;
pub mod gui;
pub mod persistence;

pub use crate::core::{
    AppConfig,
    Flashcard,
    FlipwiseError,
};
