pub mod actions;
pub mod alert_modal;
pub mod app;
pub mod flashcard_view;
pub mod forms;
pub mod message_overlay;
pub mod modal;
pub mod tabs;
pub mod theme;
pub mod top_bar;

pub use app::FlipwiseApp;
