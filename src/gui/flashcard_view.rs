use eframe::egui;

use crate::{
    core::{
        CardDeck,
        CardDisplay,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

const CARD_SIZE: egui::Vec2 = egui::vec2(260.0, 170.0);

pub fn generate_button_label(generating: bool) -> &'static str {
    if generating {
        "Generating..."
    } else {
        "Generate Flashcards"
    }
}

pub fn show_generate_tab(
    ui: &mut egui::Ui,
    notes: &mut String,
    display: &CardDisplay,
    generating: bool,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    ui.label(theme.heading(ui.ctx(), "Paste your study notes"));
    ui.add_space(6.0);

    ui.add(
        egui::TextEdit::multiline(notes)
            .hint_text("Paste your notes here and Flipwise will turn them into flashcards...")
            .desired_rows(8)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(8.0);
    let button = ui.add_enabled(!generating, egui::Button::new(generate_button_label(generating)));
    if button.clicked() {
        actions.push(UiAction::Generate);
    }

    ui.add_space(12.0);
    ui.separator();

    show_cards(ui, display, theme, actions);
}

fn show_cards(ui: &mut egui::Ui, display: &CardDisplay, theme: &Theme, actions: &mut ActionQueue) {
    match display {
        CardDisplay::Empty => {
            ui.weak("Your flashcards will appear here.");
        }
        CardDisplay::Loading => {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Generating your flashcards...");
            });
        }
        CardDisplay::Cards(deck) => {
            egui::ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                    for index in 0..deck.len() {
                        if flashcard(ui, deck, index, theme).clicked() {
                            actions.push(UiAction::ToggleCard(index));
                        }
                    }
                });
            });
        }
    }
}

fn flashcard(ui: &mut egui::Ui, deck: &CardDeck, index: usize, theme: &Theme) -> egui::Response {
    let (Some(face), Some(entry)) = (deck.face(index), deck.cards().get(index)) else {
        return ui.allocate_response(egui::Vec2::ZERO, egui::Sense::hover());
    };
    let flipped = entry.is_flipped();
    let ctx = ui.ctx().clone();

    let frame = egui::Frame::group(ui.style())
        .fill(if flipped { theme.card_back(&ctx) } else { theme.card_front(&ctx) })
        .stroke(theme.card_stroke(&ctx, flipped))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(12));

    let inner = frame.show(ui, |ui| {
        ui.set_min_size(CARD_SIZE);
        ui.set_max_width(CARD_SIZE.x);
        ui.vertical_centered(|ui| {
            ui.label(theme.heading(&ctx, &face.heading));
            ui.add_space(6.0);
            ui.add(egui::Label::new(egui::RichText::new(face.body).size(15.0)).wrap());
            ui.add_space(6.0);
            ui.label(egui::RichText::new(face.hint).small().italics().weak());
        });
    });

    ui.interact(inner.response.rect, egui::Id::new(("flashcard", index)), egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
