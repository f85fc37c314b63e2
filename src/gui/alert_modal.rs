use std::collections::VecDeque;

use eframe::egui;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AlertData {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

/// Blocking message box. Alerts raised while one is showing wait their turn.
pub struct AlertModal {
    queue: VecDeque<AlertData>,
}

impl AlertModal {
    pub fn new() -> Self {
        Self { queue: VecDeque::new() }
    }

    pub fn alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(title, message, None::<String>);
    }

    pub fn push(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        details: Option<impl Into<String>>,
    ) {
        self.queue.push_back(AlertData {
            title: title.into(),
            message: message.into(),
            details: details.map(|d| d.into()),
        });
    }

    pub fn current(&self) -> Option<&AlertData> {
        self.queue.front()
    }

    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }

    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let Some(data) = self.current() else {
            return false;
        };

        let modal = egui::Modal::new(egui::Id::new("alert_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.label(egui::RichText::new(&data.title).size(18.0).strong());

            ui.add_space(10.0);

            ui.label(egui::RichText::new(&data.message).size(14.0));

            if let Some(details) = &data.details {
                ui.add_space(10.0);
                ui.collapsing("Details", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(4)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.dismiss();
            return true;
        }

        false
    }
}

impl Default for AlertModal {
    fn default() -> Self {
        Self::new()
    }
}
