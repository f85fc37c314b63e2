use eframe::egui;

use crate::{
    core::Session,
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        tabs::{
            Tab,
            TabState,
        },
        theme::Theme,
    },
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        tabs: &TabState,
        session: Option<&Session>,
        upgrade_busy: bool,
        theme: &Theme,
        actions: &mut ActionQueue,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.separator();

                for tab in Tab::ALL {
                    if ui.selectable_label(tabs.is_active(tab), tab.label()).clicked() {
                        actions.push(UiAction::SwitchTab(tab));
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add_enabled(!upgrade_busy, egui::Button::new("Upgrade")).clicked() {
                        actions.push(UiAction::Upgrade);
                    }
                    ui.add_space(6.0);
                    Self::show_session_indicator(ui, session, theme);
                });
            });
        });
    }

    fn show_session_indicator(ui: &mut egui::Ui, session: Option<&Session>, theme: &Theme) {
        let (color, label, tooltip) = match session {
            Some(session) => {
                let name = session
                    .user
                    .as_ref()
                    .and_then(|u| u.name.clone())
                    .unwrap_or_else(|| "Logged in".to_string());
                (theme.green(ui.ctx()), name, "Flashcards you generate are saved to your account")
            }
            None => (
                theme.red(ui.ctx()),
                "Guest".to_string(),
                "Log in to save generated flashcards",
            ),
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
            ui.small(label).on_hover_text(tooltip);
        });
    }
}
