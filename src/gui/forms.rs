use eframe::egui;

use crate::{
    api::{
        LoginRequest,
        SignupRequest,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

#[derive(Debug, Default, Clone)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme, busy: bool, actions: &mut ActionQueue) {
        ui.label(theme.heading(ui.ctx(), "Create your Flipwise account"));
        ui.add_space(8.0);

        let mut submitted = false;
        egui::Grid::new("signup_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
            ui.label("Name");
            submitted |= text_field(ui, &mut self.name, "Your name", false);
            ui.end_row();

            ui.label("Email");
            submitted |= text_field(ui, &mut self.email, "you@example.com", false);
            ui.end_row();

            ui.label("Password");
            submitted |= text_field(ui, &mut self.password, "Password", true);
            ui.end_row();
        });

        ui.add_space(8.0);
        let button = ui.add_enabled(!busy, egui::Button::new("Sign up"));
        if (button.clicked() || submitted) && !busy {
            actions.push(UiAction::SubmitSignup);
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest { email: self.email.clone(), password: self.password.clone() }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme, busy: bool, actions: &mut ActionQueue) {
        ui.label(theme.heading(ui.ctx(), "Log in"));
        ui.add_space(8.0);

        let mut submitted = false;
        egui::Grid::new("login_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
            ui.label("Email");
            submitted |= text_field(ui, &mut self.email, "you@example.com", false);
            ui.end_row();

            ui.label("Password");
            submitted |= text_field(ui, &mut self.password, "Password", true);
            ui.end_row();
        });

        ui.add_space(8.0);
        let button = ui.add_enabled(!busy, egui::Button::new("Log in"));
        if (button.clicked() || submitted) && !busy {
            actions.push(UiAction::SubmitLogin);
        }
    }
}

/// True when Enter was pressed in the field.
fn text_field(ui: &mut egui::Ui, value: &mut String, hint: &str, password: bool) -> bool {
    let response = ui.add(
        egui::TextEdit::singleline(value).hint_text(hint).password(password).desired_width(260.0),
    );
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_carry_fields_verbatim() {
        let form = SignupForm {
            name: "Njeri".into(),
            email: "njeri@example.com".into(),
            password: " spaced pw ".into(),
        };
        let request = form.to_request();
        assert_eq!(request.name, "Njeri");
        assert_eq!(request.email, "njeri@example.com");
        assert_eq!(request.password, " spaced pw ");
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = LoginForm { email: "a@b.c".into(), password: "pw".into() };
        form.reset();
        assert!(form.email.is_empty() && form.password.is_empty());
    }
}
