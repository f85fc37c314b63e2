use std::sync::Arc;

use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    alert_modal::AlertModal,
    flashcard_view::show_generate_tab,
    forms::{
        LoginForm,
        SignupForm,
    },
    message_overlay::MessageOverlay,
    modal::{
        confirmation_dialog,
        Modal,
        ModalResult,
    },
    tabs::{
        Tab,
        TabState,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        flow,
        payment::{
            self,
            PaymentOutcome,
            UpgradeStep,
            LOGIN_REQUIRED_PROMPT,
        },
        tasks::{
            AuthKind,
            TaskManager,
            TaskResult,
        },
        AppConfig,
        CardDisplay,
    },
    persistence::LocalStorage,
};

const ALERT_TITLE: &str = "Flipwise";

pub struct FlipwiseApp {
    // Configuration
    config: AppConfig,

    // UI State
    tabs: TabState,
    notes: String,
    display: CardDisplay,
    generating: bool,
    signup_form: SignupForm,
    login_form: LoginForm,
    auth_pending: Option<AuthKind>,
    payment_pending: bool,
    theme: Theme,
    actions: ActionQueue,
    message_overlay: MessageOverlay,

    // Modals
    alerts: AlertModal,
    login_prompt: Modal<()>,

    // External Services
    task_manager: TaskManager,
}

impl FlipwiseApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, task_manager: TaskManager) -> Self {
        let task_manager = task_manager.with_repaint(cc.egui_ctx.clone());

        let app = Self {
            config,

            tabs: TabState::default(),
            notes: String::new(),
            display: CardDisplay::Empty,
            generating: false,
            signup_form: SignupForm::default(),
            login_form: LoginForm::default(),
            auth_pending: None,
            payment_pending: false,
            theme: Theme::dracula(),
            actions: ActionQueue::new(),
            message_overlay: MessageOverlay::new(),

            alerts: AlertModal::new(),
            login_prompt: Modal::new("Flipwise Pro"),

            task_manager,
        };

        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);
        set_theme(&cc.egui_ctx, &app.theme);

        app
    }

    fn storage(&self) -> &Arc<LocalStorage> {
        self.task_manager.storage()
    }
}

impl eframe::App for FlipwiseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result, ctx);
        }

        let session = self.storage().session();
        TopBar::show(
            ctx,
            &self.tabs,
            session.as_ref(),
            self.payment_pending,
            &self.theme,
            &mut self.actions,
        );

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            match self.tabs.active() {
                Tab::Home => show_home(ui, &self.theme, self.payment_pending, &mut self.actions),
                Tab::Generate => show_generate_tab(
                    ui,
                    &mut self.notes,
                    &self.display,
                    self.generating,
                    &self.theme,
                    &mut self.actions,
                ),
                Tab::Signup => self.signup_form.show(
                    ui,
                    &self.theme,
                    self.auth_pending.is_some(),
                    &mut self.actions,
                ),
                Tab::Login => self.login_form.show(
                    ui,
                    &self.theme,
                    self.auth_pending.is_some(),
                    &mut self.actions,
                ),
            }
        });

        let pending: Vec<UiAction> = self.actions.drain().collect();
        for action in pending {
            self.apply_action(action);
        }

        if let Some(ModalResult::Confirmed(())) =
            confirmation_dialog(&mut self.login_prompt, ctx, LOGIN_REQUIRED_PROMPT)
        {
            self.tabs.toggle_tab(Tab::Login);
        }

        self.message_overlay.show(ctx, &self.theme);
        self.alerts.show(ctx);
    }
}

impl FlipwiseApp {
    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::SwitchTab(tab) => self.tabs.toggle_tab(tab),
            UiAction::ToggleCard(index) => {
                if let Some(deck) = self.display.deck_mut() {
                    deck.toggle(index);
                }
            }
            UiAction::Generate => self.start_generation(),
            UiAction::SubmitSignup => {
                if self.auth_pending.is_none() {
                    self.auth_pending = Some(AuthKind::Signup);
                    self.message_overlay.set_message("Creating your account...");
                    self.task_manager.signup(self.signup_form.to_request());
                }
            }
            UiAction::SubmitLogin => {
                if self.auth_pending.is_none() {
                    self.auth_pending = Some(AuthKind::Login);
                    self.message_overlay.set_message("Logging in...");
                    self.task_manager.login(self.login_form.to_request());
                }
            }
            UiAction::Upgrade => self.start_upgrade(),
        }
    }

    fn start_generation(&mut self) {
        if self.generating {
            return;
        }

        if let Err(e) = flow::validate_notes(&self.notes) {
            self.alerts.alert(ALERT_TITLE, e.to_string());
            return;
        }

        self.generating = true;
        self.display = CardDisplay::Loading;
        self.task_manager.generate_flashcards(self.notes.clone());
    }

    fn start_upgrade(&mut self) {
        if self.payment_pending {
            return;
        }

        match payment::upgrade_step(self.storage()) {
            UpgradeStep::LoginRequired => self.login_prompt.open(),
            UpgradeStep::Checkout { token } => {
                self.payment_pending = true;
                self.message_overlay.set_message("Creating payment link...");
                self.task_manager.create_payment_link(token, self.config.payment_plan.clone());
            }
        }
    }

    fn handle_task_result(&mut self, result: TaskResult, ctx: &egui::Context) {
        match result {
            TaskResult::FlashcardsGenerated(result) => match result {
                // The button stays busy until the save result comes in.
                Ok(outcome) => {
                    if let Some(alert) = outcome.alert {
                        self.alerts.alert(ALERT_TITLE, alert);
                    }
                    self.display = CardDisplay::Cards(outcome.deck);
                }
                Err(message) => {
                    self.generating = false;
                    self.display = CardDisplay::Empty;
                    self.alerts.alert(ALERT_TITLE, message);
                }
            },

            TaskResult::FlashcardsSaved(status) => {
                self.generating = false;
                log::debug!("Save finished: {:?}", status);
            }

            TaskResult::Auth { kind, outcome } => {
                self.auth_pending = None;
                self.message_overlay.clear_message();
                if outcome.succeeded {
                    match kind {
                        AuthKind::Signup => self.signup_form.reset(),
                        AuthKind::Login => self.login_form.reset(),
                    }
                }
                self.alerts.alert(ALERT_TITLE, outcome.alert);
            }

            TaskResult::PaymentLink(outcome) => {
                self.payment_pending = false;
                self.message_overlay.clear_message();
                if let PaymentOutcome::Redirect(url) = &outcome {
                    ctx.open_url(egui::OpenUrl::same_tab(url));
                }
                if let Some(alert) = outcome.alert() {
                    self.alerts.push(ALERT_TITLE, alert, outcome.details());
                }
            }
        }
    }
}

fn show_home(ui: &mut egui::Ui, theme: &Theme, upgrade_busy: bool, actions: &mut ActionQueue) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading(theme.heading(ui.ctx(), "Flipwise"));
        ui.add_space(8.0);
        ui.label("Turn your study notes into flashcards in seconds.");
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if ui.button("Start generating").clicked() {
                actions.push(UiAction::SwitchTab(Tab::Generate));
            }
            if ui.add_enabled(!upgrade_busy, egui::Button::new("Upgrade to Pro")).clicked() {
                actions.push(UiAction::Upgrade);
            }
        });

        ui.add_space(16.0);
        ui.weak("Log in to keep every set you generate.");
    });
}
