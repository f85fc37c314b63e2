use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use eframe::egui;
use tokio::runtime::Runtime;

use super::{
    AuthKind,
    TaskResult,
};
use crate::{
    api::{
        ApiClient,
        LoginRequest,
        SignupRequest,
    },
    core::{
        auth,
        flow,
        payment,
        FlipwiseError,
        PaymentPlan,
    },
    persistence::LocalStorage,
};

/// Runs requests off the UI thread. Results are picked up with
/// [`TaskManager::poll_results`] once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    client: Arc<ApiClient>,
    storage: Arc<LocalStorage>,
    repaint: Option<egui::Context>,
}

struct TaskContext {
    sender: mpsc::Sender<TaskResult>,
    runtime: Arc<Runtime>,
    client: Arc<ApiClient>,
    storage: Arc<LocalStorage>,
    repaint: Option<egui::Context>,
}

impl TaskContext {
    fn send(&self, result: TaskResult) {
        log::debug!("Task finished: {}", result.task_type());
        let _ = self.sender.send(result);
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}

impl TaskManager {
    pub fn new(client: ApiClient, storage: Arc<LocalStorage>) -> Result<Self, FlipwiseError> {
        let runtime = Arc::new(Runtime::new()?);
        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender, client: Arc::new(client), storage, repaint: None })
    }

    /// Wake the UI when a result arrives instead of waiting for the next input event.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn storage(&self) -> &Arc<LocalStorage> {
        &self.storage
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> TaskContext {
        TaskContext {
            sender: self.sender.clone(),
            runtime: self.runtime.clone(),
            client: self.client.clone(),
            storage: self.storage.clone(),
            repaint: self.repaint.clone(),
        }
    }

    pub fn generate_flashcards(&self, notes: String) {
        let task = self.task_context();

        thread::spawn(move || {
            let result = task.runtime.block_on(flow::generate_flashcards(
                task.client.as_ref(),
                &task.storage,
                &notes,
                |outcome| task.send(TaskResult::FlashcardsGenerated(Ok(outcome))),
            ));

            match result {
                Ok(save) => task.send(TaskResult::FlashcardsSaved(save)),
                Err(e) => task.send(TaskResult::FlashcardsGenerated(Err(e.to_string()))),
            }
        });
    }

    pub fn signup(&self, request: SignupRequest) {
        let task = self.task_context();

        thread::spawn(move || {
            let outcome = task
                .runtime
                .block_on(auth::signup(task.client.as_ref(), &task.storage, &request));

            task.send(TaskResult::Auth { kind: AuthKind::Signup, outcome });
        });
    }

    pub fn login(&self, request: LoginRequest) {
        let task = self.task_context();

        thread::spawn(move || {
            let outcome =
                task.runtime.block_on(auth::login(task.client.as_ref(), &task.storage, &request));

            task.send(TaskResult::Auth { kind: AuthKind::Login, outcome });
        });
    }

    pub fn create_payment_link(&self, token: String, plan: PaymentPlan) {
        let task = self.task_context();

        thread::spawn(move || {
            let outcome = task
                .runtime
                .block_on(payment::create_checkout(task.client.as_ref(), &token, &plan));

            task.send(TaskResult::PaymentLink(outcome));
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use super::*;
    use crate::core::AppConfig;

    fn wait_for_result(manager: &mut TaskManager) -> TaskResult {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(result) = manager.poll_results().into_iter().next() {
                return result;
            }
            assert!(Instant::now() < deadline, "task never reported back");
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn validation_errors_come_back_through_the_channel() {
        let client = ApiClient::new(&AppConfig::default()).unwrap();
        let mut manager = TaskManager::new(client, Arc::new(LocalStorage::in_memory())).unwrap();

        manager.generate_flashcards("   ".to_string());

        match wait_for_result(&mut manager) {
            TaskResult::FlashcardsGenerated(Err(message)) => {
                assert_eq!(message, flow::EMPTY_NOTES_PROMPT)
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn poll_is_empty_when_nothing_ran() {
        let client = ApiClient::new(&AppConfig::default()).unwrap();
        let mut manager = TaskManager::new(client, Arc::new(LocalStorage::in_memory())).unwrap();
        assert!(manager.poll_results().is_empty());
    }
}
