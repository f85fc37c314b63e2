use crate::{
    api::{
        FlashcardService,
        LoginRequest,
        SignupRequest,
    },
    core::{
        FlipwiseError,
        User,
    },
    persistence::LocalStorage,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub succeeded: bool,
    pub alert: String,
}

impl AuthOutcome {
    fn success(alert: impl Into<String>) -> Self {
        Self { succeeded: true, alert: alert.into() }
    }

    fn failure(alert: impl Into<String>) -> Self {
        Self { succeeded: false, alert: alert.into() }
    }
}

pub async fn signup<S: FlashcardService>(
    service: &S,
    storage: &LocalStorage,
    request: &SignupRequest,
) -> AuthOutcome {
    let result = async {
        let response = service.signup(request).await?;
        let user = response.user_id.map(User::with_id);
        storage.set_user(response.access_token.as_deref(), user.as_ref())?;
        Ok::<(), FlipwiseError>(())
    }
    .await;

    match result {
        Ok(()) => {
            log::info!("Signed up {}", request.email);
            AuthOutcome::success("Account created! You are logged in.")
        }
        Err(e) => {
            log::warn!("Signup failed: {}", e);
            AuthOutcome::failure(format!("Error creating account: {}", e))
        }
    }
}

pub async fn login<S: FlashcardService>(
    service: &S,
    storage: &LocalStorage,
    request: &LoginRequest,
) -> AuthOutcome {
    let result = async {
        let response = service.login(request).await?;
        storage.set_user(response.access_token.as_deref(), response.user.as_ref())?;
        Ok::<Option<User>, FlipwiseError>(response.user)
    }
    .await;

    match result {
        Ok(user) => {
            let name = user.as_ref().map(User::display_name).unwrap_or("there");
            log::info!("Logged in as {}", request.email);
            AuthOutcome::success(format!("Login successful. Welcome back, {}", name))
        }
        Err(e) => {
            log::warn!("Login failed: {}", e);
            AuthOutcome::failure(format!("Login error: {}", e))
        }
    }
}
