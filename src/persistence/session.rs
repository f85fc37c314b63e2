use super::LocalStorage;
use crate::core::{
    FlipwiseError,
    Session,
    User,
};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const USER_KEY: &str = "user";

impl LocalStorage {
    pub fn token(&self) -> Option<String> {
        self.get_item(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<User> {
        let raw = self.get_item(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Stored user is not valid JSON: {}", e);
                None
            }
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.token().map(|token| Session { token, user: self.user() })
    }

    /// Each half is only written when present, so a response without a user
    /// keeps whatever user was stored before.
    pub fn set_user(&self, token: Option<&str>, user: Option<&User>) -> Result<(), FlipwiseError> {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.set_item(ACCESS_TOKEN_KEY, token)?;
        }
        if let Some(user) = user {
            self.set_item(USER_KEY, &serde_json::to_string(user)?)?;
        }
        Ok(())
    }
}
