//! Credential resolution for the tracker session.
//!
//! Environment variables win; prompts only fire when a variable is unset.
//! An empty value from either source is fatal.

use std::env;

use dialoguer::{Input, Password};

use crate::error::TrackerError;

/// Environment variable holding the tracker username.
pub const USER_ENV: &str = "JIRA_USER";
/// Environment variable holding the tracker password.
pub const PASS_ENV: &str = "JIRA_PASS";

/// Plain credentials passed through to the tracker session.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Resolve credentials from the environment, prompting for whatever is absent.
pub fn resolve_credentials() -> Result<Credentials, TrackerError> {
    let username = match env::var(USER_ENV) {
        Ok(user) => user,
        Err(_) => prompt_username()?,
    };
    if username.is_empty() {
        return Err(TrackerError::MissingUsername);
    }

    let password = match env::var(PASS_ENV) {
        Ok(pass) => pass,
        Err(_) => prompt_password()?,
    };
    if password.is_empty() {
        return Err(TrackerError::MissingPassword);
    }

    Ok(Credentials { username, password })
}

fn prompt_username() -> Result<String, TrackerError> {
    Input::new()
        .with_prompt("Enter your tracker username (Enter to abort)")
        .allow_empty(true)
        .interact_text()
        .map_err(TrackerError::PromptFailed)
}

fn prompt_password() -> Result<String, TrackerError> {
    Password::new()
        .with_prompt("Enter your tracker password (sent with basic auth)")
        .allow_empty_password(true)
        .interact()
        .map_err(TrackerError::PromptFailed)
}
