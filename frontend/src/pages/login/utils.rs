use crate::api::RegisterRequest;
use leptos::*;

/// Which form the login page is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    Register,
}

#[derive(Clone, Copy)]
pub struct AuthFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub email: RwSignal<String>,
    pub full_name: RwSignal<String>,
    pub department: RwSignal<String>,
}

impl Default for AuthFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            full_name: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
        }
    }
}

impl AuthFormState {
    pub fn clear_password(&self) {
        self.password.set(String::new());
    }

    pub fn to_register_request(&self) -> Result<RegisterRequest, String> {
        let username = self.username.get_untracked().trim().to_string();
        let email = self.email.get_untracked().trim().to_string();
        let full_name = self.full_name.get_untracked().trim().to_string();
        let password = self.password.get_untracked();
        validate_registration(&username, &email, &password, &full_name)?;
        Ok(RegisterRequest {
            username,
            email,
            password,
            full_name,
            department: optional_string(&self.department.get_untracked()),
        })
    }
}

pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Please enter your username".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}

pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Please enter a username".into());
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Err("Please enter a valid email address".into());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".into());
    }
    if full_name.trim().is_empty() {
        return Err("Please enter your full name".into());
    }
    Ok(())
}

pub fn optional_string(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
