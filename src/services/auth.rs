use serde::{Deserialize, Serialize};

use crate::types::{AuthRequest, LoginRequest, RegisterRequest};

use super::is_space;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const PASSWORD_ERROR: &str = "Password must be at least 6 characters";

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let is_clean =
        |part: &str| !part.is_empty() && !part.chars().any(|c| is_space(c) || c == '@');
    if !is_clean(local) || !is_clean(domain) {
        return false;
    }

    // Needs a dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

/// Length in UTF-16 code units, the way browsers measure input values.
pub fn is_valid_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LENGTH
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

/// Field-level messages. Each field is checked independently.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl std::fmt::Display for LoginErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = [self.email.as_deref(), self.password.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Local state of the sign-in / create-account form.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct LoginForm {
    mode: AuthMode,
    name: String,
    email: String,
    password: String,
    errors: LoginErrors,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn errors(&self) -> &LoginErrors {
        &self.errors
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Editing a field clears that field's error only.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.errors.email = None;
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.errors.password = None;
    }

    pub fn validate(&self) -> Result<AuthRequest, LoginErrors> {
        let errors = LoginErrors {
            email: (!is_valid_email(&self.email)).then(|| EMAIL_ERROR.to_string()),
            password: (!is_valid_password(&self.password)).then(|| PASSWORD_ERROR.to_string()),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(match self.mode {
            AuthMode::SignIn => AuthRequest::SignIn(LoginRequest {
                email: self.email.clone(),
                password: self.password.clone(),
            }),
            AuthMode::SignUp => AuthRequest::SignUp(RegisterRequest {
                email: self.email.clone(),
                password: self.password.clone(),
                username: Some(self.name.trim())
                    .filter(|n| !n.is_empty())
                    .map(str::to_string),
            }),
        })
    }

    /// Validates and records the outcome on the form. Previous errors are
    /// always replaced.
    pub fn submit(&mut self) -> Result<AuthRequest, LoginErrors> {
        let result = self.validate();
        self.errors = match &result {
            Ok(_) => LoginErrors::default(),
            Err(errors) => errors.clone(),
        };
        result
    }
}
