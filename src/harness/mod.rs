//! Headless driver for [`AppState`]: replays scripted actions and reports
//! the resolved view after each one.

use serde::Serialize;

use crate::app::AppState;
use crate::services::auth::{LoginErrors, LoginForm};
use crate::types::ViewReport;

pub use script::*;

mod script;

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct StepOutcome {
    pub line: usize,
    pub action: String,
    pub view: ViewReport,
    /// Set when a `submit-login` step failed validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<LoginErrors>,
}

pub fn run_step(state: &mut AppState, step: &Step) -> Option<LoginErrors> {
    match step {
        Step::Dispatch(action) => {
            state.dispatch(action.clone());
            None
        }
        Step::SessionLogout => {
            state.logout();
            None
        }
        Step::SubmitLogin { email, password } => {
            let mut form = LoginForm::new(email.as_str(), password.as_str());
            state.submit_login(&mut form).err()
        }
        Step::View => None,
    }
}

pub fn run_script(state: &mut AppState, script: &[ScriptLine]) -> Vec<StepOutcome> {
    script
        .iter()
        .map(|line| {
            let errors = run_step(state, &line.step);
            if let Some(errors) = &errors {
                tracing::debug!(line = line.line, %errors, "login form rejected");
            }
            StepOutcome {
                line: line.line,
                action: line.source.clone(),
                view: state.report(),
                errors,
            }
        })
        .collect()
}

/// One-line text rendering used by the `replay` command.
pub fn describe(outcome: &StepOutcome) -> String {
    let view = &outcome.view;
    let mut out = format!("{:>3}  {:<32} -> {}", outcome.line, outcome.action, view.page);

    if let Some(substitution) = view.substitution {
        out.push_str(&format!(" (requested {}, {})", view.requested, substitution));
    }
    out.push_str(if view.authenticated {
        " [signed in]"
    } else {
        " [anonymous]"
    });
    if let Some(errors) = &outcome.errors {
        out.push_str(&format!(" errors: {}", errors));
    }
    out
}
