use crate::app::Action;
use crate::common::ScriptError;
use crate::models::PageId;
use crate::router::TransitionParams;

/// One line of an action script.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Step {
    Dispatch(Action),
    /// Clears the session without the return-home navigation that
    /// [`Action::Logout`] performs.
    SessionLogout,
    SubmitLogin { email: String, password: String },
    View,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub source: String,
    pub step: Step,
}

/// Parses a whole script. Blank lines and `#` comments are skipped; line
/// numbers are 1-based.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let source = raw.trim();
        if source.is_empty() || source.starts_with('#') {
            continue;
        }
        let line = idx + 1;
        lines.push(ScriptLine {
            line,
            source: source.to_string(),
            step: parse_step(line, source)?,
        });
    }
    Ok(lines)
}

pub fn parse_step(line: usize, source: &str) -> Result<Step, ScriptError> {
    let mut words = source.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(ScriptError::MissingArgument {
            line,
            verb: "script line",
            expected: "an action",
        });
    };
    let args: Vec<&str> = words.collect();

    let step = match verb.to_lowercase().as_str() {
        "navigate" | "go" => {
            let Some((page, rest)) = args.split_first() else {
                return Err(ScriptError::MissingArgument {
                    line,
                    verb: "navigate",
                    expected: "a page id",
                });
            };
            Step::Dispatch(Action::Navigate {
                page: PageId::parse_lossy(page),
                params: parse_params(line, rest)?,
            })
        }
        "open" => {
            let id = single_arg(line, "open", "a post id", &args)?;
            Step::Dispatch(Action::OpenPost(id.to_string()))
        }
        "search" => {
            // The query keeps its inner spacing as typed.
            let query = source[verb.len()..].trim_start();
            Step::Dispatch(Action::Search(query.to_string()))
        }
        "login" => {
            no_args(line, &args)?;
            Step::Dispatch(Action::Login)
        }
        "logout" => {
            no_args(line, &args)?;
            Step::Dispatch(Action::Logout)
        }
        "session-logout" => {
            no_args(line, &args)?;
            Step::SessionLogout
        }
        "submit-login" => match args.as_slice() {
            [email, password] => Step::SubmitLogin {
                email: email.to_string(),
                password: password.to_string(),
            },
            [_, _, extra, ..] => {
                return Err(ScriptError::UnexpectedArgument {
                    line,
                    arg: extra.to_string(),
                });
            }
            _ => {
                return Err(ScriptError::MissingArgument {
                    line,
                    verb: "submit-login",
                    expected: "an email and a password",
                });
            }
        },
        "social-login" => {
            let provider = single_arg(line, "social-login", "a provider name", &args)?;
            Step::Dispatch(Action::SocialLogin(provider.to_string()))
        }
        "theme" => {
            no_args(line, &args)?;
            Step::Dispatch(Action::ToggleTheme)
        }
        "view" => {
            no_args(line, &args)?;
            Step::View
        }
        _ => {
            return Err(ScriptError::UnknownAction {
                line,
                verb: verb.to_string(),
            });
        }
    };

    Ok(step)
}

fn parse_params(line: usize, args: &[&str]) -> Result<TransitionParams, ScriptError> {
    let mut params = TransitionParams::default();
    for arg in args {
        match arg.split_once('=') {
            Some(("post", id)) => params.selected_post_id = Some(id.to_string()),
            Some(("query", query)) => params.search_query = Some(query.to_string()),
            _ => {
                return Err(ScriptError::UnexpectedArgument {
                    line,
                    arg: arg.to_string(),
                });
            }
        }
    }
    Ok(params)
}

fn single_arg<'a>(
    line: usize,
    verb: &'static str,
    expected: &'static str,
    args: &[&'a str],
) -> Result<&'a str, ScriptError> {
    match args {
        [one] => Ok(*one),
        [] => Err(ScriptError::MissingArgument {
            line,
            verb,
            expected,
        }),
        [_, extra, ..] => Err(ScriptError::UnexpectedArgument {
            line,
            arg: extra.to_string(),
        }),
    }
}

fn no_args(line: usize, args: &[&str]) -> Result<(), ScriptError> {
    match args.first() {
        None => Ok(()),
        Some(extra) => Err(ScriptError::UnexpectedArgument {
            line,
            arg: extra.to_string(),
        }),
    }
}
