use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("invalid page id: {0}")]
pub struct ParsePageIdError(pub String);

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown action {verb:?}")]
    UnknownAction { line: usize, verb: String },

    #[error("line {line}: {verb} expects {expected}")]
    MissingArgument {
        line: usize,
        verb: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: unexpected argument {arg:?}")]
    UnexpectedArgument { line: usize, arg: String },
}
