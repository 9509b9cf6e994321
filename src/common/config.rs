use crate::app::GatePolicy;
use crate::models::PageId;

use super::ConfigError;

pub const GATE_POLICY_VAR: &str = "INKPRESS_GATE_POLICY";
pub const START_PAGE_VAR: &str = "INKPRESS_START_PAGE";
pub const DARK_MODE_VAR: &str = "INKPRESS_DARK_MODE";

/// Settings for a fresh [`crate::app::AppState`].
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct AppConfig {
    pub gate_policy: GatePolicy,
    pub start_page: PageId,
    pub dark_mode: bool,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first if a
    /// `.env` file should be honored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = non_empty(lookup(GATE_POLICY_VAR)) {
            config.gate_policy = value
                .parse()
                .map_err(|reason| ConfigError::InvalidValue {
                    key: GATE_POLICY_VAR,
                    value: value.clone(),
                    reason,
                })?;
        }

        if let Some(value) = non_empty(lookup(START_PAGE_VAR)) {
            config.start_page = PageId::parse_lossy(&value);
        }

        if let Some(value) = non_empty(lookup(DARK_MODE_VAR)) {
            config.dark_mode = parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                key: DARK_MODE_VAR,
                value: value.clone(),
                reason: "expected true or false".to_string(),
            })?;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.gate_policy, GatePolicy::Continuous);
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            (GATE_POLICY_VAR, "on-transition"),
            (START_PAGE_VAR, "blog"),
            (DARK_MODE_VAR, "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.gate_policy, GatePolicy::OnTransition);
        assert_eq!(config.start_page, PageId::Blog);
        assert!(config.dark_mode);
    }

    #[test]
    fn unknown_start_page_is_home() {
        let config = AppConfig::from_lookup(lookup(&[(START_PAGE_VAR, "nowhere")])).unwrap();
        assert_eq!(config.start_page, PageId::Home);
    }

    #[test]
    fn rejects_bad_policy_and_flag() {
        let err = AppConfig::from_lookup(lookup(&[(GATE_POLICY_VAR, "sometimes")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: GATE_POLICY_VAR, .. }));

        let err = AppConfig::from_lookup(lookup(&[(DARK_MODE_VAR, "dim")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: DARK_MODE_VAR, .. }));
    }
}
