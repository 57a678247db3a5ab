use {
    serde::{Deserialize, Serialize},
    std::time::Duration,
};

/// Injected by `inject` when no characters are given
pub const DEFAULT_INJECTION: &str = "__";

/// Injected by `select-autocomplete` when there is nothing to complete
pub const FALLBACK_INDENT: &str = "\u{a0}\u{a0}";

/// User facing settings of an [`EditorCore`](crate::EditorCore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Repeat the indentation of the active line on newline
    pub autoindent: bool,

    /// Delay between selecting a URL and handing it to the opener
    pub open_url_delay_ms: u64,

    /// Characters injected by `inject` without an argument
    pub default_injection: String,

    /// Characters injected by `select-autocomplete` without a completion
    pub fallback_indent: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfig {
            autoindent: true,
            open_url_delay_ms: 500,
            default_injection: DEFAULT_INJECTION.to_string(),
            fallback_indent: FALLBACK_INDENT.to_string(),
        }
    }
}

impl CoreConfig {
    pub fn open_url_delay(&self) -> Duration {
        Duration::from_millis(self.open_url_delay_ms)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_take_defaults() {
        let config: CoreConfig = serde_json::from_str(r#"{ "autoindent": false }"#).unwrap();

        assert_eq!(
            config,
            CoreConfig {
                autoindent: false,
                ..CoreConfig::default()
            }
        );
        assert_eq!(config.open_url_delay(), Duration::from_millis(500));
    }

    #[test]
    fn config_roundtrips() {
        let config = CoreConfig {
            open_url_delay_ms: 50,
            default_injection: "**".into(),
            ..CoreConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<CoreConfig>(&json).unwrap(), config);
    }
}
