//! Configuration for the scoring engine and dashboard session.

mod scoring_config;
mod session_config;

pub use scoring_config::ScoringConfig;
pub use session_config::SessionConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration, deserialized from `pulse.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PulseConfig {
    pub scoring: ScoringConfig,
    pub session: SessionConfig,
}

impl PulseConfig {
    /// Parse from TOML text. Unknown keys are ignored; missing sections
    /// fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = PulseConfig::from_toml_str("").unwrap();
        assert_eq!(config.session.effective_poll_interval_secs(), 10);
        assert_eq!(config.scoring.effective_confidence_factor(), 0.92);
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config = PulseConfig::from_toml_str(
            r#"
            [session]
            poll_interval_secs = 30

            [scoring]
            confidence_factor = 0.85
            "#,
        )
        .unwrap();
        assert_eq!(config.session.effective_poll_interval_secs(), 30);
        assert_eq!(config.scoring.effective_confidence_factor(), 0.85);
        assert_eq!(config.session.effective_delta_threshold_pct(), 10.0);
    }
}
