use serde::{Deserialize, Serialize};

use crate::contacts::ImportConfig;
use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Weight overrides; defaults apply when absent
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
    #[serde(default)]
    pub import: Option<ImportConfig>,
}

impl Config {
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn effective_import(&self) -> ImportConfig {
        self.import.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.effective_scoring(), ScoringConfig::default());
        assert_eq!(config.effective_import().default_country_code, "1");
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
scoring:
  origin:
    invite: 28
  network:
    per_shared_connection: 1.5
import:
  default_country_code: "44"
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let scoring = config.effective_scoring();
        assert_eq!(scoring.origin.invite, 28.0);
        assert_eq!(scoring.origin.wizard, 20.0);
        assert_eq!(scoring.network.per_shared_connection, 1.5);
        assert_eq!(config.effective_import().default_country_code, "44");
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("queries: []\n");
        assert!(result.is_err());
    }
}
