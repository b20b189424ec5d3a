//! Engine run configuration.
//!
//! Read through a `ConfigPort` from an `[engine]` section with `seed`,
//! `history_days` and `horizons` keys. Every key is optional; missing keys
//! fall back to defaults, present keys are validated before any analysis
//! runs.

use crate::domain::error::StockcastError;
use crate::domain::forecast::Horizon;
use crate::domain::synthetic::DEFAULT_HISTORY_DAYS;
use crate::ports::config_port::ConfigPort;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// RNG seed. `None` means the caller picks one at run time.
    pub seed: Option<u64>,
    /// Points to synthesize when a request has no history.
    pub history_days: usize,
    pub horizons: Vec<Horizon>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_days: DEFAULT_HISTORY_DAYS,
            horizons: Horizon::defaults(),
        }
    }
}

impl EngineConfig {
    pub fn from_port(config: &dyn ConfigPort) -> Result<Self, StockcastError> {
        let seed = match config.get_string("engine", "seed") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                StockcastError::ConfigInvalid {
                    section: "engine".to_string(),
                    key: "seed".to_string(),
                    reason: "seed must be a non-negative integer".to_string(),
                }
            })?),
            None => None,
        };

        let history_days = config.get_int("engine", "history_days", DEFAULT_HISTORY_DAYS as i64);
        if history_days < 1 {
            return Err(StockcastError::ConfigInvalid {
                section: "engine".to_string(),
                key: "history_days".to_string(),
                reason: "history_days must be at least 1".to_string(),
            });
        }

        let horizons = match config.get_string("engine", "horizons") {
            Some(raw) => {
                parse_horizons(&raw).map_err(|e| StockcastError::ConfigInvalid {
                    section: "engine".to_string(),
                    key: "horizons".to_string(),
                    reason: e.to_string(),
                })?
            }
            None => Horizon::defaults(),
        };

        Ok(Self {
            seed,
            history_days: history_days as usize,
            horizons,
        })
    }
}

/// Horizon list parse failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HorizonParseError {
    #[error("empty entry in horizon list")]
    EmptyEntry,

    #[error("bad horizon entry '{token}', expected days:confidence")]
    BadEntry { token: String },

    #[error("bad day count in '{token}', expected an integer of at least 1")]
    BadDays { token: String },

    #[error("bad confidence in '{token}', expected a number in (0, 1]")]
    BadConfidence { token: String },

    #[error("duplicate horizon: {days} days")]
    Duplicate { days: u32 },
}

/// Parse a comma-separated horizon list such as "1:0.8, 7:0.6, 30:0.4".
/// Rejects zero-day entries, out-of-range confidences and duplicates.
pub fn parse_horizons(input: &str) -> Result<Vec<Horizon>, HorizonParseError> {
    let mut horizons = Vec::new();
    let mut seen_days = std::collections::HashSet::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(HorizonParseError::EmptyEntry);
        }

        let (days_str, confidence_str) =
            token
                .split_once(':')
                .ok_or_else(|| HorizonParseError::BadEntry {
                    token: token.to_string(),
                })?;

        let days: u32 = days_str
            .trim()
            .parse()
            .map_err(|_| HorizonParseError::BadDays {
                token: token.to_string(),
            })?;
        if days == 0 {
            return Err(HorizonParseError::BadDays {
                token: token.to_string(),
            });
        }

        let confidence: f64 =
            confidence_str
                .trim()
                .parse()
                .map_err(|_| HorizonParseError::BadConfidence {
                    token: token.to_string(),
                })?;
        if !(confidence > 0.0 && confidence <= 1.0) {
            return Err(HorizonParseError::BadConfidence {
                token: token.to_string(),
            });
        }

        if !seen_days.insert(days) {
            return Err(HorizonParseError::Duplicate { days });
        }

        horizons.push(Horizon::new(days, confidence));
    }

    Ok(horizons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn make_config(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    #[test]
    fn parse_horizons_standard_list() {
        let horizons = parse_horizons("1:0.8, 7:0.6, 30:0.4").unwrap();
        assert_eq!(horizons, Horizon::defaults());
    }

    #[test]
    fn parse_horizons_tolerates_whitespace() {
        let horizons = parse_horizons("  1 : 0.8 ,7:0.6").unwrap();
        assert_eq!(horizons.len(), 2);
        assert_eq!(horizons[0], Horizon::new(1, 0.8));
    }

    #[test]
    fn parse_horizons_single_entry() {
        let horizons = parse_horizons("14:0.5").unwrap();
        assert_eq!(horizons, vec![Horizon::new(14, 0.5)]);
    }

    #[test]
    fn parse_horizons_empty_entry_fails() {
        assert_eq!(parse_horizons("1:0.8,,7:0.6"), Err(HorizonParseError::EmptyEntry));
        assert_eq!(parse_horizons(""), Err(HorizonParseError::EmptyEntry));
    }

    #[test]
    fn parse_horizons_missing_colon_fails() {
        assert!(matches!(
            parse_horizons("7"),
            Err(HorizonParseError::BadEntry { .. })
        ));
    }

    #[test]
    fn parse_horizons_zero_days_fails() {
        assert!(matches!(
            parse_horizons("0:0.5"),
            Err(HorizonParseError::BadDays { .. })
        ));
    }

    #[test]
    fn parse_horizons_non_numeric_days_fails() {
        assert!(matches!(
            parse_horizons("week:0.5"),
            Err(HorizonParseError::BadDays { .. })
        ));
    }

    #[test]
    fn parse_horizons_confidence_range() {
        assert!(matches!(
            parse_horizons("7:0"),
            Err(HorizonParseError::BadConfidence { .. })
        ));
        assert!(matches!(
            parse_horizons("7:1.5"),
            Err(HorizonParseError::BadConfidence { .. })
        ));
        assert!(parse_horizons("7:1").is_ok());
    }

    #[test]
    fn parse_horizons_duplicate_days_fails() {
        assert_eq!(
            parse_horizons("7:0.6, 7:0.4"),
            Err(HorizonParseError::Duplicate { days: 7 })
        );
    }

    #[test]
    fn default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.history_days, DEFAULT_HISTORY_DAYS);
        assert_eq!(config.horizons, Horizon::defaults());
    }

    #[test]
    fn from_port_full_section() {
        let config = make_config(
            "[engine]\nseed = 42\nhistory_days = 80\nhorizons = 1:0.9, 14:0.5\n",
        );
        let engine = EngineConfig::from_port(&config).unwrap();
        assert_eq!(engine.seed, Some(42));
        assert_eq!(engine.history_days, 80);
        assert_eq!(
            engine.horizons,
            vec![Horizon::new(1, 0.9), Horizon::new(14, 0.5)]
        );
    }

    #[test]
    fn from_port_missing_keys_use_defaults() {
        let config = make_config("[engine]\nseed = 7\n");
        let engine = EngineConfig::from_port(&config).unwrap();
        assert_eq!(engine.seed, Some(7));
        assert_eq!(engine.history_days, DEFAULT_HISTORY_DAYS);
        assert_eq!(engine.horizons, Horizon::defaults());
    }

    #[test]
    fn from_port_empty_file_is_all_defaults() {
        let config = make_config("");
        let engine = EngineConfig::from_port(&config).unwrap();
        assert_eq!(engine, EngineConfig::default());
    }

    #[test]
    fn from_port_bad_seed_fails() {
        let config = make_config("[engine]\nseed = abc\n");
        let err = EngineConfig::from_port(&config).unwrap_err();
        assert!(matches!(err, StockcastError::ConfigInvalid { key, .. } if key == "seed"));
    }

    #[test]
    fn from_port_negative_seed_fails() {
        let config = make_config("[engine]\nseed = -3\n");
        let err = EngineConfig::from_port(&config).unwrap_err();
        assert!(matches!(err, StockcastError::ConfigInvalid { key, .. } if key == "seed"));
    }

    #[test]
    fn from_port_history_days_below_one_fails() {
        let config = make_config("[engine]\nhistory_days = 0\n");
        let err = EngineConfig::from_port(&config).unwrap_err();
        assert!(matches!(err, StockcastError::ConfigInvalid { key, .. } if key == "history_days"));
    }

    #[test]
    fn from_port_bad_horizons_fails() {
        let config = make_config("[engine]\nhorizons = 1:0.8, 0:0.4\n");
        let err = EngineConfig::from_port(&config).unwrap_err();
        assert!(matches!(err, StockcastError::ConfigInvalid { key, .. } if key == "horizons"));
    }
}
