//! Site-wide Resources
//!
//! General settings, translation tables, theme colours and debug flags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::text::lenient;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    pub telegram: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub linkedin: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Features {
    pub default_language: String,
    pub default_theme: String,
    pub auto_detect_language: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            default_language: "it".into(),
            default_theme: "dark".into(),
            auto_detect_language: true,
            extra: Map::new(),
        }
    }
}

/// Headline performance figures. Values are kept as JSON so numbers stay numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceStats(pub Map<String, Value>);

impl PerformanceStats {
    pub const KEYS: [&'static str; 7] = [
        "weeklyProfit",
        "monthlyProfit",
        "yearlyProfit",
        "totalSubscribers",
        "totalProfit",
        "totalTrades",
        "successRate",
    ];

    pub fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Stores numeric input as a JSON number, anything else as a string.
    pub fn set_text(&mut self, key: &str, input: &str) {
        let trimmed = input.trim();
        let value = match serde_json::from_str::<serde_json::Number>(trimmed) {
            Ok(n) => Value::Number(n),
            Err(_) => Value::String(input.to_string()),
        };
        self.0.insert(key.to_string(), value);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub site: SiteInfo,
    pub social: SocialLinks,
    pub performance: PerformanceStats,
    pub features: Features,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Flat `key -> text` table for one language
pub type Translations = BTreeMap<String, String>;

/// `theme -> (css variable -> colour)`
pub type ThemeColors = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugLevels {
    pub info: bool,
    pub warning: bool,
    pub error: bool,
    pub debug: bool,
}

impl Default for DebugLevels {
    fn default() -> Self {
        Self { info: true, warning: true, error: true, debug: false }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebugConfig {
    pub enabled: bool,
    pub console_output: bool,
    pub visual_indicators: bool,
    pub levels: DebugLevels,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DebugConfig {
    /// Most verbose level the console should show
    pub fn max_level(&self) -> log::LevelFilter {
        if !self.enabled || !self.console_output {
            return log::LevelFilter::Warn;
        }
        let levels = self.levels;
        if levels.debug {
            log::LevelFilter::Debug
        } else if levels.info {
            log::LevelFilter::Info
        } else if levels.warning {
            log::LevelFilter::Warn
        } else if levels.error {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_performance_numbers_stay_numbers() {
        let mut stats: PerformanceStats =
            serde_json::from_value(json!({ "weeklyProfit": 2.5, "successRate": "87%" })).unwrap();
        assert_eq!(stats.text("weeklyProfit"), "2.5");
        stats.set_text("weeklyProfit", "3.1");
        stats.set_text("successRate", "90%");
        assert_eq!(serde_json::to_value(&stats).unwrap(), json!({ "weeklyProfit": 3.1, "successRate": "90%" }));
    }

    #[test]
    fn test_debug_level_follows_flags() {
        let mut debug = DebugConfig::default();
        assert_eq!(debug.max_level(), log::LevelFilter::Warn);
        debug.enabled = true;
        debug.console_output = true;
        assert_eq!(debug.max_level(), log::LevelFilter::Info);
        debug.levels.debug = true;
        assert_eq!(debug.max_level(), log::LevelFilter::Debug);
    }
}
