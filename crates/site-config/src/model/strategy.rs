//! Strategies
//!
//! One strategy per risk tier, each with its own attachments list.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lists::StrategyAttachment;
use super::text::{lenient, Align, StyleBlock, StyledText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown risk tier '{}'", s))
    }
}

fn default_title_style() -> StyleBlock {
    StyleBlock {
        font_size: Some("36px".into()),
        align: Some(Align::Center),
        margin_bottom: Some("20px".into()),
        ..Default::default()
    }
}

/// Header and file list shown under a strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrategyAttachments {
    pub enabled: bool,
    pub title: StyledText,
    pub title_style: StyleBlock,
    pub files: Vec<StrategyAttachment>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for StrategyAttachments {
    fn default() -> Self {
        Self {
            enabled: true,
            title: StyledText::new("Documenti e Allegati", "Documents and Attachments"),
            title_style: StyleBlock {
                font_size: Some("24px".into()),
                bold: true,
                align: Some(Align::Left),
                margin_bottom: Some("15px".into()),
                ..Default::default()
            },
            files: Vec::new(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    #[serde(default)]
    pub name: StyledText,
    #[serde(default)]
    pub tagline: StyledText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_label: Option<StyledText>,
    #[serde(rename = "return", default, deserialize_with = "lenient::string")]
    pub expected_return: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub drawdown: String,
    #[serde(default)]
    pub description: StyledText,
    #[serde(default = "default_title_style")]
    pub title_style: StyleBlock,
    #[serde(default)]
    pub attachments: StrategyAttachments,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Strategy {
    fn default() -> Self {
        Self {
            name: StyledText::default(),
            tagline: StyledText::default(),
            risk_label: None,
            expected_return: String::new(),
            drawdown: String::new(),
            description: StyledText::default(),
            title_style: default_title_style(),
            attachments: StrategyAttachments::default(),
            extra: Map::new(),
        }
    }
}

pub type Strategies = BTreeMap<RiskTier, Strategy>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strategies_keyed_by_tier() {
        let strategies: Strategies = serde_json::from_value(json!({
            "low": { "name": { "it": "Prudente", "en": "Conservative" }, "return": "+12%", "drawdown": "5%" },
            "high": { "name": { "it": "Aggressiva", "en": "Aggressive" } }
        }))
        .unwrap();
        assert_eq!(strategies[&RiskTier::Low].expected_return, "+12%");
        assert!(!strategies.contains_key(&RiskTier::Medium));
        assert_eq!(strategies[&RiskTier::High].title_style.font_size.as_deref(), Some("36px"));
        assert_eq!(strategies[&RiskTier::High].attachments.title_style.align, Some(Align::Left));
    }
}
