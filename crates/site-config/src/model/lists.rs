//! List Entities
//!
//! Records living in the editable arrays of the config resources.
//! Each carries an id unique within its array.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::text::{StyleBlock, StyledText};

pub(crate) fn enabled_default() -> bool {
    true
}

/// Card in the agents benefits grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitCard {
    pub id: u32,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub title: StyledText,
    #[serde(default)]
    pub description: StyledText,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Question/answer pair, stored per language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// How a contact item's link is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    #[default]
    Email,
    Phone,
    Url,
}

impl LinkType {
    pub const ALL: [LinkType; 3] = [LinkType::Email, LinkType::Phone, LinkType::Url];

    pub fn as_str(self) -> &'static str {
        match self {
            LinkType::Email => "email",
            LinkType::Phone => "phone",
            LinkType::Url => "url",
        }
    }

    /// Example link shown in the empty link input
    pub fn placeholder(self) -> &'static str {
        match self {
            LinkType::Email => "mailto:info@example.com",
            LinkType::Phone => "tel:+390123456789",
            LinkType::Url => "https://t.me/username",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactItem {
    pub id: u32,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub title: StyledText,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub link_type: LinkType,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutFeature {
    pub id: u32,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub text: StyledText,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroStat {
    pub id: u32,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "super::text::lenient::string")]
    pub number: String,
    #[serde(default)]
    pub label: StyledText,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaStyle {
    #[default]
    Primary,
    Secondary,
}

impl CtaStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            CtaStyle::Primary => "primary",
            CtaStyle::Secondary => "secondary",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "primary" => Some(CtaStyle::Primary),
            "secondary" => Some(CtaStyle::Secondary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaSize {
    Normal,
    #[default]
    Large,
}

impl CtaSize {
    pub fn as_str(self) -> &'static str {
        match self {
            CtaSize::Normal => "normal",
            CtaSize::Large => "large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(CtaSize::Normal),
            "large" => Some(CtaSize::Large),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroCtaButton {
    pub id: u32,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub text: StyledText,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub style: CtaStyle,
    #[serde(default)]
    pub size: CtaSize,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Downloadable document attached to a strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyAttachment {
    pub id: u32,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub title: StyledText,
    #[serde(default)]
    pub description: StyledText,
    #[serde(default = "StrategyAttachment::default_description_style")]
    pub description_style: StyleBlock,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StrategyAttachment {
    pub fn default_description_style() -> StyleBlock {
        StyleBlock {
            font_size: Some("14px".to_string()),
            ..Default::default()
        }
    }
}

/// Card of the strategy overlay. Ids are strings of the form `card-<millis>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyCard {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub button_text: String,
    #[serde(default)]
    pub button_link: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
