//! Bilingual Text
//!
//! The `{it, en}` pair and its style attributes, shared by every section.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Content language of a localized field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    It,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::It, Lang::En];

    pub fn as_str(self) -> &'static str {
        match self {
            Lang::It => "it",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "it" => Ok(Lang::It),
            "en" => Ok(Lang::En),
            other => Err(format!("unknown language '{}'", other)),
        }
    }
}

/// Horizontal alignment of a text block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub const ALL: [Align; 3] = [Align::Left, Align::Center, Align::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            other => Err(format!("unknown alignment '{}'", other)),
        }
    }
}

/// Plain `{it, en}` pair without style attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default, deserialize_with = "lenient::string")]
    pub it: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub en: String,
}

impl LocalizedText {
    pub fn new(it: impl Into<String>, en: impl Into<String>) -> Self {
        Self { it: it.into(), en: en.into() }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::It => &self.it,
            Lang::En => &self.en,
        }
    }

    pub fn get_mut(&mut self, lang: Lang) -> &mut String {
        match lang {
            Lang::It => &mut self.it,
            Lang::En => &mut self.en,
        }
    }
}

/// Bilingual text with optional presentation attributes.
///
/// `it` and `en` are always serialized, even when the payload omitted them.
/// Unknown keys survive a load/save round trip through `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledText {
    #[serde(default, deserialize_with = "lenient::string")]
    pub it: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub line_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub margin_bottom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub margin_top: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StyledText {
    pub fn new(it: impl Into<String>, en: impl Into<String>) -> Self {
        Self { it: it.into(), en: en.into(), ..Default::default() }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::It => &self.it,
            Lang::En => &self.en,
        }
    }

    pub fn get_mut(&mut self, lang: Lang) -> &mut String {
        match lang {
            Lang::It => &mut self.it,
            Lang::En => &mut self.en,
        }
    }

    /// Builder used by section defaults
    pub fn with_style(mut self, font_size: &str, bold: bool) -> Self {
        self.font_size = Some(font_size.to_string());
        self.bold = Some(bold);
        self.italic = Some(false);
        self.underline = Some(false);
        self
    }

    pub fn aligned(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }
}

/// Style-only block: strategy title style, attachment header and description styles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleBlock {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub font_size: Option<String>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub margin_bottom: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Deserializers accepting numbers where the editor stores strings.
///
/// Hand-edited config files often carry `"fontSize": 36` instead of `"36"`.
pub(crate) mod lenient {
    use super::*;

    fn coerce(value: Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
        Ok(coerce(Value::deserialize(de)?).unwrap_or_default())
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
        Ok(coerce(Value::deserialize(de)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_languages_default_to_empty() {
        let text: StyledText = serde_json::from_value(json!({ "it": "Ciao" })).unwrap();
        assert_eq!(text.en, "");
        let out = serde_json::to_value(&text).unwrap();
        assert_eq!(out, json!({ "it": "Ciao", "en": "" }));
    }

    #[test]
    fn test_numeric_font_size_is_accepted() {
        let text: StyledText =
            serde_json::from_value(json!({ "it": "a", "en": "b", "fontSize": 36 })).unwrap();
        assert_eq!(text.font_size.as_deref(), Some("36"));
    }

    #[test]
    fn test_unknown_keys_survive() {
        let input = json!({ "it": "a", "en": "b", "color": "#fff", "align": "right" });
        let text: StyledText = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(text.align, Some(Align::Right));
        assert_eq!(serde_json::to_value(&text).unwrap(), input);
    }
}
