//! Section Resources
//!
//! Agents, contact, about and hero settings plus the per-language FAQ and
//! strategy-card documents. Missing fields take the defaults below.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lists::{AboutFeature, ContactItem, FaqItem, HeroCtaButton, HeroStat, StrategyCard};
use super::text::{lenient, Align, Lang, LocalizedText, StyledText};

// ========================
// Per-language documents
// ========================

/// Document split by content language, as `{ "it": T, "en": T }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerLang<T> {
    #[serde(default)]
    pub it: T,
    #[serde(default)]
    pub en: T,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> PerLang<T> {
    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::It => &self.it,
            Lang::En => &self.en,
        }
    }

    pub fn get_mut(&mut self, lang: Lang) -> &mut T {
        match lang {
            Lang::It => &mut self.it,
            Lang::En => &mut self.en,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqSection {
    pub section_title: String,
    pub subtitle: String,
    pub items: Vec<FaqItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type FaqDocument = PerLang<FaqSection>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrategyCardsSection {
    pub overlay_title: String,
    pub cards: Vec<StrategyCard>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type StrategyCardsDocument = PerLang<StrategyCardsSection>;

// ========================
// Agents
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkButton {
    #[serde(default)]
    pub it: String,
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub link: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentsCta {
    pub title: StyledText,
    pub description: StyledText,
    pub button: LinkButton,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentsSettings {
    pub title: StyledText,
    pub subtitle: StyledText,
    pub cta: AgentsCta,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ========================
// Contact
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub enabled: bool,
    pub name_label: LocalizedText,
    pub email_label: LocalizedText,
    pub message_label: LocalizedText,
    pub submit_button: LocalizedText,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            enabled: true,
            name_label: LocalizedText::new("Nome", "Name"),
            email_label: LocalizedText::new("Email", "Email"),
            message_label: LocalizedText::new("Messaggio", "Message"),
            submit_button: LocalizedText::new("Invia Messaggio", "Send Message"),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactSettings {
    pub title: StyledText,
    pub subtitle: StyledText,
    pub contact_items: Vec<ContactItem>,
    pub contact_form: ContactForm,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ========================
// About
// ========================

/// Border/shadow/glow effect of the about image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEffect {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub color: String,
    /// Border width; absent for shadow and glow
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub width: Option<String>,
    /// Blur radius; absent for the border
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub blur: Option<String>,
}

impl ImageEffect {
    fn border() -> Self {
        Self { enabled: false, color: "#ffffff".into(), width: Some("2".into()), blur: None }
    }

    fn shadow() -> Self {
        Self { enabled: false, color: "#000000".into(), width: None, blur: Some("20".into()) }
    }

    fn glow() -> Self {
        Self { enabled: false, color: "#C8A25E".into(), width: None, blur: Some("20".into()) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutImage {
    pub enabled: bool,
    pub src: String,
    pub alt: String,
    pub position: String,
    #[serde(deserialize_with = "lenient::string")]
    pub width: String,
    #[serde(deserialize_with = "lenient::string")]
    pub opacity: String,
    #[serde(default = "ImageEffect::border")]
    pub border: ImageEffect,
    #[serde(default = "ImageEffect::shadow")]
    pub shadow: ImageEffect,
    #[serde(default = "ImageEffect::glow")]
    pub glow: ImageEffect,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AboutImage {
    fn default() -> Self {
        Self {
            enabled: true,
            src: "images/about-visual.jpg".into(),
            alt: "Trading".into(),
            position: "right".into(),
            width: "100".into(),
            opacity: "100".into(),
            border: ImageEffect::border(),
            shadow: ImageEffect::shadow(),
            glow: ImageEffect::glow(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutCta {
    pub enabled: bool,
    pub text: LocalizedText,
    pub link: String,
    pub align: Align,
    pub open_strategy_overlay: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AboutCta {
    fn default() -> Self {
        Self {
            enabled: true,
            text: LocalizedText::new("Inizia Ora", "Start Now"),
            link: "#contact".into(),
            align: Align::Left,
            open_strategy_overlay: true,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutSettings {
    pub title: StyledText,
    pub description: StyledText,
    pub features: Vec<AboutFeature>,
    pub features_position: String,
    pub image: AboutImage,
    pub cta: AboutCta,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AboutSettings {
    fn default() -> Self {
        Self {
            title: StyledText::default(),
            description: StyledText::default(),
            features: Vec::new(),
            features_position: "bottom".into(),
            image: AboutImage::default(),
            cta: AboutCta::default(),
            extra: Map::new(),
        }
    }
}

// ========================
// Hero
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroStatsSettings {
    #[serde(deserialize_with = "lenient::string")]
    pub number_font_size: String,
    pub number_bold: bool,
    pub number_italic: bool,
    pub number_underline: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub label_font_size: String,
    pub label_bold: bool,
    pub label_italic: bool,
    pub label_underline: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub gap: String,
    pub layout: String,
}

impl Default for HeroStatsSettings {
    fn default() -> Self {
        Self {
            number_font_size: "30".into(),
            number_bold: true,
            number_italic: false,
            number_underline: false,
            label_font_size: "14".into(),
            label_bold: false,
            label_italic: false,
            label_underline: false,
            gap: "24".into(),
            layout: "grid".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroVisual {
    pub enabled: bool,
    pub position: String,
    pub integrate_performance_editor: bool,
}

impl Default for HeroVisual {
    fn default() -> Self {
        Self { enabled: true, position: "right".into(), integrate_performance_editor: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroCtaSettings {
    pub enabled: bool,
    pub align: Align,
    #[serde(deserialize_with = "lenient::string")]
    pub gap: String,
}

impl Default for HeroCtaSettings {
    fn default() -> Self {
        Self { enabled: true, align: Align::Center, gap: "16".into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSettings {
    pub title: StyledText,
    pub subtitle: StyledText,
    pub stats_settings: HeroStatsSettings,
    pub stats: Vec<HeroStat>,
    pub visual: HeroVisual,
    pub cta_settings: HeroCtaSettings,
    pub cta_buttons: Vec<HeroCtaButton>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hero_defaults_fill_missing_blocks() {
        let hero: HeroSettings =
            serde_json::from_value(json!({ "title": { "it": "Ciao", "en": "Hi" } })).unwrap();
        assert_eq!(hero.stats_settings.number_font_size, "30");
        assert!(hero.stats_settings.number_bold);
        assert_eq!(hero.cta_settings.align, Align::Center);
        assert!(hero.visual.integrate_performance_editor);
        assert!(hero.stats.is_empty());
    }

    #[test]
    fn test_about_image_effects_keep_their_shape() {
        let about = AboutSettings::default();
        let value = serde_json::to_value(&about.image).unwrap();
        assert_eq!(value["border"], json!({ "enabled": false, "color": "#ffffff", "width": "2" }));
        assert_eq!(value["glow"], json!({ "enabled": false, "color": "#C8A25E", "blur": "20" }));
    }

    #[test]
    fn test_faq_document_missing_language() {
        let doc: FaqDocument = serde_json::from_value(json!({
            "it": { "sectionTitle": "Domande", "items": [{ "id": 1, "question": "q", "answer": "a" }] }
        }))
        .unwrap();
        assert_eq!(doc.get(Lang::It).items.len(), 1);
        assert!(doc.get(Lang::En).items.is_empty());
    }

    #[test]
    fn test_per_lang_keeps_unknown_keys() {
        let value = json!({
            "it": { "sectionTitle": "Domande", "items": [] },
            "en": { "sectionTitle": "Questions", "items": [] },
            "version": 2
        });
        let doc: FaqDocument = serde_json::from_value(value).unwrap();
        assert_eq!(doc.extra.get("version"), Some(&json!(2)));
        let saved = serde_json::to_value(&doc).unwrap();
        assert_eq!(saved["version"], json!(2));
        assert_eq!(saved["en"]["sectionTitle"], json!("Questions"));
    }

    #[test]
    fn test_link_button_keeps_unknown_keys() {
        let button: LinkButton = serde_json::from_value(json!({
            "it": "Scopri", "en": "Discover", "link": "/agents", "target": "_blank"
        }))
        .unwrap();
        assert_eq!(button.link, "/agents");
        let saved = serde_json::to_value(&button).unwrap();
        assert_eq!(saved["target"], json!("_blank"));
        assert_eq!(saved["it"], json!("Scopri"));
    }
}
