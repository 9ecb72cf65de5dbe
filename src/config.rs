//! Admin Configuration
//!
//! Runtime settings of the admin panel, read once from the hosting page.

use site_config::model::{Lang, RiskTier};

/// `<meta name="admin-api-base" content="https://...">` overrides the API origin
const API_BASE_META: &str = "meta[name=\"admin-api-base\"]";

#[derive(Debug, Clone, PartialEq)]
pub struct AdminConfig {
    /// Origin the config API is served from
    pub api_base: String,
    /// How long a notification stays on screen
    pub notification_ms: u32,
    pub default_lang: Lang,
    pub default_tier: RiskTier,
    pub default_theme: &'static str,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            notification_ms: 3000,
            default_lang: Lang::It,
            default_tier: RiskTier::Low,
            default_theme: "dark",
        }
    }
}

impl AdminConfig {
    pub fn from_document() -> Self {
        let api_base = meta_api_base().or_else(window_origin).unwrap_or_default();
        Self { api_base, ..Self::default() }
    }
}

fn meta_api_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(API_BASE_META).ok()??;
    meta.get_attribute("content").filter(|base| !base.trim().is_empty())
}

fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
