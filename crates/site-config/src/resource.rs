//! Config Resources
//!
//! Every JSON document the config API serves, and where it lives.

use std::fmt;

use crate::model::Lang;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    Settings,
    Translations(Lang),
    Strategies,
    ThemeColors,
    Debug,
    AgentsBenefits,
    AgentsSettings,
    ContactSettings,
    AboutSettings,
    HeroSettings,
    Faqs,
    PerformanceCharts,
    StrategyCards,
}

impl Resource {
    /// Load order of the admin bootstrap
    pub const ALL: [Resource; 14] = [
        Resource::Settings,
        Resource::Translations(Lang::It),
        Resource::Translations(Lang::En),
        Resource::Strategies,
        Resource::ThemeColors,
        Resource::Debug,
        Resource::AgentsBenefits,
        Resource::AgentsSettings,
        Resource::ContactSettings,
        Resource::AboutSettings,
        Resource::HeroSettings,
        Resource::Faqs,
        Resource::PerformanceCharts,
        Resource::StrategyCards,
    ];

    /// Resources written by "save all", in request order
    pub const SAVE_ALL: [Resource; 10] = [
        Resource::Settings,
        Resource::Translations(Lang::It),
        Resource::Translations(Lang::En),
        Resource::ThemeColors,
        Resource::Strategies,
        Resource::Debug,
        Resource::AgentsBenefits,
        Resource::Faqs,
        Resource::PerformanceCharts,
        Resource::StrategyCards,
    ];

    /// Resources with their own save button
    pub const SECTIONS: [Resource; 4] = [
        Resource::AgentsSettings,
        Resource::ContactSettings,
        Resource::AboutSettings,
        Resource::HeroSettings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Resource::Settings => "settings",
            Resource::Translations(Lang::It) => "translations/it",
            Resource::Translations(Lang::En) => "translations/en",
            Resource::Strategies => "strategies",
            Resource::ThemeColors => "theme-colors",
            Resource::Debug => "debug",
            Resource::AgentsBenefits => "agents-benefits",
            Resource::AgentsSettings => "agents-settings",
            Resource::ContactSettings => "contact-settings",
            Resource::AboutSettings => "about-settings",
            Resource::HeroSettings => "hero-settings",
            Resource::Faqs => "faqs",
            Resource::PerformanceCharts => "performance-charts",
            Resource::StrategyCards => "strategy-cards",
        }
    }

    /// Path relative to the API base, e.g. `/api/config/faqs`
    pub fn path(self) -> String {
        format!("/api/config/{}", self.name())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Resource::Translations(Lang::En).path(), "/api/config/translations/en");
        assert_eq!(Resource::PerformanceCharts.path(), "/api/config/performance-charts");
    }

    #[test]
    fn test_save_all_excludes_section_resources() {
        for section in Resource::SECTIONS {
            assert!(!Resource::SAVE_ALL.contains(&section));
            assert!(Resource::ALL.contains(&section));
        }
    }
}
