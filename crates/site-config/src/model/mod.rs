//! Config Model
//!
//! Typed records for every resource served by the config API.
//! Decoding a payload into these types is the validation boundary.

mod charts;
pub mod icons;
mod lists;
mod sections;
mod settings;
mod strategy;
mod text;

pub use charts::{ChartSettings, DataPoint, PerformanceChart, PerformanceCharts, DATA_POINT_STEP};
pub use lists::{
    AboutFeature, BenefitCard, ContactItem, CtaSize, CtaStyle, FaqItem, HeroCtaButton, HeroStat, LinkType,
    StrategyAttachment, StrategyCard,
};
pub use sections::{
    AboutCta, AboutImage, AboutSettings, AgentsCta, AgentsSettings, ContactForm, ContactSettings, FaqDocument,
    FaqSection, HeroCtaSettings, HeroSettings, HeroStatsSettings, HeroVisual, ImageEffect, LinkButton, PerLang,
    StrategyCardsDocument, StrategyCardsSection,
};
pub use settings::{
    DebugConfig, DebugLevels, Features, PerformanceStats, Settings, SiteInfo, SocialLinks, ThemeColors,
    Translations,
};
pub use strategy::{RiskTier, Strategies, Strategy, StrategyAttachments};
pub use text::{Align, Lang, LocalizedText, StyleBlock, StyledText};
