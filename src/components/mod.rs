//! UI Components
//!
//! Shared widgets, the form and list bindings, and one editor per section.

mod admin_header;
mod delete_confirm_button;
mod notification_area;
mod sidebar;
mod tab_bar;

pub mod form_binding;
pub mod list_binding;
pub mod section_save;

mod about_section;
mod agents_section;
mod charts_section;
mod contact_section;
mod debug_section;
mod faq_section;
mod general_section;
mod hero_section;
mod strategies_section;
mod strategy_cards_section;
mod theme_section;
mod translations_section;

pub use admin_header::AdminHeader;
pub use delete_confirm_button::DeleteConfirmButton;
pub use notification_area::NotificationArea;
pub use sidebar::Sidebar;
pub use tab_bar::TabBar;

pub use about_section::AboutSection;
pub use agents_section::AgentsSection;
pub use charts_section::ChartsSection;
pub use contact_section::ContactSection;
pub use debug_section::DebugSection;
pub use faq_section::FaqSection;
pub use general_section::GeneralSection;
pub use hero_section::HeroSection;
pub use strategies_section::StrategiesSection;
pub use strategy_cards_section::StrategyCardsSection;
pub use theme_section::ThemeSection;
pub use translations_section::TranslationsSection;
