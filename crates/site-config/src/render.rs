//! Section Renderers
//!
//! Each form paints one config sub-object into [`FormFields`] and harvests
//! it back. Painting is a pure projection: painting the same model twice
//! yields the same controls. Harvest only writes fields whose control
//! exists, so a section that does not expose e.g. `lineHeight` never
//! clears it.
//!
//! Alignment defaults, one per field: hero title, subtitle and CTA group
//! `center`; strategy title `center`; about title, description and CTA
//! `left`; attachments title `left`.

use crate::binder::{Control, FormFields};
use crate::model::{
    AboutImage, AboutSettings, AgentsSettings, Align, ContactSettings, HeroSettings, ImageEffect, Strategy,
    StyleBlock, StyledText,
};

/// Paint/harvest pair for one sub-schema
pub trait SectionForm {
    type Model;

    fn paint(&self, model: &Self::Model, form: &mut FormFields);

    fn harvest(&self, form: &FormFields, model: &mut Self::Model);
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn put_text(form: &mut FormFields, name: String, value: &str) {
    form.declare(name, Control::Text(value.to_string()));
}

fn take_text(form: &FormFields, name: &str, target: &mut String) {
    if form.contains(name) {
        *target = form.get_field(name);
    }
}

fn put_check(form: &mut FormFields, name: String, value: bool) {
    form.declare(name, Control::Check(value));
}

fn take_check(form: &FormFields, name: &str, target: &mut bool) {
    if form.contains(name) {
        *target = form.checked(name);
    }
}

fn put_toggle(form: &mut FormFields, name: String, value: bool) {
    form.declare(name, Control::Toggle(value));
}

fn take_toggle(form: &FormFields, name: &str, target: &mut bool) {
    if form.contains(name) {
        *target = form.style_flag(name);
    }
}

// ========================
// Styled text blocks
// ========================

/// Which style controls a text block exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextControls {
    pub rich_text: bool,
    pub font_size: bool,
    /// Bold, italic and underline buttons
    pub styles: bool,
    pub align: bool,
    pub line_height: bool,
    pub margin_bottom: bool,
    pub margin_top: bool,
}

impl TextControls {
    pub const PLAIN: Self = Self {
        rich_text: false,
        font_size: false,
        styles: false,
        align: false,
        line_height: false,
        margin_bottom: false,
        margin_top: false,
    };

    pub const STYLED: Self = Self { font_size: true, styles: true, ..Self::PLAIN };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBlockForm {
    /// Control names are `<prefix>-it`, `<prefix>-font-size`, ...
    pub prefix: &'static str,
    pub controls: TextControls,
    pub default_align: Align,
    /// Values shown when the model has none; empty means no default
    pub default_line_height: &'static str,
    pub default_margin_bottom: &'static str,
    pub default_margin_top: &'static str,
}

impl TextBlockForm {
    pub const fn new(prefix: &'static str, controls: TextControls) -> Self {
        Self {
            prefix,
            controls,
            default_align: Align::Left,
            default_line_height: "",
            default_margin_bottom: "",
            default_margin_top: "",
        }
    }

    pub fn name(&self, suffix: &str) -> String {
        format!("{}-{}", self.prefix, suffix)
    }
}

impl SectionForm for TextBlockForm {
    type Model = StyledText;

    fn paint(&self, text: &StyledText, form: &mut FormFields) {
        let c = self.controls;
        for (suffix, value) in [("it", &text.it), ("en", &text.en)] {
            let control = if c.rich_text {
                Control::RichText(value.clone())
            } else {
                Control::Text(value.clone())
            };
            form.declare(self.name(suffix), control);
        }
        if c.font_size {
            put_text(form, self.name("font-size"), text.font_size.as_deref().unwrap_or_default());
        }
        if c.styles {
            put_toggle(form, self.name("bold"), text.bold.unwrap_or(false));
            put_toggle(form, self.name("italic"), text.italic.unwrap_or(false));
            put_toggle(form, self.name("underline"), text.underline.unwrap_or(false));
        }
        if c.align {
            form.declare(self.name("align"), Control::Choice(Some(text.align.unwrap_or(self.default_align))));
        }
        if c.line_height {
            put_text(form, self.name("line-height"), text.line_height.as_deref().unwrap_or(self.default_line_height));
        }
        if c.margin_bottom {
            let value = text.margin_bottom.as_deref().unwrap_or(self.default_margin_bottom);
            put_text(form, self.name("margin-bottom"), value);
        }
        if c.margin_top {
            put_text(form, self.name("margin-top"), text.margin_top.as_deref().unwrap_or(self.default_margin_top));
        }
    }

    fn harvest(&self, form: &FormFields, text: &mut StyledText) {
        take_text(form, &self.name("it"), &mut text.it);
        take_text(form, &self.name("en"), &mut text.en);

        let optional_text = |suffix: &str, target: &mut Option<String>| {
            let name = self.name(suffix);
            if form.contains(&name) {
                *target = non_empty(form.get_field(&name));
            }
        };
        optional_text("font-size", &mut text.font_size);
        optional_text("line-height", &mut text.line_height);
        optional_text("margin-bottom", &mut text.margin_bottom);
        optional_text("margin-top", &mut text.margin_top);

        let optional_flag = |suffix: &str, target: &mut Option<bool>| {
            let name = self.name(suffix);
            if form.contains(&name) {
                *target = Some(form.style_flag(&name));
            }
        };
        optional_flag("bold", &mut text.bold);
        optional_flag("italic", &mut text.italic);
        optional_flag("underline", &mut text.underline);

        let align = self.name("align");
        if form.contains(&align) {
            text.align = Some(form.alignment(&align, self.default_align));
        }
    }
}

// ========================
// Style-only blocks
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBlockForm {
    pub prefix: &'static str,
    pub default_align: Align,
    /// Unit stripped from `marginBottom` for editing and re-appended on harvest
    pub margin_unit: Option<&'static str>,
}

impl StyleBlockForm {
    pub fn name(&self, suffix: &str) -> String {
        format!("{}-{}", self.prefix, suffix)
    }
}

impl SectionForm for StyleBlockForm {
    type Model = StyleBlock;

    fn paint(&self, style: &StyleBlock, form: &mut FormFields) {
        put_text(form, self.name("font-size"), style.font_size.as_deref().unwrap_or_default());
        put_toggle(form, self.name("bold"), style.bold);
        put_toggle(form, self.name("italic"), style.italic);
        put_toggle(form, self.name("underline"), style.underline);
        form.declare(self.name("align"), Control::Choice(Some(style.align.unwrap_or(self.default_align))));
        let margin = style.margin_bottom.as_deref().unwrap_or_default();
        let margin = match self.margin_unit {
            Some(unit) => margin.strip_suffix(unit).unwrap_or(margin),
            None => margin,
        };
        put_text(form, self.name("margin-bottom"), margin);
    }

    fn harvest(&self, form: &FormFields, style: &mut StyleBlock) {
        let font_size = self.name("font-size");
        if form.contains(&font_size) {
            style.font_size = non_empty(form.get_field(&font_size));
        }
        take_toggle(form, &self.name("bold"), &mut style.bold);
        take_toggle(form, &self.name("italic"), &mut style.italic);
        take_toggle(form, &self.name("underline"), &mut style.underline);
        let align = self.name("align");
        if form.contains(&align) {
            style.align = Some(form.alignment(&align, self.default_align));
        }
        let margin = self.name("margin-bottom");
        if form.contains(&margin) {
            style.margin_bottom = non_empty(form.get_field(&margin)).map(|m| match self.margin_unit {
                Some(unit) if !m.ends_with(unit) => format!("{}{}", m, unit),
                _ => m,
            });
        }
    }
}

// ========================
// Block catalogue
// ========================

pub const HERO_TITLE: TextBlockForm = TextBlockForm {
    controls: TextControls { align: true, line_height: true, margin_bottom: true, ..TextControls::STYLED },
    default_align: Align::Center,
    default_line_height: "110",
    default_margin_bottom: "20",
    ..TextBlockForm::new("hero-title", TextControls::STYLED)
};

pub const HERO_SUBTITLE: TextBlockForm = TextBlockForm {
    controls: TextControls { align: true, line_height: true, margin_top: true, ..TextControls::STYLED },
    default_align: Align::Center,
    default_line_height: "140",
    default_margin_top: "10",
    ..TextBlockForm::new("hero-subtitle", TextControls::STYLED)
};

pub const ABOUT_TITLE: TextBlockForm = TextBlockForm {
    controls: TextControls { align: true, margin_bottom: true, ..TextControls::STYLED },
    default_margin_bottom: "20",
    ..TextBlockForm::new("about-title", TextControls::STYLED)
};

pub const ABOUT_DESCRIPTION: TextBlockForm = TextBlockForm {
    controls: TextControls { align: true, line_height: true, ..TextControls::STYLED },
    default_line_height: "1.6",
    ..TextBlockForm::new("about-desc", TextControls::STYLED)
};

pub const AGENTS_TITLE: TextBlockForm = TextBlockForm::new("agents-title", TextControls::STYLED);
pub const AGENTS_SUBTITLE: TextBlockForm = TextBlockForm::new("agents-subtitle", TextControls::STYLED);
pub const AGENTS_CTA_TITLE: TextBlockForm = TextBlockForm::new("agents-cta-title", TextControls::STYLED);
pub const AGENTS_CTA_DESCRIPTION: TextBlockForm = TextBlockForm::new("agents-cta-desc", TextControls::STYLED);

pub const CONTACT_TITLE: TextBlockForm = TextBlockForm::new("contact-title", TextControls::STYLED);
pub const CONTACT_SUBTITLE: TextBlockForm = TextBlockForm::new("contact-subtitle", TextControls::STYLED);

pub const STRATEGY_NAME: TextBlockForm = TextBlockForm::new("strategy-name", TextControls::PLAIN);
pub const STRATEGY_TAGLINE: TextBlockForm = TextBlockForm::new("strategy-tagline", TextControls::PLAIN);
pub const STRATEGY_RISK_LABEL: TextBlockForm = TextBlockForm::new("strategy-risk-label", TextControls::PLAIN);
pub const STRATEGY_DESCRIPTION: TextBlockForm =
    TextBlockForm::new("strategy-description", TextControls { rich_text: true, ..TextControls::PLAIN });
pub const ATTACHMENTS_TITLE: TextBlockForm = TextBlockForm::new("attachments-title", TextControls::PLAIN);

pub const STRATEGY_TITLE_STYLE: StyleBlockForm =
    StyleBlockForm { prefix: "strategy-title", default_align: Align::Center, margin_unit: None };

pub const ATTACHMENTS_TITLE_STYLE: StyleBlockForm =
    StyleBlockForm { prefix: "attachments-style", default_align: Align::Left, margin_unit: Some("px") };

// ========================
// Whole-section forms
// ========================

/// Agents general settings tab
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentsForm;

impl SectionForm for AgentsForm {
    type Model = AgentsSettings;

    fn paint(&self, s: &AgentsSettings, form: &mut FormFields) {
        AGENTS_TITLE.paint(&s.title, form);
        AGENTS_SUBTITLE.paint(&s.subtitle, form);
        AGENTS_CTA_TITLE.paint(&s.cta.title, form);
        AGENTS_CTA_DESCRIPTION.paint(&s.cta.description, form);
        put_text(form, "agents-cta-btn-it".into(), &s.cta.button.it);
        put_text(form, "agents-cta-btn-en".into(), &s.cta.button.en);
        put_text(form, "agents-cta-btn-link".into(), &s.cta.button.link);
    }

    fn harvest(&self, form: &FormFields, s: &mut AgentsSettings) {
        AGENTS_TITLE.harvest(form, &mut s.title);
        AGENTS_SUBTITLE.harvest(form, &mut s.subtitle);
        AGENTS_CTA_TITLE.harvest(form, &mut s.cta.title);
        AGENTS_CTA_DESCRIPTION.harvest(form, &mut s.cta.description);
        take_text(form, "agents-cta-btn-it", &mut s.cta.button.it);
        take_text(form, "agents-cta-btn-en", &mut s.cta.button.en);
        take_text(form, "agents-cta-btn-link", &mut s.cta.button.link);
    }
}

/// Contact header and form labels; the item list has its own editor
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactSectionForm;

const CONTACT_LABELS: [&str; 4] = ["name", "email", "message", "submit"];

impl SectionForm for ContactSectionForm {
    type Model = ContactSettings;

    fn paint(&self, s: &ContactSettings, form: &mut FormFields) {
        CONTACT_TITLE.paint(&s.title, form);
        CONTACT_SUBTITLE.paint(&s.subtitle, form);
        let f = &s.contact_form;
        put_check(form, "contact-form-enabled".into(), f.enabled);
        for (label, text) in CONTACT_LABELS.iter().zip([&f.name_label, &f.email_label, &f.message_label, &f.submit_button]) {
            put_text(form, format!("contact-form-{}-it", label), &text.it);
            put_text(form, format!("contact-form-{}-en", label), &text.en);
        }
    }

    fn harvest(&self, form: &FormFields, s: &mut ContactSettings) {
        CONTACT_TITLE.harvest(form, &mut s.title);
        CONTACT_SUBTITLE.harvest(form, &mut s.subtitle);
        let f = &mut s.contact_form;
        take_check(form, "contact-form-enabled", &mut f.enabled);
        let texts = [&mut f.name_label, &mut f.email_label, &mut f.message_label, &mut f.submit_button];
        for (label, text) in CONTACT_LABELS.iter().zip(texts) {
            take_text(form, &format!("contact-form-{}-it", label), &mut text.it);
            take_text(form, &format!("contact-form-{}-en", label), &mut text.en);
        }
    }
}

fn paint_effect(form: &mut FormFields, name: &str, effect: &ImageEffect) {
    put_check(form, format!("about-image-{}-enabled", name), effect.enabled);
    put_text(form, format!("about-image-{}-color", name), &effect.color);
    if let Some(width) = &effect.width {
        put_text(form, format!("about-image-{}-width", name), width);
    }
    if let Some(blur) = &effect.blur {
        put_text(form, format!("about-image-{}-blur", name), blur);
    }
}

fn harvest_effect(form: &FormFields, name: &str, effect: &mut ImageEffect) {
    take_check(form, &format!("about-image-{}-enabled", name), &mut effect.enabled);
    take_text(form, &format!("about-image-{}-color", name), &mut effect.color);
    for (suffix, target) in [("width", &mut effect.width), ("blur", &mut effect.blur)] {
        let control = format!("about-image-{}-{}", name, suffix);
        if form.contains(&control) {
            *target = Some(form.get_field(&control));
        }
    }
}

fn paint_image(form: &mut FormFields, image: &AboutImage) {
    put_check(form, "about-image-enabled".into(), image.enabled);
    put_text(form, "about-image-src".into(), &image.src);
    put_text(form, "about-image-alt".into(), &image.alt);
    put_text(form, "about-image-position".into(), &image.position);
    put_text(form, "about-image-width".into(), &image.width);
    put_text(form, "about-image-opacity".into(), &image.opacity);
    paint_effect(form, "border", &image.border);
    paint_effect(form, "shadow", &image.shadow);
    paint_effect(form, "glow", &image.glow);
}

fn harvest_image(form: &FormFields, image: &mut AboutImage) {
    take_check(form, "about-image-enabled", &mut image.enabled);
    take_text(form, "about-image-src", &mut image.src);
    take_text(form, "about-image-alt", &mut image.alt);
    take_text(form, "about-image-position", &mut image.position);
    take_text(form, "about-image-width", &mut image.width);
    take_text(form, "about-image-opacity", &mut image.opacity);
    harvest_effect(form, "border", &mut image.border);
    harvest_effect(form, "shadow", &mut image.shadow);
    harvest_effect(form, "glow", &mut image.glow);
}

/// About section minus the features list
#[derive(Debug, Clone, Copy, Default)]
pub struct AboutForm;

impl SectionForm for AboutForm {
    type Model = AboutSettings;

    fn paint(&self, s: &AboutSettings, form: &mut FormFields) {
        ABOUT_TITLE.paint(&s.title, form);
        ABOUT_DESCRIPTION.paint(&s.description, form);
        put_text(form, "about-features-position".into(), &s.features_position);
        paint_image(form, &s.image);
        put_check(form, "about-cta-enabled".into(), s.cta.enabled);
        put_text(form, "about-cta-text-it".into(), &s.cta.text.it);
        put_text(form, "about-cta-text-en".into(), &s.cta.text.en);
        put_text(form, "about-cta-link".into(), &s.cta.link);
        form.declare("about-cta-align", Control::Choice(Some(s.cta.align)));
        put_check(form, "about-cta-overlay".into(), s.cta.open_strategy_overlay);
    }

    fn harvest(&self, form: &FormFields, s: &mut AboutSettings) {
        ABOUT_TITLE.harvest(form, &mut s.title);
        ABOUT_DESCRIPTION.harvest(form, &mut s.description);
        take_text(form, "about-features-position", &mut s.features_position);
        harvest_image(form, &mut s.image);
        take_check(form, "about-cta-enabled", &mut s.cta.enabled);
        take_text(form, "about-cta-text-it", &mut s.cta.text.it);
        take_text(form, "about-cta-text-en", &mut s.cta.text.en);
        take_text(form, "about-cta-link", &mut s.cta.link);
        s.cta.align = form.alignment("about-cta-align", s.cta.align);
        take_check(form, "about-cta-overlay", &mut s.cta.open_strategy_overlay);
    }
}

/// Hero section minus the stats and CTA button lists
#[derive(Debug, Clone, Copy, Default)]
pub struct HeroForm;

impl SectionForm for HeroForm {
    type Model = HeroSettings;

    fn paint(&self, s: &HeroSettings, form: &mut FormFields) {
        HERO_TITLE.paint(&s.title, form);
        HERO_SUBTITLE.paint(&s.subtitle, form);

        let st = &s.stats_settings;
        put_text(form, "hero-stats-number-size".into(), &st.number_font_size);
        put_toggle(form, "hero-stats-number-bold".into(), st.number_bold);
        put_toggle(form, "hero-stats-number-italic".into(), st.number_italic);
        put_toggle(form, "hero-stats-number-underline".into(), st.number_underline);
        put_text(form, "hero-stats-label-size".into(), &st.label_font_size);
        put_toggle(form, "hero-stats-label-bold".into(), st.label_bold);
        put_toggle(form, "hero-stats-label-italic".into(), st.label_italic);
        put_toggle(form, "hero-stats-label-underline".into(), st.label_underline);
        put_text(form, "hero-stats-gap".into(), &st.gap);
        put_text(form, "hero-stats-layout".into(), &st.layout);

        put_check(form, "hero-visual-enabled".into(), s.visual.enabled);
        put_text(form, "hero-visual-position".into(), &s.visual.position);
        put_check(form, "hero-visual-integrate-editor".into(), s.visual.integrate_performance_editor);

        put_check(form, "hero-cta-enabled".into(), s.cta_settings.enabled);
        form.declare("hero-cta-align", Control::Choice(Some(s.cta_settings.align)));
        put_text(form, "hero-cta-gap".into(), &s.cta_settings.gap);
    }

    fn harvest(&self, form: &FormFields, s: &mut HeroSettings) {
        HERO_TITLE.harvest(form, &mut s.title);
        HERO_SUBTITLE.harvest(form, &mut s.subtitle);

        let st = &mut s.stats_settings;
        take_text(form, "hero-stats-number-size", &mut st.number_font_size);
        take_toggle(form, "hero-stats-number-bold", &mut st.number_bold);
        take_toggle(form, "hero-stats-number-italic", &mut st.number_italic);
        take_toggle(form, "hero-stats-number-underline", &mut st.number_underline);
        take_text(form, "hero-stats-label-size", &mut st.label_font_size);
        take_toggle(form, "hero-stats-label-bold", &mut st.label_bold);
        take_toggle(form, "hero-stats-label-italic", &mut st.label_italic);
        take_toggle(form, "hero-stats-label-underline", &mut st.label_underline);
        take_text(form, "hero-stats-gap", &mut st.gap);
        take_text(form, "hero-stats-layout", &mut st.layout);

        take_check(form, "hero-visual-enabled", &mut s.visual.enabled);
        take_text(form, "hero-visual-position", &mut s.visual.position);
        take_check(form, "hero-visual-integrate-editor", &mut s.visual.integrate_performance_editor);

        take_check(form, "hero-cta-enabled", &mut s.cta_settings.enabled);
        s.cta_settings.align = form.alignment("hero-cta-align", Align::Center);
        take_text(form, "hero-cta-gap", &mut s.cta_settings.gap);
    }
}

/// One strategy: texts, title style and the attachments header
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyForm;

impl SectionForm for StrategyForm {
    type Model = Strategy;

    fn paint(&self, s: &Strategy, form: &mut FormFields) {
        STRATEGY_NAME.paint(&s.name, form);
        STRATEGY_TITLE_STYLE.paint(&s.title_style, form);
        STRATEGY_TAGLINE.paint(&s.tagline, form);
        STRATEGY_RISK_LABEL.paint(s.risk_label.as_ref().unwrap_or(&StyledText::default()), form);
        put_text(form, "strategy-return".into(), &s.expected_return);
        put_text(form, "strategy-drawdown".into(), &s.drawdown);
        STRATEGY_DESCRIPTION.paint(&s.description, form);

        put_check(form, "attachments-enabled".into(), s.attachments.enabled);
        ATTACHMENTS_TITLE.paint(&s.attachments.title, form);
        ATTACHMENTS_TITLE_STYLE.paint(&s.attachments.title_style, form);
    }

    fn harvest(&self, form: &FormFields, s: &mut Strategy) {
        STRATEGY_NAME.harvest(form, &mut s.name);
        STRATEGY_TITLE_STYLE.harvest(form, &mut s.title_style);
        STRATEGY_TAGLINE.harvest(form, &mut s.tagline);
        if form.contains(&STRATEGY_RISK_LABEL.name("it")) {
            STRATEGY_RISK_LABEL.harvest(form, s.risk_label.get_or_insert_with(StyledText::default));
        }
        take_text(form, "strategy-return", &mut s.expected_return);
        take_text(form, "strategy-drawdown", &mut s.drawdown);
        STRATEGY_DESCRIPTION.harvest(form, &mut s.description);

        take_check(form, "attachments-enabled", &mut s.attachments.enabled);
        ATTACHMENTS_TITLE.harvest(form, &mut s.attachments.title);
        ATTACHMENTS_TITLE_STYLE.harvest(form, &mut s.attachments.title_style);
    }
}

/// Paint `model` with `section` into a fresh form
pub fn painted<F: SectionForm>(section: &F, model: &F::Model) -> FormFields {
    let mut form = FormFields::new();
    section.paint(model, &mut form);
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paint_is_idempotent() {
        let hero: HeroSettings = serde_json::from_value(json!({
            "title": { "it": "Ciao", "en": "Hello", "fontSize": "48", "bold": true }
        }))
        .unwrap();
        let mut once = FormFields::new();
        HeroForm.paint(&hero, &mut once);
        let mut twice = once.clone();
        HeroForm.paint(&hero, &mut twice);
        assert_eq!(once, twice);
        assert_eq!(once.get_field("hero-title-line-height"), "110");
        assert_eq!(once.alignment("hero-title-align", Align::Left), Align::Center);
    }

    #[test]
    fn test_harvest_keeps_fields_without_controls() {
        let mut text = StyledText::new("a", "b");
        text.line_height = Some("1.2".into());
        text.margin_top = Some("4".into());
        let mut form = painted(&AGENTS_TITLE, &text);
        form.set_field("agents-title-it", "nuovo");
        form.set_style_flag("agents-title-bold", true);
        AGENTS_TITLE.harvest(&form, &mut text);

        assert_eq!(text.it, "nuovo");
        assert_eq!(text.bold, Some(true));
        assert_eq!(text.line_height.as_deref(), Some("1.2"));
        assert_eq!(text.margin_top.as_deref(), Some("4"));
        assert_eq!(text.align, None);
    }

    #[test]
    fn test_alignment_defaults_per_field() {
        let empty = StyledText::default();
        assert_eq!(painted(&HERO_SUBTITLE, &empty).alignment("hero-subtitle-align", Align::Right), Align::Center);
        assert_eq!(painted(&ABOUT_TITLE, &empty).alignment("about-title-align", Align::Right), Align::Left);

        let mut strategy = Strategy::default();
        strategy.attachments.title_style.align = None;
        strategy.title_style.align = None;
        let mut form = painted(&StrategyForm, &strategy);
        StrategyForm.harvest(&form, &mut strategy);
        assert_eq!(strategy.title_style.align, Some(Align::Center));
        assert_eq!(strategy.attachments.title_style.align, Some(Align::Left));

        form.set_alignment("attachments-style-align", None);
        StrategyForm.harvest(&form, &mut strategy);
        assert_eq!(strategy.attachments.title_style.align, Some(Align::Left));
    }

    #[test]
    fn test_attachment_margin_unit() {
        let strategy = Strategy::default();
        let mut form = painted(&StrategyForm, &strategy);
        assert_eq!(form.get_field("attachments-style-margin-bottom"), "15");
        form.set_field("attachments-style-margin-bottom", "30");
        let mut edited = strategy.clone();
        StrategyForm.harvest(&form, &mut edited);
        assert_eq!(edited.attachments.title_style.margin_bottom.as_deref(), Some("30px"));
    }

    #[test]
    fn test_strategy_description_is_rich_text() {
        let mut strategy = Strategy::default();
        strategy.description = StyledText::new("<p>Uno</p>", "<p>One</p>");
        let form = painted(&StrategyForm, &strategy);
        assert_eq!(form.control("strategy-description-it"), Some(&Control::RichText("<p>Uno</p>".into())));
    }

    #[test]
    fn test_paint_then_harvest_is_stable() {
        let about: AboutSettings = serde_json::from_value(json!({
            "title": { "it": "Chi siamo", "en": "About", "fontSize": "40", "bold": true, "italic": false,
                       "underline": false, "align": "center", "marginBottom": "24" },
            "description": { "it": "x", "en": "y", "fontSize": "16", "bold": false, "italic": false,
                             "underline": false, "align": "left", "lineHeight": "1.8" },
            "cta": { "align": "right" }
        }))
        .unwrap();
        let form = painted(&AboutForm, &about);
        let mut harvested = about.clone();
        AboutForm.harvest(&form, &mut harvested);
        assert_eq!(harvested, about);
    }
}
