//! Per-entity list behaviour: caps, id allocation, add defaults and the
//! typed field selectors that replace free-form dotted paths.

use std::str::FromStr;

use chrono::Utc;

use super::{next_numeric_id, parse_lang, split_path, FieldValue, ListEntry};
use crate::error::{EditError, EditResult};
use crate::model::{
    AboutFeature, BenefitCard, ContactItem, CtaSize, CtaStyle, FaqItem, HeroCtaButton, HeroStat, Lang, LinkType,
    StrategyAttachment, StrategyCard, StyledText,
};

fn invalid(field: impl std::fmt::Debug, value: &str) -> EditError {
    EditError::InvalidValue { field: format!("{:?}", field), value: value.to_string() }
}

// ========================
// Benefit cards
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenefitField {
    Icon,
    Title(Lang),
    Description(Lang),
    Enabled,
}

impl FromStr for BenefitField {
    type Err = ();

    fn from_str(path: &str) -> Result<Self, ()> {
        match split_path(path)? {
            ("icon", None) => Ok(BenefitField::Icon),
            ("enabled", None) => Ok(BenefitField::Enabled),
            ("title", lang) => Ok(BenefitField::Title(parse_lang(lang)?)),
            ("description", lang) => Ok(BenefitField::Description(parse_lang(lang)?)),
            _ => Err(()),
        }
    }
}

impl ListEntry for BenefitCard {
    type Id = u32;
    type Field = BenefitField;

    const KIND: &'static str = "benefit card";
    const PLURAL: &'static str = "benefit cards";
    const LABEL_IT: &'static str = "vantaggi";
    const CAP: Option<usize> = Some(6);

    fn id(&self) -> &u32 {
        &self.id
    }

    fn next_id(existing: &[Self]) -> Option<u32> {
        next_numeric_id(existing, |b| b.id)
    }

    fn new_entry(id: u32, _existing: &[Self]) -> Self {
        BenefitCard {
            id,
            icon: "fas fa-star".into(),
            title: StyledText::new("Nuovo Benefit", "New Benefit"),
            description: StyledText::new("Descrizione del benefit", "Benefit description"),
            enabled: true,
            extra: Default::default(),
        }
    }

    fn enabled_mut(&mut self) -> Option<&mut bool> {
        Some(&mut self.enabled)
    }

    fn read(&self, field: BenefitField) -> FieldValue {
        match field {
            BenefitField::Icon => self.icon.clone().into(),
            BenefitField::Title(lang) => self.title.get(lang).into(),
            BenefitField::Description(lang) => self.description.get(lang).into(),
            BenefitField::Enabled => self.enabled.into(),
        }
    }

    fn write(&mut self, field: BenefitField, value: FieldValue) -> EditResult<()> {
        match field {
            BenefitField::Icon => self.icon = value.into_text(field)?,
            BenefitField::Title(lang) => *self.title.get_mut(lang) = value.into_text(field)?,
            BenefitField::Description(lang) => *self.description.get_mut(lang) = value.into_text(field)?,
            BenefitField::Enabled => self.enabled = value.into_flag(field)?,
        }
        Ok(())
    }
}

// ========================
// FAQ items
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqField {
    Question,
    Answer,
}

impl FromStr for FaqField {
    type Err = ();

    fn from_str(path: &str) -> Result<Self, ()> {
        match split_path(path)? {
            ("question", None) => Ok(FaqField::Question),
            ("answer", None) => Ok(FaqField::Answer),
            _ => Err(()),
        }
    }
}

impl ListEntry for FaqItem {
    type Id = u32;
    type Field = FaqField;

    const KIND: &'static str = "FAQ item";
    const PLURAL: &'static str = "FAQ items";
    const LABEL_IT: &'static str = "FAQ";
    const CAP: Option<usize> = Some(10);

    fn id(&self) -> &u32 {
        &self.id
    }

    fn next_id(existing: &[Self]) -> Option<u32> {
        next_numeric_id(existing, |f| f.id)
    }

    fn new_entry(id: u32, _existing: &[Self]) -> Self {
        FaqItem {
            id,
            question: "Nuova Domanda".into(),
            answer: "Risposta...".into(),
            extra: Default::default(),
        }
    }

    fn read(&self, field: FaqField) -> FieldValue {
        match field {
            FaqField::Question => self.question.clone().into(),
            FaqField::Answer => self.answer.clone().into(),
        }
    }

    fn write(&mut self, field: FaqField, value: FieldValue) -> EditResult<()> {
        match field {
            FaqField::Question => self.question = value.into_text(field)?,
            FaqField::Answer => self.answer = value.into_text(field)?,
        }
        Ok(())
    }
}

// ========================
// Contact items
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Icon,
    Title(Lang),
    Content,
    Link,
    LinkType,
    Enabled,
}

impl FromStr for ContactField {
    type Err = ();

    fn from_str(path: &str) -> Result<Self, ()> {
        match split_path(path)? {
            ("icon", None) => Ok(ContactField::Icon),
            ("title", lang) => Ok(ContactField::Title(parse_lang(lang)?)),
            ("content", None) => Ok(ContactField::Content),
            ("link", None) => Ok(ContactField::Link),
            ("linkType", None) => Ok(ContactField::LinkType),
            ("enabled", None) => Ok(ContactField::Enabled),
            _ => Err(()),
        }
    }
}

impl ListEntry for ContactItem {
    type Id = u32;
    type Field = ContactField;

    const KIND: &'static str = "contact item";
    const PLURAL: &'static str = "contact items";
    const LABEL_IT: &'static str = "contatti";
    const CAP: Option<usize> = None;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn next_id(existing: &[Self]) -> Option<u32> {
        next_numeric_id(existing, |c| c.id)
    }

    fn new_entry(id: u32, _existing: &[Self]) -> Self {
        ContactItem {
            id,
            enabled: true,
            icon: "envelope".into(),
            title: StyledText::new("Nuovo Contatto", "New Contact"),
            content: String::new(),
            link: String::new(),
            link_type: LinkType::Email,
            extra: Default::default(),
        }
    }

    fn enabled_mut(&mut self) -> Option<&mut bool> {
        Some(&mut self.enabled)
    }

    fn read(&self, field: ContactField) -> FieldValue {
        match field {
            ContactField::Icon => self.icon.clone().into(),
            ContactField::Title(lang) => self.title.get(lang).into(),
            ContactField::Content => self.content.clone().into(),
            ContactField::Link => self.link.clone().into(),
            ContactField::LinkType => self.link_type.as_str().into(),
            ContactField::Enabled => self.enabled.into(),
        }
    }

    fn write(&mut self, field: ContactField, value: FieldValue) -> EditResult<()> {
        match field {
            ContactField::Icon => self.icon = value.into_text(field)?,
            ContactField::Title(lang) => *self.title.get_mut(lang) = value.into_text(field)?,
            ContactField::Content => self.content = value.into_text(field)?,
            ContactField::Link => self.link = value.into_text(field)?,
            ContactField::LinkType => {
                let text = value.into_text(field)?;
                self.link_type = LinkType::parse(&text).ok_or_else(|| invalid(field, &text))?;
            }
            ContactField::Enabled => self.enabled = value.into_flag(field)?,
        }
        Ok(())
    }
}

// ========================
// About features
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureField {
    Icon,
    Text(Lang),
    Enabled,
}

impl FromStr for FeatureField {
    type Err = ();

    fn from_str(path: &str) -> Result<Self, ()> {
        match split_path(path)? {
            ("icon", None) => Ok(FeatureField::Icon),
            ("text", lang) => Ok(FeatureField::Text(parse_lang(lang)?)),
            ("enabled", None) => Ok(FeatureField::Enabled),
            _ => Err(()),
        }
    }
}

impl ListEntry for AboutFeature {
    type Id = u32;
    type Field = FeatureField;

    const KIND: &'static str = "feature";
    const PLURAL: &'static str = "features";
    const LABEL_IT: &'static str = "caratteristiche";
    const CAP: Option<usize> = None;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn next_id(existing: &[Self]) -> Option<u32> {
        next_numeric_id(existing, |f| f.id)
    }

    fn new_entry(id: u32, _existing: &[Self]) -> Self {
        AboutFeature {
            id,
            enabled: true,
            icon: "check-circle".into(),
            text: StyledText::new("Nuova caratteristica", "New feature"),
            extra: Default::default(),
        }
    }

    fn enabled_mut(&mut self) -> Option<&mut bool> {
        Some(&mut self.enabled)
    }

    fn read(&self, field: FeatureField) -> FieldValue {
        match field {
            FeatureField::Icon => self.icon.clone().into(),
            FeatureField::Text(lang) => self.text.get(lang).into(),
            FeatureField::Enabled => self.enabled.into(),
        }
    }

    fn write(&mut self, field: FeatureField, value: FieldValue) -> EditResult<()> {
        match field {
            FeatureField::Icon => self.icon = value.into_text(field)?,
            FeatureField::Text(lang) => *self.text.get_mut(lang) = value.into_text(field)?,
            FeatureField::Enabled => self.enabled = value.into_flag(field)?,
        }
        Ok(())
    }
}

// ========================
// Hero stats
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroStatField {
    Number,
    Label(Lang),
    Enabled,
}

impl FromStr for HeroStatField {
    type Err = ();

    fn from_str(path: &str) -> Result<Self, ()> {
        match split_path(path)? {
            ("number", None) => Ok(HeroStatField::Number),
            ("label", lang) => Ok(HeroStatField::Label(parse_lang(lang)?)),
            ("enabled", None) => Ok(HeroStatField::Enabled),
            _ => Err(()),
        }
    }
}

impl ListEntry for HeroStat {
    type Id = u32;
    type Field = HeroStatField;

    const KIND: &'static str = "stat";
    const PLURAL: &'static str = "stats";
    const LABEL_IT: &'static str = "statistiche";
    const CAP: Option<usize> = Some(4);

    fn id(&self) -> &u32 {
        &self.id
    }

    fn next_id(existing: &[Self]) -> Option<u32> {
        next_numeric_id(existing, |s| s.id)
    }

    fn new_entry(id: u32, _existing: &[Self]) -> Self {
        HeroStat {
            id,
            enabled: true,
            number: "+100".into(),
            label: StyledText::new("Nuova Stat", "New Stat"),
            extra: Default::default(),
        }
    }

    fn enabled_mut(&mut self) -> Option<&mut bool> {
        Some(&mut self.enabled)
    }

    fn read(&self, field: HeroStatField) -> FieldValue {
        match field {
            HeroStatField::Number => self.number.clone().into(),
            HeroStatField::Label(lang) => self.label.get(lang).into(),
            HeroStatField::Enabled => self.enabled.into(),
        }
    }

    fn write(&mut self, field: HeroStatField, value: FieldValue) -> EditResult<()> {
        match field {
            HeroStatField::Number => self.number = value.into_text(field)?,
            HeroStatField::Label(lang) => *self.label.get_mut(lang) = value.into_text(field)?,
            HeroStatField::Enabled => self.enabled = value.into_flag(field)?,
        }
        Ok(())
    }
}

// ========================
// Hero CTA buttons
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroCtaField {
    Text(Lang),
    Link,
    Style,
    Size,
    Enabled,
}

impl FromStr for HeroCtaField {
    type Err = ();

    fn from_str(path: &str) -> Result<Self, ()> {
        match split_path(path)? {
            ("text", lang) => Ok(HeroCtaField::Text(parse_lang(lang)?)),
            ("link", None) => Ok(HeroCtaField::Link),
            ("style", None) => Ok(HeroCtaField::Style),
            ("size", None) => Ok(HeroCtaField::Size),
            ("enabled", None) => Ok(HeroCtaField::Enabled),
            _ => Err(()),
        }
    }
}

impl ListEntry for HeroCtaButton {
    type Id = u32;
    type Field = HeroCtaField;

    const KIND: &'static str = "CTA button";
    const PLURAL: &'static str = "CTA buttons";
    const LABEL_IT: &'static str = "pulsanti CTA";
    const CAP: Option<usize> = Some(3);

    fn id(&self) -> &u32 {
        &self.id
    }

    fn next_id(existing: &[Self]) -> Option<u32> {
        next_numeric_id(existing, |c| c.id)
    }

    fn new_entry(id: u32, _existing: &[Self]) -> Self {
        HeroCtaButton {
            id,
            enabled: true,
            text: StyledText::new("Nuovo Pulsante", "New Button"),
            link: "#".into(),
            style: CtaStyle::Primary,
            size: CtaSize::Large,
            extra: Default::default(),
        }
    }

    fn enabled_mut(&mut self) -> Option<&mut bool> {
        Some(&mut self.enabled)
    }

    fn read(&self, field: HeroCtaField) -> FieldValue {
        match field {
            HeroCtaField::Text(lang) => self.text.get(lang).into(),
            HeroCtaField::Link => self.link.clone().into(),
            HeroCtaField::Style => self.style.as_str().into(),
            HeroCtaField::Size => self.size.as_str().into(),
            HeroCtaField::Enabled => self.enabled.into(),
        }
    }

    fn write(&mut self, field: HeroCtaField, value: FieldValue) -> EditResult<()> {
        match field {
            HeroCtaField::Text(lang) => *self.text.get_mut(lang) = value.into_text(field)?,
            HeroCtaField::Link => self.link = value.into_text(field)?,
            HeroCtaField::Style => {
                let text = value.into_text(field)?;
                self.style = CtaStyle::parse(&text).ok_or_else(|| invalid(field, &text))?;
            }
            HeroCtaField::Size => {
                let text = value.into_text(field)?;
                self.size = CtaSize::parse(&text).ok_or_else(|| invalid(field, &text))?;
            }
            HeroCtaField::Enabled => self.enabled = value.into_flag(field)?,
        }
        Ok(())
    }
}

// ========================
// Strategy attachments
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentField {
    Title(Lang),
    Description(Lang),
    Icon,
    DescriptionFontSize,
    DescriptionBold,
    DescriptionItalic,
    DescriptionUnderline,
    FilePath,
    FileType,
    Enabled,
}

impl FromStr for AttachmentField {
    type Err = ();

    fn from_str(path: &str) -> Result<Self, ()> {
        match split_path(path)? {
            ("title", lang) => Ok(AttachmentField::Title(parse_lang(lang)?)),
            ("description", lang) => Ok(AttachmentField::Description(parse_lang(lang)?)),
            ("icon", None) => Ok(AttachmentField::Icon),
            ("descriptionStyle", Some("fontSize")) => Ok(AttachmentField::DescriptionFontSize),
            ("descriptionStyle", Some("bold")) => Ok(AttachmentField::DescriptionBold),
            ("descriptionStyle", Some("italic")) => Ok(AttachmentField::DescriptionItalic),
            ("descriptionStyle", Some("underline")) => Ok(AttachmentField::DescriptionUnderline),
            ("filePath", None) => Ok(AttachmentField::FilePath),
            ("fileType", None) => Ok(AttachmentField::FileType),
            ("enabled", None) => Ok(AttachmentField::Enabled),
            _ => Err(()),
        }
    }
}

impl ListEntry for StrategyAttachment {
    type Id = u32;
    type Field = AttachmentField;

    const KIND: &'static str = "attachment";
    const PLURAL: &'static str = "attachments";
    const LABEL_IT: &'static str = "allegati";
    const CAP: Option<usize> = None;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn next_id(existing: &[Self]) -> Option<u32> {
        next_numeric_id(existing, |a| a.id)
    }

    fn new_entry(id: u32, _existing: &[Self]) -> Self {
        StrategyAttachment {
            id,
            enabled: true,
            title: StyledText::new("Nuovo Documento", "New Document"),
            description: StyledText::new("", ""),
            description_style: StrategyAttachment::default_description_style(),
            icon: "file-pdf".into(),
            file_path: String::new(),
            file_type: "pdf".into(),
            extra: Default::default(),
        }
    }

    fn enabled_mut(&mut self) -> Option<&mut bool> {
        Some(&mut self.enabled)
    }

    fn read(&self, field: AttachmentField) -> FieldValue {
        let style = &self.description_style;
        match field {
            AttachmentField::Title(lang) => self.title.get(lang).into(),
            AttachmentField::Description(lang) => self.description.get(lang).into(),
            AttachmentField::Icon => self.icon.clone().into(),
            AttachmentField::DescriptionFontSize => style.font_size.clone().unwrap_or_default().into(),
            AttachmentField::DescriptionBold => style.bold.into(),
            AttachmentField::DescriptionItalic => style.italic.into(),
            AttachmentField::DescriptionUnderline => style.underline.into(),
            AttachmentField::FilePath => self.file_path.clone().into(),
            AttachmentField::FileType => self.file_type.clone().into(),
            AttachmentField::Enabled => self.enabled.into(),
        }
    }

    fn write(&mut self, field: AttachmentField, value: FieldValue) -> EditResult<()> {
        let style = &mut self.description_style;
        match field {
            AttachmentField::Title(lang) => *self.title.get_mut(lang) = value.into_text(field)?,
            AttachmentField::Description(lang) => *self.description.get_mut(lang) = value.into_text(field)?,
            AttachmentField::Icon => self.icon = value.into_text(field)?,
            AttachmentField::DescriptionFontSize => style.font_size = Some(value.into_text(field)?),
            AttachmentField::DescriptionBold => style.bold = value.into_flag(field)?,
            AttachmentField::DescriptionItalic => style.italic = value.into_flag(field)?,
            AttachmentField::DescriptionUnderline => style.underline = value.into_flag(field)?,
            AttachmentField::FilePath => self.file_path = value.into_text(field)?,
            AttachmentField::FileType => self.file_type = value.into_text(field)?,
            AttachmentField::Enabled => self.enabled = value.into_flag(field)?,
        }
        Ok(())
    }
}

// ========================
// Strategy cards
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyCardField {
    Title,
    /// HTML from the rich-text editor
    Description,
    ButtonText,
    ButtonLink,
}

impl FromStr for StrategyCardField {
    type Err = ();

    fn from_str(path: &str) -> Result<Self, ()> {
        match split_path(path)? {
            ("title", None) => Ok(StrategyCardField::Title),
            ("description", None) => Ok(StrategyCardField::Description),
            ("buttonText", None) => Ok(StrategyCardField::ButtonText),
            ("buttonLink", None) => Ok(StrategyCardField::ButtonLink),
            _ => Err(()),
        }
    }
}

impl ListEntry for StrategyCard {
    type Id = String;
    type Field = StrategyCardField;

    const KIND: &'static str = "strategy card";
    const PLURAL: &'static str = "strategy cards";
    const LABEL_IT: &'static str = "card strategia";
    const CAP: Option<usize> = Some(5);

    fn id(&self) -> &String {
        &self.id
    }

    /// `card-<unix millis>`, bumped past any id already taken
    fn next_id(existing: &[Self]) -> Option<String> {
        let mut stamp = Utc::now().timestamp_millis();
        loop {
            let id = format!("card-{}", stamp);
            if !existing.iter().any(|card| card.id == id) {
                return Some(id);
            }
            stamp = stamp.checked_add(1)?;
        }
    }

    fn new_entry(id: String, existing: &[Self]) -> Self {
        StrategyCard {
            id,
            title: format!("Nuova Strategia {}", existing.len() + 1),
            description: "<p>Descrivi la strategia qui...</p>".into(),
            button_text: "Inizia Ora".into(),
            button_link: "https://t.me/linearitytrading".into(),
            extra: Default::default(),
        }
    }

    fn read(&self, field: StrategyCardField) -> FieldValue {
        match field {
            StrategyCardField::Title => self.title.clone().into(),
            StrategyCardField::Description => self.description.clone().into(),
            StrategyCardField::ButtonText => self.button_text.clone().into(),
            StrategyCardField::ButtonLink => self.button_link.clone().into(),
        }
    }

    fn write(&mut self, field: StrategyCardField, value: FieldValue) -> EditResult<()> {
        match field {
            StrategyCardField::Title => self.title = value.into_text(field)?,
            StrategyCardField::Description => self.description = value.into_text(field)?,
            StrategyCardField::ButtonText => self.button_text = value.into_text(field)?,
            StrategyCardField::ButtonLink => self.button_link = value.into_text(field)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_parse_to_typed_fields() {
        assert_eq!("title.it".parse::<BenefitField>(), Ok(BenefitField::Title(Lang::It)));
        assert_eq!("descriptionStyle.bold".parse::<AttachmentField>(), Ok(AttachmentField::DescriptionBold));
        assert_eq!("linkType".parse::<ContactField>(), Ok(ContactField::LinkType));
        assert!("title".parse::<BenefitField>().is_err());
        assert!("title.de".parse::<BenefitField>().is_err());
        assert!("title.it.x".parse::<BenefitField>().is_err());
        assert!("question.it".parse::<FaqField>().is_err());
    }

    #[test]
    fn test_enum_fields_reject_unknown_values() {
        let mut cta = HeroCtaButton::new_entry(1, &[]);
        assert!(cta.write(HeroCtaField::Size, "huge".into()).is_err());
        assert_eq!(cta.size, CtaSize::Large);
        cta.write(HeroCtaField::Style, "secondary".into()).unwrap();
        assert_eq!(cta.style, CtaStyle::Secondary);
    }

    #[test]
    fn test_strategy_card_ids_skip_taken_stamps() {
        let first = StrategyCard::new_entry(StrategyCard::next_id(&[]).unwrap(), &[]);
        let mut taken = vec![first];
        let next = StrategyCard::next_id(&taken).unwrap();
        assert!(next.starts_with("card-"));
        assert_ne!(next, taken[0].id);
        taken.push(StrategyCard::new_entry(next, &taken));
        assert_eq!(taken[1].title, "Nuova Strategia 2");
    }

    #[test]
    fn test_text_field_rejects_flag() {
        let mut item = FaqItem::new_entry(1, &[]);
        assert!(item.write(FaqField::Answer, FieldValue::Flag(true)).is_err());
        assert_eq!(item.answer, "Risposta...");
    }

    #[test]
    fn test_capped_lists_have_panel_labels() {
        assert_eq!(BenefitCard::LABEL_IT, "vantaggi");
        assert_eq!(HeroStat::LABEL_IT, "statistiche");
        assert_eq!(HeroCtaButton::LABEL_IT, "pulsanti CTA");
        assert_eq!(StrategyCard::LABEL_IT, "card strategia");
        assert_ne!(FaqItem::LABEL_IT, FaqItem::PLURAL);
    }
}
