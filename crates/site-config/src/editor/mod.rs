//! List Editors
//!
//! One generic editor drives every array-valued field of the store:
//! benefits, FAQ items, contact items, about features, hero stats, hero CTA
//! buttons, strategy attachments and strategy cards. Per-entity behaviour
//! (caps, id allocation, defaults, typed fields) lives in [`ListEntry`].

mod attachments;
mod charts;
mod entries;

use std::fmt;
use std::str::FromStr;

use crate::error::{EditError, EditResult};
use crate::model::{
    AboutFeature, BenefitCard, ContactItem, FaqItem, HeroCtaButton, HeroStat, Lang, RiskTier, StrategyAttachment,
    StrategyCard,
};
use crate::store::ConfigStore;

pub use attachments::{attachment_extension, discard_attachment_file, upload_attachment, UploadedFile};
pub use charts::{ChartEditor, ChartField, DataPointField};
pub use entries::{
    AttachmentField, BenefitField, ContactField, FaqField, FeatureField, HeroCtaField, HeroStatField,
    StrategyCardField,
};

/// Value written to or read from an entity field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn into_text(self, field: impl fmt::Debug) -> EditResult<String> {
        match self {
            FieldValue::Text(s) => Ok(s),
            FieldValue::Flag(b) => Err(EditError::InvalidValue { field: format!("{:?}", field), value: b.to_string() }),
        }
    }

    pub fn into_flag(self, field: impl fmt::Debug) -> EditResult<bool> {
        match self {
            FieldValue::Flag(b) => Ok(b),
            FieldValue::Text(s) => Err(EditError::InvalidValue { field: format!("{:?}", field), value: s }),
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// Answer to the "are you sure?" prompt that guards removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Record kind that can live in an editable list
pub trait ListEntry: Sized {
    type Id: Clone + PartialEq + fmt::Display;
    /// Typed field selector; parses from dotted paths like `"title.it"`
    type Field: FromStr<Err = ()> + Copy + fmt::Debug;

    /// Singular name used in messages
    const KIND: &'static str;
    /// Plural name used in the cap message
    const PLURAL: &'static str;
    /// Plural name shown by the admin panel
    const LABEL_IT: &'static str;
    /// Maximum live entries, `None` when unbounded
    const CAP: Option<usize>;

    fn id(&self) -> &Self::Id;

    /// Id for a new entry, distinct from every id in `existing`;
    /// `None` when the id space is used up
    fn next_id(existing: &[Self]) -> Option<Self::Id>;

    /// Entry created by "add", given its id and the entries already present
    fn new_entry(id: Self::Id, existing: &[Self]) -> Self;

    /// The visibility flag, for kinds that have one
    fn enabled_mut(&mut self) -> Option<&mut bool> {
        None
    }

    fn read(&self, field: Self::Field) -> FieldValue;

    fn write(&mut self, field: Self::Field, value: FieldValue) -> EditResult<()>;
}

/// `max(existing) + 1`, or 1 for an empty list. `None` past `u32::MAX`.
pub fn next_numeric_id<T>(existing: &[T], id: impl Fn(&T) -> u32) -> Option<u32> {
    existing.iter().map(id).max().unwrap_or(0).checked_add(1)
}

/// Split a dotted field path of depth one or two
pub(crate) fn split_path(path: &str) -> Result<(&str, Option<&str>), ()> {
    let mut parts = path.split('.');
    let head = parts.next().filter(|h| !h.is_empty()).ok_or(())?;
    let tail = parts.next();
    if parts.next().is_some() || tail == Some("") {
        return Err(());
    }
    Ok((head, tail))
}

pub(crate) fn parse_lang(tail: Option<&str>) -> Result<Lang, ()> {
    tail.ok_or(())?.parse().map_err(|_| ())
}

/// State of a list's "add" button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddState {
    pub count: usize,
    pub cap: Option<usize>,
}

impl AddState {
    pub fn disabled(&self) -> bool {
        self.cap.is_some_and(|cap| self.count >= cap)
    }

    /// `"3/10"` for capped lists, `"3"` otherwise
    pub fn label(&self) -> String {
        match self.cap {
            Some(cap) => format!("{}/{}", self.count, cap),
            None => self.count.to_string(),
        }
    }
}

/// Borrow of one list inside the store together with its dirty flag
pub struct ListEditor<'a, T: ListEntry> {
    items: &'a mut Vec<T>,
    dirty: &'a mut bool,
    revision: &'a mut u64,
}

impl<'a, T: ListEntry> ListEditor<'a, T> {
    fn new(items: &'a mut Vec<T>, dirty: &'a mut bool, revision: &'a mut u64) -> Self {
        Self { items, dirty, revision }
    }

    fn touch(&mut self) {
        *self.dirty = true;
        *self.revision = self.revision.wrapping_add(1);
    }

    pub fn items(&self) -> &[T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn add_state(&self) -> AddState {
        AddState { count: self.items.len(), cap: T::CAP }
    }

    /// Append a default entry. Rejected without any change at the cap.
    pub fn add(&mut self) -> EditResult<&T> {
        if let Some(cap) = T::CAP {
            if self.items.len() >= cap {
                return Err(EditError::CapReached { kind: T::PLURAL, cap });
            }
        }
        let id = T::next_id(self.items.as_slice()).ok_or(EditError::IdExhausted(T::PLURAL))?;
        let entry = T::new_entry(id, self.items.as_slice());
        log::debug!("added {} {}", T::KIND, entry.id());
        self.items.push(entry);
        self.touch();
        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Remove by id. An id that is no longer present is a no-op returning `None`.
    pub fn remove(&mut self, id: &T::Id, confirmation: Confirmation) -> EditResult<Option<T>> {
        if confirmation == Confirmation::Declined {
            return Err(EditError::NotConfirmed);
        }
        let Some(index) = self.items.iter().position(|item| item.id() == id) else {
            return Ok(None);
        };
        let removed = self.items.remove(index);
        log::debug!("removed {} {}", T::KIND, id);
        self.touch();
        Ok(Some(removed))
    }

    /// Flip the enabled flag, returning its new value
    pub fn toggle(&mut self, id: &T::Id) -> EditResult<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| EditError::NotFound { kind: T::KIND, id: id.to_string() })?;
        let enabled = item.enabled_mut().ok_or(EditError::NotToggleable(T::PLURAL))?;
        *enabled = !*enabled;
        let now = *enabled;
        self.touch();
        Ok(now)
    }

    pub fn update(&mut self, id: &T::Id, field: T::Field, value: impl Into<FieldValue>) -> EditResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| EditError::NotFound { kind: T::KIND, id: id.to_string() })?;
        item.write(field, value.into())?;
        self.touch();
        Ok(())
    }

    /// [`update`](Self::update) addressed by a dotted path such as `"title.it"`
    pub fn update_path(&mut self, id: &T::Id, path: &str, value: impl Into<FieldValue>) -> EditResult<()> {
        let field = parse_field::<T>(path)?;
        self.update(id, field, value)
    }

    pub fn read(&self, id: &T::Id, field: T::Field) -> Option<FieldValue> {
        self.get(id).map(|item| item.read(field))
    }

    pub fn read_path(&self, id: &T::Id, path: &str) -> EditResult<Option<FieldValue>> {
        let field = parse_field::<T>(path)?;
        Ok(self.read(id, field))
    }
}

pub fn parse_field<T: ListEntry>(path: &str) -> EditResult<T::Field> {
    path.parse().map_err(|_| EditError::InvalidPath { kind: T::KIND, path: path.to_string() })
}

// ========================
// Store accessors
// ========================

impl ConfigStore {
    pub fn benefits(&mut self) -> ListEditor<'_, BenefitCard> {
        let items = self.agents_benefits.get_or_insert_with(Vec::new);
        ListEditor::new(items, &mut self.dirty, &mut self.revision)
    }

    pub fn faq_items(&mut self, lang: Lang) -> ListEditor<'_, FaqItem> {
        let items = &mut self.faqs.get_or_insert_with(Default::default).get_mut(lang).items;
        ListEditor::new(items, &mut self.dirty, &mut self.revision)
    }

    pub fn contact_items(&mut self) -> ListEditor<'_, ContactItem> {
        let items = &mut self.contact_settings.get_or_insert_with(Default::default).contact_items;
        ListEditor::new(items, &mut self.dirty, &mut self.revision)
    }

    pub fn about_features(&mut self) -> ListEditor<'_, AboutFeature> {
        let items = &mut self.about_settings.get_or_insert_with(Default::default).features;
        ListEditor::new(items, &mut self.dirty, &mut self.revision)
    }

    pub fn hero_stats(&mut self) -> ListEditor<'_, HeroStat> {
        let items = &mut self.hero_settings.get_or_insert_with(Default::default).stats;
        ListEditor::new(items, &mut self.dirty, &mut self.revision)
    }

    pub fn hero_cta_buttons(&mut self) -> ListEditor<'_, HeroCtaButton> {
        let items = &mut self.hero_settings.get_or_insert_with(Default::default).cta_buttons;
        ListEditor::new(items, &mut self.dirty, &mut self.revision)
    }

    pub fn attachments(&mut self, tier: RiskTier) -> ListEditor<'_, StrategyAttachment> {
        let strategy = self.strategies.get_or_insert_with(Default::default).entry(tier).or_default();
        ListEditor::new(&mut strategy.attachments.files, &mut self.dirty, &mut self.revision)
    }

    pub fn strategy_cards(&mut self, lang: Lang) -> ListEditor<'_, StrategyCard> {
        let items = &mut self.strategy_cards.get_or_insert_with(Default::default).get_mut(lang).cards;
        ListEditor::new(items, &mut self.dirty, &mut self.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("title.it"), Ok(("title", Some("it"))));
        assert_eq!(split_path("icon"), Ok(("icon", None)));
        assert!(split_path("a.b.c").is_err());
        assert!(split_path("").is_err());
        assert!(split_path("title.").is_err());
    }

    #[test]
    fn test_add_state_label() {
        let full = AddState { count: 10, cap: Some(10) };
        assert!(full.disabled());
        assert_eq!(full.label(), "10/10");
        let open = AddState { count: 4, cap: None };
        assert!(!open.disabled());
        assert_eq!(open.label(), "4");
    }

    #[test]
    fn test_next_numeric_id() {
        let ids = [1u32, 3];
        assert_eq!(next_numeric_id(&ids, |i| *i), Some(4));
        assert_eq!(next_numeric_id(&[] as &[u32], |i| *i), Some(1));
    }

    #[test]
    fn test_next_numeric_id_at_u32_max() {
        let ids = [7u32, u32::MAX];
        assert_eq!(next_numeric_id(&ids, |i| *i), None);
    }
}
