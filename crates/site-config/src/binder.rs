//! Field Binder
//!
//! An in-memory form surface: named controls of a few kinds, mirroring what
//! the admin panel renders. Every accessor is total: an absent control or a
//! control of another kind reads as empty text, `false`, or the fallback.

use std::collections::BTreeMap;

use crate::model::Align;

#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Plain input or textarea
    Text(String),
    /// Contenteditable region holding HTML
    RichText(String),
    /// Style button (bold/italic/underline) in its active or idle state
    Toggle(bool),
    /// Checkbox
    Check(bool),
    /// Mutually exclusive alignment buttons; `None` when none is active
    Choice(Option<Align>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    controls: BTreeMap<String, Control>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a control
    pub fn declare(&mut self, name: impl Into<String>, control: Control) {
        self.controls.insert(name.into(), control);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.controls.contains_key(name)
    }

    pub fn control(&self, name: &str) -> Option<&Control> {
        self.controls.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.controls.keys().map(String::as_str)
    }

    /// Text of an input, or the HTML of a rich-text region
    pub fn get_field(&self, name: &str) -> String {
        match self.controls.get(name) {
            Some(Control::Text(s)) | Some(Control::RichText(s)) => s.clone(),
            _ => String::new(),
        }
    }

    /// Inverse of [`get_field`](Self::get_field). Rich-text regions stay rich text.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.controls.get_mut(name) {
            Some(Control::Text(s)) | Some(Control::RichText(s)) => {
                *s = value.into();
                true
            }
            _ => false,
        }
    }

    pub fn style_flag(&self, name: &str) -> bool {
        matches!(self.controls.get(name), Some(Control::Toggle(true)))
    }

    pub fn set_style_flag(&mut self, name: &str, active: bool) -> bool {
        match self.controls.get_mut(name) {
            Some(Control::Toggle(flag)) => {
                *flag = active;
                true
            }
            _ => false,
        }
    }

    pub fn checked(&self, name: &str) -> bool {
        matches!(self.controls.get(name), Some(Control::Check(true)))
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) -> bool {
        match self.controls.get_mut(name) {
            Some(Control::Check(flag)) => {
                *flag = checked;
                true
            }
            _ => false,
        }
    }

    /// Active button of an alignment group, or `fallback`
    pub fn alignment(&self, name: &str, fallback: Align) -> Align {
        match self.controls.get(name) {
            Some(Control::Choice(Some(align))) => *align,
            _ => fallback,
        }
    }

    pub fn set_alignment(&mut self, name: &str, align: Option<Align>) -> bool {
        match self.controls.get_mut(name) {
            Some(Control::Choice(current)) => {
                *current = align;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_controls_are_total() {
        let mut form = FormFields::new();
        assert_eq!(form.get_field("nope"), "");
        assert!(!form.style_flag("nope"));
        assert!(!form.checked("nope"));
        assert_eq!(form.alignment("nope", Align::Left), Align::Left);
        assert!(!form.set_field("nope", "x"));
        assert!(!form.contains("nope"));
    }

    #[test]
    fn test_rich_text_keeps_kind() {
        let mut form = FormFields::new();
        form.declare("desc-it", Control::RichText("<p>a</p>".into()));
        assert!(form.set_field("desc-it", "<p><b>b</b></p>"));
        assert_eq!(form.control("desc-it"), Some(&Control::RichText("<p><b>b</b></p>".into())));
        assert_eq!(form.get_field("desc-it"), "<p><b>b</b></p>");
    }

    #[test]
    fn test_kind_mismatch_reads_as_default() {
        let mut form = FormFields::new();
        form.declare("bold", Control::Toggle(true));
        form.declare("align", Control::Choice(None));
        assert_eq!(form.get_field("bold"), "");
        assert!(!form.checked("bold"));
        assert_eq!(form.alignment("align", Align::Center), Align::Center);
        form.set_alignment("align", Some(Align::Right));
        assert_eq!(form.alignment("align", Align::Center), Align::Right);
    }
}
