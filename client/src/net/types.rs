//! Form payload types shared by the form controller and the delivery paths.
//!
//! DESIGN
//! ======
//! Field order is significant: the `mailto:` body lists fields in the order
//! the form declares them, and EmailJS templates render them by name.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered `field name -> value` record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    entries: Vec<(String, String)>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record with every name set to the empty string.
    pub fn with_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self { entries: names.into_iter().map(|n| (n.to_owned(), String::new())).collect() }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// Set one field. Unknown names are appended at the end.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name.to_owned(), value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `key: value` lines joined with `\n`, in field order.
    pub fn to_lines(&self) -> String {
        self.iter().map(|(k, v)| format!("{k}: {v}")).collect::<Vec<_>>().join("\n")
    }
}

impl Serialize for FieldValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Template parameters sent to the remote email service: the form's fields
/// plus a `form_type` discriminator.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct TemplatePayload(FieldValues);

impl TemplatePayload {
    pub fn new(fields: &FieldValues, form_type: &str) -> Self {
        let mut params = fields.clone();
        params.set("form_type", form_type);
        Self(params)
    }

    pub fn params(&self) -> &FieldValues {
        &self.0
    }
}
