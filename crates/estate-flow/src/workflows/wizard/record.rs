use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::domain::WizardError;

/// Field edits for a single section, keyed by field name.
pub type SectionFields = Map<String, Value>;

/// Accumulated wizard data: section name to partially filled fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WizardRecord {
    sections: BTreeMap<String, SectionFields>,
}

impl WizardRecord {
    pub(crate) fn with_sections<I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        let sections = names
            .into_iter()
            .map(|name| (name.to_string(), SectionFields::new()))
            .collect();
        Self { sections }
    }

    pub fn section(&self, name: &str) -> Option<&SectionFields> {
        self.sections.get(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn field(&self, section: &str, field: &str) -> Option<&Value> {
        self.sections.get(section).and_then(|fields| fields.get(field))
    }

    /// Overwrites the supplied fields and leaves every other field in place.
    /// Returns `false` when the section is not tracked.
    pub(crate) fn merge(&mut self, section: &str, fields: SectionFields) -> bool {
        match self.sections.get_mut(section) {
            Some(existing) => {
                existing.extend(fields);
                true
            }
            None => false,
        }
    }

    /// Deserializes a section into a typed view; absent fields take their defaults.
    pub fn view<T>(&self, section: &str) -> Result<T, WizardError>
    where
        T: DeserializeOwned,
    {
        let fields = self.sections.get(section).cloned().unwrap_or_default();
        serde_json::from_value(Value::Object(fields)).map_err(|source| {
            WizardError::SectionShape {
                section: section.to_string(),
                source,
            }
        })
    }

    pub fn into_sections(self) -> BTreeMap<String, SectionFields> {
        self.sections
    }
}
