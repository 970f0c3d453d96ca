use dspl_core::locale::LocalizedText;
use serde::{Deserialize, Serialize};

/// Localized textual information about an entity.
#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub description: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub url: LocalizedText,
}

impl Info {
    pub fn named(locale: &str, name: &str) -> Self {
        let mut info = Self::default();
        info.name.insert(locale, name);
        info
    }

    pub fn with_name(mut self, locale: &str, name: &str) -> Self {
        self.name.insert(locale, name);
        self
    }

    pub fn with_description(mut self, locale: &str, description: &str) -> Self {
        self.description.insert(locale, description);
        self
    }

    pub fn with_url(mut self, locale: &str, url: &str) -> Self {
        self.url.insert(locale, url);
        self
    }

    pub fn name(&self, locale: &str) -> Option<&str> {
        self.name.get(locale)
    }

    pub fn description(&self, locale: &str) -> Option<&str> {
        self.description.get(locale)
    }

    pub fn url(&self, locale: &str) -> Option<&str> {
        self.url.get(locale)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.description.is_empty() && self.url.is_empty()
    }
}
