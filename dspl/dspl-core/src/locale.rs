//! Per-locale text keyed by locale strings such as `en` or `en_US`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text values keyed by locale.
///
/// Lookups are exact: asking for `en_US` never falls back to `en`.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Set the text for `locale`, returning the previous text if any.
    pub fn insert(&mut self, locale: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(locale.into(), text.into())
    }

    pub fn remove(&mut self, locale: &str) -> Option<String> {
        self.0.remove(locale)
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.0.contains_key(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>, T: Into<String>> FromIterator<(L, T)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(locale, text)| (locale.into(), text.into()))
                .collect(),
        )
    }
}
