use arcstr::ArcStr;
use dspl_core::locale::LocalizedText;
use serde::{Deserialize, Serialize};

use crate::{
    info::Info,
    value::{DataType, Value},
};

/// A named value attached to a dataset or a concept.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Attribute {
    pub id: ArcStr,
    #[serde(default, skip_serializing_if = "Info::is_empty")]
    pub info: Info,
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<AttributeValue>,
}

/// The two mutually exclusive representations of an attribute value.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    Single(Value),
    /// Textual value per locale. The attribute should be declared [DataType::String].
    Localized(LocalizedText),
}

impl Attribute {
    pub fn new(id: impl Into<ArcStr>, data_type: DataType) -> Self {
        Self {
            id: id.into(),
            info: Info::default(),
            data_type,
            value: None,
        }
    }

    pub fn with_info(mut self, info: Info) -> Self {
        self.info = info;
        self
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.set_value(value.into());
        self
    }

    pub fn with_localized_value(mut self, locale: &str, text: &str) -> Self {
        self.set_localized_value(locale, text);
        self
    }

    /// Set the single value, discarding any localized values.
    pub fn set_value(&mut self, value: Value) {
        self.value = Some(AttributeValue::Single(value));
    }

    /// Set the text for one locale, discarding any single value.
    pub fn set_localized_value(&mut self, locale: &str, text: &str) {
        match &mut self.value {
            Some(AttributeValue::Localized(texts)) => {
                texts.insert(locale, text);
            }
            _ => {
                let mut texts = LocalizedText::new();
                texts.insert(locale, text);
                self.value = Some(AttributeValue::Localized(texts));
            }
        }
    }

    /// The single value, `None` for localized attributes.
    pub fn value(&self) -> Option<&Value> {
        match &self.value {
            Some(AttributeValue::Single(value)) => Some(value),
            _ => None,
        }
    }

    /// The text for exactly `locale`, `None` for single-valued attributes.
    pub fn localized_value(&self, locale: &str) -> Option<&str> {
        match &self.value {
            Some(AttributeValue::Localized(texts)) => texts.get(locale),
            _ => None,
        }
    }

    pub fn localized_values(&self) -> Option<&LocalizedText> {
        match &self.value {
            Some(AttributeValue::Localized(texts)) => Some(texts),
            _ => None,
        }
    }

    /// Read the attribute, either as its single value or its text in `locale`.
    pub fn get_value(&self, locale: Option<&str>) -> Option<AttributeValueRef<'_>> {
        match locale {
            None => self.value().map(AttributeValueRef::Value),
            Some(locale) => self.localized_value(locale).map(AttributeValueRef::Text),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AttributeValueRef<'a> {
    Value(&'a Value),
    Text(&'a str),
}
