use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use dspl_core::Identifier;
use serde::{Deserialize, Serialize};

/// The kind of a value, as declared by its owner.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Float,
    Integer,
    Boolean,
    Date,
    Concept,
}

impl DataType {
    pub const ALL: [DataType; 6] = [
        DataType::String,
        DataType::Float,
        DataType::Integer,
        DataType::Boolean,
        DataType::Date,
        DataType::Concept,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Concept => "concept",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed value.
///
/// The value does not know the type its owner declared. Use [Value::get]
/// with the declared [DataType] to read it, which yields `None` on mismatch.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
    /// Milliseconds since the unix epoch
    Date(i64),
    /// Reference to a concept value
    Concept(Identifier),
}

impl Value {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn concept(id: Identifier) -> Self {
        Self::Concept(id)
    }

    pub fn date_time(date_time: DateTime<Utc>) -> Self {
        Self::Date(date_time.timestamp_millis())
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Self::String(_) => DataType::String,
            Self::Float(_) => DataType::Float,
            Self::Integer(_) => DataType::Integer,
            Self::Boolean(_) => DataType::Boolean,
            Self::Date(_) => DataType::Date,
            Self::Concept(_) => DataType::Concept,
        }
    }

    /// Get the value as the representation selected by `data_type`.
    pub fn get(&self, data_type: DataType) -> Option<&Self> {
        if self.data_type() == data_type {
            Some(self)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date_millis(&self) -> Option<i64> {
        match self {
            Self::Date(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.as_date_millis()?).single()
    }

    pub fn as_concept(&self) -> Option<&Identifier> {
        match self {
            Self::Concept(id) => Some(id),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Identifier> for Value {
    fn from(value: Identifier) -> Self {
        Self::Concept(value)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn get_by_declared_type() {
        let value = Value::Integer(42);

        assert_eq!(Some(&Value::Integer(42)), value.get(DataType::Integer));
        for data_type in DataType::ALL {
            if data_type != DataType::Integer {
                assert_eq!(None, value.get(data_type), "{data_type}");
            }
        }
    }

    #[test]
    fn typed_accessors() {
        assert_eq!(Some("x"), Value::from("x").as_str());
        assert_eq!(None, Value::from("x").as_i64());
        assert_eq!(Some(1.5), Value::from(1.5).as_f64());
        assert_eq!(Some(true), Value::from(true).as_bool());
        assert_eq!(
            Some(&Identifier::qualified("geo", "country")),
            Value::concept(Identifier::qualified("geo", "country")).as_concept()
        );
    }

    #[test]
    fn date_round_trips_through_chrono() {
        let date_time = NaiveDate::from_ymd_opt(2011, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        let value = Value::date_time(date_time);

        assert_eq!(DataType::Date, value.data_type());
        assert_eq!(Some(1298937600000), value.as_date_millis());
        assert_eq!(Some(date_time), value.as_date_time());
    }

    #[test]
    fn serde_representation() {
        assert_eq!(
            r#"{"integer":7}"#,
            serde_json::to_string(&Value::Integer(7)).unwrap()
        );
        assert_eq!(
            r#""concept""#,
            serde_json::to_string(&DataType::Concept).unwrap()
        );
    }
}
