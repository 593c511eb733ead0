//! Quote request field names and the value/error maps keyed by them
//!
//! Copyright (c) 2025 Quoteform Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::validation::validators::{validate_email, validate_name, validate_phone, validate_postcode};
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Signature shared by every field validator
pub type FieldValidator = fn(&str) -> bool;

/// The seven fields of the quote request form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Postcode,
    Service,
    #[serde(alias = "preferred_date")]
    PreferredDate,
    Message,
}

impl FieldName {
    /// Every field, in display order
    pub const ALL: [FieldName; 7] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Postcode,
        FieldName::Service,
        FieldName::PreferredDate,
        FieldName::Message,
    ];

    /// Wire name used in documents and error maps
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Postcode => "postcode",
            FieldName::Service => "service",
            FieldName::PreferredDate => "preferredDate",
            FieldName::Message => "message",
        }
    }

    /// Whether submission is rejected while this field is empty
    pub fn is_required(self) -> bool {
        matches!(
            self,
            FieldName::Name | FieldName::Email | FieldName::Phone | FieldName::Postcode | FieldName::Service
        )
    }

    /// Pattern check for this field, if it has one
    pub fn validator(self) -> Option<FieldValidator> {
        match self {
            FieldName::Name => Some(validate_name),
            FieldName::Email => Some(validate_email),
            FieldName::Phone => Some(validate_phone),
            FieldName::Postcode => Some(validate_postcode),
            FieldName::Service | FieldName::PreferredDate | FieldName::Message => None,
        }
    }

    /// Fixed message shown when this field is invalid or missing.
    ///
    /// Fields that are neither validated nor required have no message.
    pub fn error_message(self) -> Option<&'static str> {
        match self {
            FieldName::Name => Some("Please enter your name"),
            FieldName::Email => Some("Please enter a valid email address"),
            FieldName::Phone => Some("Please enter a valid Australian phone number"),
            FieldName::Postcode => Some("Please enter a valid 4-digit postcode"),
            FieldName::Service => Some("Please select a service"),
            FieldName::PreferredDate | FieldName::Message => None,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(FieldName::Name),
            "email" => Ok(FieldName::Email),
            "phone" => Ok(FieldName::Phone),
            "postcode" => Ok(FieldName::Postcode),
            "service" => Ok(FieldName::Service),
            "preferredDate" | "preferred_date" => Ok(FieldName::PreferredDate),
            "message" => Ok(FieldName::Message),
            other => Err(Error::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}

/// Text entered into each field. Untouched fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<FieldName, String>,
}

impl FieldValues {
    /// Create an empty set of values
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field, or `""` if it was never set
    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Builder-style [`FieldValues::set`]
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.is_empty())
    }

    /// Drop every value
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Non-empty values in display order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (*k, v.as_str()))
    }

    /// Build values from an untyped JSON object keyed by wire names.
    ///
    /// `null` reads as an empty value; any other non-string is rejected.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| Error::InvalidRequest {
            message: format!("expected an object of field values, found {}", json_kind(value)),
        })?;

        let mut values = Self::new();
        for (key, raw) in object {
            let field: FieldName = key.parse()?;
            match raw {
                Value::String(s) => values.set(field, s.clone()),
                Value::Null => values.set(field, String::new()),
                other => {
                    return Err(Error::InvalidFieldValue {
                        field: key.clone(),
                        found: json_kind(other).to_string(),
                    })
                }
            }
        }
        Ok(values)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Serialize for FieldValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in &self.values {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        FieldValues::from_json_value(&raw).map_err(D::Error::custom)
    }
}

/// Error message per field. An empty message and an absent entry are the same state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FieldName, String>,
}

impl FieldErrors {
    /// Create an empty error map
    pub fn new() -> Self {
        Self::default()
    }

    /// Message currently shown for a field
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Set a field's message; an empty message clears it
    pub fn set(&mut self, field: FieldName, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, message);
        }
    }

    /// Clear a field's message
    pub fn clear_field(&mut self, field: FieldName) {
        self.errors.remove(&field);
    }

    /// Drop every message
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Whether any field currently has a message
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether the given field currently has a message
    pub fn has_error(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    /// Number of fields with a message
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no field has a message
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages in display order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, message) in &self.errors {
            map.serialize_entry(field.as_str(), message)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_name_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>().unwrap(), field);
        }
        assert_eq!("preferred_date".parse::<FieldName>().unwrap(), FieldName::PreferredDate);
        assert!("fullName".parse::<FieldName>().is_err());
        assert!("Name".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<_> = FieldName::ALL.iter().filter(|f| f.is_required()).collect();
        assert_eq!(
            required,
            [
                &FieldName::Name,
                &FieldName::Email,
                &FieldName::Phone,
                &FieldName::Postcode,
                &FieldName::Service
            ]
        );
    }

    #[test]
    fn test_unvalidated_fields_have_no_validator() {
        assert!(FieldName::Service.validator().is_none());
        assert!(FieldName::PreferredDate.validator().is_none());
        assert!(FieldName::Message.validator().is_none());
    }

    #[test]
    fn test_values_default_to_empty() {
        let values = FieldValues::new().with(FieldName::Name, "Jane");
        assert_eq!(values.get(FieldName::Name), "Jane");
        assert_eq!(values.get(FieldName::Email), "");
        assert!(!values.is_empty());
        assert!(FieldValues::new().with(FieldName::Message, "").is_empty());
    }

    #[test]
    fn test_values_from_json() {
        let values = FieldValues::from_json_value(&json!({
            "name": "Jane Doe",
            "preferredDate": "2025-03-01",
            "message": null
        }))
        .unwrap();
        assert_eq!(values.get(FieldName::Name), "Jane Doe");
        assert_eq!(values.get(FieldName::PreferredDate), "2025-03-01");
        assert_eq!(values.get(FieldName::Message), "");
    }

    #[test]
    fn test_values_from_json_rejects_bad_input() {
        let err = FieldValues::from_json_value(&json!({"fullName": "Jane"})).unwrap_err();
        assert!(matches!(err, Error::UnknownField { ref name } if name == "fullName"));

        let err = FieldValues::from_json_value(&json!({"postcode": 3000})).unwrap_err();
        assert!(matches!(err, Error::InvalidFieldValue { .. }));

        let err = FieldValues::from_json_value(&json!(["name"])).unwrap_err();
        assert!(matches!(err, Error::InvalidRequest { .. }));
    }

    #[test]
    fn test_values_serialize_with_wire_names() {
        let values = FieldValues::new()
            .with(FieldName::PreferredDate, "tomorrow")
            .with(FieldName::Name, "Jane");
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json, json!({"name": "Jane", "preferredDate": "tomorrow"}));

        let back: FieldValues = serde_json::from_value(json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn test_empty_message_clears_error() {
        let mut errors = FieldErrors::new();
        errors.set(FieldName::Email, "Please enter a valid email address");
        assert!(errors.has_error(FieldName::Email));
        errors.set(FieldName::Email, "");
        assert!(!errors.has_errors());
    }
}
