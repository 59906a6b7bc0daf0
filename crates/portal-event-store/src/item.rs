//! Codec between `EventRecord` and DynamoDB attribute maps.
//!
//! Absent optional fields are stored as `NULL` attributes, matching how the
//! table has historically been written.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

use portal_core::error::PortalError;
use portal_core::event::EventRecord;

/// Converts a record into a full attribute map for `PutItem`.
pub(crate) fn to_item(record: &EventRecord) -> Result<HashMap<String, AttributeValue>, PortalError> {
    let value = serde_json::to_value(record)
        .map_err(|e| PortalError::Infrastructure(format!("failed to serialize event record: {e}")))?;
    let Value::Object(fields) = value else {
        return Err(PortalError::Infrastructure(
            "event record did not serialize to an object".to_owned(),
        ));
    };
    Ok(fields
        .into_iter()
        .map(|(name, field)| (name, json_to_attr(field)))
        .collect())
}

/// Reconstructs a record from a stored attribute map.
pub(crate) fn from_item(item: &HashMap<String, AttributeValue>) -> Result<EventRecord, PortalError> {
    let fields = item
        .iter()
        .map(|(name, attr)| attr_to_json(attr).map(|value| (name.clone(), value)))
        .collect::<Result<Map<String, Value>, PortalError>>()?;
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| PortalError::Infrastructure(format!("malformed event record: {e}")))
}

pub(crate) fn json_to_attr(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(flag) => AttributeValue::Bool(flag),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::String(text) => AttributeValue::S(text),
        Value::Array(items) => AttributeValue::L(items.into_iter().map(json_to_attr).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .into_iter()
                .map(|(name, field)| (name, json_to_attr(field)))
                .collect(),
        ),
    }
}

pub(crate) fn attr_to_json(attr: &AttributeValue) -> Result<Value, PortalError> {
    match attr {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(flag) => Ok(Value::Bool(*flag)),
        AttributeValue::S(text) => Ok(Value::String(text.clone())),
        AttributeValue::N(number) => {
            if let Ok(integer) = number.parse::<i64>() {
                return Ok(Value::Number(integer.into()));
            }
            let float: f64 = number.parse().map_err(|e| {
                PortalError::Infrastructure(format!("invalid numeric attribute {number}: {e}"))
            })?;
            Number::from_f64(float)
                .map(Value::Number)
                .ok_or_else(|| {
                    PortalError::Infrastructure(format!("non-finite numeric attribute {number}"))
                })
        }
        AttributeValue::L(items) => items
            .iter()
            .map(attr_to_json)
            .collect::<Result<Vec<Value>, PortalError>>()
            .map(Value::Array),
        AttributeValue::M(fields) => fields
            .iter()
            .map(|(name, field)| attr_to_json(field).map(|value| (name.clone(), value)))
            .collect::<Result<Map<String, Value>, PortalError>>()
            .map(Value::Object),
        other => Err(PortalError::Infrastructure(format!(
            "unsupported attribute type: {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::event::{EventPayload, EventStatus};
    use serde_json::json;

    fn sample_record() -> EventRecord {
        EventRecord::create(
            "id-1".to_owned(),
            EventPayload {
                title: Some("Summer Fair".to_owned()),
                seo_url: Some("summer-fair".to_owned()),
                media: Some(json!([{"type": "image", "order": 1}])),
                is_highlighted: Some(true),
                ..EventPayload::default()
            },
            EventStatus::Active,
            "2026-01-15T10:00:00.000000Z".to_owned(),
            Some("admin@example.com".to_owned()),
        )
    }

    #[test]
    fn test_item_codec_round_trip() {
        let record = sample_record();
        let item = to_item(&record).unwrap();
        assert_eq!(from_item(&item).unwrap(), record);
    }

    #[test]
    fn test_absent_fields_stored_as_null() {
        let item = to_item(&sample_record()).unwrap();
        assert_eq!(item["organizer"], AttributeValue::Null(true));
        assert_eq!(item["status"], AttributeValue::S("ACTIVE".to_owned()));
        assert_eq!(item["isDeleted"], AttributeValue::Bool(false));
    }

    #[test]
    fn test_media_list_survives_nesting() {
        let item = to_item(&sample_record()).unwrap();
        let AttributeValue::L(entries) = &item["media"] else {
            panic!("media should map to a list attribute");
        };
        let AttributeValue::M(entry) = &entries[0] else {
            panic!("media entries should map to maps");
        };
        assert_eq!(entry["order"], AttributeValue::N("1".to_owned()));
    }
}
