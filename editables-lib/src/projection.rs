//! Sub-property extraction and field filtering

use serde_json::Map;

use crate::error::LoadError;
use crate::payload::RawPayload;
use crate::payload::Record;
use crate::validator::validate_string;

/// Extracts `sub_property` from the payload.
///
/// A blank property returns the payload unchanged. For a list, the property
/// is looked up on every record; a miss on any record fails the whole
/// extraction. Values extracted from a list are concatenated: records are
/// appended, lists of records are flattened.
pub fn project(raw: RawPayload, sub_property: &str) -> Result<RawPayload, LoadError> {
    if !validate_string(sub_property) {
        return Ok(raw);
    }

    match raw {
        RawPayload::Single(record) => extract(record, sub_property),
        RawPayload::Many(records) => {
            let mut extracted = Vec::with_capacity(records.len());
            for record in records {
                match extract(record, sub_property)? {
                    RawPayload::Single(inner) => extracted.push(inner),
                    RawPayload::Many(inner) => extracted.extend(inner),
                }
            }
            Ok(RawPayload::Many(extracted))
        }
    }
}

fn extract(mut record: Record, property: &str) -> Result<RawPayload, LoadError> {
    let value = record
        .remove(property)
        .ok_or_else(|| LoadError::property_not_found(property))?;
    RawPayload::from_value(value)
}

/// Returns a copy of `record` holding only the requested keys.
///
/// Keys missing from the record are skipped silently.
pub fn filter_fields<'a>(record: &Record, keys: impl IntoIterator<Item = &'a str>) -> Record {
    let mut filtered = Map::new();
    for key in keys {
        if let Some(value) = record.get(key) {
            filtered.insert(key.to_string(), value.clone());
        }
    }
    filtered
}
