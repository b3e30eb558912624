use serde::de::DeserializeOwned;
use serde_json::Value;

use super::fetch::FetchError;

/// Flatten a successful response body into an ordered list of raw records.
///
/// The backend answers either with a bare JSON array or with a paginated-style
/// envelope `{ "results": [...] }`. Anything else degrades to an empty list
/// rather than an error; an unrecognized shape means "no records", not a
/// broken view.
pub fn normalize_records(body: Value) -> Vec<Value> {
    match body {
        Value::Array(records) => records,
        Value::Object(mut envelope) => match envelope.remove("results") {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Decode normalized rows into typed records, preserving order. A row that
/// does not fit the record type is a read failure, not a silent drop.
pub fn decode_records<T: DeserializeOwned>(records: Vec<Value>) -> Result<Vec<T>, FetchError> {
    records
        .into_iter()
        .map(|record| {
            serde_json::from_value(record).map_err(|e| FetchError::Decode(e.to_string()))
        })
        .collect()
}
