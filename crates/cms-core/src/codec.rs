//! Blob encoding for collections
//!
//! A collection is stored as a JSON array of flat records, in collection order.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;

pub fn encode_collection<T: Serialize>(records: &[T]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

pub fn decode_collection<T: DeserializeOwned>(blob: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(blob)?)
}
