//! Immutable export of a capability store.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{CapabilityError, Result};
use crate::value::{CapValue, FromCapValue};
use crate::w3c;

/// Point-in-time, read-only view of a store's entries.
///
/// Cloning is cheap and the contents can never change, so a snapshot can be
/// handed to concurrent readers or to a serializer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
	entries: Arc<IndexMap<String, CapValue>>,
}

impl Snapshot {
	pub(crate) fn new(entries: IndexMap<String, CapValue>) -> Self {
		Self {
			entries: Arc::new(entries),
		}
	}

	pub fn get(&self, key: &str) -> Option<&CapValue> {
		self.entries.get(w3c::strip_vendor_prefix(key))
	}

	/// Typed read with the same semantics as [`CapabilityStore::get_typed`](crate::CapabilityStore::get_typed).
	pub fn get_typed<T: FromCapValue>(&self, key: &str) -> Result<Option<T>> {
		let key = w3c::strip_vendor_prefix(key);
		let Some(value) = self.entries.get(key) else {
			return Ok(None);
		};
		T::from_cap(value).map(Some).ok_or_else(|| CapabilityError::TypeMismatch {
			key: key.to_string(),
			expected: T::cap_type().unwrap_or(value.cap_type()),
			got: value.type_name(),
		})
	}

	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(w3c::strip_vendor_prefix(key))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &CapValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Returns the entries with extension keys carrying the vendor prefix.
	///
	/// W3C standard capabilities and keys that already contain a `:` are left
	/// as they are. Stored keys never carry the vendor prefix, so every non-empty
	/// key maps to a distinct wire name.
	pub fn to_w3c(&self) -> IndexMap<String, CapValue> {
		self.entries
			.iter()
			.map(|(k, v)| (w3c::to_w3c_name(k), v.clone()))
			.collect()
	}

	/// Serializes the entries as a JSON object in insertion order.
	pub fn to_json(&self) -> Result<String> {
		serde_json::to_string(&*self.entries).map_err(|e| CapabilityError::Serialize {
			format: "json",
			reason: e.to_string(),
		})
	}

	/// Serializes the W3C-prefixed entries as a JSON value.
	pub fn to_w3c_json(&self) -> Result<serde_json::Value> {
		serde_json::to_value(self.to_w3c()).map_err(|e| CapabilityError::Serialize {
			format: "json",
			reason: e.to_string(),
		})
	}
}

impl<'a> IntoIterator for &'a Snapshot {
	type Item = (&'a String, &'a CapValue);
	type IntoIter = indexmap::map::Iter<'a, String, CapValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
