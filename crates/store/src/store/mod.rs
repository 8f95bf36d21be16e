//! Runtime storage for capability values.
//!
//! A [`CapabilityStore`] is owned by exactly one options aggregate. Every
//! capability trait composed into that aggregate reads and writes the same
//! store; nothing else holds a copy of its state. Data leaves the store only
//! through [`CapabilityStore::snapshot`].
//!
//! Keys are stored without the W3C vendor prefix: `appium:bundleId` and
//! `bundleId` name the same entry, so export can never emit two values under
//! one wire name.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::{CapabilityError, Result};
use crate::snapshot::Snapshot;
use crate::value::{CapValue, FromCapValue};
use crate::w3c;


/// Ordered mapping from capability key to raw value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapabilityStore {
	entries: IndexMap<String, CapValue>,
}

impl CapabilityStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store pre-populated from a snapshot.
	pub fn from_snapshot(snapshot: &Snapshot) -> Self {
		snapshot.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
	}

	/// Stores `value` under `key`, replacing any previous value.
	///
	/// The vendor prefix is stripped from `key`. An overwritten key keeps its
	/// original position.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<CapValue>) {
		let value = value.into();
		let mut key = key.into();
		let stripped = w3c::strip_vendor_prefix(&key);
		if stripped.len() != key.len() {
			key = stripped.to_string();
		}
		match self.entries.entry(key) {
			Entry::Occupied(mut slot) => {
				let prev = slot.get();
				if !prev.matches_type(value.cap_type()) {
					tracing::debug!(
						domain = "capabilities",
						key = slot.key().as_str(),
						from = prev.type_name(),
						to = value.type_name(),
						"capability overwritten with a different type",
					);
				}
				tracing::trace!(key = slot.key().as_str(), "capability replaced");
				slot.insert(value);
			}
			Entry::Vacant(slot) => {
				tracing::trace!(key = slot.key().as_str(), "capability set");
				slot.insert(value);
			}
		}
	}

	/// Gets the raw value, returning `None` if not set.
	pub fn get(&self, key: &str) -> Option<&CapValue> {
		self.entries.get(w3c::strip_vendor_prefix(key))
	}

	/// Gets the value converted to `T`.
	///
	/// Returns `Ok(None)` when the key is absent and
	/// [`CapabilityError::TypeMismatch`] when the stored value has another type.
	pub fn get_typed<T: FromCapValue>(&self, key: &str) -> Result<Option<T>> {
		let key = w3c::strip_vendor_prefix(key);
		let Some(value) = self.entries.get(key) else {
			return Ok(None);
		};
		match T::from_cap(value) {
			Some(v) => Ok(Some(v)),
			None => Err(CapabilityError::TypeMismatch {
				key: key.to_string(),
				// `CapValue` is the only impl without a concrete type and never misses.
				expected: T::cap_type().unwrap_or(value.cap_type()),
				got: value.type_name(),
			}),
		}
	}

	/// Returns `true` if a value is stored under `key`.
	pub fn has(&self, key: &str) -> bool {
		self.entries.contains_key(w3c::strip_vendor_prefix(key))
	}

	/// Removes a capability, preserving the order of the remaining entries.
	pub fn remove(&mut self, key: &str) -> Option<CapValue> {
		let key = w3c::strip_vendor_prefix(key);
		let removed = self.entries.shift_remove(key);
		if removed.is_some() {
			tracing::trace!(key, "capability removed");
		}
		removed
	}

	/// Merges another store into this one. Values from `other` win.
	pub fn merge(&mut self, other: &CapabilityStore) {
		for (key, value) in &other.entries {
			self.set(key.clone(), value.clone());
		}
	}

	/// Returns an immutable copy of the current entries.
	pub fn snapshot(&self) -> Snapshot {
		Snapshot::new(self.entries.clone())
	}

	/// Returns the number of capabilities set in this store.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the store contains no capabilities.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &CapValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}
}

impl FromIterator<(String, CapValue)> for CapabilityStore {
	fn from_iter<I: IntoIterator<Item = (String, CapValue)>>(iter: I) -> Self {
		let mut store = Self::new();
		store.extend(iter);
		store
	}
}

impl Extend<(String, CapValue)> for CapabilityStore {
	fn extend<I: IntoIterator<Item = (String, CapValue)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.set(key, value);
		}
	}
}
