//! The self-returning mutator contract shared by all capability traits.

use sessioncaps_store::{CapValue, CapabilityStore, FromCapValue, Result, Snapshot};

use crate::composition::Composition;
use crate::key::CapabilityKey;

/// An options aggregate that capability traits can be mixed into.
///
/// Capability traits are declared as `trait SupportsX: CanSetCapability` and
/// their mutators return `Self`, so a chain such as
/// `opts.set_app("..").set_no_reset(true)` always yields the concrete
/// aggregate regardless of which trait each call comes from.
///
/// Aggregates are normally declared with [`compose_options!`](crate::compose_options).
pub trait CanSetCapability: Sized {
	/// Verified composition of this aggregate's capability traits.
	fn composition() -> Result<&'static Composition>;

	/// Read-only access to the shared store.
	fn store(&self) -> &CapabilityStore;

	/// Mutable access to the shared store.
	fn store_mut(&mut self) -> &mut CapabilityStore;

	/// Writes `value` under `key` and returns the aggregate for chaining.
	#[must_use]
	fn amend(mut self, key: &str, value: impl Into<CapValue>) -> Self {
		self.store_mut().set(key, value);
		self
	}

	/// Writes `value` under `key` in place.
	fn set_capability(&mut self, key: &str, value: impl Into<CapValue>) -> &mut Self {
		self.store_mut().set(key, value);
		self
	}

	/// Removes `key` and returns the aggregate for chaining.
	#[must_use]
	fn clear_capability(mut self, key: &str) -> Self {
		self.store_mut().remove(key);
		self
	}

	/// Raw stored value.
	fn capability(&self, key: &str) -> Option<&CapValue> {
		self.store().get(key)
	}

	fn has_capability(&self, key: &str) -> bool {
		self.store().has(key)
	}

	/// Typed stored value; `Ok(None)` when unset.
	fn capability_as<T: FromCapValue>(&self, key: CapabilityKey<T>) -> Result<Option<T>> {
		self.store().get_typed(key.key())
	}

	/// Typed stored value, falling back to the definition's default.
	fn resolve<T: FromCapValue>(&self, key: CapabilityKey<T>) -> Result<Option<T>> {
		match self.capability_as(key)? {
			Some(v) => Ok(Some(v)),
			None => Ok(key.default_value()),
		}
	}

	/// Checks every stored value against the composed definitions.
	fn validate(&self) -> Result<()> {
		Self::composition()?.validate(self.store())
	}

	/// Immutable export of the current capabilities.
	fn snapshot(&self) -> Snapshot {
		self.store().snapshot()
	}
}
