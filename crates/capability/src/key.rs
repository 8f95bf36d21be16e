use std::marker::PhantomData;

use sessioncaps_store::FromCapValue;

use crate::def::CapabilityDef;

/// Typed handle to a capability definition with compile-time type information.
pub struct CapabilityKey<T: FromCapValue> {
	def: &'static CapabilityDef,
	_marker: PhantomData<fn() -> T>,
}

impl<T: FromCapValue> Clone for CapabilityKey<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: FromCapValue> Copy for CapabilityKey<T> {}

impl<T: FromCapValue> CapabilityKey<T> {
	/// Creates a new typed key from a static definition.
	pub const fn new(def: &'static CapabilityDef) -> Self {
		Self {
			def,
			_marker: PhantomData,
		}
	}

	/// Returns the underlying capability definition.
	pub fn def(&self) -> &'static CapabilityDef {
		self.def
	}

	/// Returns the store key for this capability.
	pub fn key(&self) -> &'static str {
		self.def.key
	}

	/// Returns the definition's default converted to `T`.
	pub fn default_value(&self) -> Option<T> {
		self.def.default_value().as_ref().and_then(T::from_cap)
	}
}

impl<T: FromCapValue> core::fmt::Debug for CapabilityKey<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("CapabilityKey").field(&self.def.key).finish()
	}
}

