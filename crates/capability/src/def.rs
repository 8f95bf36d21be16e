use sessioncaps_store::{CapType, CapValidator, CapValue};

/// Default value factory for a capability.
pub type CapDefault = fn() -> CapValue;

/// Definition of one capability (static input).
///
/// Definitions are declared by the [`capability!`](crate::capability) macro and
/// referenced by the [`CapabilitySet`] of the trait that owns them.
#[derive(Clone, Copy)]
pub struct CapabilityDef {
	/// Store key, e.g. `"appInstallStrategy"`.
	pub key: &'static str,
	/// Name of the capability trait that declares this definition.
	pub owner: &'static str,
	/// Declared value type.
	pub value_type: CapType,
	/// Value assumed by the server when the capability is not sent.
	pub default: Option<CapDefault>,
	/// Conventional values. Informational only: other values are accepted.
	pub allowed: &'static [&'static str],
	/// Additional check run by `validate`.
	pub validator: Option<CapValidator>,
	/// Human-readable description.
	pub description: &'static str,
}

impl CapabilityDef {
	/// Returns the default as a value, if the definition has one.
	pub fn default_value(&self) -> Option<CapValue> {
		self.default.map(|f| f())
	}

	/// Returns `true` if `value` is one of the conventional values.
	///
	/// Definitions without conventional values accept everything.
	pub fn is_conventional(&self, value: &CapValue) -> bool {
		if self.allowed.is_empty() {
			return true;
		}
		value.as_str().is_some_and(|s| self.allowed.contains(&s))
	}

	/// Checks type conformance and runs the validator.
	pub fn check(&self, value: &CapValue) -> Result<(), String> {
		if !value.matches_type(self.value_type) {
			return Err(format!("expected {}, got {}", self.value_type, value.type_name()));
		}
		match self.validator {
			Some(validator) => validator(value),
			None => Ok(()),
		}
	}
}

impl core::fmt::Debug for CapabilityDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("CapabilityDef")
			.field("key", &self.key)
			.field("owner", &self.owner)
			.field("value_type", &self.value_type)
			.field("allowed", &self.allowed)
			.field("description", &self.description)
			.finish()
	}
}

/// The capabilities contributed by one capability trait.
#[derive(Debug)]
pub struct CapabilitySet {
	/// Trait name, used in collision reports.
	pub name: &'static str,
	pub defs: &'static [&'static CapabilityDef],
}

impl CapabilitySet {
	pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.defs.iter().map(|d| d.key)
	}
}
