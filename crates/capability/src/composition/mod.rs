//! Assembly of capability sets into one aggregate.
//!
//! A [`Composition`] is the verified union of the [`CapabilitySet`]s an options
//! aggregate is built from. Assembly fails fast when two sets claim the same
//! key with different definitions; listing the very same static definition
//! from two sets is an intentional alias and is accepted.

use indexmap::IndexMap;
use indexmap::map::Entry;
use sessioncaps_store::{CapabilityError, CapabilityStore, Result};

use crate::def::{CapabilityDef, CapabilitySet};

#[cfg(test)]
mod tests;

/// Verified set of capability definitions for one aggregate type.
#[derive(Debug)]
pub struct Composition {
	name: &'static str,
	sets: Vec<&'static CapabilitySet>,
	defs: IndexMap<&'static str, &'static CapabilityDef>,
}

impl Composition {
	/// Starts assembling a composition for the aggregate `name`.
	pub fn builder(name: &'static str) -> CompositionBuilder {
		CompositionBuilder {
			name,
			sets: Vec::new(),
		}
	}

	/// Assembles `sets` in order, rejecting key collisions.
	pub fn assemble(name: &'static str, sets: &[&'static CapabilitySet]) -> Result<Self> {
		sets.iter().fold(Self::builder(name), |b, &set| b.with(set)).finish()
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn sets(&self) -> &[&'static CapabilitySet] {
		&self.sets
	}

	/// Looks up the definition declared for `key`.
	pub fn def(&self, key: &str) -> Option<&'static CapabilityDef> {
		self.defs.get(key).copied()
	}

	pub fn contains(&self, key: &str) -> bool {
		self.defs.contains_key(key)
	}

	/// Definitions in declaration order, aliases listed once.
	pub fn defs(&self) -> impl Iterator<Item = &'static CapabilityDef> + '_ {
		self.defs.values().copied()
	}

	pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.defs.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Suggests a composed key similar to `key` using fuzzy matching.
	pub fn suggest(&self, key: &str) -> Option<&'static str> {
		self.keys()
			.filter(|k| *k != key)
			.min_by_key(|k| strsim::levenshtein(key, k))
			.filter(|k| strsim::levenshtein(key, k) <= 3)
	}

	/// Validates every stored value against its definition.
	///
	/// Keys that no composed trait declares are passed through untouched so
	/// imported configurations may carry capabilities unknown to this build.
	/// Values outside a definition's conventional set are accepted as well.
	/// An empty key is never valid on the wire.
	pub fn validate(&self, store: &CapabilityStore) -> Result<()> {
		for (key, value) in store.iter() {
			if key.is_empty() {
				return Err(CapabilityError::EmptyKey);
			}
			let Some(def) = self.def(key) else {
				tracing::debug!(
					domain = "capabilities",
					aggregate = self.name,
					key,
					suggestion = self.suggest(key),
					"capability not declared by any composed trait",
				);
				continue;
			};

			if !value.matches_type(def.value_type) {
				return Err(CapabilityError::TypeMismatch {
					key: key.to_string(),
					expected: def.value_type,
					got: value.type_name(),
				});
			}
			if let Some(validator) = def.validator {
				validator(value).map_err(|reason| CapabilityError::InvalidValue {
					key: key.to_string(),
					reason,
				})?;
			}
			if !def.is_conventional(value) {
				tracing::debug!(
					domain = "capabilities",
					key,
					value = ?value,
					conventional = ?def.allowed,
					"accepting unconventional capability value",
				);
			}
		}
		Ok(())
	}
}

/// Incremental composition assembly.
#[derive(Debug)]
pub struct CompositionBuilder {
	name: &'static str,
	sets: Vec<&'static CapabilitySet>,
}

impl CompositionBuilder {
	#[must_use]
	pub fn with(mut self, set: &'static CapabilitySet) -> Self {
		self.sets.push(set);
		self
	}

	/// Checks every definition and builds the key index.
	pub fn finish(self) -> Result<Composition> {
		let mut defs: IndexMap<&'static str, &'static CapabilityDef> = IndexMap::new();

		for set in &self.sets {
			for &def in set.defs {
				check_def(def)?;
				match defs.entry(def.key) {
					Entry::Vacant(slot) => {
						slot.insert(def);
					}
					Entry::Occupied(slot) => {
						let existing = *slot.get();
						if std::ptr::eq(existing, def) {
							tracing::trace!(
								aggregate = self.name,
								key = def.key,
								first = existing.owner,
								second = set.name,
								"capability aliased",
							);
							continue;
						}
						return Err(CapabilityError::DuplicateKey {
							key: def.key.to_string(),
							first: existing.owner,
							second: def.owner,
						});
					}
				}
			}
		}

		tracing::debug!(
			aggregate = self.name,
			sets = self.sets.len(),
			capabilities = defs.len(),
			"capability composition assembled",
		);

		Ok(Composition {
			name: self.name,
			sets: self.sets,
			defs,
		})
	}
}

/// Rejects definitions that can never hold a valid value.
fn check_def(def: &CapabilityDef) -> Result<()> {
	if def.key.is_empty() {
		return Err(CapabilityError::EmptyKey);
	}
	if let Some(default) = def.default_value() {
		def.check(&default).map_err(|reason| CapabilityError::InvalidValue {
			key: def.key.to_string(),
			reason: format!("default declared by {}: {reason}", def.owner),
		})?;
	}
	Ok(())
}
