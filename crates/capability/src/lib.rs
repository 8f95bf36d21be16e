//! Capability traits and their composition.
//!
//! Capabilities are named session settings forwarded to a remote automation
//! server. Each one is declared by a small, self-contained trait; an options
//! aggregate mixes any number of those traits over a single shared
//! [`CapabilityStore`]. This crate provides:
//! - Definitions ([`CapabilityDef`], [`CapabilitySet`]) and typed keys ([`CapabilityKey`])
//! - Duplicate-key checked assembly ([`Composition`])
//! - The self-returning mutator contract ([`CanSetCapability`])
//! - Declaration macros ([`capability!`], [`compose_options!`])

mod composition;
mod def;
mod key;
mod macros;
mod options;

pub use composition::{Composition, CompositionBuilder};
pub use def::{CapDefault, CapabilityDef, CapabilitySet};
pub use key::CapabilityKey;
pub use options::CanSetCapability;
pub use sessioncaps_store::{
	CapMap, CapType, CapValidator, CapValue, CapabilityError, CapabilityStore, FromCapValue,
	Result, Snapshot, parse, validators, w3c,
};

#[doc(hidden)]
pub mod __private {
	pub use paste;
}

#[cfg(test)]
mod tests;
