//! Capability storage.
//!
//! This crate provides:
//! - The value model ([`CapValue`], [`CapType`]) and the sealed typed-read trait ([`FromCapValue`])
//! - The ordered, single-owner [`CapabilityStore`]
//! - Immutable [`Snapshot`] exports
//! - JSON/TOML import ([`parse`]) and W3C vendor naming ([`w3c`])
//! - Standard value [`validators`]

pub mod error;
pub mod parse;
mod snapshot;
mod store;
pub mod validators;
mod value;
pub mod w3c;

pub use error::{CapabilityError, Result};
pub use snapshot::Snapshot;
pub use store::CapabilityStore;
pub use validators::CapValidator;
pub use value::{CapMap, CapType, CapValue, FromCapValue};
