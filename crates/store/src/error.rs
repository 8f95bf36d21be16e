use thiserror::Error;

use crate::value::CapType;

/// Errors raised by the capability store and the composition layer on top of it.
///
/// Absence of a value is never an error: getters return `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
	/// A typed read found a value of a different type.
	#[error("type mismatch for capability '{key}': expected {expected}, got {got}")]
	TypeMismatch {
		key: String,
		expected: CapType,
		got: &'static str,
	},
	/// Two composed capability sets declare the same key without sharing a definition.
	#[error("duplicate capability key '{key}' declared by both {first} and {second}")]
	DuplicateKey {
		key: String,
		first: &'static str,
		second: &'static str,
	},
	/// A stored value was rejected by its definition's validator.
	#[error("invalid value for capability '{key}': {reason}")]
	InvalidValue { key: String, reason: String },
	/// Capability keys must be non-empty.
	#[error("capability key must not be empty")]
	EmptyKey,
	/// An imported value has no capability representation.
	#[error("unsupported value for capability '{key}': {reason}")]
	UnsupportedValue { key: String, reason: String },
	/// An import document could not be parsed.
	#[error("failed to parse {format} capabilities: {reason}")]
	Parse { format: &'static str, reason: String },
	/// Capabilities could not be written out in the requested format.
	#[error("failed to serialize capabilities as {format}: {reason}")]
	Serialize { format: &'static str, reason: String },
}

pub type Result<T, E = CapabilityError> = std::result::Result<T, E>;
