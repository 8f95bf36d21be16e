//! Standard validators for capability values.
//!
//! These functions can be used as validators in a capability definition. They
//! receive the raw stored value, so each one also reports a wrong type.

use crate::value::CapValue;

/// Validator signature shared by all capability definitions.
pub type CapValidator = fn(&CapValue) -> Result<(), String>;

/// Validates that a string is not empty.
pub fn non_empty(value: &CapValue) -> Result<(), String> {
	match value {
		CapValue::String(s) if !s.is_empty() => Ok(()),
		CapValue::String(_) => Err("must not be empty".to_string()),
		other => Err(format!("expected string, got {}", other.type_name())),
	}
}

/// Validates that an integer is positive (>= 1).
pub fn positive_int(value: &CapValue) -> Result<(), String> {
	match value {
		CapValue::Int(n) if *n >= 1 => Ok(()),
		CapValue::Int(n) => Err(format!("must be at least 1, got {n}")),
		other => Err(format!("expected integer, got {}", other.type_name())),
	}
}

/// Validates that an integer is not negative.
pub fn non_negative_int(value: &CapValue) -> Result<(), String> {
	match value {
		CapValue::Int(n) if *n >= 0 => Ok(()),
		CapValue::Int(n) => Err(format!("must not be negative, got {n}")),
		other => Err(format!("expected integer, got {}", other.type_name())),
	}
}

/// Validates the `{ args: [string], env: { string: string } }` shape used for
/// process launch arguments. Both fields are optional; other fields are rejected.
pub fn process_arguments_shape(value: &CapValue) -> Result<(), String> {
	let CapValue::Map(map) = value else {
		return Err(format!("expected map, got {}", value.type_name()));
	};

	for (field, inner) in map {
		match field.as_str() {
			"args" => {
				let items = inner
					.as_list()
					.ok_or_else(|| format!("'args' must be a list, got {}", inner.type_name()))?;
				if let Some(bad) = items.iter().find(|v| v.as_str().is_none()) {
					return Err(format!("'args' entries must be strings, got {}", bad.type_name()));
				}
			}
			"env" => {
				let env = inner
					.as_map()
					.ok_or_else(|| format!("'env' must be a map, got {}", inner.type_name()))?;
				if let Some((name, bad)) = env.iter().find(|(_, v)| v.as_str().is_none()) {
					return Err(format!("'env.{name}' must be a string, got {}", bad.type_name()));
				}
			}
			other => return Err(format!("unexpected field '{other}'")),
		}
	}
	Ok(())
}
