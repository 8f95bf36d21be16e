//! Import of flat capability documents.
//!
//! Both JSON and TOML documents are accepted. Top-level keys are normalized by
//! stripping the vendor prefix so that `appium:bundleId` and `bundleId` land on
//! the same store entry. `null` is treated as "not set" wherever it appears and
//! is dropped with a warning.

use crate::error::{CapabilityError, Result};
use crate::store::CapabilityStore;
use crate::value::{CapMap, CapValue};
use crate::w3c;

/// Parses a JSON object into a store.
pub fn parse_json(input: &str) -> Result<CapabilityStore> {
	let value: serde_json::Value = serde_json::from_str(input).map_err(|e| CapabilityError::Parse {
		format: "json",
		reason: e.to_string(),
	})?;
	from_json_value(value)
}

/// Converts an already decoded JSON object into a store.
pub fn from_json_value(value: serde_json::Value) -> Result<CapabilityStore> {
	let serde_json::Value::Object(object) = value else {
		return Err(CapabilityError::Parse {
			format: "json",
			reason: "expected a top-level object".to_string(),
		});
	};

	let mut store = CapabilityStore::new();
	for (key, value) in object {
		let key = normalize_key(&key)?;
		if let Some(value) = json_to_value(&key, value)? {
			store.set(key, value);
		}
	}
	Ok(store)
}

/// Parses a TOML table into a store.
pub fn parse_toml(input: &str) -> Result<CapabilityStore> {
	let table: toml::Table = toml::from_str(input).map_err(|e| CapabilityError::Parse {
		format: "toml",
		reason: e.to_string(),
	})?;

	let mut store = CapabilityStore::new();
	for (key, value) in table {
		let key = normalize_key(&key)?;
		let value = toml_to_value(&key, value)?;
		store.set(key, value);
	}
	Ok(store)
}

fn normalize_key(key: &str) -> Result<String> {
	if key.is_empty() {
		return Err(CapabilityError::EmptyKey);
	}
	Ok(w3c::strip_vendor_prefix(key).to_string())
}

fn ignore_null(key: &str) -> Option<CapValue> {
	tracing::warn!(domain = "capabilities", key, "ignoring null capability value");
	None
}

fn json_to_value(key: &str, value: serde_json::Value) -> Result<Option<CapValue>> {
	use serde_json::Value;

	Ok(Some(match value {
		Value::Null => return Ok(ignore_null(key)),
		Value::Bool(b) => CapValue::Bool(b),
		Value::Number(n) => match n.as_i64() {
			Some(i) => CapValue::Int(i),
			None => {
				return Err(CapabilityError::UnsupportedValue {
					key: key.to_string(),
					reason: format!("non-integer number {n}"),
				});
			}
		},
		Value::String(s) => CapValue::String(s),
		Value::Array(items) => {
			let mut list = Vec::with_capacity(items.len());
			for item in items {
				if let Some(v) = json_to_value(key, item)? {
					list.push(v);
				}
			}
			CapValue::List(list)
		}
		Value::Object(object) => {
			let mut map = CapMap::with_capacity(object.len());
			for (k, v) in object {
				if let Some(v) = json_to_value(key, v)? {
					map.insert(k, v);
				}
			}
			CapValue::Map(map)
		}
	}))
}

fn toml_to_value(key: &str, value: toml::Value) -> Result<CapValue> {
	use toml::Value;

	Ok(match value {
		Value::Boolean(b) => CapValue::Bool(b),
		Value::Integer(i) => CapValue::Int(i),
		Value::String(s) => CapValue::String(s),
		Value::Datetime(dt) => CapValue::String(dt.to_string()),
		Value::Float(f) => {
			return Err(CapabilityError::UnsupportedValue {
				key: key.to_string(),
				reason: format!("non-integer number {f}"),
			});
		}
		Value::Array(items) => CapValue::List(
			items
				.into_iter()
				.map(|item| toml_to_value(key, item))
				.collect::<Result<_>>()?,
		),
		Value::Table(table) => CapValue::Map(
			table
				.into_iter()
				.map(|(k, v)| toml_to_value(key, v).map(|v| (k, v)))
				.collect::<Result<_>>()?,
		),
	})
}
