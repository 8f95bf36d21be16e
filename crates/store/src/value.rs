use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Structured capability value (nested mapping).
pub type CapMap = IndexMap<String, CapValue>;

/// The value of a capability.
///
/// Values are stored exactly as written. Conversion to a concrete Rust type
/// happens at read time through [`FromCapValue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CapValue {
	/// Boolean value (true/false).
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// String value.
	String(String),
	/// Ordered list of values.
	List(Vec<CapValue>),
	/// Structured mapping.
	Map(CapMap),
}

impl CapValue {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			CapValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			CapValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			CapValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the list if this is a `List` variant.
	pub fn as_list(&self) -> Option<&[CapValue]> {
		match self {
			CapValue::List(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the mapping if this is a `Map` variant.
	pub fn as_map(&self) -> Option<&CapMap> {
		match self {
			CapValue::Map(v) => Some(v),
			_ => None,
		}
	}

	pub fn cap_type(&self) -> CapType {
		match self {
			CapValue::Bool(_) => CapType::Bool,
			CapValue::Int(_) => CapType::Int,
			CapValue::String(_) => CapType::String,
			CapValue::List(_) => CapType::List,
			CapValue::Map(_) => CapType::Map,
		}
	}

	/// Returns true if this value matches the given type.
	pub fn matches_type(&self, ty: CapType) -> bool {
		self.cap_type() == ty
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		self.cap_type().name()
	}
}

impl From<bool> for CapValue {
	fn from(v: bool) -> Self {
		CapValue::Bool(v)
	}
}

impl From<i64> for CapValue {
	fn from(v: i64) -> Self {
		CapValue::Int(v)
	}
}

impl From<i32> for CapValue {
	fn from(v: i32) -> Self {
		CapValue::Int(i64::from(v))
	}
}

impl From<String> for CapValue {
	fn from(v: String) -> Self {
		CapValue::String(v)
	}
}

impl From<&str> for CapValue {
	fn from(v: &str) -> Self {
		CapValue::String(v.to_string())
	}
}

impl From<Vec<CapValue>> for CapValue {
	fn from(v: Vec<CapValue>) -> Self {
		CapValue::List(v)
	}
}

impl From<CapMap> for CapValue {
	fn from(v: CapMap) -> Self {
		CapValue::Map(v)
	}
}

/// The type of a capability's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapType {
	/// Boolean type.
	Bool,
	/// Integer type.
	Int,
	/// String type.
	String,
	/// List type.
	List,
	/// Mapping type.
	Map,
}

impl CapType {
	pub fn name(self) -> &'static str {
		match self {
			CapType::Bool => "bool",
			CapType::Int => "int",
			CapType::String => "string",
			CapType::List => "list",
			CapType::Map => "map",
		}
	}
}

impl std::fmt::Display for CapType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

// Seal the FromCapValue trait to prevent external implementations.
mod sealed {
	pub trait Sealed {}
	impl Sealed for i64 {}
	impl Sealed for bool {}
	impl Sealed for String {}
	impl Sealed for Vec<super::CapValue> {}
	impl Sealed for super::CapMap {}
	impl Sealed for super::CapValue {}
}

/// Trait for types that can be extracted from a [`CapValue`].
///
/// This is the only place stored values are converted to Rust types. There is
/// no cross-type coercion: a `"true"` string never reads back as a `bool`.
pub trait FromCapValue: sealed::Sealed + Sized {
	/// Extracts the value, returning `None` if the type doesn't match.
	fn from_cap(value: &CapValue) -> Option<Self>;

	/// Returns the [`CapType`] corresponding to this Rust type, or `None` for
	/// [`CapValue`] itself which accepts anything.
	fn cap_type() -> Option<CapType>;
}

impl FromCapValue for i64 {
	fn from_cap(value: &CapValue) -> Option<Self> {
		value.as_int()
	}

	fn cap_type() -> Option<CapType> {
		Some(CapType::Int)
	}
}

impl FromCapValue for bool {
	fn from_cap(value: &CapValue) -> Option<Self> {
		value.as_bool()
	}

	fn cap_type() -> Option<CapType> {
		Some(CapType::Bool)
	}
}

impl FromCapValue for String {
	fn from_cap(value: &CapValue) -> Option<Self> {
		value.as_str().map(|s| s.to_string())
	}

	fn cap_type() -> Option<CapType> {
		Some(CapType::String)
	}
}

impl FromCapValue for Vec<CapValue> {
	fn from_cap(value: &CapValue) -> Option<Self> {
		value.as_list().map(<[CapValue]>::to_vec)
	}

	fn cap_type() -> Option<CapType> {
		Some(CapType::List)
	}
}

impl FromCapValue for CapMap {
	fn from_cap(value: &CapValue) -> Option<Self> {
		value.as_map().cloned()
	}

	fn cap_type() -> Option<CapType> {
		Some(CapType::Map)
	}
}

impl FromCapValue for CapValue {
	fn from_cap(value: &CapValue) -> Option<Self> {
		Some(value.clone())
	}

	fn cap_type() -> Option<CapType> {
		None
	}
}
