use serde::{Deserialize, Serialize};

use crate::line::TypeDescriptor;

/// Runtime value held by the host object graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
	/// Absent value (null string, empty reference).
	Null,
	/// Boolean.
	Bool(bool),
	/// Signed integer.
	I64(i64),
	/// Unsigned integer, also used for characters and bitmasks.
	U64(u64),
	/// Floating point number.
	F64(f64),
	/// Owned string.
	Text(Box<str>),
	/// Enumeration constant name.
	Enum(Box<str>),
	/// Raw bytes.
	Bytes(Vec<u8>),
	/// Member values in the composite's declared order.
	Struct(Vec<Value>),
	/// Collection elements in iteration order.
	Array(Vec<Value>),
}

impl Value {
	/// Value shape label for diagnostics.
	pub fn kind_label(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::I64(_) => "i64",
			Self::U64(_) => "u64",
			Self::F64(_) => "f64",
			Self::Text(_) => "text",
			Self::Enum(_) => "enum",
			Self::Bytes(_) => "bytes",
			Self::Struct(_) => "struct",
			Self::Array(_) => "array",
		}
	}

	/// Build a `time` composite value.
	pub fn time(sec: i64, nanosec: u64) -> Self {
		Self::Struct(vec![Self::I64(sec), Self::U64(nanosec)])
	}

	/// Shorthand for a text value.
	pub fn text(value: &str) -> Self {
		Self::Text(value.into())
	}
}

/// Named root instance anchored in the host object store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
	/// Object identifier; names scalar roots and collection elements.
	pub id: Box<str>,
	/// Object type.
	pub ty: TypeDescriptor,
	/// Object payload.
	pub value: Value,
}

impl Object {
	/// Create an object from its parts.
	pub fn new(id: &str, ty: TypeDescriptor, value: Value) -> Self {
		Self { id: id.into(), ty, value }
	}
}

/// Query result record, as handed over by result-oriented hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
	/// Object identifier.
	pub id: Box<str>,
	/// Parent scope of the object.
	pub parent: Box<str>,
	/// Type name of the object.
	pub type_name: Box<str>,
	/// Serialized value, when the host included one.
	#[serde(default)]
	pub value: Option<Box<str>>,
}
